//! Card catalog for one album.
//!
//! The `CardCatalog` holds the common and rare pools in their configured
//! order. Draws address cards by position (`common_at`, `rare_at`);
//! lookups by id go through a per-pool index.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId, PoolKind};
use crate::core::{AlbumError, AlbumResult};

/// Immutable registry of common and rare card definitions.
///
/// ## Example
///
/// ```
/// use card_album::cards::{CardCatalog, CardDefinition, CardId, PoolKind};
///
/// let catalog = CardCatalog::new(
///     CardDefinition::numbered(150),
///     CardDefinition::numbered(10),
/// ).unwrap();
///
/// assert_eq!(catalog.common_count(), 150);
/// assert_eq!(catalog.rare_at(0).unwrap().id, CardId::new(1));
/// assert!(catalog.contains(CardId::new(10), PoolKind::Rare));
/// ```
#[derive(Clone, Debug)]
pub struct CardCatalog {
    common: Vec<CardDefinition>,
    rare: Vec<CardDefinition>,
    common_index: FxHashMap<CardId, usize>,
    rare_index: FxHashMap<CardId, usize>,
}

impl CardCatalog {
    /// Build a catalog from the two pools.
    ///
    /// Fails with `InvalidCatalog` if a pool repeats an id or uses id 0.
    pub fn new(common: Vec<CardDefinition>, rare: Vec<CardDefinition>) -> AlbumResult<Self> {
        let common_index = Self::index_pool(&common, PoolKind::Common)?;
        let rare_index = Self::index_pool(&rare, PoolKind::Rare)?;

        Ok(Self {
            common,
            rare,
            common_index,
            rare_index,
        })
    }

    fn index_pool(cards: &[CardDefinition], kind: PoolKind) -> AlbumResult<FxHashMap<CardId, usize>> {
        let mut index = FxHashMap::default();
        index.reserve(cards.len());

        for (position, card) in cards.iter().enumerate() {
            if card.id.raw() == 0 {
                return Err(AlbumError::InvalidCatalog(format!(
                    "{kind} pool contains card id 0 at position {position}"
                )));
            }
            if index.insert(card.id, position).is_some() {
                return Err(AlbumError::InvalidCatalog(format!(
                    "duplicate {kind} card id {}",
                    card.id.raw()
                )));
            }
        }
        Ok(index)
    }

    /// Number of common cards.
    #[must_use]
    pub fn common_count(&self) -> usize {
        self.common.len()
    }

    /// Number of rare cards.
    #[must_use]
    pub fn rare_count(&self) -> usize {
        self.rare.len()
    }

    /// Common card at `index`, in configured order.
    #[must_use]
    pub fn common_at(&self, index: usize) -> Option<&CardDefinition> {
        self.common.get(index)
    }

    /// Rare card at `index`, in configured order.
    #[must_use]
    pub fn rare_at(&self, index: usize) -> Option<&CardDefinition> {
        self.rare.get(index)
    }

    /// All cards of one pool, in configured order.
    #[must_use]
    pub fn pool(&self, kind: PoolKind) -> &[CardDefinition] {
        match kind {
            PoolKind::Common => &self.common,
            PoolKind::Rare => &self.rare,
        }
    }

    /// Number of cards in one pool.
    #[must_use]
    pub fn count(&self, kind: PoolKind) -> usize {
        self.pool(kind).len()
    }

    /// Look up a card definition by id within a pool.
    #[must_use]
    pub fn get(&self, id: CardId, kind: PoolKind) -> Option<&CardDefinition> {
        let index = match kind {
            PoolKind::Common => &self.common_index,
            PoolKind::Rare => &self.rare_index,
        };
        index.get(&id).map(|&position| &self.pool(kind)[position])
    }

    /// Check if a pool contains `id`.
    #[must_use]
    pub fn contains(&self, id: CardId, kind: PoolKind) -> bool {
        self.get(id, kind).is_some()
    }

    /// Ids of one pool, in configured order.
    pub fn ids(&self, kind: PoolKind) -> impl Iterator<Item = CardId> + '_ {
        self.pool(kind).iter().map(|c| c.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_positions() {
        let catalog = CardCatalog::new(CardDefinition::numbered(5), CardDefinition::numbered(2)).unwrap();

        assert_eq!(catalog.common_count(), 5);
        assert_eq!(catalog.rare_count(), 2);
        assert_eq!(catalog.common_at(4).unwrap().id, CardId::new(5));
        assert!(catalog.common_at(5).is_none());
        assert_eq!(catalog.rare_at(1).unwrap().name, "Name#2");
        assert!(catalog.rare_at(2).is_none());
    }

    #[test]
    fn test_empty_pools_allowed() {
        let catalog = CardCatalog::new(Vec::new(), Vec::new()).unwrap();
        assert_eq!(catalog.common_count(), 0);
        assert_eq!(catalog.rare_count(), 0);
    }

    #[test]
    fn test_duplicate_within_pool_rejected() {
        let common = vec![
            CardDefinition::new(CardId::new(1), "A"),
            CardDefinition::new(CardId::new(1), "B"),
        ];
        let result = CardCatalog::new(common, Vec::new());
        assert!(matches!(result, Err(AlbumError::InvalidCatalog(_))));

        let rare = vec![
            CardDefinition::new(CardId::new(3), "A"),
            CardDefinition::new(CardId::new(3), "B"),
        ];
        let result = CardCatalog::new(CardDefinition::numbered(2), rare);
        assert!(matches!(result, Err(AlbumError::InvalidCatalog(_))));
    }

    #[test]
    fn test_zero_id_rejected() {
        let common = vec![CardDefinition::new(CardId::new(0), "Zero")];
        assert!(matches!(
            CardCatalog::new(common, Vec::new()),
            Err(AlbumError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn test_ids_overlap_across_pools() {
        let catalog = CardCatalog::new(CardDefinition::numbered(3), CardDefinition::numbered(3)).unwrap();

        assert!(catalog.contains(CardId::new(2), PoolKind::Common));
        assert!(catalog.contains(CardId::new(2), PoolKind::Rare));
        assert!(!catalog.contains(CardId::new(4), PoolKind::Rare));
    }

    #[test]
    fn test_get_and_ids() {
        let rare = vec![
            CardDefinition::new(CardId::new(9), "Nine"),
            CardDefinition::new(CardId::new(4), "Four"),
        ];
        let catalog = CardCatalog::new(CardDefinition::numbered(2), rare).unwrap();

        assert_eq!(catalog.get(CardId::new(4), PoolKind::Rare).unwrap().name, "Four");
        assert!(catalog.get(CardId::new(4), PoolKind::Common).is_none());

        let ids: Vec<_> = catalog.ids(PoolKind::Rare).collect();
        assert_eq!(ids, vec![CardId::new(9), CardId::new(4)]);
        assert_eq!(catalog.count(PoolKind::Common), 2);
    }
}
