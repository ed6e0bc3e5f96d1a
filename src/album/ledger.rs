//! Ownership ledger.
//!
//! Records how many copies of each card every owner holds, keyed by
//! `(owner, card, pool)`. Counts only grow.
//!
//! Backed by an `im` persistent map, so cloning the ledger is O(1). The
//! album stages a purchase's credits on a clone and commits by replacing
//! the original.

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, PoolKind};
use crate::core::Identity;

/// Composite ledger key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LedgerKey {
    pub owner: Identity,
    pub card_id: CardId,
    pub pool: PoolKind,
}

impl LedgerKey {
    /// Create a new ledger key.
    #[must_use]
    pub const fn new(owner: Identity, card_id: CardId, pool: PoolKind) -> Self {
        Self { owner, card_id, pool }
    }
}

/// One owner's holding of one card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    pub card_id: CardId,
    pub pool: PoolKind,
    pub count: u64,
}

/// Per-owner card counts.
///
/// ## Example
///
/// ```
/// use card_album::album::OwnershipLedger;
/// use card_album::cards::{CardId, PoolKind};
/// use card_album::core::Identity;
///
/// let mut ledger = OwnershipLedger::new();
/// let alice = Identity::new(1);
///
/// ledger.credit(alice, CardId::new(7), PoolKind::Common, 1);
/// ledger.credit(alice, CardId::new(7), PoolKind::Common, 1);
///
/// assert_eq!(ledger.count_of(alice, CardId::new(7), PoolKind::Common), 2);
/// assert_eq!(ledger.count_of(alice, CardId::new(7), PoolKind::Rare), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OwnershipLedger {
    counts: ImHashMap<LedgerKey, u64>,
}

impl OwnershipLedger {
    /// Create a new empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` copies of a card to an owner. Returns the new count.
    ///
    /// Saturates at `u64::MAX`.
    pub fn credit(&mut self, owner: Identity, card_id: CardId, pool: PoolKind, amount: u64) -> u64 {
        let entry = self
            .counts
            .entry(LedgerKey::new(owner, card_id, pool))
            .or_insert(0);
        *entry = entry.saturating_add(amount);
        *entry
    }

    /// Copies of a card an owner holds (0 if never credited).
    #[must_use]
    pub fn count_of(&self, owner: Identity, card_id: CardId, pool: PoolKind) -> u64 {
        self.counts
            .get(&LedgerKey::new(owner, card_id, pool))
            .copied()
            .unwrap_or(0)
    }

    /// All holdings of one owner, ordered by pool then card id.
    #[must_use]
    pub fn holdings(&self, owner: Identity) -> Vec<Holding> {
        let mut holdings: Vec<_> = self
            .counts
            .iter()
            .filter(|(key, _)| key.owner == owner)
            .map(|(key, &count)| Holding {
                card_id: key.card_id,
                pool: key.pool,
                count,
            })
            .collect();
        holdings.sort_by_key(|h| (h.pool == PoolKind::Rare, h.card_id));
        holdings
    }

    /// Total copies an owner holds across both pools.
    #[must_use]
    pub fn total_of(&self, owner: Identity) -> u64 {
        self.counts
            .iter()
            .filter(|(key, _)| key.owner == owner)
            .fold(0u64, |acc, (_, &count)| acc.saturating_add(count))
    }

    /// Number of distinct `(owner, card, pool)` entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if nothing has been credited yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
