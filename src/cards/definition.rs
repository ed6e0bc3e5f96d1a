//! Card definitions - static card data.
//!
//! A `CardDefinition` is one collectible in an album: an id and a name.
//! Ids are unique within their pool; common and rare pools are separate
//! namespaces, so `PoolKind` travels alongside an id wherever the pool
//! matters.

use serde::{Deserialize, Serialize};

/// Identifier of a card definition within its pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Which pool a card belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolKind {
    Common,
    Rare,
}

impl std::fmt::Display for PoolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Common => f.write_str("common"),
            Self::Rare => f.write_str("rare"),
        }
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use card_album::cards::{CardDefinition, CardId};
///
/// let card = CardDefinition::new(CardId::new(1), "Name#1");
/// assert_eq!(card.name, "Name#1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Identifier, unique within the card's pool.
    pub id: CardId,

    /// Display name.
    pub name: String,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Generate `count` cards with ids `1..=count` named `Name#<id>`.
    pub fn numbered(count: u32) -> Vec<Self> {
        (1..=count)
            .map(|i| Self::new(CardId::new(i), format!("Name#{i}")))
            .collect()
    }
}
