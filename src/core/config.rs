//! Album configuration.
//!
//! An album is configured once at construction:
//! - who created it and who receives protocol fees
//! - which pack sizes may be bought and at what price per card
//! - the protocol fee rate and the rare card chance
//!
//! Rates are expressed in basis points out of `BASIS_POINTS` (1000), so
//! `20` is 2% and `1000` is 100%.

use serde::{Deserialize, Serialize};

use super::error::{AlbumError, AlbumResult};
use super::identity::{Amount, Identity};

/// Denominator for fee rates and rare chances.
pub const BASIS_POINTS: u32 = 1000;

/// Construction parameters for an album.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlbumConfig {
    /// Album creator.
    pub creator: Identity,

    /// Smallest pack a buyer may open.
    pub min_pack_size: u32,

    /// Largest pack a buyer may open.
    pub max_pack_size: u32,

    /// Price of a single card; a pack costs `price_per_card * pack_size`.
    pub price_per_card: Amount,

    /// Protocol fee, in basis points of each payment.
    pub fee_rate: u32,

    /// Chance that a pack also yields one rare card, in basis points.
    pub rare_card_chance: u32,

    /// Receives the fee portion of every payment.
    pub fee_recipient: Identity,
}

impl AlbumConfig {
    /// Create a config with single-card packs, free cards, no fee,
    /// and no rare cards.
    pub fn new(creator: Identity, fee_recipient: Identity) -> Self {
        Self {
            creator,
            min_pack_size: 1,
            max_pack_size: 1,
            price_per_card: 0,
            fee_rate: 0,
            rare_card_chance: 0,
            fee_recipient,
        }
    }

    /// Set the allowed pack size range (inclusive).
    #[must_use]
    pub fn with_pack_sizes(mut self, min: u32, max: u32) -> Self {
        self.min_pack_size = min;
        self.max_pack_size = max;
        self
    }

    /// Set the per-card price.
    #[must_use]
    pub fn with_price_per_card(mut self, price: Amount) -> Self {
        self.price_per_card = price;
        self
    }

    /// Set the protocol fee rate (basis points).
    #[must_use]
    pub fn with_fee_rate(mut self, fee_rate: u32) -> Self {
        self.fee_rate = fee_rate;
        self
    }

    /// Set the rare card chance (basis points).
    #[must_use]
    pub fn with_rare_card_chance(mut self, chance: u32) -> Self {
        self.rare_card_chance = chance;
        self
    }

    /// Check the range and rate constraints.
    pub fn validate(&self) -> AlbumResult<()> {
        if self.min_pack_size == 0 {
            return Err(AlbumError::InvalidConfig("min_pack_size must be at least 1".into()));
        }
        if self.min_pack_size > self.max_pack_size {
            return Err(AlbumError::InvalidConfig(format!(
                "min_pack_size {} exceeds max_pack_size {}",
                self.min_pack_size, self.max_pack_size
            )));
        }
        if self.fee_rate > BASIS_POINTS {
            return Err(AlbumError::InvalidConfig(format!(
                "fee_rate {} exceeds {}",
                self.fee_rate, BASIS_POINTS
            )));
        }
        if self.rare_card_chance > BASIS_POINTS {
            return Err(AlbumError::InvalidConfig(format!(
                "rare_card_chance {} exceeds {}",
                self.rare_card_chance, BASIS_POINTS
            )));
        }
        Ok(())
    }

    /// Whether `pack_size` lies within the allowed range.
    #[must_use]
    pub fn accepts_pack_size(&self, pack_size: u32) -> bool {
        (self.min_pack_size..=self.max_pack_size).contains(&pack_size)
    }

    /// Exact price of a pack, or `None` on overflow.
    #[must_use]
    pub fn price_for(&self, pack_size: u32) -> Option<Amount> {
        self.price_per_card.checked_mul(Amount::from(pack_size))
    }
}
