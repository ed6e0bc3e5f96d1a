//! # card-album
//!
//! A collectible card album engine: buyers open packs of randomly drawn
//! cards, an ownership ledger records what they hold, and each payment is
//! split between a protocol fee and the album's prize pool.
//!
//! ## Design Principles
//!
//! 1. **Injected Randomness**: Albums draw through a `RandomSource` handed in
//!    at construction, seeded by an explicit `DrawContext` (caller + block).
//!
//! 2. **All-or-Nothing Purchases**: `open_pack` validates and draws before
//!    committing anything. A rejected purchase changes no state.
//!
//! 3. **Configuration Over Convention**: Pack sizes, prices, fee rate, and
//!    rare chance come from `AlbumConfig`, optionally loaded from a manifest.
//!
//! ## Example
//!
//! ```
//! use card_album::{AlbumConfig, AlbumInstance, BlockRandomProvider, CardCatalog, CardDefinition, Identity};
//!
//! let creator = Identity::new(1);
//! let buyer = Identity::new(2);
//!
//! let config = AlbumConfig::new(creator, creator)
//!     .with_pack_sizes(3, 6)
//!     .with_price_per_card(10)
//!     .with_fee_rate(20)
//!     .with_rare_card_chance(1000);
//! let catalog = CardCatalog::new(CardDefinition::numbered(150), CardDefinition::numbered(10)).unwrap();
//!
//! let mut album = AlbumInstance::new(config, catalog, Box::new(BlockRandomProvider::new(7))).unwrap();
//! let pack = album.open_pack(buyer, 5, 50).unwrap();
//!
//! assert_eq!(pack.common_cards.len(), 5);
//! assert!(pack.rare_card_id.is_some());
//! assert_eq!(album.prize_pool(), 49);
//! ```
//!
//! ## Modules
//!
//! - `core`: Identities, amounts, RNG, configuration, errors
//! - `cards`: Card definitions and the per-album catalog
//! - `album`: Drawing, ledger, fees, events, and the album itself

pub mod core;
pub mod cards;
pub mod album;

// Re-export commonly used types
pub use crate::core::{
    AlbumConfig, AlbumError, AlbumResult, Amount, BlockContext, BlockRandomProvider,
    DrawContext, Identity, RandomProviderState, RandomSource, BASIS_POINTS,
};

pub use crate::cards::{CardCatalog, CardDefinition, CardId, PoolKind};

pub use crate::album::{
    AlbumEvent, AlbumInstance, AlbumManifest, DrawResult, EventLog, FeeSplit, FeeSplitter,
    OwnershipLedger, PackDrawEngine, SharedAlbum,
};
