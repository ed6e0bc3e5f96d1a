//! Album engine: drawing, ownership, fees, and orchestration.
//!
//! ## Key Types
//!
//! - `PackDrawEngine`: Draws common cards and rolls for a rare card
//! - `OwnershipLedger`: Per-owner card counts
//! - `FeeSplitter`: Splits payments into fee and prize pool shares
//! - `AlbumInstance`: Validates purchases and commits their effects
//! - `SharedAlbum`: Serializes purchases across threads
//! - `AlbumManifest`: Serializable album construction input

pub mod draw;
pub mod events;
pub mod fee;
pub mod instance;
pub mod ledger;
pub mod manifest;
pub mod shared;

pub use draw::{DrawResult, PackDrawEngine};
pub use events::{AlbumEvent, EventLog};
pub use fee::{calculate_fee, FeeSplit, FeeSplitter};
pub use instance::AlbumInstance;
pub use ledger::{Holding, LedgerKey, OwnershipLedger};
pub use manifest::AlbumManifest;
pub use shared::SharedAlbum;
