//! Card system: definitions and the per-album catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions, unique within a pool
//! - `PoolKind`: Common or rare pool
//! - `CardDefinition`: Static card data
//! - `CardCatalog`: The two pools of one album

pub mod catalog;
pub mod definition;

pub use catalog::CardCatalog;
pub use definition::{CardDefinition, CardId, PoolKind};
