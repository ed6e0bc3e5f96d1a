//! Core album types: identities, amounts, RNG, configuration, errors.
//!
//! These are the building blocks shared by the card catalog and the
//! album orchestration layer.

pub mod identity;
pub mod rng;
pub mod config;
pub mod error;

pub use identity::{Amount, BlockContext, DrawContext, Identity};
pub use rng::{BlockRandomProvider, RandomProviderState, RandomSource};
pub use config::{AlbumConfig, BASIS_POINTS};
pub use error::{AlbumError, AlbumResult};
