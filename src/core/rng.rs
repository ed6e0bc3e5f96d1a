//! Randomness capability for pack draws.
//!
//! ## Key Features
//!
//! - **Injected**: albums hold a `RandomSource`, never a global
//! - **Per-caller**: the caller identity is mixed into every seed, so two
//!   buyers in the same block see different sequences
//! - **Nonce-advancing**: repeated calls within one block never reuse a seed
//! - **Serializable**: provider state can be captured and restored
//!
//! ## Usage
//!
//! ```
//! use card_album::core::{BlockContext, BlockRandomProvider, DrawContext, Identity, RandomSource};
//!
//! let mut rng = BlockRandomProvider::new(42);
//! let ctx = DrawContext::new(Identity::new(1), BlockContext::new(10, 1_000));
//!
//! let values = rng.draw_range(&ctx, 150, 5).unwrap();
//! assert_eq!(values.len(), 5);
//! assert!(values.iter().all(|&v| v < 150));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::error::{AlbumError, AlbumResult};
use super::identity::DrawContext;

/// Capability producing bounded pseudo-random integers for a caller.
///
/// Implementations must differentiate callers within the same block and
/// must fail with `InsufficientEntropy` on a zero bound.
pub trait RandomSource: Send {
    /// Draw `count` values, each in `[0, bound)`.
    fn draw_range(&mut self, ctx: &DrawContext, bound: u32, count: usize) -> AlbumResult<Vec<u32>>;

    /// Draw a single value in `[0, bound)`.
    fn draw_single(&mut self, ctx: &DrawContext, bound: u32) -> AlbumResult<u32>;
}

/// Block-entropy provider backed by ChaCha8.
///
/// Each request derives a fresh ChaCha8 stream from
/// `(entropy, block, caller, nonce)` and then advances the nonce.
#[derive(Clone, Debug)]
pub struct BlockRandomProvider {
    entropy: u64,
    nonce: u64,
}

impl BlockRandomProvider {
    /// Create a provider with the given base entropy.
    #[must_use]
    pub fn new(entropy: u64) -> Self {
        Self { entropy, nonce: 0 }
    }

    /// Number of requests served so far.
    #[must_use]
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    fn stream_for(&mut self, ctx: &DrawContext) -> ChaCha8Rng {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.entropy.hash(&mut hasher);
        ctx.block.hash(&mut hasher);
        ctx.caller.hash(&mut hasher);
        self.nonce.hash(&mut hasher);
        self.nonce = self.nonce.wrapping_add(1);

        ChaCha8Rng::seed_from_u64(hasher.finish())
    }

    /// Get the current state for serialization.
    ///
    /// Seeds go through `DefaultHasher`, whose output may change between Rust
    /// releases, so a saved state only replays on the same toolchain.
    #[must_use]
    pub fn state(&self) -> RandomProviderState {
        RandomProviderState {
            entropy: self.entropy,
            nonce: self.nonce,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &RandomProviderState) -> Self {
        Self {
            entropy: state.entropy,
            nonce: state.nonce,
        }
    }
}

impl RandomSource for BlockRandomProvider {
    fn draw_range(&mut self, ctx: &DrawContext, bound: u32, count: usize) -> AlbumResult<Vec<u32>> {
        if bound == 0 {
            return Err(AlbumError::InsufficientEntropy);
        }
        let mut stream = self.stream_for(ctx);
        Ok((0..count).map(|_| stream.gen_range(0..bound)).collect())
    }

    fn draw_single(&mut self, ctx: &DrawContext, bound: u32) -> AlbumResult<u32> {
        if bound == 0 {
            return Err(AlbumError::InsufficientEntropy);
        }
        Ok(self.stream_for(ctx).gen_range(0..bound))
    }
}

/// Serializable provider state for checkpointing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomProviderState {
    /// Base entropy
    pub entropy: u64,
    /// Requests served
    pub nonce: u64,
}
