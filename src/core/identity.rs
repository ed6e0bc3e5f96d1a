//! Caller identities, amounts, and block context.
//!
//! ## Identity
//!
//! Opaque account identifier. The album never interprets it beyond
//! equality, hashing, and mixing it into randomness seeds.
//!
//! ## DrawContext
//!
//! Explicit seed context handed to a `RandomSource`. Replaces the ambient
//! "who is calling, in which block" lookups a chain runtime would provide.

use serde::{Deserialize, Serialize};

/// Amount of value in the smallest indivisible unit (e.g. gwei).
pub type Amount = u64;

/// Account identifier for buyers, creators, and fee recipients.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Identity(pub u64);

impl Identity {
    /// Create a new identity.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw identity value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for Identity {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{:016x}", self.0)
    }
}

/// Logical time unit a transaction executes in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockContext {
    /// Block height.
    pub number: u64,
    /// Block timestamp (seconds).
    pub timestamp: u64,
}

impl BlockContext {
    /// Create a new block context.
    #[must_use]
    pub const fn new(number: u64, timestamp: u64) -> Self {
        Self { number, timestamp }
    }
}

/// Seed context for one randomness request: who asks, and when.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DrawContext {
    pub caller: Identity,
    pub block: BlockContext,
}

impl DrawContext {
    /// Create a new draw context.
    #[must_use]
    pub const fn new(caller: Identity, block: BlockContext) -> Self {
        Self { caller, block }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let id = Identity::new(0xabc);
        assert_eq!(id.raw(), 0xabc);
        assert_eq!(Identity::from(0xabc), id);
        assert_eq!(format!("{}", id), "0x0000000000000abc");
    }

    #[test]
    fn test_block_context_default() {
        let block = BlockContext::default();
        assert_eq!(block.number, 0);
        assert_eq!(block.timestamp, 0);
    }

    #[test]
    fn test_draw_context_serialization() {
        let ctx = DrawContext::new(Identity::new(7), BlockContext::new(12, 1_700_000_000));
        let json = serde_json::to_string(&ctx).unwrap();
        let deserialized: DrawContext = serde_json::from_str(&json).unwrap();
        assert_eq!(ctx, deserialized);
    }
}
