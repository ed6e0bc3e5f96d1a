//! Album error taxonomy.
//!
//! Every failure aborts the current operation with no partial mutation.
//! Nothing here is retried by the engine.

use thiserror::Error;

use super::identity::Amount;

/// Result alias used throughout the crate.
pub type AlbumResult<T> = Result<T, AlbumError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlbumError {
    #[error("Unsupported pack size: requested {requested}, allowed {min}..={max}")]
    UnsupportedPackSize { requested: u32, min: u32, max: u32 },

    #[error("Payment mismatch: expected {expected:?}, provided {provided}")]
    InsufficientPayment {
        /// `None` when the expected price overflows.
        expected: Option<Amount>,
        provided: Amount,
    },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Insufficient entropy: random bound must be positive")]
    InsufficientEntropy,

    #[error("Balance overflow: {0}")]
    BalanceOverflow(&'static str),

    #[error("Invalid album config: {0}")]
    InvalidConfig(String),

    #[error("Manifest error: {0}")]
    Manifest(String),
}

impl AlbumError {
    /// Whether the caller can fix the request and try again.
    #[must_use]
    pub fn is_user_correctable(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedPackSize { .. } | Self::InsufficientPayment { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = AlbumError::UnsupportedPackSize { requested: 7, min: 3, max: 6 };
        assert_eq!(err.to_string(), "Unsupported pack size: requested 7, allowed 3..=6");

        let err = AlbumError::InsufficientPayment { expected: Some(50), provided: 49 };
        assert_eq!(err.to_string(), "Payment mismatch: expected Some(50), provided 49");
    }

    #[test]
    fn test_user_correctable() {
        assert!(AlbumError::UnsupportedPackSize { requested: 0, min: 1, max: 2 }.is_user_correctable());
        assert!(AlbumError::InsufficientPayment { expected: None, provided: 1 }.is_user_correctable());
        assert!(!AlbumError::InsufficientEntropy.is_user_correctable());
        assert!(!AlbumError::InvalidCatalog("dup".into()).is_user_correctable());
    }
}
