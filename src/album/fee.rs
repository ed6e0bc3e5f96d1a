//! Fee splitting.
//!
//! Rates use `BASIS_POINTS` (1000) precision: 20 = 2.0%, 1000 = 100%.
//! The fee is always floored; the remainder goes to the prize pool.

use serde::{Deserialize, Serialize};

use crate::core::{Amount, BASIS_POINTS};

/// Calculate the floored fee of `amount` at `rate`.
///
/// Uses a u128 intermediate to prevent overflow. Rates above
/// `BASIS_POINTS` are treated as `BASIS_POINTS`.
///
/// # Example
/// ```
/// use card_album::album::calculate_fee;
/// // 2.0% of 1000 units
/// assert_eq!(calculate_fee(1000, 20), 20);
/// // floor(5 * 20 / 1000) = 0
/// assert_eq!(calculate_fee(5, 20), 0);
/// ```
#[inline]
pub fn calculate_fee(amount: Amount, rate: u32) -> Amount {
    let rate = rate.min(BASIS_POINTS);
    // rate <= BASIS_POINTS keeps the quotient <= amount
    ((amount as u128 * rate as u128) / BASIS_POINTS as u128) as Amount
}

/// Result of splitting one payment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeSplit {
    /// Routed to the fee recipient.
    pub fee_amount: Amount,
    /// Accumulated into the prize pool.
    pub pool_amount: Amount,
}

/// Splits payments between protocol fee and prize pool.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeeSplitter;

impl FeeSplitter {
    /// Split `payment` at `fee_rate` basis points.
    ///
    /// `fee_amount + pool_amount == payment` always holds.
    #[must_use]
    pub fn split(payment: Amount, fee_rate: u32) -> FeeSplit {
        let fee_amount = calculate_fee(payment, fee_rate);
        FeeSplit {
            fee_amount,
            pool_amount: payment - fee_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_calculate_fee_basic() {
        assert_eq!(calculate_fee(1_000_000, 20), 20_000);
        assert_eq!(calculate_fee(1_000_000, 1000), 1_000_000);
    }

    #[test]
    fn test_calculate_fee_floors() {
        // 5 * 20 / 1000 = 0.1 -> 0
        assert_eq!(calculate_fee(5, 20), 0);
        // 999 * 1 / 1000 = 0.999 -> 0
        assert_eq!(calculate_fee(999, 1), 0);
        assert_eq!(calculate_fee(1000, 1), 1);
    }

    #[test]
    fn test_calculate_fee_zero() {
        assert_eq!(calculate_fee(0, 500), 0);
        assert_eq!(calculate_fee(100_000, 0), 0);
    }

    #[test]
    fn test_rate_clamped() {
        assert_eq!(calculate_fee(500, 5000), 500);
    }

    #[test]
    fn test_no_overflow() {
        assert_eq!(calculate_fee(Amount::MAX, 1000), Amount::MAX);
        assert_eq!(calculate_fee(10_000_000_000_000_000_000, 20), 200_000_000_000_000_000);
    }

    #[test]
    fn test_split_small_payment() {
        let split = FeeSplitter::split(5, 20);
        assert_eq!(split, FeeSplit { fee_amount: 0, pool_amount: 5 });
    }

    #[test]
    fn test_split_full_fee() {
        let split = FeeSplitter::split(5, 1000);
        assert_eq!(split, FeeSplit { fee_amount: 5, pool_amount: 0 });
    }

    proptest! {
        #[test]
        fn prop_split_conserves_payment(payment in any::<u64>(), rate in 0u32..=1000) {
            let split = FeeSplitter::split(payment, rate);
            prop_assert_eq!(split.fee_amount + split.pool_amount, payment);
            prop_assert_eq!(
                split.fee_amount as u128,
                payment as u128 * rate as u128 / 1000
            );
        }
    }
}
