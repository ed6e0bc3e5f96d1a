//! Random provider tests.
//!
//! These tests verify the block random provider's contract:
//! - values stay within the requested bound
//! - callers in the same block see different sequences
//! - a zero bound is rejected

use card_album::core::{AlbumError, BlockContext, BlockRandomProvider, DrawContext, Identity, RandomSource};

fn same_block(caller: u64) -> DrawContext {
    DrawContext::new(Identity::new(caller), BlockContext::new(15_000_000, 1_700_000_000))
}

/// A range request returns `count` values in `[0, bound)`.
#[test]
fn test_range_of_requested_length() {
    let mut rng = BlockRandomProvider::new(1);

    let values = rng.draw_range(&same_block(1), 150, 5).unwrap();

    assert_eq!(values.len(), 5);
    assert!(values.iter().all(|&v| v < 150));
}

/// Two accounts in the same block mostly see different range values.
#[test]
fn test_ranges_differ_between_accounts() {
    let provider = BlockRandomProvider::new(99);
    let mut first = provider.clone();
    let mut second = provider;

    let seq1 = first.draw_range(&same_block(1), 350, 10).unwrap();
    let seq2 = second.draw_range(&same_block(2), 350, 10).unwrap();

    let differing = seq1.iter().zip(&seq2).filter(|(a, b)| a != b).count();
    assert!(differing > 0);
}

/// Across many accounts, single draws rarely collide.
#[test]
fn test_singles_differ_between_accounts() {
    let provider = BlockRandomProvider::new(99);

    let collisions = (0..100u64)
        .filter(|&i| {
            let a = provider.clone().draw_single(&same_block(2 * i), 9999).unwrap();
            let b = provider.clone().draw_single(&same_block(2 * i + 1), 9999).unwrap();
            a == b
        })
        .count();

    // a pair collides with probability 1/9999
    assert!(collisions <= 2);
}

/// The same account in a later block sees a different sequence.
#[test]
fn test_blocks_differ() {
    let provider = BlockRandomProvider::new(5);
    let caller = Identity::new(1);

    let early = provider
        .clone()
        .draw_range(&DrawContext::new(caller, BlockContext::new(1, 10)), 1000, 10)
        .unwrap();
    let late = provider
        .clone()
        .draw_range(&DrawContext::new(caller, BlockContext::new(2, 22)), 1000, 10)
        .unwrap();

    assert_ne!(early, late);
}

/// All values are eventually reached for a small bound.
#[test]
fn test_small_bound_coverage() {
    let mut rng = BlockRandomProvider::new(3);
    let mut seen = [false; 4];

    for v in rng.draw_range(&same_block(1), 4, 200).unwrap() {
        seen[v as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

/// Zero bounds are a programming error.
#[test]
fn test_zero_bound_rejected() {
    let mut rng = BlockRandomProvider::new(3);

    assert_eq!(rng.draw_range(&same_block(1), 0, 1), Err(AlbumError::InsufficientEntropy));
    assert_eq!(rng.draw_single(&same_block(1), 0), Err(AlbumError::InsufficientEntropy));
    assert_eq!(rng.nonce(), 0);
}
