//! # Shuffle
//!
//! In-place Fisher-Yates (Knuth) shuffle over a slice or a contiguous sub-range of it.
//!
//! Walking from the last position of the range down to the first, each position is swapped
//! with a uniformly random position at or before it, still inside the range. Each of the
//! `n!` permutations of the range comes out with probability exactly `1/n!`, given a
//! uniform generator. Runs in `O(n)` time with no allocation.
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha20Rng;
//! use randq::cs::sort::shuffle::{shuffle, shuffle_range};
//!
//! let mut rng = ChaCha20Rng::seed_from_u64(7);
//! let mut deck: Vec<u32> = (0..52).collect();
//! shuffle(&mut deck, &mut rng);
//!
//! // Only the middle of the slice moves.
//! let mut arr = [0, 1, 2, 3, 4, 5];
//! shuffle_range(&mut arr, 1, 5, &mut rng).unwrap();
//! assert_eq!(arr[0], 0);
//! assert_eq!(arr[5], 5);
//! ```

use rand::Rng;

use crate::error::{Error, Result};

/// Uniformly permutes the whole slice in place.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let len = items.len();
    shuffle_slice(items, 0, len, rng);
}

/// Uniformly permutes `items[lo..hi]` in place, leaving everything outside the range untouched.
///
/// Fails with [`Error::InvalidArgument`] if `lo > hi` or `hi > items.len()`.
pub fn shuffle_range<T, R: Rng + ?Sized>(
    items: &mut [T],
    lo: usize,
    hi: usize,
    rng: &mut R,
) -> Result<()> {
    if lo > hi || hi > items.len() {
        return Err(Error::InvalidArgument(format!(
            "shuffle range [{lo}, {hi}) out of bounds for length {}",
            items.len()
        )));
    }
    shuffle_slice(items, lo, hi, rng);
    Ok(())
}

fn shuffle_slice<T, R: Rng + ?Sized>(items: &mut [T], lo: usize, hi: usize, rng: &mut R) {
    // Ranges of length 0 or 1 have nothing to swap.
    for i in (lo + 1..hi).rev() {
        let j = rng.gen_range(lo..=i);
        items.swap(i, j);
    }
}
