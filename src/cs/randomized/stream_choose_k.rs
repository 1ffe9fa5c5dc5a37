//! # Stream Choose K
//!
//! Online selection of a uniform random subset of size `k` from a stream of unknown,
//! possibly unbounded length. Each element is seen exactly once and memory stays `O(k)`.
//!
//! The first `k` elements are kept unconditionally. After that the `(k + m)`-th element is
//! accepted with probability `k / (k + m)`, evicting a uniformly random member of the current
//! sample. That probability is never computed from the count directly; it evolves through
//!
//! ```text
//!   p <- k * p / (p + k),   starting from p = 1.0
//! ```
//!
//! updated *before* each decision, so the first candidate after the filling phase is tested
//! against `k / (k + 1)`, the next against `k / (k + 2)`, and so on. After `n >= k` elements
//! every `k`-subset of them is equally likely to be the sample.
//!
//! ```rust
//! use randq::cs::randomized::StreamChooseK;
//!
//! let mut sampler = StreamChooseK::with_seed(3, 42);
//! for word in "the quick brown fox jumps over the lazy dog".split(' ') {
//!     sampler.update(word);
//! }
//! assert_eq!(sampler.count(), 9);
//! assert_eq!(sampler.collection().len(), 3);
//! ```

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cs::randomized::randomized_queue::RandomizedQueue;

/// Reservoir sampler that keeps a uniform `k`-subset of every element passed to `update`.
///
/// The acceptance coins come from the generator owned by the inner queue, so a single
/// seed fixes the whole run.
#[derive(Debug)]
pub struct StreamChooseK<T, R = ChaCha20Rng> {
    k: usize,
    count: u64,
    p: f64,
    collection: RandomizedQueue<T, R>,
}

impl<T> StreamChooseK<T, ChaCha20Rng> {
    /// Creates a sampler for `k` items seeded from OS entropy.
    pub fn new(k: usize) -> Self {
        Self::with_rng(k, ChaCha20Rng::from_entropy())
    }

    /// Creates a sampler for `k` items whose choices are reproducible from `seed`.
    pub fn with_seed(k: usize, seed: u64) -> Self {
        Self::with_rng(k, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<T, R: Rng> StreamChooseK<T, R> {
    pub fn with_rng(k: usize, rng: R) -> Self {
        StreamChooseK {
            k,
            count: 0,
            p: 1.0,
            collection: RandomizedQueue::with_rng(rng),
        }
    }

    /// Feeds the next stream element.
    pub fn update(&mut self, item: T) {
        let k = self.k as u64;
        if self.count < k {
            self.collection.enqueue(item);
            if self.count + 1 == k {
                debug!("stream sampler filled: k = {}", self.k);
            }
        } else if self.k > 0 {
            let kf = self.k as f64;
            self.p = kf * self.p / (self.p + kf);
            let accepted = self.collection.rng_mut().gen::<f64>() < self.p;
            trace!(
                "stream sampler candidate #{}: p = {:.6}, accepted = {}",
                self.count + 1,
                self.p,
                accepted
            );
            if accepted {
                // Past the filling phase the collection holds k >= 1 items; only removal
                // through `collection_mut` can empty it.
                debug_assert!(
                    !self.collection.is_empty(),
                    "stream sampler reservoir emptied outside update"
                );
                if self.collection.dequeue().is_ok() {
                    self.collection.enqueue(item);
                }
            }
        }
        self.count += 1;
    }

    /// Target sample size.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Number of elements observed so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Acceptance probability used for the most recent candidate (1.0 until the
    /// sample has filled).
    pub fn probability(&self) -> f64 {
        self.p
    }

    /// The live sample, holding `min(count, k)` items. Further `update` calls change it.
    pub fn collection(&self) -> &RandomizedQueue<T, R> {
        &self.collection
    }

    /// Mutable access to the live sample, for `sample` and `iter`, which draw from its
    /// generator. Enqueueing or dequeueing through it breaks the uniformity guarantee.
    pub fn collection_mut(&mut self) -> &mut RandomizedQueue<T, R> {
        &mut self.collection
    }

    pub fn into_collection(self) -> RandomizedQueue<T, R> {
        self.collection
    }
}

impl<T, R: Rng> Extend<T> for StreamChooseK<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.update(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::collections::HashMap;

    fn sorted_sample(sampler: &StreamChooseK<usize>) -> Vec<usize> {
        let mut items = sampler.collection().to_vec();
        items.sort_unstable();
        items
    }

    #[test]
    fn test_exactly_k_elements_are_all_kept() {
        let mut sampler = StreamChooseK::with_seed(5, 1);
        sampler.extend(0..5);
        assert_eq!(sampler.count(), 5);
        assert_eq!(sorted_sample(&sampler), vec![0, 1, 2, 3, 4]);
        assert_abs_diff_eq!(sampler.probability(), 1.0);
    }

    #[test]
    fn test_fewer_than_k_elements() {
        let mut sampler = StreamChooseK::with_seed(5, 1);
        sampler.extend(0..3);
        assert_eq!(sorted_sample(&sampler), vec![0, 1, 2]);
    }

    #[test]
    fn test_zero_k_keeps_nothing() {
        let mut sampler = StreamChooseK::with_seed(0, 1);
        sampler.extend(0..100);
        assert_eq!(sampler.count(), 100);
        assert!(sampler.collection().is_empty());
        assert!(!sampler.probability().is_nan());
    }

    #[test]
    fn test_sample_size_stays_k() {
        let mut sampler = StreamChooseK::with_seed(7, 9);
        for i in 0..10_000usize {
            sampler.update(i);
            assert_eq!(sampler.collection().len(), (i + 1).min(7));
        }
        let items = sorted_sample(&sampler);
        let mut dedup = items.clone();
        dedup.dedup();
        assert_eq!(items, dedup);
        assert!(items.iter().all(|&x| x < 10_000));
    }

    #[test]
    fn test_probability_recurrence() {
        let k = 4;
        let mut sampler = StreamChooseK::with_seed(k, 11);
        sampler.extend(0..k);
        for m in 1..=1000usize {
            sampler.update(k + m);
            let expected = k as f64 / (k + m) as f64;
            assert_abs_diff_eq!(sampler.probability(), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_first_replacement_candidate_kept_with_k_over_k_plus_one() {
        let k = 3;
        let trials = 20_000;
        let mut kept = 0;
        for seed in 0..trials {
            let mut sampler = StreamChooseK::with_seed(k, seed);
            sampler.extend(0..=k);
            if sampler.collection().to_vec().contains(&k) {
                kept += 1;
            }
        }
        let rate = kept as f64 / trials as f64;
        assert_abs_diff_eq!(rate, 0.75, epsilon = 0.02);
    }

    #[test]
    fn test_inclusion_probability_is_k_over_n() {
        let (n, k) = (20usize, 5usize);
        let trials = 20_000u64;
        let mut counts = vec![0usize; n];
        for seed in 0..trials {
            let mut sampler = StreamChooseK::with_seed(k, seed);
            sampler.extend(0..n);
            for &x in sampler.collection().to_vec().iter() {
                counts[x] += 1;
            }
        }
        let expected = trials as f64 * k as f64 / n as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let diff = c as f64 - expected;
                diff * diff / expected
            })
            .sum();
        // df = 19; the p = 1e-6 critical value is ~ 55.
        assert!(chi2 < 60.0, "chi2 too large: {chi2:.2}, counts={counts:?}");
    }

    #[test]
    fn test_every_subset_equally_likely() {
        // C(5, 2) = 10 subsets, df = 9.
        let (n, k) = (5usize, 2usize);
        let trials = 30_000u64;
        let mut counts: HashMap<Vec<usize>, usize> = HashMap::new();
        for seed in 0..trials {
            let mut sampler = StreamChooseK::with_seed(k, seed.wrapping_mul(0x9E37_79B9));
            sampler.extend(0..n);
            *counts.entry(sorted_sample(&sampler)).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 10);

        let expected = trials as f64 / 10.0;
        let chi2: f64 = counts
            .values()
            .map(|&c| {
                let diff = c as f64 - expected;
                diff * diff / expected
            })
            .sum();
        // The p = 1e-6 critical value for df = 9 is ~ 42.6.
        assert!(chi2 < 45.0, "chi2 too large: {chi2:.2}, counts={counts:?}");
    }

    #[test]
    fn test_same_seed_same_sample() {
        let mut a = StreamChooseK::with_seed(10, 31337);
        let mut b = StreamChooseK::with_seed(10, 31337);
        a.extend(0..5_000usize);
        b.extend(0..5_000usize);
        assert_eq!(a.collection().to_vec(), b.collection().to_vec());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "reservoir emptied outside update")]
    fn test_update_after_external_drain_panics_in_debug() {
        let mut sampler = StreamChooseK::with_seed(5, 5);
        sampler.extend(0..5usize);
        sampler.collection_mut().clear();
        // Rejecting all 1000 candidates has probability 5! * 1000! / 1005! < 1e-12.
        sampler.extend(5..1005);
    }

    #[test]
    fn test_collection_can_be_sampled_and_taken() {
        let mut sampler = StreamChooseK::with_seed(3, 8);
        sampler.extend(0..100usize);
        let picked = *sampler.collection_mut().sample().unwrap();
        assert!(sampler.collection().to_vec().contains(&picked));
        assert_eq!(sampler.collection_mut().iter().count(), 3);

        let queue = sampler.into_collection();
        assert_eq!(queue.len(), 3);
    }
}
