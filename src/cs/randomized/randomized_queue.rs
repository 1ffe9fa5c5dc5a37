//! # Randomized Queue
//!
//! A resizable-array-backed collection whose `dequeue` removes a **uniformly random** item.
//! `enqueue`, `dequeue` and `sample` all run in amortized constant time.
//!
//! ## Layout
//! Live items occupy `items[0..len)`. Removal picks a random index, takes the item out and moves
//! the last item into the hole (`Vec::swap_remove`), so the live region stays contiguous and
//! every remaining item is still exactly one index in `[0, len)`, whatever the history.
//!
//! The logical capacity is always a power of two, starting at 1. It doubles when an `enqueue`
//! finds the buffer full and halves when a `dequeue` finds `len == capacity / 4`, so memory
//! stays within a constant factor of `len` rather than of the peak size.
//!
//! ## Iteration
//! Every call to [`RandomizedQueue::iter`] snapshots the live region into a fresh buffer and
//! shuffles that snapshot, so two iterators over the same queue are independent permutations.
//! The snapshot is owned by the iterator; the queue itself is not reordered.
//!
//! ## Example
//! ```rust
//! use randq::cs::randomized::RandomizedQueue;
//!
//! let mut queue = RandomizedQueue::with_seed(17);
//! for c in ["a", "b", "c", "d", "e"] {
//!     queue.enqueue(c);
//! }
//!
//! let order: Vec<&str> = queue.iter().copied().collect();
//! assert_eq!(order.len(), 5);
//!
//! let picked = queue.dequeue().unwrap();
//! assert!(["a", "b", "c", "d", "e"].contains(&picked));
//! assert_eq!(queue.len(), 4);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::vec;

use log::trace;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cs::queue::Queue;
use crate::cs::sort::shuffle::shuffle;
use crate::error::{Error, Result};

/// Array-backed queue with uniformly random removal and sampling.
///
/// Generic over the random source `R`; the default is a ChaCha20 generator.
pub struct RandomizedQueue<T, R = ChaCha20Rng> {
    items: Vec<T>,
    capacity: usize,
    rng: R,
}

impl<T> RandomizedQueue<T, ChaCha20Rng> {
    /// Creates an empty queue seeded from OS entropy.
    pub fn new() -> Self {
        Self::with_rng(ChaCha20Rng::from_entropy())
    }

    /// Creates an empty queue whose random choices are reproducible from `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<T> Default for RandomizedQueue<T, ChaCha20Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R: Rng> RandomizedQueue<T, R> {
    /// Creates an empty queue drawing from the given generator.
    pub fn with_rng(rng: R) -> Self {
        RandomizedQueue {
            items: Vec::with_capacity(1),
            capacity: 1,
            rng,
        }
    }

    /// Number of items in the queue.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current logical capacity. Always a power of two.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Adds an item, doubling the capacity first if the buffer is full.
    pub fn enqueue(&mut self, item: T) {
        if self.items.len() == self.capacity {
            self.resize(self.capacity << 1);
        }
        self.items.push(item);
    }

    /// Adds an item that may be absent.
    ///
    /// Fails with [`Error::InvalidArgument`] if `item` is `None`.
    pub fn try_enqueue(&mut self, item: Option<T>) -> Result<()> {
        Queue::try_enqueue(self, item)
    }

    /// Removes and returns a uniformly random item.
    ///
    /// Fails with [`Error::EmptyCollection`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(Error::EmptyCollection);
        }
        if self.items.len() == self.capacity >> 2 {
            self.resize(self.capacity >> 1);
        }
        let i = self.rng.gen_range(0..self.items.len());
        Ok(self.items.swap_remove(i))
    }

    /// Returns a uniformly random item without removing it.
    ///
    /// Fails with [`Error::EmptyCollection`] if the queue is empty.
    pub fn sample(&mut self) -> Result<&T> {
        self.peek().ok_or(Error::EmptyCollection)
    }

    /// Like [`sample`](Self::sample), but returns `None` on an empty queue.
    pub fn peek(&mut self) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        let i = self.rng.gen_range(0..self.items.len());
        self.items.get(i)
    }

    /// Uniformly permutes the stored items in place.
    pub fn shuffle(&mut self) {
        shuffle(&mut self.items, &mut self.rng);
    }

    /// Shallow copy of the items in their current internal order (not shuffled).
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.to_vec()
    }

    /// Drops every item and returns to the initial capacity of 1.
    pub fn clear(&mut self) {
        if self.capacity != 1 {
            trace!(
                "randomized queue cleared: capacity {} -> 1 (len {})",
                self.capacity,
                self.items.len()
            );
        }
        self.items = Vec::with_capacity(1);
        self.capacity = 1;
    }

    /// Returns an iterator over the items in a fresh uniformly random order.
    ///
    /// Each call shuffles its own snapshot, independent of every other iterator
    /// and of insertion order. The queue is left as it was.
    pub fn iter(&mut self) -> Iter<'_, T> {
        let mut snapshot: Vec<&T> = self.items.iter().collect();
        shuffle(&mut snapshot, &mut self.rng);
        Iter {
            inner: snapshot.into_iter(),
        }
    }

    pub(crate) fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity.is_power_of_two() && capacity >= self.items.len());
        trace!(
            "randomized queue resized: capacity {} -> {} (len {})",
            self.capacity,
            capacity,
            self.items.len()
        );
        if capacity > self.capacity {
            self.items.reserve_exact(capacity - self.items.len());
        } else {
            self.items.shrink_to(capacity);
        }
        self.capacity = capacity;
    }
}

impl<T, R: Rng> Queue<T> for RandomizedQueue<T, R> {
    type Iter<'a>
        = Iter<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn enqueue(&mut self, item: T) {
        RandomizedQueue::enqueue(self, item);
    }

    fn dequeue(&mut self) -> Result<T> {
        RandomizedQueue::dequeue(self)
    }

    fn is_empty(&self) -> bool {
        RandomizedQueue::is_empty(self)
    }

    fn len(&self) -> usize {
        RandomizedQueue::len(self)
    }

    fn shuffle(&mut self) {
        RandomizedQueue::shuffle(self);
    }

    fn peek(&mut self) -> Option<&T> {
        RandomizedQueue::peek(self)
    }

    fn iter(&mut self) -> Self::Iter<'_> {
        RandomizedQueue::iter(self)
    }

    fn to_vec(&mut self) -> Vec<T>
    where
        T: Clone,
    {
        RandomizedQueue::to_vec(self)
    }
}

impl<T: fmt::Debug, R> fmt::Debug for RandomizedQueue<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomizedQueue")
            .field("items", &self.items)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

impl<T, R: Rng> Extend<T> for RandomizedQueue<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for RandomizedQueue<T, ChaCha20Rng> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = RandomizedQueue::new();
        queue.extend(iter);
        queue
    }
}

/// Borrowing iterator over a shuffled snapshot of a [`RandomizedQueue`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: vec::IntoIter<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator yielding the items of a [`RandomizedQueue`] in random order.
#[derive(Debug)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T, R: Rng> IntoIterator for RandomizedQueue<T, R> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        shuffle(&mut self.items, &mut self.rng);
        IntoIter {
            inner: self.items.into_iter(),
        }
    }
}

impl<'a, T, R: Rng> IntoIterator for &'a mut RandomizedQueue<T, R> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}
