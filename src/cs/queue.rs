//! The generic queue capability set.
//!
//! A [`Queue`] accepts items with `enqueue` and hands them back with `dequeue`. The order
//! in which items come back is up to the implementation: FIFO for a classic queue, uniformly
//! random for [`RandomizedQueue`](crate::cs::randomized::RandomizedQueue).

use crate::error::{Error, Result};

pub trait Queue<T> {
    /// Iterator returned by [`iter`](Queue::iter).
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    /// Pushes an item into the queue.
    fn enqueue(&mut self, item: T);

    /// Removes an item from the queue and returns it.
    ///
    /// Fails with [`Error::EmptyCollection`] if the queue is empty.
    fn dequeue(&mut self) -> Result<T>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;

    /// Reorders the items in place. Array-backed queues do this in linear time
    /// without extra memory.
    fn shuffle(&mut self);

    /// Looks at an item without removing it; randomized queues pick it at random.
    /// Returns `None` if the queue is empty.
    fn peek(&mut self) -> Option<&T>;

    /// Lazy, finite, single-pass walk over the items. Not restartable: every call
    /// builds a new iterator, and randomized queues give each one a fresh order.
    fn iter(&mut self) -> Self::Iter<'_>;

    /// Shallow copy of the items, collected through [`iter`](Queue::iter).
    /// Array-backed queues override this with a direct copy in internal order.
    fn to_vec(&mut self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Pushes an item that may be absent.
    ///
    /// Fails with [`Error::InvalidArgument`] if `item` is `None`; the queue is left unchanged.
    fn try_enqueue(&mut self, item: Option<T>) -> Result<()> {
        match item {
            Some(item) => {
                self.enqueue(item);
                Ok(())
            }
            None => Err(Error::InvalidArgument("null item not allowed".to_string())),
        }
    }
}
