
mod heap;
mod sorted;

pub use heap::HeapQueue;
pub use sorted::SortedQueue;

use crate::errors::Result;


/// An element paired with the priority it was queued at
#[derive(Clone, Debug, PartialEq)]
pub struct QueueEntry<E, P> {
    pub element: E,
    pub priority: P,
}

/// Min-priority queue driving the search frontier
///
/// Implementations must yield the lowest priority first, and among equal
/// priorities the element enqueued earliest. Duplicate elements are allowed.
/// Priorities are expected to be totally ordered; the graph never queues NaN
/// because edge weights are validated when added.
pub trait Frontier<E, P> {

    /// Insert an element, keeping priorities non-decreasing from the front
    fn enqueue(&mut self, element: E, priority: P);

    /// Remove and return the front (minimum priority) entry
    /// Fails with EmptyQueueAccess when nothing is queued
    fn dequeue(&mut self) -> Result<QueueEntry<E, P>>;

    /// Front entry without removing it
    fn peek(&self) -> Option<&QueueEntry<E, P>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}
