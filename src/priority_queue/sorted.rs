use std::collections::VecDeque;

use super::{Frontier, QueueEntry};
use crate::errors::{GraphError, Result};


/// Priority queue kept as a sorted list
/// Insertion is a linear scan for the first strictly greater priority,
/// so ties stay in insertion order. Dequeue pops the front.
#[derive(Clone, Debug)]
pub struct SortedQueue<E, P> {
    entries: VecDeque<QueueEntry<E, P>>,
}

impl<E, P> SortedQueue<E, P> {

    pub fn new() -> Self {
        Self { entries: VecDeque::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: VecDeque::with_capacity(capacity) }
    }

    /// Entries from front to back
    pub fn iter(&self) -> impl Iterator<Item = &QueueEntry<E, P>> {
        self.entries.iter()
    }
}

impl<E, P> Default for SortedQueue<E, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, P: PartialOrd> Frontier<E, P> for SortedQueue<E, P> {

    fn enqueue(&mut self, element: E, priority: P) {
        let entry = QueueEntry { element, priority };

        // insert before the first entry with a strictly greater priority
        match self.entries.iter().position(|e| entry.priority < e.priority) {
            Some(index) => self.entries.insert(index, entry),
            None => self.entries.push_back(entry),
        }
    }

    fn dequeue(&mut self) -> Result<QueueEntry<E, P>> {
        self.entries.pop_front().ok_or(GraphError::EmptyQueueAccess)
    }

    fn peek(&self) -> Option<&QueueEntry<E, P>> {
        self.entries.front()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<E, P: PartialOrd> Extend<(E, P)> for SortedQueue<E, P> {
    fn extend<I: IntoIterator<Item = (E, P)>>(&mut self, iter: I) {
        for (element, priority) in iter {
            self.enqueue(element, priority);
        }
    }
}

impl<E, P: PartialOrd> FromIterator<(E, P)> for SortedQueue<E, P> {
    fn from_iter<I: IntoIterator<Item = (E, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
