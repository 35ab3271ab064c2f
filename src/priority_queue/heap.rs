use std::{cmp::Ordering, collections::BinaryHeap};

use super::{Frontier, QueueEntry};
use crate::errors::{GraphError, Result};


/// Entry on the heap
/// - seq records insertion order so equal priorities pop first-in first-out
#[derive(Debug)]
struct HeapNode<E, P> {
    entry: QueueEntry<E, P>,
    seq: u64,
}

/// Total order over priorities
/// A priority that does not compare with itself (NaN) ranks after every other priority
fn priority_order<P: PartialOrd>(a: &P, b: &P) -> Ordering {
    match a.partial_cmp(b) {
        Some(order) => order,
        None => {
            let a_unordered = a.partial_cmp(a).is_none();
            let b_unordered = b.partial_cmp(b).is_none();
            a_unordered.cmp(&b_unordered)
        }
    }
}

// binary heap sorts Biggest to Smallest, so both comparisons are reversed
impl<E, P: PartialOrd> Ord for HeapNode<E, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        priority_order(&other.entry.priority, &self.entry.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl<E, P: PartialOrd> PartialOrd for HeapNode<E, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<E, P: PartialOrd> PartialEq for HeapNode<E, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<E, P: PartialOrd> Eq for HeapNode<E, P> {}


/// Binary heap priority queue
/// Same observable ordering as SortedQueue with O(log n) enqueue and dequeue,
/// as long as priorities are totally ordered. NaN priorities pop last here.
#[derive(Debug)]
pub struct HeapQueue<E, P> {
    heap: BinaryHeap<HeapNode<E, P>>,
    next_seq: u64,
}

impl<E, P: PartialOrd> HeapQueue<E, P> {

    pub fn new() -> Self {
        Self { heap: BinaryHeap::new(), next_seq: 0 }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { heap: BinaryHeap::with_capacity(capacity), next_seq: 0 }
    }
}

impl<E, P: PartialOrd> Default for HeapQueue<E, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, P: PartialOrd> Frontier<E, P> for HeapQueue<E, P> {

    fn enqueue(&mut self, element: E, priority: P) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(HeapNode {
            entry: QueueEntry { element, priority },
            seq,
        });
    }

    fn dequeue(&mut self) -> Result<QueueEntry<E, P>> {
        self.heap
            .pop()
            .map(|node| node.entry)
            .ok_or(GraphError::EmptyQueueAccess)
    }

    fn peek(&self) -> Option<&QueueEntry<E, P>> {
        self.heap.peek().map(|node| &node.entry)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.next_seq = 0;
    }
}

impl<E, P: PartialOrd> Extend<(E, P)> for HeapQueue<E, P> {
    fn extend<I: IntoIterator<Item = (E, P)>>(&mut self, iter: I) {
        for (element, priority) in iter {
            self.enqueue(element, priority);
        }
    }
}

impl<E, P: PartialOrd> FromIterator<(E, P)> for HeapQueue<E, P> {
    fn from_iter<I: IntoIterator<Item = (E, P)>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}
