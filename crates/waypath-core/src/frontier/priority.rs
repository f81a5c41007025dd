use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use super::Frontier;

/// Heap entry ordered by key, then by insertion sequence
#[derive(Debug, Clone)]
pub struct HeapEntry<T> {
    pub key: f64,
    pub seq: u64,
    pub item: T,
}

impl<T> PartialEq for HeapEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for HeapEntry<T> {}

impl<T> PartialOrd for HeapEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for HeapEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key
            .total_cmp(&other.key)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority frontier: lowest key pops first, equal keys pop in insertion order
#[derive(Debug, Clone)]
pub struct PriorityFrontier<T> {
    heap: BinaryHeap<Reverse<HeapEntry<T>>>,
    next_seq: u64,
}

impl<T> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn push_with_key(&mut self, key: f64, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(HeapEntry { key, seq, item }));
    }

    /// Pop the lowest-keyed item along with its key
    pub fn pop_with_key(&mut self) -> Option<(f64, T)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.key, entry.item))
    }

    pub fn peek_key(&self) -> Option<f64> {
        self.heap.peek().map(|Reverse(entry)| entry.key)
    }
}

impl<T> Default for PriorityFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyed items pushed through the `Frontier` trait
impl<T> Frontier<(f64, T)> for PriorityFrontier<T> {
    fn push(&mut self, (key, item): (f64, T)) {
        self.push_with_key(key, item);
    }

    fn pop(&mut self) -> Option<(f64, T)> {
        self.pop_with_key()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heap_entry_ordering() {
        let a = HeapEntry {
            key: 1.0,
            seq: 0,
            item: "A",
        };
        let b = HeapEntry {
            key: 2.0,
            seq: 1,
            item: "B",
        };
        let c = HeapEntry {
            key: 1.0,
            seq: 2,
            item: "C",
        };

        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(b.cmp(&a), Ordering::Greater);
        // Equal keys fall back to insertion sequence
        assert_eq!(a.cmp(&c), Ordering::Less);
    }

    #[test]
    fn test_lowest_key_first() {
        let mut frontier = PriorityFrontier::new();
        frontier.push_with_key(3.0, "c");
        frontier.push_with_key(1.0, "a");
        frontier.push_with_key(2.0, "b");

        assert_eq!(frontier.peek_key(), Some(1.0));
        assert_eq!(frontier.pop_with_key(), Some((1.0, "a")));
        assert_eq!(frontier.pop_with_key(), Some((2.0, "b")));
        assert_eq!(frontier.pop_with_key(), Some((3.0, "c")));
        assert_eq!(frontier.pop_with_key(), None);
    }

    #[test]
    fn test_ties_are_stable() {
        let mut frontier = PriorityFrontier::new();
        for item in ["z", "y", "x", "w"] {
            frontier.push((1.0, item));
        }
        let order: Vec<&str> = std::iter::from_fn(|| frontier.pop().map(|(_, i)| i)).collect();
        assert_eq!(order, vec!["z", "y", "x", "w"]);
    }

    #[test]
    fn test_len_tracks_pushes_and_pops() {
        let mut frontier = PriorityFrontier::new();
        assert!(frontier.is_empty());
        frontier.push((0.5, 1));
        frontier.push((0.5, 2));
        assert_eq!(frontier.len(), 2);
        frontier.pop();
        assert_eq!(frontier.len(), 1);
    }
}
