//! Frontier containers
//!
//! Ordering containers the strategies draw their next candidate from:
//! - `Stack`: LIFO, for the depth-first family
//! - `FifoQueue`: FIFO, for breadth-first
//! - `priority`: lowest-key-first with insertion-order tie-breaking
//! - `beam`: bounded set of best-ranked candidates, rebuilt each round

pub mod beam;
pub mod priority;

use std::collections::VecDeque;

pub use beam::Beam;
pub use priority::PriorityFrontier;

/// A container of not-yet-expanded items
pub trait Frontier<T> {
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in first-out frontier
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_item(item: T) -> Self {
        Self { items: vec![item] }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// First-in first-out frontier
#[derive(Debug, Clone)]
pub struct FifoQueue<T> {
    items: VecDeque<T>,
}

impl<T> FifoQueue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn with_item(item: T) -> Self {
        let mut queue = Self::new();
        queue.push(item);
        queue
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for FifoQueue<T> {
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<F: Frontier<u32>>(mut frontier: F) -> Vec<u32> {
        let mut out = Vec::new();
        while let Some(item) = frontier.pop() {
            out.push(item);
        }
        out
    }

    #[test]
    fn test_stack_is_lifo() {
        let mut stack = Stack::new();
        for i in 1..=3 {
            stack.push(i);
        }
        assert_eq!(stack.len(), 3);
        assert_eq!(drain(stack), vec![3, 2, 1]);
    }

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = FifoQueue::with_item(1);
        queue.push(2);
        queue.push(3);
        assert_eq!(drain(queue), vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_frontiers() {
        let mut stack: Stack<u32> = Stack::default();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);

        let mut queue: FifoQueue<u32> = FifoQueue::default();
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }
}
