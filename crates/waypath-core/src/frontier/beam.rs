use std::collections::VecDeque;
use std::num::NonZeroUsize;

use super::Frontier;
use crate::error::{Result, SearchError};

/// Bounded beam
///
/// Items are popped from the current round in rank order; pushed items
/// collect as candidates for the next round. [`Beam::advance`] ranks the
/// candidates (stable sort) and keeps the best `width` of them. Everything
/// else is discarded, so the beam never backtracks.
#[derive(Debug, Clone)]
pub struct Beam<T> {
    width: usize,
    current: VecDeque<T>,
    candidates: Vec<T>,
}

impl<T> Beam<T> {
    pub fn new(width: usize) -> Result<Self> {
        if width == 0 {
            return Err(SearchError::invalid_value(
                "beam width",
                "0 (must be at least 1)",
            ));
        }
        Ok(Self {
            width,
            current: VecDeque::new(),
            candidates: Vec::new(),
        })
    }

    pub fn with_width(width: NonZeroUsize) -> Self {
        Self {
            width: width.get(),
            current: VecDeque::new(),
            candidates: Vec::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Place an item directly in the current round
    pub fn seed(&mut self, item: T) {
        self.current.push_back(item);
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Close the round: rank the candidates, keep the best `width`, drop the
    /// rest along with anything left unpopped from the finished round.
    /// Returns the number of candidates discarded.
    pub fn advance<K, F>(&mut self, rank: F) -> usize
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        let mut next = std::mem::take(&mut self.candidates);
        next.sort_by(|a, b| rank(a).cmp(&rank(b)));

        let discarded = next.len().saturating_sub(self.width);
        next.truncate(self.width);

        self.current = next.into();
        discarded
    }
}

impl<T> Frontier<T> for Beam<T> {
    fn push(&mut self, item: T) {
        self.candidates.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.current.pop_front()
    }

    /// Items remaining in the current round
    fn len(&self) -> usize {
        self.current.len()
    }
}
