//! Unordered array priority queue
//!
//! The slowest backend and the correctness baseline: elements are appended
//! to a vector and `pop` scans the whole vector for the minimum.
//!
//! # Time Complexity
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | `push`    | O(1)       |
//! | `pop`     | O(n)       |
//! | `peek`    | O(n)       |
//!
//! When several elements share the minimum priority, the first one found by
//! the scan is returned. Because `pop` fills the hole with the last element,
//! that order is not insertion order and should not be relied upon.

use crate::traits::{Heap, HeapError};

/// A priority queue backed by an unsorted vector
#[derive(Debug, Clone)]
pub struct ArrayQueue<T, P: Ord> {
    data: Vec<(P, T)>,
}

impl<T, P: Ord> Heap<T, P> for ArrayQueue<T, P> {
    fn new() -> Self {
        Self { data: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn push(&mut self, priority: P, item: T) -> Result<(), HeapError> {
        self.data.push((priority, item));
        Ok(())
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.min_index().map(|i| {
            let (p, t) = &self.data[i];
            (p, t)
        })
    }

    fn pop(&mut self) -> Option<(P, T)> {
        let index = self.min_index()?;
        Some(self.data.swap_remove(index))
    }
}

impl<T, P: Ord> ArrayQueue<T, P> {
    /// Index of the first minimum-priority entry, scanning front to back
    fn min_index(&self) -> Option<usize> {
        let mut best: Option<(usize, &P)> = None;
        for (i, (priority, _)) in self.data.iter().enumerate() {
            match best {
                Some((_, best_priority)) if best_priority <= priority => {}
                _ => best = Some((i, priority)),
            }
        }
        best.map(|(i, _)| i)
    }
}

impl<T, P: Ord> Default for ArrayQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
