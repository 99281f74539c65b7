//! Common traits for the priority queues used by Prim's algorithm
//!
//! Every backend in this crate implements [`Heap`], a min-priority queue over
//! `(priority, item)` pairs. There is no `decrease_key`: callers
//! that need to lower an item's priority push a fresh entry and discard the
//! stale one when it surfaces (see [`crate::mst`]).
//!
//! # Empty queues
//!
//! All backends share one policy: [`Heap::pop`] returns `None` when the queue
//! is empty. Code that treats extraction from an empty queue as a usage error
//! can call [`Heap::extract_min`] instead, which reports [`HeapError::Empty`].

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// An element was requested from an empty queue
    #[error("cannot extract from an empty queue")]
    Empty,
    /// The queue refused an insert because it is already at its node ceiling
    #[error("heap size limit of {capacity} nodes exceeded")]
    CapacityExceeded {
        /// The configured ceiling
        capacity: usize,
    },
}

/// Base trait for heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element
/// - `pop` removes and returns the minimum
/// - `peek` returns the minimum without removing it
///
/// Unlike `BinaryHeap` which stores values directly (using `Ord`), these heaps
/// store (priority, item) pairs to separate the ordering key from the data.
///
/// # Example
///
/// ```rust
/// use base_mst::Heap;
/// use base_mst::simple_binary::SimpleBinaryHeap;
///
/// let mut heap = SimpleBinaryHeap::new();
/// heap.push(3, "three").unwrap();
/// heap.push(1, "one").unwrap();
/// heap.push(2, "two").unwrap();
///
/// assert_eq!(heap.peek(), Some((&1, &"one")));
/// assert_eq!(heap.pop(), Some((1, "one")));
/// ```
pub trait Heap<T, P: Ord> {
    /// Creates a new empty heap
    fn new() -> Self;

    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element with the given priority
    ///
    /// Only bounded heaps fail; see [`HeapError::CapacityExceeded`].
    ///
    /// # Time Complexity
    /// O(1) for the array queue, O(log n) for the binary heap,
    /// O(1) amortized for the Fibonacci heap.
    fn push(&mut self, priority: P, item: T) -> Result<(), HeapError>;

    /// Returns the minimum priority and associated item without removing it
    fn peek(&self) -> Option<(&P, &T)>;

    /// Removes and returns the minimum priority and associated item
    ///
    /// Returns `None` if the heap is empty.
    ///
    /// # Time Complexity
    /// O(n) for the array queue, O(log n) (amortized for the Fibonacci heap)
    /// otherwise.
    fn pop(&mut self) -> Option<(P, T)>;

    /// Like [`pop`](Heap::pop), but treats an empty heap as a usage error
    fn extract_min(&mut self) -> Result<(P, T), HeapError> {
        self.pop().ok_or(HeapError::Empty)
    }
}
