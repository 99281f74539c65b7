//! Minimum spanning trees over 2-D bases, three ways
//!
//! This crate computes the cost of a minimum spanning tree over a complete
//! graph of integer points ("bases") with Prim's algorithm, and lets the
//! priority queue underneath be swapped out to compare how each performs.
//!
//! # Queues
//!
//! - **Array queue**: O(1) insert, O(n) delete-min by linear scan
//! - **Binary Heap**: O(log n) insert and delete-min
//! - **Fibonacci Heap**: O(1) amortized insert; O(log n) amortized delete-min
//!
//! All three implement [`Heap`], and the spanning-tree driver in [`mst`] is
//! written against that trait alone.
//!
//! # Example
//!
//! ```rust
//! use base_mst::mst::Point;
//! use base_mst::strategy::QueueKind;
//!
//! let bases = [Point::new(0, 0), Point::new(5, 5)];
//! for kind in QueueKind::ALL {
//!     assert_eq!(kind.run(&bases).unwrap().total_cost, 5);
//! }
//! ```

pub mod array;
pub mod fibonacci;
pub mod input;
pub mod mst;
pub mod simple_binary;
pub mod strategy;
pub mod traits;

// Re-export the main trait for convenience
pub use traits::{Heap, HeapError};
