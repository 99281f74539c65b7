//! Named queue backends for Prim's algorithm
//!
//! [`QueueKind`] lets callers pick a backend at runtime (for example from the
//! command line) while the driver itself stays generic. Each run builds a new
//! queue, so runs never share state.

use crate::array::ArrayQueue;
use crate::fibonacci::{FibonacciHeap, DEFAULT_CAPACITY};
use crate::mst::{prim_mst, prim_mst_with, queue_entries_needed, MstError, MstReport, Point};
use crate::simple_binary::SimpleBinaryHeap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three priority-queue backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueKind {
    /// [`ArrayQueue`]: linear scan on every pop
    Array,
    /// [`SimpleBinaryHeap`]
    BinaryHeap,
    /// [`FibonacciHeap`]
    Fibonacci,
}

impl QueueKind {
    /// Every backend, slowest first
    pub const ALL: [QueueKind; 3] = [
        QueueKind::Array,
        QueueKind::BinaryHeap,
        QueueKind::Fibonacci,
    ];

    /// Short lowercase name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            QueueKind::Array => "array",
            QueueKind::BinaryHeap => "binary",
            QueueKind::Fibonacci => "fibonacci",
        }
    }

    /// Runs Prim's algorithm on `points` with a fresh queue of this kind
    ///
    /// The Fibonacci heap gets its default ceiling of [`DEFAULT_CAPACITY`]
    /// nodes, which is enough for up to 1414 bases and may run out beyond
    /// that. Use [`run_sized`](QueueKind::run_sized) for larger inputs.
    pub fn run(self, points: &[Point]) -> Result<MstReport, MstError> {
        self.run_with_limit(points, DEFAULT_CAPACITY)
    }

    /// Like [`run`](QueueKind::run), raising the Fibonacci ceiling to
    /// [`queue_entries_needed`] when the default is too small
    pub fn run_sized(self, points: &[Point]) -> Result<MstReport, MstError> {
        self.run_with_limit(points, sized_limit(points.len()))
    }

    /// Like [`run`](QueueKind::run), with an explicit Fibonacci node ceiling
    ///
    /// The limit only applies to [`QueueKind::Fibonacci`]; the other backends
    /// are bounded by memory alone.
    pub fn run_with_limit(
        self,
        points: &[Point],
        fibonacci_limit: usize,
    ) -> Result<MstReport, MstError> {
        match self {
            QueueKind::Array => prim_mst::<ArrayQueue<_, _>>(points),
            QueueKind::BinaryHeap => prim_mst::<SimpleBinaryHeap<_, _>>(points),
            QueueKind::Fibonacci => {
                prim_mst_with(points, FibonacciHeap::with_capacity_limit(fibonacci_limit))
            }
        }
    }
}

/// Fibonacci ceiling that can never be exhausted by `count` bases
pub fn sized_limit(count: usize) -> usize {
    DEFAULT_CAPACITY.max(queue_entries_needed(count))
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error for an unrecognised backend name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown queue backend `{0}` (expected array, binary or fibonacci)")]
pub struct UnknownQueueKind(pub String);

impl FromStr for QueueKind {
    type Err = UnknownQueueKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "array" => Ok(QueueKind::Array),
            "binary" | "binary-heap" => Ok(QueueKind::BinaryHeap),
            "fibonacci" | "fib" => Ok(QueueKind::Fibonacci),
            _ => Err(UnknownQueueKind(s.to_string())),
        }
    }
}
