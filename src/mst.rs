//! Prim's minimum spanning tree over a complete graph of bases
//!
//! Every pair of bases is joined by an edge whose cost is the smaller of the
//! two coordinate distances, `min(|ax - bx|, |ay - by|)`. Edge costs are never
//! tabulated: they are computed for every unvisited base each time a base
//! joins the tree.
//!
//! # Design
//!
//! The driver is generic over any [`Heap`] keyed by cost with base indices as
//! items, so the same loop runs unchanged on every backend in this crate.
//!
//! None of the backends support `decrease_key`. When a cheaper edge to a base
//! is found, a fresh entry is pushed and the older, more expensive entry stays
//! in the queue. Because the cheapest entry for a base always surfaces first,
//! every later entry for that base is stale and is skipped when popped without
//! contributing to the total.
//!
//! # Example
//!
//! ```rust
//! use base_mst::fibonacci::FibonacciHeap;
//! use base_mst::mst::{prim_mst_cost, Point};
//!
//! let bases = [Point::new(0, 0), Point::new(0, 3), Point::new(4, 0)];
//! let cost = prim_mst_cost::<FibonacciHeap<_, _>>(&bases).unwrap();
//! assert_eq!(cost, 0);
//! ```

use crate::traits::{Heap, HeapError};
use std::fmt;
use thiserror::Error;

/// A base on the integer plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Point {
    /// Creates a base at `(x, y)`
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cost of the edge between two bases: the smaller coordinate distance
///
/// Symmetric and never negative. Computed with `abs_diff`, so coordinates at
/// opposite ends of the `i32` range do not overflow.
#[inline]
pub fn edge_cost(a: Point, b: Point) -> u64 {
    u64::from(a.x.abs_diff(b.x).min(a.y.abs_diff(b.y)))
}

/// Upper bound on the entries a run over `count` bases ever holds at once
///
/// Every entry pushed is counted, so this is the seed plus one entry per
/// pair of bases, `count * (count - 1) / 2 + 1`. A bounded queue with at
/// least this capacity never refuses an insert. The Fibonacci heap's default
/// ceiling of [`DEFAULT_CAPACITY`](crate::fibonacci::DEFAULT_CAPACITY) covers
/// every input up to 1414 bases; larger inputs may exceed it.
pub fn queue_entries_needed(count: usize) -> usize {
    count.saturating_mul(count.saturating_sub(1)) / 2 + 1
}

/// Errors that abort a spanning-tree run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MstError {
    /// The input held no bases
    #[error("at least one base is required")]
    NoPoints,
    /// The priority queue refused an operation
    #[error("priority queue failed: {0}")]
    Queue(#[from] HeapError),
}

/// Outcome of one spanning-tree run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MstReport {
    /// Sum of the edge costs of the spanning tree
    pub total_cost: u64,
    /// Bases added to the tree; equals the input length on success
    pub visited: usize,
    /// Entries popped for bases already in the tree
    pub stale_pops: usize,
    /// Entries pushed, including the seed entry
    pub pushes: usize,
}

/// Runs Prim's algorithm with a freshly constructed queue of type `H`
///
/// # Errors
///
/// Returns [`MstError::NoPoints`] for an empty input, and
/// [`MstError::Queue`] if the queue rejects an insert. A default
/// [`FibonacciHeap`](crate::fibonacci::FibonacciHeap) holds one million nodes,
/// which runs out at roughly 1400 bases or more; size it with
/// [`queue_entries_needed`] and [`prim_mst_with`] for larger inputs.
pub fn prim_mst<H>(points: &[Point]) -> Result<MstReport, MstError>
where
    H: Heap<usize, u64>,
{
    prim_mst_with(points, H::new())
}

/// Runs Prim's algorithm and returns only the total cost
pub fn prim_mst_cost<H>(points: &[Point]) -> Result<u64, MstError>
where
    H: Heap<usize, u64>,
{
    prim_mst::<H>(points).map(|report| report.total_cost)
}

/// Runs Prim's algorithm on a caller-supplied queue
///
/// Use this to run with a configured queue, for example a
/// [`FibonacciHeap`](crate::fibonacci::FibonacciHeap) with a custom capacity
/// limit. The queue should be empty; any entries already in it are treated
/// like any other candidate edge.
pub fn prim_mst_with<H>(points: &[Point], mut queue: H) -> Result<MstReport, MstError>
where
    H: Heap<usize, u64>,
{
    if points.is_empty() {
        return Err(MstError::NoPoints);
    }

    log::debug!("prim: spanning {} bases", points.len());

    let mut visited = vec![false; points.len()];
    let mut report = MstReport::default();

    queue.push(0, 0)?;
    report.pushes += 1;

    while let Some((cost, current)) = queue.pop() {
        if visited[current] {
            report.stale_pops += 1;
            continue;
        }
        visited[current] = true;
        report.visited += 1;
        report.total_cost += cost;

        let base = points[current];
        for (other, seen) in visited.iter().enumerate() {
            if !seen {
                queue.push(edge_cost(base, points[other]), other)?;
                report.pushes += 1;
            }
        }
    }

    debug_assert_eq!(report.visited, points.len(), "complete graph left bases unvisited");
    log::trace!(
        "prim: cost {} after {} pushes, {} stale pops",
        report.total_cost,
        report.pushes,
        report.stale_pops
    );

    Ok(report)
}
