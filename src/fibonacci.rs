//! Fibonacci Heap implementation
//!
//! A Fibonacci heap is a data structure for priority queue operations with:
//! - O(1) amortized insert
//! - O(log n) amortized delete_min
//!
//! The structure consists of a collection of heap-ordered trees. Roots are linked
//! in a circular doubly linked list, and so are the children of every node. The
//! heap maintains the minimum node pointer.
//!
//! # Storage
//!
//! Nodes live in a [`SlotMap`] arena owned by the heap. Sibling, parent and child
//! links are arena keys rather than pointers, so the cyclic link structure never
//! needs shared ownership, and dropping the heap drops every node with it.
//!
//! # Capacity
//!
//! Each heap has a node ceiling ([`DEFAULT_CAPACITY`] unless configured with
//! [`FibonacciHeap::with_capacity_limit`]). An insert that would exceed it fails
//! with [`HeapError::CapacityExceeded`] and leaves the heap untouched.
//!
//! # Example
//!
//! ```rust
//! use base_mst::fibonacci::FibonacciHeap;
//! use base_mst::Heap;
//!
//! let mut heap = FibonacciHeap::new();
//! heap.push(5, "item1").unwrap();
//! heap.push(3, "item2").unwrap();
//! assert_eq!(heap.peek(), Some((&3, &"item2")));
//! assert_eq!(heap.pop(), Some((3, "item2")));
//! ```

use crate::traits::{Heap, HeapError};
use slotmap::{new_key_type, SlotMap};
use smallvec::{smallvec, SmallVec};
use std::mem;

/// Default node ceiling for a [`FibonacciHeap`]
pub const DEFAULT_CAPACITY: usize = 1_000_000;

new_key_type! {
    /// Arena key of a Fibonacci heap node
    struct NodeKey;
}

#[derive(Debug)]
struct Node<T, P> {
    item: T,
    priority: P,
    parent: Option<NodeKey>,
    child: Option<NodeKey>,
    left: NodeKey,
    right: NodeKey,
    degree: usize,
    marked: bool,
}

/// Fibonacci Heap
///
/// # Example
///
/// ```rust
/// use base_mst::fibonacci::FibonacciHeap;
/// use base_mst::{Heap, HeapError};
///
/// let mut heap = FibonacciHeap::with_capacity_limit(1);
/// heap.push(5, "item").unwrap();
/// assert_eq!(heap.push(1, "other"), Err(HeapError::CapacityExceeded { capacity: 1 }));
/// assert_eq!(heap.peek(), Some((&5, &"item")));
/// ```
#[derive(Debug)]
pub struct FibonacciHeap<T, P: Ord> {
    nodes: SlotMap<NodeKey, Node<T, P>>,
    min: Option<NodeKey>,
    capacity: usize,
}

impl<T, P: Ord> Heap<T, P> for FibonacciHeap<T, P> {
    fn new() -> Self {
        Self::with_capacity_limit(DEFAULT_CAPACITY)
    }

    fn is_empty(&self) -> bool {
        self.min.is_none()
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn push(&mut self, priority: P, item: T) -> Result<(), HeapError> {
        if self.nodes.len() >= self.capacity {
            log::warn!(
                "fibonacci heap refused insert: {} nodes already present",
                self.capacity
            );
            return Err(HeapError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        // A fresh node is a ring of one
        let node = self.nodes.insert_with_key(|key| Node {
            item,
            priority,
            parent: None,
            child: None,
            left: key,
            right: key,
            degree: 0,
            marked: false,
        });

        match self.min {
            Some(min) => {
                self.insert_before(min, node);
                if self.nodes[node].priority < self.nodes[min].priority {
                    self.min = Some(node);
                }
            }
            None => self.min = Some(node),
        }

        Ok(())
    }

    fn peek(&self) -> Option<(&P, &T)> {
        self.min.map(|min| {
            let node = &self.nodes[min];
            (&node.priority, &node.item)
        })
    }

    fn pop(&mut self) -> Option<(P, T)> {
        let min = self.min?;
        let count = self.nodes.len();

        // Promote children to the root list
        if let Some(child) = self.nodes[min].child.take() {
            for key in self.ring(child) {
                let node = &mut self.nodes[key];
                node.parent = None;
                node.marked = false;
            }
            self.splice(min, child);
            self.nodes[min].degree = 0;
        }

        // Remove min from root list
        let right = self.nodes[min].right;
        if right == min {
            self.min = None;
        } else {
            self.unlink(min);
            self.consolidate(right, count);
        }

        let node = self
            .nodes
            .remove(min)
            .expect("minimum node must be live in the arena");
        Some((node.priority, node.item))
    }
}

impl<T, P: Ord> FibonacciHeap<T, P> {
    /// Creates an empty heap that holds at most `capacity` nodes
    pub fn with_capacity_limit(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            min: None,
            capacity,
        }
    }

    /// The node ceiling this heap was created with
    pub fn capacity_limit(&self) -> usize {
        self.capacity
    }

    /// Removes every node
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.min = None;
    }

    /// Consolidates the heap by linking trees of the same degree
    ///
    /// `start` is any node of the root list; `count` is the node count before
    /// the current extraction and only sizes the initial degree table.
    fn consolidate(&mut self, start: NodeKey, count: usize) {
        // The real bound is log_phi(n) + 1; sqrt(n) + 2 covers it for every n,
        // and the table still grows if a degree ever lands past the end.
        let table_len = (count as f64).sqrt() as usize + 2;
        let mut degree_table: SmallVec<[Option<NodeKey>; 32]> = smallvec![None; table_len];

        for root in self.ring(start) {
            let mut x = root;
            let mut d = self.nodes[x].degree;

            loop {
                if d >= degree_table.len() {
                    degree_table.resize(d + 1, None);
                }
                let Some(mut y) = degree_table[d].take() else {
                    break;
                };

                // Ensure x has the smaller priority
                if self.nodes[y].priority < self.nodes[x].priority {
                    mem::swap(&mut x, &mut y);
                }
                self.link(y, x);
                d += 1;
            }

            degree_table[d] = Some(x);
        }

        // Rebuild root list and find new min
        self.min = None;
        for root in degree_table.into_iter().flatten() {
            let node = &mut self.nodes[root];
            node.left = root;
            node.right = root;

            match self.min {
                Some(min) => {
                    self.insert_before(min, root);
                    if self.nodes[root].priority < self.nodes[min].priority {
                        self.min = Some(root);
                    }
                }
                None => self.min = Some(root),
            }
        }
    }

    /// Links root `child` under root `parent`
    fn link(&mut self, child: NodeKey, parent: NodeKey) {
        self.unlink(child);

        let node = &mut self.nodes[child];
        node.parent = Some(parent);
        node.marked = false;

        match self.nodes[parent].child {
            Some(first) => self.insert_before(first, child),
            None => self.nodes[parent].child = Some(child),
        }
        self.nodes[parent].degree += 1;
    }

    /// Inserts the lone node `key` into the ring containing `anchor`, just left of it
    fn insert_before(&mut self, anchor: NodeKey, key: NodeKey) {
        let anchor_left = self.nodes[anchor].left;
        let node = &mut self.nodes[key];
        node.right = anchor;
        node.left = anchor_left;
        self.nodes[anchor_left].right = key;
        self.nodes[anchor].left = key;
    }

    /// Removes `key` from its ring, leaving it as a ring of one
    fn unlink(&mut self, key: NodeKey) {
        let Node { left, right, .. } = self.nodes[key];
        self.nodes[left].right = right;
        self.nodes[right].left = left;
        let node = &mut self.nodes[key];
        node.left = key;
        node.right = key;
    }

    /// Joins the ring containing `b` into the ring containing `a`
    fn splice(&mut self, a: NodeKey, b: NodeKey) {
        let a_left = self.nodes[a].left;
        let b_left = self.nodes[b].left;
        self.nodes[a_left].right = b;
        self.nodes[b].left = a_left;
        self.nodes[b_left].right = a;
        self.nodes[a].left = b_left;
    }

    /// Collects the ring containing `start`, walking right
    fn ring(&self, start: NodeKey) -> Vec<NodeKey> {
        let mut members = vec![start];
        let mut current = self.nodes[start].right;
        while current != start {
            members.push(current);
            current = self.nodes[current].right;
        }
        members
    }

    /// Checks every structural invariant of the heap
    ///
    /// - the min pointer is set exactly when the heap is non-empty and names a
    ///   root whose priority is no greater than any other node's
    /// - every sibling ring is circular with `left`/`right` mutual inverses
    /// - every child points back at its parent and has a priority no smaller
    ///   than the parent's
    /// - every `degree` equals the length of the node's child ring
    /// - every arena node is reachable from the root list exactly once
    pub fn verify_structure(&self) -> bool {
        let Some(min) = self.min else {
            return self.nodes.is_empty();
        };
        if !self.nodes.contains_key(min) {
            return false;
        }

        let mut seen = 0usize;
        let mut pending = match self.checked_ring(min, None) {
            Some(roots) => roots,
            None => return false,
        };

        while let Some(key) = pending.pop() {
            seen += 1;
            if seen > self.nodes.len() {
                return false;
            }

            let node = &self.nodes[key];
            if node.priority < self.nodes[min].priority {
                return false;
            }

            let children = match node.child {
                Some(child) => match self.checked_ring(child, Some(key)) {
                    Some(children) => children,
                    None => return false,
                },
                None => Vec::new(),
            };
            if children.len() != node.degree {
                return false;
            }
            if children
                .iter()
                .any(|&c| self.nodes[c].priority < node.priority)
            {
                return false;
            }
            pending.extend(children);
        }

        seen == self.nodes.len()
    }

    /// Walks a ring, checking link symmetry and parent pointers
    fn checked_ring(&self, start: NodeKey, parent: Option<NodeKey>) -> Option<Vec<NodeKey>> {
        let mut members = Vec::new();
        let mut current = start;
        loop {
            let node = self.nodes.get(current)?;
            if node.parent != parent || self.nodes.get(node.right)?.left != current {
                return None;
            }
            members.push(current);
            if members.len() > self.nodes.len() {
                return None;
            }
            current = node.right;
            if current == start {
                return Some(members);
            }
        }
    }

    /// Number of trees in the root list
    pub fn root_count(&self) -> usize {
        self.min.map_or(0, |min| self.ring(min).len())
    }
}

impl<T, P: Ord> Default for FibonacciHeap<T, P> {
    fn default() -> Self {
        Self::new()
    }
}
