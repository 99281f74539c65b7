//! Generic comprehensive tests for all Heap implementations
//!
//! These tests work with any Heap implementation and stress the trait interface
//! with various edge cases and complex scenarios.

use base_mst::array::ArrayQueue;
use base_mst::fibonacci::FibonacciHeap;
use base_mst::simple_binary::SimpleBinaryHeap;
use base_mst::{Heap, HeapError};

/// Test that empty heap behaves correctly
fn test_empty_heap<H: Heap<String, i32>>() {
    let mut heap = H::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.extract_min(), Err(HeapError::Empty));
}

/// Test basic insert and pop operations
fn test_basic_operations<H: Heap<&'static str, i32>>() {
    let mut heap = H::new();

    heap.push(5, "five").unwrap();
    heap.push(1, "one").unwrap();
    heap.push(10, "ten").unwrap();
    heap.push(3, "three").unwrap();

    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek(), Some((&1, &"one")));

    assert_eq!(heap.pop(), Some((1, "one")));
    assert_eq!(heap.pop(), Some((3, "three")));
    assert_eq!(heap.pop(), Some((5, "five")));
    assert_eq!(heap.pop(), Some((10, "ten")));
    assert_eq!(heap.pop(), None);
    assert!(heap.is_empty());
}

/// Equal priorities all come out, in some order
fn test_duplicate_priorities<H: Heap<&'static str, i32>>() {
    let mut heap = H::new();
    heap.push(2, "x").unwrap();
    heap.push(1, "a").unwrap();
    heap.push(1, "b").unwrap();
    heap.push(1, "c").unwrap();

    let mut ones = Vec::new();
    for _ in 0..3 {
        let (priority, item) = heap.pop().unwrap();
        assert_eq!(priority, 1);
        ones.push(item);
    }
    ones.sort_unstable();
    assert_eq!(ones, ["a", "b", "c"]);
    assert_eq!(heap.pop(), Some((2, "x")));
}

/// Peek must not change the heap
fn test_peek_idempotent<H: Heap<&'static str, i32>>() {
    let mut heap = H::new();
    heap.push(4, "four").unwrap();
    heap.push(2, "two").unwrap();

    for _ in 0..5 {
        assert_eq!(heap.peek(), Some((&2, &"two")));
    }
    assert_eq!(heap.len(), 2);
}

fn test_single_element<H: Heap<&'static str, i32>>() {
    let mut heap = H::new();
    heap.push(42, "answer").unwrap();
    assert_eq!(heap.len(), 1);
    assert_eq!(heap.peek(), Some((&42, &"answer")));
    assert_eq!(heap.extract_min(), Ok((42, "answer")));
    assert!(heap.is_empty());
}

/// Same item pushed with several priorities, the way Prim's driver re-inserts
fn test_stale_duplicates<H: Heap<usize, u64>>() {
    let mut heap = H::new();
    heap.push(9, 1).unwrap();
    heap.push(4, 2).unwrap();
    heap.push(3, 1).unwrap();
    heap.push(7, 1).unwrap();

    assert_eq!(heap.pop(), Some((3, 1)));
    assert_eq!(heap.pop(), Some((4, 2)));
    assert_eq!(heap.pop(), Some((7, 1)));
    assert_eq!(heap.pop(), Some((9, 1)));
}

fn test_ascending_insertion<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    for i in 0..200 {
        heap.push(i, i).unwrap();
    }
    for i in 0..200 {
        assert_eq!(heap.pop(), Some((i, i)));
    }
}

fn test_descending_insertion<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    for i in (0..200).rev() {
        heap.push(i, i).unwrap();
    }
    for i in 0..200 {
        assert_eq!(heap.pop(), Some((i, i)));
    }
}

fn test_negative_priorities<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    for p in [0, -5, 12, -100, 7, -1] {
        heap.push(p, p).unwrap();
    }
    let popped: Vec<i32> = std::iter::from_fn(|| heap.pop().map(|(p, _)| p)).collect();
    assert_eq!(popped, vec![-100, -5, -1, 0, 7, 12]);
}

fn test_large_priorities<H: Heap<i32, i64>>() {
    let mut heap = H::new();
    heap.push(i64::MAX, 1).unwrap();
    heap.push(i64::MIN, 2).unwrap();
    heap.push(0, 3).unwrap();
    assert_eq!(heap.pop(), Some((i64::MIN, 2)));
    assert_eq!(heap.pop(), Some((0, 3)));
    assert_eq!(heap.pop(), Some((i64::MAX, 1)));
}

/// Interleaved pushes and pops, checked against a sorted model
fn test_alternating_operations<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    let mut model: Vec<i32> = Vec::new();

    for i in 0..300 {
        let p = (i * 7919) % 211;
        heap.push(p, i).unwrap();
        model.push(p);
        if i % 3 == 2 {
            model.sort_unstable();
            let expected = model.remove(0);
            assert_eq!(heap.pop().map(|(p, _)| p), Some(expected));
        }
        assert_eq!(heap.len(), model.len());
    }

    model.sort_unstable();
    for expected in model {
        assert_eq!(heap.pop().map(|(p, _)| p), Some(expected));
    }
    assert!(heap.is_empty());
}

fn test_string_items<H: Heap<String, i32>>() {
    let mut heap = H::new();
    heap.push(2, "bravo".to_string()).unwrap();
    heap.push(1, "alpha".to_string()).unwrap();
    heap.push(3, "charlie".to_string()).unwrap();

    assert_eq!(heap.pop(), Some((1, "alpha".to_string())));
    assert_eq!(heap.pop(), Some((2, "bravo".to_string())));
    assert_eq!(heap.pop(), Some((3, "charlie".to_string())));
}

fn test_tuple_items<H: Heap<(i32, i32), i32>>() {
    let mut heap = H::new();
    heap.push(3, (3, 3)).unwrap();
    heap.push(1, (1, 1)).unwrap();
    heap.push(2, (2, 2)).unwrap();

    assert_eq!(heap.pop(), Some((1, (1, 1))));
    assert_eq!(heap.pop(), Some((2, (2, 2))));
    assert_eq!(heap.pop(), Some((3, (3, 3))));
}

// Macro to generate a single test function
macro_rules! heap_test {
    ($name:ident, $heap:ty, $func:ident) => {
        #[test]
        fn $name() {
            $func::<$heap>();
        }
    };
}

// Macro to generate the full suite for a heap type, one module per heap
macro_rules! define_heap_tests {
    ($heap_name:ident, $heap_type:ident) => {
        mod $heap_name {
            use super::*;

            heap_test!(empty, $heap_type<String, i32>, test_empty_heap);
            heap_test!(basic, $heap_type<&'static str, i32>, test_basic_operations);
            heap_test!(
                duplicate_priorities,
                $heap_type<&'static str, i32>,
                test_duplicate_priorities
            );
            heap_test!(peek_idempotent, $heap_type<&'static str, i32>, test_peek_idempotent);
            heap_test!(single_element, $heap_type<&'static str, i32>, test_single_element);
            heap_test!(stale_duplicates, $heap_type<usize, u64>, test_stale_duplicates);
            heap_test!(ascending_insertion, $heap_type<i32, i32>, test_ascending_insertion);
            heap_test!(descending_insertion, $heap_type<i32, i32>, test_descending_insertion);
            heap_test!(negative_priorities, $heap_type<i32, i32>, test_negative_priorities);
            heap_test!(large_priorities, $heap_type<i32, i64>, test_large_priorities);
            heap_test!(alternating_operations, $heap_type<i32, i32>, test_alternating_operations);
            heap_test!(string_items, $heap_type<String, i32>, test_string_items);
            heap_test!(tuple_items, $heap_type<(i32, i32), i32>, test_tuple_items);
        }
    };
}

define_heap_tests!(array, ArrayQueue);
define_heap_tests!(binary, SimpleBinaryHeap);
define_heap_tests!(fibonacci, FibonacciHeap);
