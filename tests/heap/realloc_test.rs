/*!
 * Reallocation Tests
 * In-place shrink/grow and relocation
 */

use heap_sim::{BlockInfo, HeapError, HeapManager};
use pretty_assertions::assert_eq;

#[test]
fn test_same_size_is_a_noop() {
    let mut heap = HeapManager::with_capacity(32).unwrap();
    let ptr = heap.allocate(4).unwrap();
    let before = heap.list_blocks();

    assert_eq!(heap.reallocate(ptr, 4).unwrap(), ptr);
    assert_eq!(heap.list_blocks(), before);
}

#[test]
fn test_shrink_preserves_pointer() {
    let mut heap = HeapManager::with_capacity(32).unwrap();
    let ptr = heap.allocate(10).unwrap();
    let guard = heap.allocate(1).unwrap();

    assert_eq!(heap.reallocate(ptr, 4).unwrap(), ptr);
    assert_eq!(heap.block_size(ptr), Some(4));
    assert_eq!(
        heap.list_blocks(),
        vec![
            BlockInfo {
                pointer: 1,
                payload_size: 4,
                allocated: true,
            },
            BlockInfo {
                pointer: 6,
                payload_size: 5,
                allocated: false,
            },
            BlockInfo {
                pointer: guard,
                payload_size: 1,
                allocated: true,
            },
            BlockInfo {
                pointer: 14,
                payload_size: 18,
                allocated: false,
            },
        ]
    );
}

#[test]
fn test_shrink_remainder_absorbs_free_neighbor() {
    let mut heap = HeapManager::with_capacity(32).unwrap();
    let ptr = heap.allocate(10).unwrap();

    assert_eq!(heap.reallocate(ptr, 4).unwrap(), ptr);
    // the cut-off tail and the free rest of the heap merge into one block
    assert_eq!(
        heap.list_blocks(),
        vec![
            BlockInfo {
                pointer: 1,
                payload_size: 4,
                allocated: true,
            },
            BlockInfo {
                pointer: 6,
                payload_size: 26,
                allocated: false,
            },
        ]
    );
}

#[test]
fn test_shrink_to_zero_payload() {
    let mut heap = HeapManager::with_capacity(16).unwrap();
    let ptr = heap.allocate(4).unwrap();

    assert_eq!(heap.reallocate(ptr, 0).unwrap(), ptr);
    assert_eq!(
        heap.list_blocks(),
        vec![
            BlockInfo {
                pointer: 1,
                payload_size: 0,
                allocated: true,
            },
            BlockInfo {
                pointer: 2,
                payload_size: 14,
                allocated: false,
            },
        ]
    );
}

/// Layout helper: [A: 4][B: 3, freed][guard: 1][free tail]
fn grow_fixture(heap: &mut HeapManager) -> usize {
    let a = heap.allocate(4).unwrap();
    let b = heap.allocate(3).unwrap();
    heap.allocate(1).unwrap();
    heap.free(b);
    a
}

#[test]
fn test_grow_in_place_absorbs_free_neighbor() {
    let mut heap = HeapManager::with_capacity(32).unwrap();
    let a = grow_fixture(&mut heap);
    heap.write_bytes(a, b"abcd").unwrap();

    // merged block is total 9; a request for total 9 is an exact fit
    assert_eq!(heap.reallocate(a, 8).unwrap(), a);
    assert_eq!(heap.block_size(a), Some(8));
    assert_eq!(heap.read_bytes(a, 4).unwrap(), b"abcd");
    assert_eq!(
        heap.list_blocks(),
        vec![
            BlockInfo {
                pointer: 1,
                payload_size: 8,
                allocated: true,
            },
            BlockInfo {
                pointer: 10,
                payload_size: 1,
                allocated: true,
            },
            BlockInfo {
                pointer: 12,
                payload_size: 20,
                allocated: false,
            },
        ]
    );
}

#[test]
fn test_grow_in_place_splits_oversized_merge() {
    let mut heap = HeapManager::with_capacity(32).unwrap();
    let a = grow_fixture(&mut heap);

    // merged block is total 9; a request for total 7 leaves a free remainder
    assert_eq!(heap.reallocate(a, 6).unwrap(), a);
    assert_eq!(
        heap.list_blocks(),
        vec![
            BlockInfo {
                pointer: 1,
                payload_size: 6,
                allocated: true,
            },
            BlockInfo {
                pointer: 8,
                payload_size: 1,
                allocated: false,
            },
            BlockInfo {
                pointer: 10,
                payload_size: 1,
                allocated: true,
            },
            BlockInfo {
                pointer: 12,
                payload_size: 20,
                allocated: false,
            },
        ]
    );
}

#[test]
fn test_grow_relocates_when_neighbor_is_allocated() {
    let mut heap = HeapManager::with_capacity(32).unwrap();
    let a = heap.allocate(4).unwrap();
    heap.allocate(1).unwrap(); // pins a in place
    heap.write_bytes(a, b"wxyz").unwrap();

    let moved = heap.reallocate(a, 10).unwrap();
    assert_ne!(moved, a);
    assert_eq!(heap.block_size(moved), Some(10));
    // surviving payload bytes travel with the block
    assert_eq!(heap.read_bytes(moved, 4).unwrap(), b"wxyz");
    // the old block is freed
    assert!(!heap.is_valid(a));
    assert!(heap.is_valid(moved));
}

#[test]
fn test_failed_grow_leaves_heap_unchanged() {
    let mut heap = HeapManager::with_capacity(16).unwrap();
    let a = heap.allocate(4).unwrap();
    heap.allocate(9).unwrap(); // exhausts the heap, pins a in place
    let before = heap.list_blocks();

    match heap.reallocate(a, 6) {
        Err(HeapError::OutOfMemory { .. }) => {}
        other => panic!("expected OutOfMemory, got {:?}", other),
    }
    assert_eq!(heap.list_blocks(), before);
    assert!(heap.is_valid(a));
}

#[test]
fn test_reallocate_invalid_pointer() {
    let mut heap = HeapManager::with_capacity(32).unwrap();

    assert_eq!(
        heap.reallocate(0, 4).unwrap_err(),
        HeapError::InvalidPointer(0)
    );
    assert_eq!(
        heap.reallocate(1, 4).unwrap_err(),
        HeapError::InvalidPointer(1)
    );
    assert_eq!(
        heap.reallocate(99, 4).unwrap_err(),
        HeapError::InvalidPointer(99)
    );

    let ptr = heap.allocate(4).unwrap();
    heap.free(ptr);
    assert_eq!(
        heap.reallocate(ptr, 4).unwrap_err(),
        HeapError::InvalidPointer(ptr)
    );
}
