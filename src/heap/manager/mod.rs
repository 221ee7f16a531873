/*!
 * Heap Manager
 *
 * Best-fit allocator simulation over a single fixed-size buffer.
 *
 * All block metadata is stored in-band: each block begins with a one-byte
 * header whose upper 7 bits hold the block's total size (header included)
 * and whose low bit holds the allocation flag. Blocks tile the buffer
 * exactly, so the whole layout is recovered by walking headers from
 * offset 0.
 *
 * ## Features
 *
 * - **Best-fit placement**: smallest free block that satisfies the request,
 *   lowest offset on ties
 * - **Block splitting**: oversized free blocks are carved into an allocated
 *   prefix and a free remainder
 * - **Coalescing**: a freed block absorbs its right neighbor when that
 *   neighbor is free (rightward only, one step)
 * - **Raw access**: unchecked read/write primitives that bypass block
 *   metadata, for callers that take bounds into their own hands
 */

mod allocator;
mod best_fit;
mod header;
mod layout;
mod storage;
mod walk;

use super::traits::{Allocator, HeapInfo, RawMemory};
use super::types::{BlockInfo, HeapError, HeapResult, HeapStats};
use crate::core::limits::{DEFAULT_HEAP_SIZE, HEADER_SIZE, MAX_BLOCK_SIZE};
use crate::core::types::{Address, Size};
use log::info;

/// Heap manager
///
/// Owns the backing buffer; no other code holds a reference into it, so
/// every header read or write goes through the accessors here.
#[derive(Debug, Clone)]
pub struct HeapManager {
    pub(super) buf: Vec<u8>,
}

impl HeapManager {
    /// Create a heap with the default capacity
    pub fn new() -> Self {
        let mut heap = Self {
            buf: vec![0; DEFAULT_HEAP_SIZE],
        };
        heap.initialize();
        info!("heap initialized with {} bytes", DEFAULT_HEAP_SIZE);
        heap
    }

    /// Create a heap with a custom capacity (useful for testing)
    ///
    /// Capacity is bounded by what a single header can describe: the
    /// initial layout is one free block spanning the whole buffer.
    pub fn with_capacity(capacity: Size) -> HeapResult<Self> {
        if capacity < HEADER_SIZE || capacity > MAX_BLOCK_SIZE {
            return Err(HeapError::InvalidCapacity {
                requested: capacity,
                min: HEADER_SIZE,
                max: MAX_BLOCK_SIZE,
            });
        }
        let mut heap = Self {
            buf: vec![0; capacity],
        };
        heap.initialize();
        info!("heap initialized with {} bytes", capacity);
        Ok(heap)
    }

    /// Total capacity of the backing buffer in bytes
    pub fn capacity(&self) -> Size {
        self.buf.len()
    }
}

// Implement trait interfaces
impl Allocator for HeapManager {
    fn allocate(&mut self, size: Size) -> HeapResult<Address> {
        HeapManager::allocate(self, size)
    }

    fn reallocate(&mut self, ptr: Address, new_size: Size) -> HeapResult<Address> {
        HeapManager::reallocate(self, ptr, new_size)
    }

    fn free(&mut self, ptr: Address) {
        HeapManager::free(self, ptr)
    }

    fn is_valid(&self, ptr: Address) -> bool {
        HeapManager::is_valid(self, ptr)
    }

    fn block_size(&self, ptr: Address) -> Option<Size> {
        HeapManager::block_size(self, ptr)
    }
}

impl HeapInfo for HeapManager {
    fn stats(&self) -> HeapStats {
        HeapManager::stats(self)
    }

    fn info(&self) -> (Size, Size, Size) {
        HeapManager::info(self)
    }

    fn list_blocks(&self) -> Vec<BlockInfo> {
        HeapManager::list_blocks(self)
    }
}

impl RawMemory for HeapManager {
    fn write_bytes(&mut self, ptr: Address, data: &[u8]) -> HeapResult<()> {
        HeapManager::write_bytes(self, ptr, data)
    }

    fn read_bytes(&self, ptr: Address, count: Size) -> HeapResult<Vec<u8>> {
        HeapManager::read_bytes(self, ptr, count)
    }
}

impl Default for HeapManager {
    fn default() -> Self {
        Self::new()
    }
}
