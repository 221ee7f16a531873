/*!
 * Block Walk and Introspection
 * Offset-order iteration over the in-band block chain
 */

use super::HeapManager;
use crate::core::limits::HEADER_SIZE;
use crate::core::types::{Address, Size};
use crate::heap::types::{BlockInfo, HeapStats};

/// A block as seen by the walk, header offset included
#[derive(Debug, Clone, Copy)]
pub(super) struct RawBlock {
    pub offset: Address,
    pub total_size: Size,
    pub allocated: bool,
}

/// Iterator over the block chain, advancing by each block's total size
///
/// Relies on the tiling invariant to land exactly on the capacity; a
/// corrupted zero-size header would stall the walk, which is a caller
/// contract breach, not a recoverable state.
pub(super) struct BlockWalk<'a> {
    heap: &'a HeapManager,
    current: Address,
}

impl Iterator for BlockWalk<'_> {
    type Item = RawBlock;

    fn next(&mut self) -> Option<RawBlock> {
        if self.current >= self.heap.capacity() {
            return None;
        }
        let offset = self.current;
        let total_size = self.heap.block_size_at(offset);
        debug_assert!(total_size >= HEADER_SIZE, "zero-size header at offset {}", offset);
        self.current += total_size;
        Some(RawBlock {
            offset,
            total_size,
            allocated: self.heap.allocated_at(offset),
        })
    }
}

impl HeapManager {
    pub(super) fn walk(&self) -> BlockWalk<'_> {
        BlockWalk {
            heap: self,
            current: 0,
        }
    }

    /// Payload size of the largest free block, 0 if none
    pub(super) fn largest_free_payload(&self) -> Size {
        self.walk()
            .filter(|b| !b.allocated)
            .map(|b| b.total_size - HEADER_SIZE)
            .max()
            .unwrap_or(0)
    }

    /// List all blocks in offset order
    pub fn list_blocks(&self) -> Vec<BlockInfo> {
        self.walk()
            .map(|b| BlockInfo {
                pointer: b.offset + HEADER_SIZE,
                payload_size: b.total_size - HEADER_SIZE,
                allocated: b.allocated,
            })
            .collect()
    }

    /// Get overall heap statistics
    pub fn stats(&self) -> HeapStats {
        let capacity = self.capacity();
        let mut used_bytes = 0;
        let mut allocated_blocks = 0;
        let mut free_blocks = 0;
        let mut largest_free_payload = 0;

        for block in self.walk() {
            if block.allocated {
                used_bytes += block.total_size;
                allocated_blocks += 1;
            } else {
                free_blocks += 1;
                largest_free_payload = largest_free_payload.max(block.total_size - HEADER_SIZE);
            }
        }

        HeapStats {
            capacity,
            used_bytes,
            free_bytes: capacity - used_bytes,
            usage_percentage: (used_bytes as f64 / capacity as f64) * 100.0,
            allocated_blocks,
            free_blocks,
            largest_free_payload,
        }
    }

    /// Get heap usage as (total, used, available)
    pub fn info(&self) -> (Size, Size, Size) {
        let stats = self.stats();
        (stats.capacity, stats.used_bytes, stats.free_bytes)
    }
}
