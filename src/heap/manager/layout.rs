/*!
 * Block Layout Operations
 * Splitting and coalescing of adjacent blocks
 */

use super::HeapManager;
use crate::core::types::{Address, Size};
use log::debug;

impl HeapManager {
    /// Carve a block into an allocated prefix of `size` bytes and a free
    /// remainder
    ///
    /// The caller guarantees the block's total size strictly exceeds
    /// `size`; splitting at exact equality would write a zero-size header,
    /// so callers mark the whole block allocated instead.
    pub(super) fn split_block(&mut self, block: Address, size: Size) {
        let remaining = self.block_size_at(block) - size;

        self.set_block_size(block, size);
        self.set_allocated(block, true);

        let next = block + size;
        self.set_block_size(next, remaining);
        self.set_allocated(next, false);

        debug!(
            "split block at {}: keeping {} bytes, {} bytes free at {}",
            block, size, remaining, next
        );
    }

    /// Merge a block with its right neighbor if that neighbor is free
    ///
    /// Single-step and rightward only: a block is never merged backward
    /// into its left neighbor. The neighbor's header byte becomes part of
    /// the merged block's body and is never read again. The caller's
    /// allocation flag is untouched, so coalescing works for both a freed
    /// block and an allocated block growing in place.
    pub(super) fn coalesce(&mut self, block: Address) {
        let next = block + self.block_size_at(block);
        if next < self.capacity() && !self.allocated_at(next) {
            let merged = self.block_size_at(block) + self.block_size_at(next);
            self.set_block_size(block, merged);
            debug!("coalesced block at {} with neighbor at {}: {} bytes", block, next, merged);
        }
    }
}
