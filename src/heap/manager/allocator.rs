/*!
 * Allocator Operations
 * Allocation, release, and resize over the block chain
 */

use super::HeapManager;
use crate::core::limits::HEADER_SIZE;
use crate::core::types::{Address, Size};
use crate::heap::types::{HeapError, HeapResult};
use log::{info, warn};

impl HeapManager {
    /// Allocate a block with a payload of `size` bytes
    ///
    /// Places the block best-fit: the smallest free block whose total size
    /// covers payload plus header, lowest offset on ties. The chosen block
    /// is split unless the remainder would be too small to hold a payload
    /// of its own, in which case the whole block is handed out.
    pub fn allocate(&mut self, size: Size) -> HeapResult<Address> {
        let requested = match size.checked_add(HEADER_SIZE) {
            Some(requested) => requested,
            None => return Err(self.out_of_memory(size)),
        };

        let Some(block) = self.find_best_fit(requested) else {
            warn!("out of memory: no free block fits a {} byte payload", size);
            return Err(self.out_of_memory(size));
        };

        if self.block_size_at(block) > requested + HEADER_SIZE {
            self.split_block(block, requested);
        } else {
            self.set_allocated(block, true);
        }

        let ptr = block + HEADER_SIZE;
        info!(
            "allocated {} byte payload at pointer {} (block size {})",
            size,
            ptr,
            self.block_size_at(block)
        );
        Ok(ptr)
    }

    /// Release an allocated block and coalesce it with a free right neighbor
    ///
    /// A pointer that is out of range or whose block is already free is
    /// ignored with a warning: with in-band headers there is no way to tell
    /// a stale pointer from a double free, and neither is fatal here.
    pub fn free(&mut self, ptr: Address) {
        if ptr < HEADER_SIZE || ptr > self.capacity() {
            warn!("free of out-of-range pointer {}, ignored", ptr);
            return;
        }
        let block = ptr - HEADER_SIZE;
        if !self.allocated_at(block) {
            warn!("free of unallocated pointer {}, ignored", ptr);
            return;
        }

        self.set_allocated(block, false);
        self.coalesce(block);
        info!("freed pointer {} ({} bytes now free)", ptr, self.block_size_at(block));
    }

    /// Resize a previously allocated block
    ///
    /// Shrinks in place; grows in place when the right neighbor is free and
    /// large enough, otherwise relocates the block, copying as much of the
    /// old payload as the new one can hold. Only relocation changes the
    /// returned pointer.
    pub fn reallocate(&mut self, ptr: Address, new_size: Size) -> HeapResult<Address> {
        if ptr < HEADER_SIZE || ptr > self.capacity() {
            return Err(HeapError::InvalidPointer(ptr));
        }
        let block = ptr - HEADER_SIZE;
        if !self.allocated_at(block) {
            return Err(HeapError::InvalidPointer(ptr));
        }

        let requested = match new_size.checked_add(HEADER_SIZE) {
            Some(requested) => requested,
            None => return Err(self.out_of_memory(new_size)),
        };
        let current = self.block_size_at(block);

        if current == requested {
            return Ok(ptr);
        }

        if current > requested {
            // Shrink in place; the remainder may absorb a free right neighbor
            self.split_block(block, requested);
            self.coalesce(block + requested);
            info!("shrank pointer {} to {} byte payload", ptr, new_size);
            return Ok(ptr);
        }

        // Grow in place if the right neighbor is free and covers the difference
        let next = block + current;
        if next < self.capacity()
            && !self.allocated_at(next)
            && current + self.block_size_at(next) >= requested
        {
            self.coalesce(block);
            if self.block_size_at(block) > requested {
                self.split_block(block, requested);
            }
            info!("grew pointer {} to {} byte payload in place", ptr, new_size);
            return Ok(ptr);
        }

        // Relocate: place a fresh block, then move the surviving payload
        let new_ptr = self.allocate(new_size)?;
        let old_payload = current - HEADER_SIZE;
        let preserved = old_payload.min(new_size);
        self.buf.copy_within(ptr..ptr + preserved, new_ptr);
        self.free(ptr);
        info!(
            "moved pointer {} to {} ({} of {} payload bytes preserved)",
            ptr, new_ptr, preserved, old_payload
        );
        Ok(new_ptr)
    }

    /// Check if a pointer addresses a live allocated block
    pub fn is_valid(&self, ptr: Address) -> bool {
        ptr >= HEADER_SIZE && ptr <= self.capacity() && self.allocated_at(ptr - HEADER_SIZE)
    }

    /// Get the payload size of an allocated block
    pub fn block_size(&self, ptr: Address) -> Option<Size> {
        if self.is_valid(ptr) {
            Some(self.block_size_at(ptr - HEADER_SIZE) - HEADER_SIZE)
        } else {
            None
        }
    }

    fn out_of_memory(&self, requested: Size) -> HeapError {
        HeapError::OutOfMemory {
            requested,
            largest_free: self.largest_free_payload(),
        }
    }
}
