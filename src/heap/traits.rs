/*!
 * Heap Traits
 * Allocator engine abstractions
 *
 * All methods take plain `&self`/`&mut self`: the engine is single-threaded
 * by contract, and a host that shares it across threads must serialize all
 * calls behind its own mutual exclusion.
 */

use super::types::*;
use crate::core::types::{Address, Size};

/// Checked allocation interface
pub trait Allocator {
    /// Allocate a block with the given payload size
    fn allocate(&mut self, size: Size) -> HeapResult<Address>;

    /// Resize a previously allocated block, moving it if it cannot grow in place
    fn reallocate(&mut self, ptr: Address, new_size: Size) -> HeapResult<Address>;

    /// Release an allocated block; invalid pointers are ignored
    fn free(&mut self, ptr: Address);

    /// Check if a pointer addresses a live allocated block
    fn is_valid(&self, ptr: Address) -> bool;

    /// Get the payload size of an allocated block
    fn block_size(&self, ptr: Address) -> Option<Size>;
}

/// Heap introspection
pub trait HeapInfo {
    /// Get overall heap statistics
    fn stats(&self) -> HeapStats;

    /// Get heap usage as (total, used, available)
    fn info(&self) -> (Size, Size, Size);

    /// Walk all blocks in offset order
    fn list_blocks(&self) -> Vec<BlockInfo>;
}

/// Unchecked raw access to the backing buffer
///
/// These primitives ignore block boundaries and allocation state entirely;
/// writes can clobber headers of neighboring blocks. The only guardrail is
/// the buffer itself: ranges extending past the heap are rejected. Distinct
/// from [`Allocator`] so callers cannot mistake it for the checked API.
pub trait RawMemory {
    /// Copy bytes into the buffer starting at `ptr`
    fn write_bytes(&mut self, ptr: Address, data: &[u8]) -> HeapResult<()>;

    /// Copy `count` bytes out of the buffer starting at `ptr`
    fn read_bytes(&self, ptr: Address, count: Size) -> HeapResult<Vec<u8>>;
}
