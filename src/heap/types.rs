/*!
 * Heap Types
 * Common types for the allocator engine
 */

use crate::core::types::{Address, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Heap operation result
pub type HeapResult<T> = Result<T, HeapError>;

/// Heap errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HeapError {
    #[error("out of memory: requested {requested} byte payload, largest free payload is {largest_free} bytes")]
    OutOfMemory { requested: Size, largest_free: Size },

    #[error("invalid pointer: {0}")]
    InvalidPointer(Address),

    #[error("invalid heap capacity {requested}: must be between {min} and {max} bytes")]
    InvalidCapacity {
        requested: Size,
        min: Size,
        max: Size,
    },
}

/// Block metadata as reported to callers
///
/// `pointer` addresses the payload, one past the in-band header; a block's
/// footprint in the buffer is `payload_size + HEADER_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockInfo {
    pub pointer: Address,
    pub payload_size: Size,
    pub allocated: bool,
}

/// Heap statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeapStats {
    pub capacity: Size,
    pub used_bytes: Size,
    pub free_bytes: Size,
    pub usage_percentage: f64,
    pub allocated_blocks: usize,
    pub free_blocks: usize,
    pub largest_free_payload: Size,
}
