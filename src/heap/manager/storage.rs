/*!
 * Raw Storage Operations
 * Unchecked read/write access to the backing buffer
 */

use super::HeapManager;
use crate::core::types::{Address, Size};
use crate::heap::types::{HeapError, HeapResult};
use log::debug;

impl HeapManager {
    /// Copy bytes into the buffer starting at `ptr`
    ///
    /// No block or allocation checks: the range may span headers and
    /// neighboring blocks. Only a range extending past the buffer is
    /// rejected.
    pub fn write_bytes(&mut self, ptr: Address, data: &[u8]) -> HeapResult<()> {
        let end = ptr
            .checked_add(data.len())
            .ok_or(HeapError::InvalidPointer(ptr))?;
        if end > self.capacity() {
            return Err(HeapError::InvalidPointer(ptr));
        }

        self.buf[ptr..end].copy_from_slice(data);
        debug!("raw write of {} bytes at {}", data.len(), ptr);
        Ok(())
    }

    /// Copy `count` bytes out of the buffer starting at `ptr`
    ///
    /// Same contract as [`HeapManager::write_bytes`]: block metadata is
    /// ignored, headers included in whatever the range covers.
    pub fn read_bytes(&self, ptr: Address, count: Size) -> HeapResult<Vec<u8>> {
        let end = ptr
            .checked_add(count)
            .ok_or(HeapError::InvalidPointer(ptr))?;
        if end > self.capacity() {
            return Err(HeapError::InvalidPointer(ptr));
        }

        debug!("raw read of {} bytes at {}", count, ptr);
        Ok(self.buf[ptr..end].to_vec())
    }
}
