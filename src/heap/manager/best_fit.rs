/*!
 * Best-Fit Search
 * Free block selection over the in-band block chain
 */

use super::HeapManager;
use crate::core::types::{Address, Size};

impl HeapManager {
    /// Find the smallest free block with a total size of at least `size`
    ///
    /// Scans blocks left to right from offset 0. The strict `<` comparison
    /// keeps the first candidate among equals, so ties resolve to the
    /// lowest offset. Termination relies on the tiling invariant; the walk
    /// asserts against zero-size headers in debug builds only.
    pub(super) fn find_best_fit(&self, size: Size) -> Option<Address> {
        let mut best: Option<Address> = None;
        let mut best_size = Size::MAX;

        for block in self.walk() {
            if !block.allocated && block.total_size >= size && block.total_size < best_size {
                best = Some(block.offset);
                best_size = block.total_size;
            }
        }

        best
    }
}
