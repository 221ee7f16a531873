/*!
 * Simulator Limits and Constants
 *
 * Centralized location for the engine's size constants. Everything that
 * depends on the header encoding lives here so the one-byte layout is not
 * hard-coded anywhere else.
 */

/// Width of a block header in bytes
pub const HEADER_SIZE: usize = 1;

/// Largest total block size representable in a header
///
/// The low bit of the header byte holds the allocation flag, leaving the
/// upper 7 bits for the size. Heap capacity must not exceed this, or the
/// initial free block could not describe itself.
pub const MAX_BLOCK_SIZE: usize = (u8::MAX >> 1) as usize;

/// Default heap capacity in bytes, headers included
pub const DEFAULT_HEAP_SIZE: usize = 127;
