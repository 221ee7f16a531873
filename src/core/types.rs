/*!
 * Core Types
 * Common types used across the simulator
 */

/// Address type for heap operations
///
/// Addresses handed to callers are payload offsets within the backing
/// buffer, never header offsets.
pub type Address = usize;

/// Size type for heap operations
pub type Size = usize;
