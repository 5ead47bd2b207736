//! Configuration constants for block addressing.

/// Size of a block in bytes (8KB).
///
/// A block is the unit of I/O between the storage layer and memory; a
/// buffer holds exactly one block.
///
/// # Memory Layout
/// With 8KB blocks and 32-bit block numbers:
/// - Addressable blocks: 0..=0xFFFF_FFFE (the top value is the sentinel)
/// - Max relation size: just under 32TB
pub const BLOCK_SIZE: usize = 8192;

/// Number of addressable blocks in one data file.
///
/// Block numbers run from 0 to `MaxBlockNumber` inclusive; the sentinel
/// `0xFFFF_FFFF` is never a real address.
pub const MAX_BLOCKS: u64 = 0xFFFF_FFFE + 1;

/// Maximum theoretical size of one data file in bytes.
pub const MAX_RELATION_SIZE_BYTES: u64 = MAX_BLOCKS * BLOCK_SIZE as u64;
