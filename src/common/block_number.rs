//! Logical block number type.

use std::fmt;
use std::iter::FusedIterator;

use crate::common::config::BLOCK_SIZE;

/// Identifies a block within a data file (heap or index).
///
/// Blocks are numbered sequentially from 0 to [`BlockNumber::MAX`]. This is
/// the type all block arithmetic and comparison is done in; the on-disk form
/// is [`BlockId`](crate::storage::BlockId).
///
/// # Example
/// ```
/// use blockref::BlockNumber;
///
/// let block = BlockNumber::new(42);
/// assert!(block.is_valid());
/// assert_eq!(block.0, 42);
/// assert!(!BlockNumber::INVALID.is_valid());
/// ```
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockNumber(pub u32);

impl BlockNumber {
    /// Invalid/sentinel block number ("no block").
    pub const INVALID: BlockNumber = BlockNumber(0xFFFF_FFFF);

    /// Highest block number an allocator may assign.
    ///
    /// Not enforced here; the allocator owns this ceiling.
    pub const MAX: BlockNumber = BlockNumber(0xFFFF_FFFE);

    /// Asks the buffer manager to extend the file with a new block.
    ///
    /// Same value as [`BlockNumber::INVALID`].
    pub const NEW: BlockNumber = Self::INVALID;

    /// Create a new BlockNumber.
    #[inline]
    pub const fn new(n: u32) -> Self {
        BlockNumber(n)
    }

    /// Check if this block number is valid (not the sentinel value).
    ///
    /// No range check against [`BlockNumber::MAX`] is made.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0
    }

    /// Byte offset of this block within its data file.
    ///
    /// Computed as `n × BLOCK_SIZE` in 64 bits, so it cannot overflow. The
    /// sentinel is not rejected.
    #[inline]
    pub const fn byte_offset(self) -> u64 {
        self.0 as u64 * BLOCK_SIZE as u64
    }

    /// The following block, or `None` past [`BlockNumber::MAX`].
    #[inline]
    pub const fn checked_next(self) -> Option<BlockNumber> {
        if self.0 >= Self::MAX.0 {
            None
        } else {
            Some(BlockNumber(self.0 + 1))
        }
    }

    /// Iterate block numbers in `start..end`.
    pub fn range(start: BlockNumber, end: BlockNumber) -> BlockRange {
        BlockRange {
            next: start.0,
            end: end.0,
        }
    }
}

impl Default for BlockNumber {
    /// Unassigned.
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<u32> for BlockNumber {
    fn from(n: u32) -> Self {
        BlockNumber(n)
    }
}

impl From<BlockNumber> for u32 {
    fn from(block: BlockNumber) -> Self {
        block.0
    }
}

impl fmt::Display for BlockNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "Block({})", self.0)
        } else {
            write!(f, "Block(INVALID)")
        }
    }
}

/// Half-open iterator over block numbers, from [`BlockNumber::range`].
#[derive(Debug, Clone)]
pub struct BlockRange {
    next: u32,
    end: u32,
}

impl Iterator for BlockRange {
    type Item = BlockNumber;

    fn next(&mut self) -> Option<BlockNumber> {
        if self.next >= self.end {
            return None;
        }
        let block = BlockNumber(self.next);
        self.next += 1;
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end.saturating_sub(self.next) as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for BlockRange {}

impl FusedIterator for BlockRange {}
