//! On-disk block identifier.
//!
//! A [`BlockId`] is the storage form of a [`BlockNumber`]: the same 32 bits,
//! split into two 16-bit halves so that it only needs 2-byte alignment.
//! Structures that embed block references (line pointers, tuple headers)
//! can then be 2-byte aligned too, which keeps the per-item arrays on each
//! page small.

use std::fmt;

use crate::common::{BlockNumber, Error, Result};

/// Storage type for a [`BlockNumber`].
///
/// `BlockNumber` is what calculations are done in; `BlockId` is what gets
/// written inside persisted structures.
///
/// # Layout (4 bytes, 2-byte aligned)
/// ```text
/// Offset  Size  Field
/// ------  ----  -----
/// 0       2     hi (block number >> 16, native-endian)
/// 2       2     lo (block number & 0xFFFF, native-endian)
/// ```
///
/// Encoding is total: the sentinel and values above [`BlockNumber::MAX`]
/// encode and decode like any other number. Callers must not persist
/// [`BlockNumber::INVALID`] where a live reference is expected.
///
/// # Example
/// ```
/// use blockref::{BlockId, BlockNumber};
///
/// let id = BlockId::new(BlockNumber::new(0x0001_FFFF));
/// assert_eq!((id.hi(), id.lo()), (0x0001, 0xFFFF));
/// assert_eq!(id.block_number(), BlockNumber::new(0x0001_FFFF));
/// ```
#[repr(C, align(2))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockId {
    hi: u16,
    lo: u16,
}

impl BlockId {
    /// Size of the encoded identifier in bytes.
    pub const SIZE: usize = 4;

    /// Offset of each half within the encoded identifier.
    pub const OFFSET_HI: usize = 0;
    pub const OFFSET_LO: usize = 2;

    /// Encode a block number.
    #[inline]
    pub const fn new(block: BlockNumber) -> Self {
        Self {
            hi: (block.0 >> 16) as u16,
            lo: (block.0 & 0xFFFF) as u16,
        }
    }

    /// Overwrite this identifier in place with the encoding of `block`.
    ///
    /// For identifiers embedded as a field of a larger record.
    #[inline]
    pub fn set(&mut self, block: BlockNumber) {
        *self = Self::new(block);
    }

    /// Decode back to the block number.
    #[inline]
    pub const fn block_number(&self) -> BlockNumber {
        BlockNumber(((self.hi as u32) << 16) | self.lo as u32)
    }

    /// Compare two identifiers half by half, without decoding either.
    #[inline]
    pub const fn equals(&self, other: &BlockId) -> bool {
        self.hi == other.hi && self.lo == other.lo
    }

    /// High 16 bits of the block number.
    #[inline]
    pub const fn hi(&self) -> u16 {
        self.hi
    }

    /// Low 16 bits of the block number.
    #[inline]
    pub const fn lo(&self) -> u16 {
        self.lo
    }

    /// The persisted byte image: `hi` then `lo`, each native-endian.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[Self::OFFSET_HI..Self::OFFSET_HI + 2].copy_from_slice(&self.hi.to_ne_bytes());
        bytes[Self::OFFSET_LO..Self::OFFSET_LO + 2].copy_from_slice(&self.lo.to_ne_bytes());
        bytes
    }

    /// Read an identifier from the beginning of a byte slice.
    ///
    /// # Errors
    /// Returns `Error::BufferTooSmall` if `data.len() < BlockId::SIZE`.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        check_len(data.len())?;

        let hi = u16::from_ne_bytes([data[Self::OFFSET_HI], data[Self::OFFSET_HI + 1]]);
        let lo = u16::from_ne_bytes([data[Self::OFFSET_LO], data[Self::OFFSET_LO + 1]]);

        Ok(Self { hi, lo })
    }

    /// Write this identifier to the beginning of a byte slice.
    ///
    /// # Errors
    /// Returns `Error::BufferTooSmall` if `data.len() < BlockId::SIZE`.
    pub fn write_to(&self, data: &mut [u8]) -> Result<()> {
        check_len(data.len())?;
        data[..Self::SIZE].copy_from_slice(&self.to_bytes());
        Ok(())
    }
}

fn check_len(actual: usize) -> Result<()> {
    if actual < BlockId::SIZE {
        return Err(Error::BufferTooSmall {
            needed: BlockId::SIZE,
            actual,
        });
    }
    Ok(())
}

impl Default for BlockId {
    /// Encoding of [`BlockNumber::INVALID`].
    fn default() -> Self {
        Self::new(BlockNumber::INVALID)
    }
}

impl From<BlockNumber> for BlockId {
    fn from(block: BlockNumber) -> Self {
        Self::new(block)
    }
}

impl From<BlockId> for BlockNumber {
    fn from(id: BlockId) -> Self {
        id.block_number()
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockId({}, {})", self.hi, self.lo)
    }
}

// ============================================================================
// TESTS
// ============================================================================
