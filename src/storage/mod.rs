//! Storage layer - persisted block references.
//!
//! - [`BlockId`] - The 2-byte-aligned on-disk form of a block number

mod block_id;

pub use block_id::BlockId;
