//! blockref - block addressing for a page-oriented storage engine.
//!
//! Every data file (heap or index) is divided into fixed-size blocks, the
//! unit of I/O between disk and memory. This crate defines how those blocks
//! are addressed.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  Access methods / tuple pointers  (external)              │
//! │        embed BlockId ──── decode ───► BlockNumber         │
//! ├───────────────────────────────────────────────────────────┤
//! │  Buffer manager  (external)                               │
//! │        BlockNumber::NEW = "extend the file"               │
//! ├───────────────────────────────────────────────────────────┤
//! │  Storage manager  (external)                              │
//! │        offset = BlockNumber × BLOCK_SIZE                  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - [`BlockNumber`], error type, config constants
//! - [`storage`] - [`BlockId`], the persisted encoding
//!
//! Nothing here does I/O or locking. All operations are O(1) value
//! transformations, so both types are freely shared across threads.
//!
//! # Quick Start
//! ```
//! use blockref::{BlockId, BlockNumber};
//!
//! let block = BlockNumber::new(42);
//! let mut stored = BlockId::default();
//! stored.set(block);
//!
//! assert_eq!(stored.block_number(), block);
//! assert!(stored.equals(&BlockId::new(block)));
//! ```

pub mod common;
pub mod storage;

pub use common::config::BLOCK_SIZE;
pub use common::{BlockNumber, BlockRange, Error, Result};
pub use storage::BlockId;
