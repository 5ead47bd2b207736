//! Common types and utilities shared across the crate.
//!
//! - Configuration constants
//! - Error types
//! - [`BlockNumber`], the logical block address

mod block_number;
pub mod config;
pub mod error;

pub use block_number::{BlockNumber, BlockRange};
pub use error::{Error, Result};
