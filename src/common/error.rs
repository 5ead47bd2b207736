//! Error types for block handling.
//!
//! The block codec itself is total and never fails. Errors only come from
//! moving encoded identifiers in and out of byte buffers, and from the I/O
//! of collaborators that persist those buffers.

use thiserror::Error;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors surfaced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from a collaborator reading or writing blocks.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A byte slice is too short to hold the requested value.
    #[error("buffer too small: need {needed} bytes, got {actual}")]
    BufferTooSmall { needed: usize, actual: usize },
}
