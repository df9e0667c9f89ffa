//! Error types for classification.
use thiserror::Error;

/// Main error type for classification operations.
///
/// A file that matches no rule is not an error; that outcome is
/// [`crate::classify::Classification::Unmatched`]. Only hard failures
/// surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// A content read failed beyond a benign short read at EOF. Fatal for
    /// that file's classification; the file is left untagged.
    #[error("read error: {0}")]
    Read(#[from] std::io::Error),
}

/// Result type for classification operations.
pub type Result<T> = std::result::Result<T, Error>;
