//! Unified error types for the loquat library.
//!
//! Hard I/O failures abort a classification and propagate unmodified to
//! the caller, which owns any retry policy; the core never retries.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
