//! Loquat - classic Mac OS type/creator classification
//!
//! Classic Mac OS selects the application and icon for a file from a pair
//! of four-byte codes (type, creator) stored in Finder metadata. Files
//! arriving from foreign filesystems lack those codes; this library
//! recovers them by sniffing a bounded content prefix for known binary
//! signatures (StuffIt, BinHex, Compact Pro, Disk Copy, Zip, ...) and, when
//! content inspection is inconclusive, by an exact lookup of the filename
//! extension in a compile-time table of roughly 300 entries.
//!
//! # Features
//!
//! - **Signature sniffing**: ordered fixed-offset magic rules over the
//!   first kilobyte, plus a gated secondary probe at offset 1024
//! - **Extension fallback**: case-insensitive, exact-match lookup via a
//!   perfect-hash table built at compile time
//! - **Bounded I/O**: at most a few kilobytes read per file, short reads
//!   at EOF tolerated, hard I/O errors propagated untouched
//! - **No shared state**: rule tables are immutable statics; each
//!   classification owns its buffer
//!
//! # Example - Classifying a file on disk
//!
//! ```no_run
//! use loquat::classify::classify_file;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let result = classify_file("Downloads/archive.sit")?;
//! if let Some(codes) = result.codes() {
//!     println!("type/creator: {}", codes);
//! } else {
//!     println!("unrecognized file");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Classifying in-memory content
//!
//! ```rust
//! use loquat::classify::{classify_bytes, MatchSource};
//!
//! let result = classify_bytes(b"PK\x03\x04", "report.xyz");
//! assert_eq!(result.source(), Some(MatchSource::Signature));
//! assert_eq!(result.codes().unwrap().to_string(), "ZIP /IZip");
//! ```
//!
//! # Example - Reusing a classifier over many readers
//!
//! ```rust
//! use std::io::Cursor;
//! use loquat::classify::Classifier;
//!
//! # fn main() -> Result<(), loquat::Error> {
//! let mut classifier = Classifier::new();
//! for (content, name) in [
//!     (&b"SIT!\0\0\0\0\0\0rLau\x01"[..], "old-archive"),
//!     (&b"no signature at all"[..], "notes.txt"),
//! ] {
//!     let result = classifier.classify(&mut Cursor::new(content), name)?;
//!     println!("{name}: {result:?}");
//! }
//! # Ok(())
//! # }
//! ```

/// Classification engine: signature sniffer, extension matcher, and the
/// policy that orders them.
pub mod classify;

/// Error types shared across the crate.
pub mod error;

// Re-export commonly used types for convenience
pub use classify::{Classification, Classifier, CodePair, FourCc, MatchSource};
pub use classify::{classify_bytes, classify_file};
pub use error::{Error, Result};
