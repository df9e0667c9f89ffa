//! File classification engine.
//!
//! Classifies a file into a classic Mac OS (type, creator) code pair by
//! inspecting a bounded prefix of its content for known binary signatures
//! and, failing that, by mapping its filename extension through a static
//! table. Detection reads at most a few kilobytes and performs no deep
//! parsing: every signature is a fixed-offset byte check.

// Submodule declarations
pub mod extension;
pub mod magic;
pub mod policy;
pub mod tag;
pub mod types;
pub mod window;

// Re-exports
pub use extension::{MAX_EXTENSION_LEN, extension_of, lookup, match_filename};
pub use magic::{DISK_COPY_6, MagicRule, PRIMARY_RULES, sniff_primary, sniff_secondary};
pub use policy::{
    Classifier, SECONDARY_PROBE_GATE, SECONDARY_PROBE_OFFSET, WINDOW_LEN, classify_bytes,
    classify_file, classify_window,
};
pub use tag::{MetadataWriter, TagOutcome};
pub use types::{Classification, CodePair, FourCc, MatchSource};
pub use window::ContentWindow;
