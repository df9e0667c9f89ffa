//! Downstream tagging seam.
//!
//! The classifier's caller usually wants to persist a matched (type,
//! creator) pair into the file's metadata. How that write happens is
//! platform plumbing outside this crate; the contract lives here so a
//! caller can tell "classified but the write failed" apart from
//! "unclassified" and notify the user accordingly.

use super::types::{Classification, CodePair};

/// Persists a (type, creator) pair against one file identity.
///
/// Implementations wrap whatever metadata store applies (Finder info on a
/// real classic Mac volume, xattrs, AppleDouble sidecars, a database).
/// Write failures are the implementation's own error type; the core never
/// retries them.
pub trait MetadataWriter {
    /// Error produced by a failed write.
    type Error;

    /// Persist the pair for the file this writer is bound to.
    fn write_codes(&mut self, codes: CodePair) -> Result<(), Self::Error>;
}

/// The outcome of classifying and then tagging one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagOutcome<E> {
    /// Classification matched and the pair was written.
    Tagged(CodePair),
    /// Classification matched but the downstream write failed; the codes
    /// are retained so the caller can retry or report.
    WriteFailed {
        /// The pair that should have been written.
        codes: CodePair,
        /// The writer's failure.
        error: E,
    },
    /// No rule matched; nothing was written.
    Unclassified,
}

impl<E> TagOutcome<E> {
    /// The classified pair, whether or not the write succeeded.
    pub fn codes(&self) -> Option<CodePair> {
        match self {
            Self::Tagged(codes) | Self::WriteFailed { codes, .. } => Some(*codes),
            Self::Unclassified => None,
        }
    }

    /// Whether the pair was classified and written.
    pub fn is_tagged(&self) -> bool {
        matches!(self, Self::Tagged(_))
    }
}

/// Write a matched classification through `writer`.
///
/// Performs at most one write attempt: an `Unmatched` classification
/// writes nothing, and a failed write is surfaced, not retried.
pub fn apply<W: MetadataWriter>(
    classification: &Classification,
    writer: &mut W,
) -> TagOutcome<W::Error> {
    match classification.codes() {
        Some(codes) => match writer.write_codes(codes) {
            Ok(()) => TagOutcome::Tagged(codes),
            Err(error) => TagOutcome::WriteFailed { codes, error },
        },
        None => TagOutcome::Unclassified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::types::{FourCc, MatchSource};

    struct RecordingWriter {
        written: Vec<CodePair>,
        fail: bool,
    }

    impl MetadataWriter for RecordingWriter {
        type Error = &'static str;

        fn write_codes(&mut self, codes: CodePair) -> Result<(), Self::Error> {
            if self.fail {
                return Err("volume locked");
            }
            self.written.push(codes);
            Ok(())
        }
    }

    fn zip_match() -> Classification {
        Classification::Matched {
            codes: CodePair::new(FourCc::new(*b"ZIP "), FourCc::new(*b"IZip")),
            source: MatchSource::Signature,
        }
    }

    #[test]
    fn test_matched_classification_is_written() {
        let mut writer = RecordingWriter {
            written: Vec::new(),
            fail: false,
        };
        let outcome = apply(&zip_match(), &mut writer);
        assert!(outcome.is_tagged());
        assert_eq!(writer.written.len(), 1);
    }

    #[test]
    fn test_write_failure_keeps_codes() {
        let mut writer = RecordingWriter {
            written: Vec::new(),
            fail: true,
        };
        let outcome = apply(&zip_match(), &mut writer);
        assert!(!outcome.is_tagged());
        assert_eq!(outcome.codes(), zip_match().codes());
        assert!(matches!(
            outcome,
            TagOutcome::WriteFailed {
                error: "volume locked",
                ..
            }
        ));
    }

    #[test]
    fn test_unmatched_writes_nothing() {
        let mut writer = RecordingWriter {
            written: Vec::new(),
            fail: false,
        };
        let outcome = apply(&Classification::Unmatched, &mut writer);
        assert_eq!(outcome, TagOutcome::Unclassified);
        assert!(writer.written.is_empty());
    }
}
