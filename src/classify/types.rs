//! Core classification types.
//!
//! Classic Mac OS identifies the owning application and icon of a file by a
//! pair of four-byte codes (type and creator) stored in Finder metadata.
//! These codes are raw byte values, not text: embedded spaces are
//! significant (`b"ZIP "` and `b"ZIP!"` are different codes), so they are
//! modeled as opaque fixed-width bytes rather than strings.

use std::fmt;

/// An opaque four-byte platform code (classic Mac OS `OSType`).
///
/// Equality is exact byte equality, including embedded spaces. The
/// `Display` implementation renders printable codes as four ASCII
/// characters and falls back to hex for binary ones.
///
/// # Examples
///
/// ```rust
/// use loquat::classify::FourCc;
///
/// let zip = FourCc::new(*b"ZIP ");
/// assert_eq!(zip.as_bytes(), b"ZIP ");
/// assert_eq!(zip.to_string(), "ZIP ");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCc([u8; 4]);

impl FourCc {
    /// Create a code from its raw bytes.
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// The raw four bytes of the code.
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.iter().all(|b| (0x20..=0x7E).contains(b)) {
            for &b in &self.0 {
                fmt::Write::write_char(f, b as char)?;
            }
            Ok(())
        } else {
            write!(
                f,
                "0x{:02X}{:02X}{:02X}{:02X}",
                self.0[0], self.0[1], self.0[2], self.0[3]
            )
        }
    }
}

impl fmt::Debug for FourCc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FourCc({})", self)
    }
}

/// A (type, creator) code pair as written into Finder metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodePair {
    /// File type code, e.g. `TEXT` or `ZIP `.
    pub file_type: FourCc,
    /// Creator (owning application) code, e.g. `ttxt` or `SITx`.
    pub creator: FourCc,
}

impl CodePair {
    /// Create a pair from type and creator codes.
    pub const fn new(file_type: FourCc, creator: FourCc) -> Self {
        Self { file_type, creator }
    }
}

impl fmt::Display for CodePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.file_type, self.creator)
    }
}

/// Which classification stage produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    /// A magic rule matched in the primary window (file offset 0).
    Signature,
    /// The secondary probe matched at file offset 1024.
    SecondarySignature,
    /// The filename extension table matched.
    Extension,
}

/// The outcome of classifying one file.
///
/// `Unmatched` is a valid terminal outcome, not an error: the file simply
/// carries no known signature and no known extension. Hard I/O failures are
/// reported separately as [`crate::error::Error`] and never collapse into
/// `Unmatched`.
///
/// A caller that goes on to write the codes downstream can still
/// distinguish "classified but the write failed" (it holds a `Matched`
/// value) from "unclassified" (`Unmatched`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// A signature or extension rule matched.
    Matched {
        /// The matched (type, creator) pair.
        codes: CodePair,
        /// Which stage matched.
        source: MatchSource,
    },
    /// No magic rule and no extension rule matched.
    Unmatched,
}

impl Classification {
    /// Whether any rule matched.
    pub const fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// The matched code pair, if any.
    pub const fn codes(&self) -> Option<CodePair> {
        match self {
            Self::Matched { codes, .. } => Some(*codes),
            Self::Unmatched => None,
        }
    }

    /// The stage that matched, if any.
    pub const fn source(&self) -> Option<MatchSource> {
        match self {
            Self::Matched { source, .. } => Some(*source),
            Self::Unmatched => None,
        }
    }
}
