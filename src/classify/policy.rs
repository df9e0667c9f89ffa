//! Classification policy: signature sniff, secondary probe, extension
//! fallback.
//!
//! The policy is a small state machine run to completion per file:
//!
//! ```text
//! Start -> SniffPrimary -> { Done | SniffSecondary | ExtensionFallback } -> Done
//! ```
//!
//! A short read at EOF is normal (small files) and classification proceeds
//! over the bytes actually obtained. Any other read error aborts the whole
//! classification before rule evaluation and propagates to the caller; the
//! policy never falls back to extension matching on a hard I/O error.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use super::extension;
use super::magic;
use super::types::{Classification, MatchSource};
use super::window::ContentWindow;
use crate::error::Result;

/// Bytes in one signature window.
pub const WINDOW_LEN: usize = 1024;

/// Absolute file offset of the secondary probe window.
pub const SECONDARY_PROBE_OFFSET: u64 = 1024;

/// Minimum number of valid bytes the initial read must yield before the
/// secondary probe runs.
pub const SECONDARY_PROBE_GATE: usize = 2 * WINDOW_LEN;

/// A reusable file classifier.
///
/// Owns the scratch buffer the content windows borrow from, so each
/// in-flight classification has exclusive buffer ownership. The rule
/// tables themselves are immutable statics shared freely across threads;
/// to classify concurrently, give each thread its own `Classifier`.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use loquat::classify::Classifier;
///
/// let mut classifier = Classifier::new();
/// let mut content = Cursor::new(b"PK\x03\x04...".to_vec());
/// let result = classifier.classify(&mut content, "download.dat")?;
/// assert!(result.is_matched());
/// # Ok::<(), loquat::Error>(())
/// ```
#[derive(Debug)]
pub struct Classifier {
    buf: [u8; SECONDARY_PROBE_GATE],
}

impl Classifier {
    /// Create a classifier with a fresh scratch buffer.
    pub fn new() -> Self {
        Self {
            buf: [0; SECONDARY_PROBE_GATE],
        }
    }

    /// Classify one file's content and filename.
    ///
    /// Reads a bounded prefix from `reader`, sniffs the ordered magic
    /// rules over the first [`WINDOW_LEN`] bytes, probes offset 1024 for
    /// the secondary rule when the initial read yielded at least
    /// [`SECONDARY_PROBE_GATE`] bytes, and finally falls back to the
    /// extension table.
    ///
    /// # Arguments
    ///
    /// * `reader` - The file content; only a bounded prefix is read
    /// * `filename` - Raw filename, used solely for the extension fallback
    ///
    /// # Returns
    ///
    /// * `Ok(Classification::Matched { .. })` on any rule match
    /// * `Ok(Classification::Unmatched)` when no stage matched
    /// * `Err(Error::Read)` on a hard I/O failure (extension fallback is
    ///   deliberately NOT consulted in that case)
    pub fn classify<R: Read + Seek>(
        &mut self,
        reader: &mut R,
        filename: &str,
    ) -> Result<Classification> {
        let valid = read_window(reader, &mut self.buf)?;

        let primary = ContentWindow::new(&self.buf[..valid.min(WINDOW_LEN)], 0);
        if let Some(rule) = magic::sniff_primary(&primary) {
            return Ok(Classification::Matched {
                codes: rule.codes,
                source: MatchSource::Signature,
            });
        }

        if valid >= SECONDARY_PROBE_GATE {
            reader.seek(SeekFrom::Start(SECONDARY_PROBE_OFFSET))?;
            let probe_len = read_window(reader, &mut self.buf[..WINDOW_LEN])?;
            let secondary =
                ContentWindow::new(&self.buf[..probe_len], SECONDARY_PROBE_OFFSET);
            if let Some(rule) = magic::sniff_secondary(&secondary) {
                return Ok(Classification::Matched {
                    codes: rule.codes,
                    source: MatchSource::SecondarySignature,
                });
            }
        }

        Ok(extension_fallback(filename))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify in-memory content plus a filename, without I/O.
///
/// The primary window is the first [`WINDOW_LEN`] bytes; when at least
/// [`SECONDARY_PROBE_GATE`] bytes are present the secondary window is
/// taken directly from the slice.
///
/// # Examples
///
/// ```rust
/// use loquat::classify::{classify_bytes, MatchSource};
///
/// let result = classify_bytes(b"PK\x03\x04", "anything.xyz");
/// assert_eq!(result.source(), Some(MatchSource::Signature));
/// ```
pub fn classify_bytes(bytes: &[u8], filename: &str) -> Classification {
    let primary = ContentWindow::new(&bytes[..bytes.len().min(WINDOW_LEN)], 0);
    if let Some(rule) = magic::sniff_primary(&primary) {
        return Classification::Matched {
            codes: rule.codes,
            source: MatchSource::Signature,
        };
    }

    if bytes.len() >= SECONDARY_PROBE_GATE {
        let secondary = ContentWindow::new(
            &bytes[WINDOW_LEN..SECONDARY_PROBE_GATE],
            SECONDARY_PROBE_OFFSET,
        );
        if let Some(rule) = magic::sniff_secondary(&secondary) {
            return Classification::Matched {
                codes: rule.codes,
                source: MatchSource::SecondarySignature,
            };
        }
    }

    extension_fallback(filename)
}

/// Classify from a caller-supplied primary window plus a filename.
///
/// With no reader available the secondary probe cannot run; the stages are
/// primary sniff then extension fallback.
pub fn classify_window(primary: &ContentWindow<'_>, filename: &str) -> Classification {
    if let Some(rule) = magic::sniff_primary(primary) {
        return Classification::Matched {
            codes: rule.codes,
            source: MatchSource::Signature,
        };
    }
    extension_fallback(filename)
}

/// Open and classify a file on disk.
///
/// The filename for the extension fallback is taken from the path's final
/// component.
pub fn classify_file<P: AsRef<Path>>(path: P) -> Result<Classification> {
    let path = path.as_ref();
    let mut file = File::open(path)?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    Classifier::new().classify(&mut file, &filename)
}

fn extension_fallback(filename: &str) -> Classification {
    match extension::match_filename(filename) {
        Some(codes) => Classification::Matched {
            codes,
            source: MatchSource::Extension,
        },
        None => Classification::Unmatched,
    }
}

/// Fill `buf` from the reader, stopping early at EOF.
///
/// Returns the number of valid bytes obtained. `Interrupted` reads are
/// retried; every other error propagates.
fn read_window<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::types::{CodePair, FourCc};
    use std::io::{self, Cursor, Write};

    fn pair(file_type: &[u8; 4], creator: &[u8; 4]) -> CodePair {
        CodePair::new(FourCc::new(*file_type), FourCc::new(*creator))
    }

    fn matched(
        result: Classification,
    ) -> (CodePair, MatchSource) {
        match result {
            Classification::Matched { codes, source } => (codes, source),
            Classification::Unmatched => panic!("expected a match"),
        }
    }

    #[test]
    fn test_signature_wins_over_filename() {
        let mut classifier = Classifier::new();
        let mut content = Cursor::new(b"PK\x03\x04rest of archive".to_vec());
        let result = classifier.classify(&mut content, "misleading.txt").unwrap();
        assert_eq!(
            matched(result),
            (pair(b"ZIP ", b"IZip"), MatchSource::Signature)
        );
    }

    #[test]
    fn test_extension_fallback_when_no_signature() {
        let mut classifier = Classifier::new();
        let mut content = Cursor::new(b"just some notes".to_vec());
        let result = classifier.classify(&mut content, "notes.txt").unwrap();
        assert_eq!(
            matched(result),
            (pair(b"TEXT", b"ttxt"), MatchSource::Extension)
        );
    }

    #[test]
    fn test_empty_content_and_no_extension_is_unmatched() {
        let mut classifier = Classifier::new();
        let mut content = Cursor::new(Vec::new());
        let result = classifier.classify(&mut content, "noext").unwrap();
        assert_eq!(result, Classification::Unmatched);
    }

    #[test]
    fn test_short_read_is_not_an_error() {
        let mut classifier = Classifier::new();
        let mut content = Cursor::new(vec![0x42; 10]);
        let result = classifier.classify(&mut content, "tiny.unknown9").unwrap();
        assert_eq!(result, Classification::Unmatched);
    }

    fn disk_copy_6_image() -> Vec<u8> {
        let mut data = vec![0u8; 3000];
        data[1024] = b'B';
        data[1025] = b'D';
        data
    }

    #[test]
    fn test_secondary_probe_fires_past_gate() {
        let mut classifier = Classifier::new();
        let mut content = Cursor::new(disk_copy_6_image());
        let result = classifier.classify(&mut content, "noext").unwrap();
        assert_eq!(
            matched(result),
            (pair(b"DDim", b"ddsk"), MatchSource::SecondarySignature)
        );
    }

    #[test]
    fn test_secondary_probe_gated_below_2048_bytes() {
        let mut truncated = disk_copy_6_image();
        truncated.truncate(2047);
        let mut classifier = Classifier::new();
        let mut content = Cursor::new(truncated);
        let result = classifier.classify(&mut content, "noext").unwrap();
        assert_eq!(result, Classification::Unmatched);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device gone"))
        }
    }

    impl Seek for FailingReader {
        fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
            Ok(0)
        }
    }

    #[test]
    fn test_hard_read_error_propagates_without_fallback() {
        let mut classifier = Classifier::new();
        // The filename would match the table; a hard error must win.
        let result = classifier.classify(&mut FailingReader, "notes.txt");
        assert!(result.is_err());
    }

    struct SeekFailReader(Cursor<Vec<u8>>);

    impl Read for SeekFailReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.0.read(buf)
        }
    }

    impl Seek for SeekFailReader {
        fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
            Err(io::Error::other("seek rejected"))
        }
    }

    #[test]
    fn test_secondary_seek_error_propagates_without_fallback() {
        let mut classifier = Classifier::new();
        let mut content = SeekFailReader(Cursor::new(vec![0u8; 4096]));
        let result = classifier.classify(&mut content, "notes.txt");
        assert!(result.is_err());
    }

    #[test]
    fn test_classify_bytes_secondary_window() {
        let result = classify_bytes(&disk_copy_6_image(), "noext");
        assert_eq!(
            matched(result),
            (pair(b"DDim", b"ddsk"), MatchSource::SecondarySignature)
        );
    }

    #[test]
    fn test_classify_bytes_gate_requires_full_2048() {
        let mut data = disk_copy_6_image();
        data.truncate(2047);
        assert_eq!(classify_bytes(&data, "noext"), Classification::Unmatched);
    }

    #[test]
    fn test_classify_window_primary_then_fallback() {
        let window = ContentWindow::new(b"nothing magical here", 0);
        let result = classify_window(&window, "photo.jpg");
        assert_eq!(
            matched(result),
            (pair(b"JPEG", b"ogle"), MatchSource::Extension)
        );

        let window = ContentWindow::new(b"MAR archive", 0);
        let result = classify_window(&window, "photo.jpg");
        assert_eq!(
            matched(result),
            (pair(b"MARf", b"MARc"), MatchSource::Signature)
        );
    }

    #[test]
    fn test_classify_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("payload.zip");
        let mut file = File::create(&path).unwrap();
        file.write_all(b"PK\x03\x04\x14\x00").unwrap();
        drop(file);

        let result = classify_file(&path).unwrap();
        assert_eq!(
            matched(result),
            (pair(b"ZIP ", b"IZip"), MatchSource::Signature)
        );
    }

    #[test]
    fn test_classify_file_extension_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("song.mp3");
        std::fs::write(&path, b"not an mpeg frame").unwrap();

        let result = classify_file(&path).unwrap();
        assert_eq!(
            matched(result),
            (pair(b"MPG3", b"TVOD"), MatchSource::Extension)
        );
    }

    #[test]
    fn test_classifier_is_reusable() {
        let mut classifier = Classifier::new();
        let mut zip = Cursor::new(b"PK\x03\x04".to_vec());
        let first = classifier.classify(&mut zip, "a").unwrap();
        // A previous classification must leave no residue in the scratch
        // buffer that a later short read could expose.
        let mut empty = Cursor::new(Vec::new());
        let second = classifier.classify(&mut empty, "b").unwrap();
        assert!(first.is_matched());
        assert_eq!(second, Classification::Unmatched);
    }
}
