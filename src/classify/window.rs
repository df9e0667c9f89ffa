//! Bounded content windows.
//!
//! A [`ContentWindow`] is a borrowed view of one contiguous region of a
//! file: the bytes actually obtained by a read, plus the absolute file
//! offset the region starts at. Short reads at EOF are normal, so a
//! window's valid length may be less than what was requested; every
//! accessor is range-checked and reports out-of-range access as `None`
//! rather than panicking. Signature rules treat `None` as a non-match.
//!
//! The buffer behind a window is owned by the caller and is exclusive to a
//! single in-flight classification; there is no shared scratch state.

/// A bounded byte view of a file region at a known absolute offset.
#[derive(Debug, Clone, Copy)]
pub struct ContentWindow<'a> {
    data: &'a [u8],
    origin: u64,
}

impl<'a> ContentWindow<'a> {
    /// Create a window over `data`, which starts at absolute file offset
    /// `origin`.
    pub const fn new(data: &'a [u8], origin: u64) -> Self {
        Self { data, origin }
    }

    /// Number of valid bytes in the window.
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the window holds no valid bytes.
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Absolute file offset of the first byte of the window.
    pub const fn origin(&self) -> u64 {
        self.origin
    }

    /// `len` bytes starting at the window-relative `offset`, or `None` if
    /// any part of the range lies past the valid length.
    pub fn slice(&self, offset: usize, len: usize) -> Option<&'a [u8]> {
        let end = offset.checked_add(len)?;
        self.data.get(offset..end)
    }

    /// The single byte at the window-relative `offset`, or `None` if out
    /// of range.
    pub fn byte(&self, offset: usize) -> Option<u8> {
        self.data.get(offset).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_in_range() {
        let window = ContentWindow::new(b"PK\x03\x04rest", 0);
        assert_eq!(window.slice(0, 2), Some(&b"PK"[..]));
        assert_eq!(window.slice(4, 4), Some(&b"rest"[..]));
    }

    #[test]
    fn test_slice_out_of_range_is_none() {
        let window = ContentWindow::new(b"short", 0);
        assert_eq!(window.slice(0, 6), None);
        assert_eq!(window.slice(5, 1), None);
        assert_eq!(window.slice(usize::MAX, 2), None);
    }

    #[test]
    fn test_byte_access() {
        let window = ContentWindow::new(&[0xAB, 0xCD], 1024);
        assert_eq!(window.byte(1), Some(0xCD));
        assert_eq!(window.byte(2), None);
        assert_eq!(window.origin(), 1024);
    }

    #[test]
    fn test_empty_window() {
        let window = ContentWindow::new(&[], 0);
        assert!(window.is_empty());
        assert_eq!(window.len(), 0);
        assert_eq!(window.byte(0), None);
        assert_eq!(window.slice(0, 1), None);
        // A zero-length slice of an empty window is still in range.
        assert_eq!(window.slice(0, 0), Some(&[][..]));
    }
}
