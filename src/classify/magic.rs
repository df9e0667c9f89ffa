//! Magic-signature rules and the signature sniffer.
//!
//! Each rule is a conjunction of fixed-offset field tests against a
//! [`ContentWindow`]. The rules live in one ordered table and are evaluated
//! strictly in table order with first-match-wins semantics.
//!
//! The order is a correctness invariant, not a convenience: later rules
//! are deliberately looser and would false-positive on data an earlier,
//! stricter rule claims. The extreme case is Compact Pro, whose entire
//! signature is the two low-entropy bytes `0x01 0x01` at offset 0; it must
//! stay at the very end of the table.

use super::types::{CodePair, FourCc};
use super::window::ContentWindow;

/// One fixed-offset test within a magic rule.
#[derive(Debug, Clone, Copy)]
pub enum FieldTest {
    /// The exact byte sequence must appear at the field offset.
    Bytes(&'static [u8]),
    /// The single byte at the field offset must be one of the given values.
    OneOf(&'static [u8]),
}

/// A field test anchored at a window-relative offset.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    /// Offset of the field within the window.
    pub offset: usize,
    /// Test applied at that offset.
    pub test: FieldTest,
}

impl Field {
    const fn bytes(offset: usize, expected: &'static [u8]) -> Self {
        Self {
            offset,
            test: FieldTest::Bytes(expected),
        }
    }

    const fn one_of(offset: usize, allowed: &'static [u8]) -> Self {
        Self {
            offset,
            test: FieldTest::OneOf(allowed),
        }
    }

    fn matches(&self, window: &ContentWindow<'_>) -> bool {
        match self.test {
            FieldTest::Bytes(expected) => window.slice(self.offset, expected.len()) == Some(expected),
            FieldTest::OneOf(allowed) => window
                .byte(self.offset)
                .is_some_and(|byte| allowed.contains(&byte)),
        }
    }
}

/// A magic-signature rule: a named format, the fields identifying it, and
/// the (type, creator) pair it classifies to.
#[derive(Debug, Clone, Copy)]
pub struct MagicRule {
    /// Human-readable format name, for diagnostics.
    pub format: &'static str,
    /// Field tests; all must hold for the rule to match.
    pub fields: &'static [Field],
    /// Codes assigned on match.
    pub codes: CodePair,
}

impl MagicRule {
    /// Whether every field of this rule matches the window.
    ///
    /// A field whose byte range extends past the window's valid length is
    /// a non-match, never an error.
    pub fn matches(&self, window: &ContentWindow<'_>) -> bool {
        self.fields.iter().all(|field| field.matches(window))
    }
}

const fn codes(file_type: &[u8; 4], creator: &[u8; 4]) -> CodePair {
    CodePair::new(FourCc::new(*file_type), FourCc::new(*creator))
}

/// StuffIt version bytes accepted by the pre-5 checks: 0x01 for 1.5.x,
/// 0x02 for 1.6 through 4.5.
const SIT_PRE5_VERSIONS: &[u8] = &[0x01, 0x02];

/// Primary-window rules, evaluated in order against the window at file
/// offset 0. First match wins; do not reorder.
pub static PRIMARY_RULES: &[MagicRule] = &[
    // The BinHex banner can technically appear on any line near the start
    // of the file; only the canonical offset is checked here.
    MagicRule {
        format: "BinHex 4.0",
        fields: &[Field::bytes(34, b"BinHex 4.0")],
        codes: codes(b"BINA", b"SITx"),
    },
    MagicRule {
        format: "StuffIt 5",
        fields: &[
            Field::bytes(0, b"StuffIt (c)1997"),
            Field::one_of(82, &[0x05]),
        ],
        codes: codes(b"SITD", b"SIT!"),
    },
    MagicRule {
        format: "StuffIt 1.5-4.5",
        fields: &[
            Field::bytes(0, b"SIT!"),
            Field::bytes(10, b"rLau"),
            Field::one_of(14, SIT_PRE5_VERSIONS),
        ],
        codes: codes(b"SIT!", b"SIT!"),
    },
    // The same archive behind a 128-byte MacBinary header; distinct codes
    // so the wrapper gets decoded first.
    MagicRule {
        format: "MacBinary-wrapped StuffIt",
        fields: &[
            Field::bytes(128, b"SIT!"),
            Field::bytes(138, b"rLau"),
            Field::one_of(142, SIT_PRE5_VERSIONS),
        ],
        codes: codes(b"BINA", b"SITx"),
    },
    MagicRule {
        format: "Disk Copy 4.2",
        fields: &[Field::bytes(52, &[0x01, 0x00])],
        codes: codes(b"dImg", b"dCpy"),
    },
    MagicRule {
        format: "Zip",
        fields: &[Field::bytes(0, b"PK")],
        codes: codes(b"ZIP ", b"IZip"),
    },
    MagicRule {
        format: "MacBinary archive",
        fields: &[Field::bytes(0, b"MAR")],
        codes: codes(b"MARf", b"MARc"),
    },
    // Very loose signature; keep last.
    MagicRule {
        format: "Compact Pro",
        fields: &[Field::bytes(0, &[0x01, 0x01])],
        codes: codes(b"PACT", b"CPCT"),
    },
];

/// The single secondary rule, evaluated against a window read at absolute
/// file offset 1024.
pub static DISK_COPY_6: MagicRule = MagicRule {
    format: "Disk Copy 6",
    fields: &[Field::bytes(0, b"BD")],
    codes: codes(b"DDim", b"ddsk"),
};

/// Evaluate [`PRIMARY_RULES`] in order against the primary window and
/// return the first matching rule, if any.
///
/// Pure function: no rule state is mutated and no side effect occurs
/// besides the returned reference.
pub fn sniff_primary(window: &ContentWindow<'_>) -> Option<&'static MagicRule> {
    PRIMARY_RULES.iter().find(|rule| rule.matches(window))
}

/// Evaluate the secondary-offset rule against a window read at absolute
/// offset 1024.
pub fn sniff_secondary(window: &ContentWindow<'_>) -> Option<&'static MagicRule> {
    DISK_COPY_6.matches(window).then_some(&DISK_COPY_6)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primary(data: &[u8]) -> ContentWindow<'_> {
        ContentWindow::new(data, 0)
    }

    fn sniff_codes(data: &[u8]) -> Option<CodePair> {
        sniff_primary(&primary(data)).map(|rule| rule.codes)
    }

    #[test]
    fn test_zip_signature() {
        assert_eq!(sniff_codes(b"PK\x03\x04"), Some(codes(b"ZIP ", b"IZip")));
    }

    #[test]
    fn test_binhex4_banner_at_offset_34() {
        let mut data = vec![b'x'; 64];
        data[34..44].copy_from_slice(b"BinHex 4.0");
        assert_eq!(sniff_codes(&data), Some(codes(b"BINA", b"SITx")));
    }

    #[test]
    fn test_stuffit5_requires_version_byte() {
        let mut data = vec![0u8; 83];
        data[..15].copy_from_slice(b"StuffIt (c)1997");
        data[82] = 0x05;
        assert_eq!(sniff_codes(&data), Some(codes(b"SITD", b"SIT!")));

        data[82] = 0x04;
        assert_eq!(sniff_codes(&data), None);
    }

    fn stuffit_pre5(version: u8) -> Vec<u8> {
        let mut data = vec![0u8; 32];
        data[..4].copy_from_slice(b"SIT!");
        data[10..14].copy_from_slice(b"rLau");
        data[14] = version;
        data
    }

    #[test]
    fn test_stuffit_pre5_versions() {
        assert_eq!(sniff_codes(&stuffit_pre5(0x01)), Some(codes(b"SIT!", b"SIT!")));
        assert_eq!(sniff_codes(&stuffit_pre5(0x02)), Some(codes(b"SIT!", b"SIT!")));
        // 0x03 is not a known pre-5 version byte.
        assert_eq!(sniff_codes(&stuffit_pre5(0x03)), None);
    }

    #[test]
    fn test_macbinary_wrapped_stuffit_shifted_128() {
        let mut data = vec![0u8; 256];
        data[128..132].copy_from_slice(b"SIT!");
        data[138..142].copy_from_slice(b"rLau");
        data[142] = 0x02;
        assert_eq!(sniff_codes(&data), Some(codes(b"BINA", b"SITx")));
    }

    #[test]
    fn test_disk_copy_42() {
        let mut data = vec![0xFFu8; 64];
        data[52] = 0x01;
        data[53] = 0x00;
        assert_eq!(sniff_codes(&data), Some(codes(b"dImg", b"dCpy")));
    }

    #[test]
    fn test_compact_pro_matches_when_nothing_stricter_does() {
        assert_eq!(sniff_codes(&[0x01, 0x01]), Some(codes(b"PACT", b"CPCT")));
    }

    #[test]
    fn test_stricter_rule_beats_compact_pro() {
        // 0x01 0x01 at offset 0 satisfies Compact Pro, but the Disk Copy
        // 4.2 field at offset 52 is stricter and listed earlier.
        let mut data = vec![0u8; 64];
        data[0] = 0x01;
        data[1] = 0x01;
        data[52] = 0x01;
        data[53] = 0x00;
        assert_eq!(sniff_codes(&data), Some(codes(b"dImg", b"dCpy")));
    }

    #[test]
    fn test_compact_pro_is_last_rule() {
        assert_eq!(PRIMARY_RULES.last().map(|r| r.format), Some("Compact Pro"));
    }

    #[test]
    fn test_out_of_range_fields_do_not_match() {
        // Valid length ends before the BinHex banner offset.
        assert_eq!(sniff_codes(b"BinHex 4.0"), None);
        assert_eq!(sniff_codes(&[]), None);
        // Truncated Zip signature.
        assert_eq!(sniff_codes(b"P"), None);
    }

    #[test]
    fn test_secondary_rule_only_matches_bd_prefix() {
        let window = ContentWindow::new(b"BD\x00\x01", 1024);
        let rule = sniff_secondary(&window);
        assert_eq!(rule.map(|r| r.codes), Some(codes(b"DDim", b"ddsk")));

        let window = ContentWindow::new(b"DB\x00\x01", 1024);
        assert!(sniff_secondary(&window).is_none());
    }

    #[test]
    fn test_rules_are_pure_over_repeated_calls() {
        let data = b"PK\x03\x04";
        let window = primary(data);
        let first = sniff_primary(&window).map(|r| r.codes);
        let second = sniff_primary(&window).map(|r| r.codes);
        assert_eq!(first, second);
    }
}
