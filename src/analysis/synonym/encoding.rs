//! Encoding declarations and source decoding for thesaurus files.
//!
//! Thesaurus files carry a `# encoding = <name>` header. The declared name is
//! recorded, but sources are always decoded as ISO-8859-15 (Latin-9), which is
//! what the existing data files are written in.

use lazy_static::lazy_static;
use regex::Regex;

/// The encoding every file-backed thesaurus source is decoded with.
pub const SOURCE_ENCODING: &str = "iso-8859-15";

lazy_static! {
    static ref ENCODING_DECLARATION: Regex =
        Regex::new(r"^#\s*encoding\s*=\s*([\w\-]+)").expect("valid encoding pattern");
}

/// Extract the encoding name from a `# encoding = <name>` line.
///
/// The pattern is anchored at the start of the line, so indented headers and
/// headers preceded by other text are not declarations.
pub fn parse_encoding_declaration(line: &str) -> Option<&str> {
    ENCODING_DECLARATION
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether `name` refers to the encoding sources are decoded with.
pub fn is_source_encoding(name: &str) -> bool {
    matches!(
        name.to_ascii_lowercase().replace('_', "-").as_str(),
        "iso-8859-15" | "iso8859-15" | "latin-9" | "latin9" | "l9"
    )
}

/// Decode ISO-8859-15 bytes into a `String`.
///
/// Latin-9 agrees with Latin-1 except for eight code points in the `0xA4..=0xBE`
/// range, which carry the euro sign and a handful of French/Finnish letters.
pub fn decode_latin9(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| latin9_char(b)).collect()
}

fn latin9_char(byte: u8) -> char {
    match byte {
        0xA4 => '\u{20AC}',
        0xA6 => '\u{0160}',
        0xA8 => '\u{0161}',
        0xB4 => '\u{017D}',
        0xB8 => '\u{017E}',
        0xBC => '\u{0152}',
        0xBD => '\u{0153}',
        0xBE => '\u{0178}',
        b => char::from(b),
    }
}
