//! Validated hex/word conversion with parity selection.

use crate::error::CodecError;
use crate::table::{WordPair, WordTable};

/// Human-facing codec over the canonical word table.
///
/// Owns its [`WordTable`]; construct once and share by reference. Every
/// operation is a pure lookup over immutable data.
pub struct WordCodec {
    table: WordTable,
}

impl WordCodec {
    pub fn new() -> Self {
        Self {
            table: WordTable::new(),
        }
    }

    /// Direct access to the underlying table, for raw membership probes.
    pub const fn table(&self) -> &WordTable {
        &self.table
    }

    /// The even word for a one-byte hex string (e.g. `"0A"` -> `"allow"`).
    ///
    /// Input is trimmed, case-insensitive, and must be 1–2 hex digits with
    /// no `0x` prefix.
    pub fn even_word_for_hex(&self, hex: &str) -> Result<&'static str, CodecError> {
        let value = parse_hex_byte(hex)?;
        Ok(self.pair_for(value)?.even_word())
    }

    /// The odd word for a one-byte hex string (e.g. `"21"` -> `"Camelot"`).
    pub fn odd_word_for_hex(&self, hex: &str) -> Result<&'static str, CodecError> {
        let value = parse_hex_byte(hex)?;
        Ok(self.pair_for(value)?.odd_word())
    }

    /// The hex value for a word, looked up case-insensitively.
    ///
    /// Output is uppercase with no prefix and no zero-padding: byte 0x0A
    /// renders `"A"`, not `"0A"`. The asymmetry with the 2-character input
    /// convention is preserved deliberately for compatibility with the
    /// original converter's output.
    pub fn hex_for_word(&self, word: &str) -> Result<String, CodecError> {
        self.table
            .byte_for_word(word)
            .map(|value| format!("{value:X}"))
            .ok_or_else(|| CodecError::InvalidWord {
                word: word.to_owned(),
            })
    }

    /// Verbalize a byte sequence, alternating even/odd words by position.
    pub fn encode(&self, bytes: &[u8]) -> Vec<&'static str> {
        bytes
            .iter()
            .enumerate()
            .map(|(position, &byte)| {
                let pair = self.table.pair_for_byte(byte);
                if position % 2 == 0 {
                    pair.even_word()
                } else {
                    pair.odd_word()
                }
            })
            .collect()
    }

    /// Convert a word sequence back to bytes.
    ///
    /// Words resolve case-insensitively; the first unrecognized word fails
    /// the whole conversion.
    pub fn decode<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<u8>, CodecError> {
        words
            .iter()
            .map(|word| {
                let word = word.as_ref();
                self.table
                    .byte_for_word(word)
                    .ok_or_else(|| CodecError::InvalidWord {
                        word: word.to_owned(),
                    })
            })
            .collect()
    }

    fn pair_for(&self, value: u8) -> Result<WordPair, CodecError> {
        // Unreachable with a total table; kept as an error rather than a panic.
        self.table
            .words_for_byte(i32::from(value))
            .ok_or(CodecError::MissingTableEntry { value })
    }
}

impl Default for WordCodec {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a 1–2 character hex string into a byte.
///
/// Validation order matters and short-circuits: trim, reject empty, reject
/// anything longer than 2 characters (so oversized values like `"100"`
/// never reach the parser), then parse base-16. The length cap means a
/// successful parse is always in range; `"FF"` parses to 255.
fn parse_hex_byte(hex: &str) -> Result<u8, CodecError> {
    let trimmed = hex.trim();
    if trimmed.is_empty() {
        return Err(CodecError::InvalidHexValue {
            reason: "empty string",
            source: None,
        });
    }
    if trimmed.len() > 2 {
        return Err(CodecError::InvalidHexValue {
            reason: "value too large",
            source: None,
        });
    }
    // from_str_radix tolerates a leading '+'; a signed hex byte is not valid
    // input here.
    if trimmed.starts_with(['+', '-']) {
        return Err(CodecError::InvalidHexValue {
            reason: "not valid hexadecimal",
            source: None,
        });
    }
    u8::from_str_radix(trimmed, 16).map_err(|source| CodecError::InvalidHexValue {
        reason: "not valid hexadecimal",
        source: Some(source),
    })
}
