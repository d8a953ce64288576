//! Codec error types.

use std::num::ParseIntError;

/// Errors from validated codec operations.
///
/// Raw table lookups never produce these; `WordTable` signals a miss with
/// `None` instead, because asking "is this a PGP word" is itself a valid
/// query. Only the hex/word conversion layer treats bad input as an error.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The hex input was malformed, empty, or wider than one byte.
    #[error("invalid hexadecimal value: {reason}")]
    InvalidHexValue {
        reason: &'static str,
        #[source]
        source: Option<ParseIntError>,
    },

    /// The word is not in the PGP word list.
    #[error("word not in the PGP word list: {word:?}")]
    InvalidWord { word: String },

    /// A parsed byte value had no table entry. The table is total over
    /// 0x00–0xFF, so this is unreachable in practice; it exists so a table
    /// miss surfaces as an error rather than a panic.
    #[error("no word pair for byte value {value:#04X}")]
    MissingTableEntry { value: u8 },
}
