//! Fingerprint string handling for the `wordprint` binary.
//!
//! The codec lives in `wordprint-core`; this crate only converts between the
//! fingerprint notations key tools print and raw bytes.

use anyhow::Context;

/// Parse a fingerprint as key tools print it: hex pairs separated by colons,
/// whitespace, or nothing (`"aa:bb:cc"`, `"AA BB CC"`, `"aabbcc"`).
pub fn parse_fingerprint(input: &str) -> anyhow::Result<Vec<u8>> {
    let stripped: String = input
        .chars()
        .filter(|c| *c != ':' && !c.is_ascii_whitespace())
        .collect();
    hex::decode(&stripped).with_context(|| format!("not a hex fingerprint: {input:?}"))
}

/// Render bytes as a colon-separated lowercase hex fingerprint.
pub fn format_fingerprint(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(":")
}
