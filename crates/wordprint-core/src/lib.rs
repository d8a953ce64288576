//! PGP Word List codec.
//!
//! Implements the standardized mapping between single bytes (0x00–0xFF) and
//! pairs of phonetically distinct words, used to read binary fingerprints
//! aloud for verbal comparison. Each byte value carries an "even" word and an
//! "odd" word; which one is spoken depends on the byte's position in the
//! sequence, so that adjacent similar-sounding words never appear
//! back-to-back.
//!
//! ## Layers
//!
//! - [`WordTable`]: the canonical 256-entry table with raw lookups in both
//!   directions. Misses are `None` — probing membership is a normal query.
//! - [`WordCodec`]: validated, human-facing conversion between hex strings
//!   and words, with parity-aware sequence encoding. Failures are typed
//!   [`CodecError`] values.

pub mod codec;
pub mod error;
pub mod table;

pub use codec::WordCodec;
pub use error::CodecError;
pub use table::{WordPair, WordTable};
