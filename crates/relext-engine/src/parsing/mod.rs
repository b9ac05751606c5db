//! # Parsing
//!
//! Single pass over the input characters, turning raw text into a [`Document`].
//!
//! ## Stages
//!
//! Each character flows through three stages before it lands in a block:
//!
//! 1. **Line-ending normalization** (`normalize`): CR and CR+LF become a single
//!    LF, and every character is tagged with its line/column
//! 2. **Classification** (`classify`): each character maps to a [`CharClass`]
//! 3. **Segmentation** (`builder`): `BlockBuilder` runs the block state machine,
//!    collapsing whitespace and escaping content as it appends
//!
//! ## Key Invariants
//!
//! - Parsing never fails; any input yields a (possibly empty) document
//! - Block content is HTML-escaped and has no runs of whitespace
//! - Only the first one or two `#` at a block start select a heading level

pub mod builder;
pub mod classify;
pub mod escape;
pub mod normalize;
pub mod types;

#[cfg(test)]
mod tests;

pub use builder::BlockBuilder;
pub use classify::{CharClass, classify};
pub use normalize::{LineBreaks, Positioned};
pub use types::{Block, BlockKind, Document};

/// Parses text into a document of paragraphs and headings.
pub fn parse(input: &str) -> Document {
    let mut builder = BlockBuilder::new();

    for c in LineBreaks::new(input.chars()) {
        builder.push(c);
    }

    let doc = builder.finish();
    log::debug!("parsed {} blocks from {} bytes", doc.len(), input.len());
    doc
}

/// Parses raw bytes, replacing invalid UTF-8 sequences with U+FFFD.
pub fn parse_bytes(input: &[u8]) -> Document {
    parse(&String::from_utf8_lossy(input))
}
