//! HTML rendering of a parsed [`Document`].
//!
//! Block content is already escaped by the parser, and the template fragments
//! are trusted, so nothing here escapes.

use std::fmt::Write;

use crate::parsing::{Block, Document};

/// Bytes of markup around each block's content: tag pair, both data
/// attributes and the newline.
const BLOCK_MARKUP_LEN: usize = 48;

/// Renders every block of `document` between the `pre` and `post` fragments.
pub fn render(document: Document, pre: &str, post: &str) -> String {
    let mut out = String::with_capacity(pre.len() + post.len() + body_len_hint(&document));
    out.push_str(pre);
    for block in &document {
        write_block(&mut out, block);
    }
    out.push_str(post);
    out
}

fn write_block(out: &mut String, block: &Block) {
    let tag = block.kind.tag();
    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "<{tag} data-line=\"{}\" data-column=\"{}\">{}</{tag}>",
        block.line, block.column, block.content
    );
}

fn body_len_hint(document: &Document) -> usize {
    document
        .iter()
        .map(|b| b.content.len() + BLOCK_MARKUP_LEN)
        .sum()
}
