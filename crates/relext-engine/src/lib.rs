pub mod io;
pub mod parsing;
pub mod render;


// Re-export key types for easier usage
pub use io::*;
pub use parsing::{Block, BlockKind, Document, parse, parse_bytes};
pub use render::render;

/// Parses `input` and renders it between the `pre` and `post` template fragments.
pub fn convert(input: &str, pre: &str, post: &str) -> String {
    render(parse(input), pre, post)
}
