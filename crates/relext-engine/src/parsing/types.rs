use super::{escape::push_escaped, normalize::Positioned};

/// The kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Text delimited by blank lines (the default when no marker opens the block).
    Paragraph,
    /// A single line introduced by `#`.
    Heading1,
    /// A single line introduced by `##`.
    Heading2,
}

impl BlockKind {
    /// HTML element name used when rendering this kind.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            BlockKind::Paragraph => "p",
            BlockKind::Heading1 => "h1",
            BlockKind::Heading2 => "h2",
        }
    }
}

/// A parsed block with the position it started at.
///
/// # Invariants
///
/// - `content` holds no raw `<`, `>`, `&`, `"` or `'`
/// - `content` has no leading, trailing or consecutive whitespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub kind: BlockKind,
    /// 0-based line the block started on.
    pub line: usize,
    /// 1-based column the block started at.
    pub column: usize,
    /// HTML-escaped text.
    pub content: String,
}

impl Block {
    /// Opens a block with no content at `at`.
    pub(crate) fn empty(kind: BlockKind, at: Positioned) -> Self {
        Self {
            kind,
            line: at.line,
            column: at.column,
            content: String::new(),
        }
    }

    /// Opens a block at `at` whose content starts with that character.
    pub(crate) fn starting_with(kind: BlockKind, at: Positioned) -> Self {
        let mut block = Self::empty(kind, at);
        push_escaped(&mut block.content, at.ch);
        block
    }
}

/// Blocks in the order they appear in the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl IntoIterator for Document {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
