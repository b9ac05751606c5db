use super::{
    classify::{CharClass, classify},
    escape::push_escaped,
    normalize::Positioned,
    types::{Block, BlockKind, Document},
};

/// Whitespace seen since the last content character of an open paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParagraphGap {
    None,
    White,
    /// One line break, possibly surrounded by spaces and tabs.
    Break,
}

/// Whitespace seen since the last content character of an open heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HeadingGap {
    /// Nothing appended yet; whitespace after the markers is dropped.
    Leading,
    None,
    White,
}

#[derive(Debug)]
enum State {
    Skip,
    /// One `#` seen at a block start; `at` is the marker.
    Heading1Open { at: Positioned },
    /// Two `#` seen at a block start; `at` is the second marker.
    Heading2Open { at: Positioned },
    Paragraph { block: Block, gap: ParagraphGap },
    Heading { block: Block, gap: HeadingGap },
}

/// Streaming block segmenter.
///
/// Receives normalized characters one at a time (see [`LineBreaks`]) and
/// emits a [`Block`] each time one closes. Blocks are built inside the state
/// that owns them and only reach the output once complete.
///
/// [`LineBreaks`]: super::normalize::LineBreaks
pub struct BlockBuilder {
    state: State,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            state: State::Skip,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: Positioned) {
        let class = classify(c.ch);
        let state = std::mem::replace(&mut self.state, State::Skip);

        self.state = match state {
            State::Skip => Self::skip(c, class),
            State::Heading1Open { at } => self.heading_open(BlockKind::Heading1, at, c, class),
            State::Heading2Open { at } => self.heading_open(BlockKind::Heading2, at, c, class),
            State::Paragraph { block, gap } => self.paragraph(block, gap, c, class),
            State::Heading { block, gap } => self.heading(block, gap, c, class),
        };
    }

    pub fn finish(mut self) -> Document {
        // EOF flush
        match std::mem::replace(&mut self.state, State::Skip) {
            // A marker run with nothing after it never opened a block.
            State::Skip | State::Heading1Open { .. } | State::Heading2Open { .. } => {}
            State::Paragraph { block, .. } | State::Heading { block, .. } => self.close(block),
        }
        Document { blocks: self.out }
    }

    fn close(&mut self, block: Block) {
        log::trace!(
            "closed {:?} at {}:{} ({} bytes)",
            block.kind,
            block.line,
            block.column,
            block.content.len()
        );
        self.out.push(block);
    }

    fn skip(c: Positioned, class: CharClass) -> State {
        if class.is_whitespace() {
            return State::Skip;
        }
        match class {
            CharClass::HeadingMarker => State::Heading1Open { at: c },
            _ => State::Paragraph {
                block: Block::starting_with(BlockKind::Paragraph, c),
                gap: ParagraphGap::None,
            },
        }
    }

    fn heading_open(
        &mut self,
        kind: BlockKind,
        at: Positioned,
        c: Positioned,
        class: CharClass,
    ) -> State {
        if class.is_line_break() {
            // Positioned at the last marker, not at the start of the next line
            // where the counters already point after the break.
            self.close(Block::empty(kind, at));
            return State::Skip;
        }
        if class.is_whitespace() {
            return State::Heading {
                block: Block::empty(kind, c),
                gap: HeadingGap::Leading,
            };
        }
        match (kind, class) {
            (BlockKind::Heading1, CharClass::HeadingMarker) => State::Heading2Open { at: c },
            // A third marker is plain content: only two levels exist.
            _ => State::Heading {
                block: Block::starting_with(kind, c),
                gap: HeadingGap::None,
            },
        }
    }

    fn paragraph(
        &mut self,
        mut block: Block,
        gap: ParagraphGap,
        c: Positioned,
        class: CharClass,
    ) -> State {
        let gap = if class.is_line_break() {
            // Blank line
            if gap == ParagraphGap::Break {
                self.close(block);
                return State::Skip;
            }
            ParagraphGap::Break
        } else if class.is_whitespace() {
            match gap {
                ParagraphGap::None => ParagraphGap::White,
                gap => gap,
            }
        } else {
            if gap != ParagraphGap::None {
                block.content.push(' ');
            }
            push_escaped(&mut block.content, c.ch);
            ParagraphGap::None
        };
        State::Paragraph { block, gap }
    }

    fn heading(
        &mut self,
        mut block: Block,
        gap: HeadingGap,
        c: Positioned,
        class: CharClass,
    ) -> State {
        if class.is_line_break() {
            self.close(block);
            return State::Skip;
        }

        let gap = if class.is_whitespace() {
            match gap {
                HeadingGap::None => HeadingGap::White,
                gap => gap,
            }
        } else {
            if gap == HeadingGap::White {
                block.content.push(' ');
            }
            push_escaped(&mut block.content, c.ch);
            HeadingGap::None
        };
        State::Heading { block, gap }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
