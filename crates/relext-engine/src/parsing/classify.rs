/// Class of a single input character as seen by the block state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    CarriageReturn,
    LineFeed,
    Tab,
    Space,
    /// `#`, introduces a heading when it starts a block.
    HeadingMarker,
    Other,
}

impl CharClass {
    /// Line feed, tab and space. Carriage returns are normalized away before
    /// segmentation and never reach this check.
    #[must_use]
    pub fn is_whitespace(self) -> bool {
        matches!(self, CharClass::LineFeed | CharClass::Tab | CharClass::Space)
    }

    #[must_use]
    pub fn is_line_break(self) -> bool {
        matches!(self, CharClass::CarriageReturn | CharClass::LineFeed)
    }
}

pub fn classify(c: char) -> CharClass {
    match c {
        '\r' => CharClass::CarriageReturn,
        '\n' => CharClass::LineFeed,
        '\t' => CharClass::Tab,
        ' ' => CharClass::Space,
        '#' => CharClass::HeadingMarker,
        _ => CharClass::Other,
    }
}
