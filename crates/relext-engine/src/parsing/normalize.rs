use std::iter::Peekable;

use super::classify::{CharClass, classify};

/// A character with the line/column it was read at.
///
/// Line breaks are always reported as `'\n'`, whichever convention the
/// input used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Positioned {
    pub ch: char,
    /// 0-based line index.
    pub line: usize,
    /// 1-based column index, counted in raw input characters.
    pub column: usize,
}

/// Iterator adapter folding CR and CR+LF into LF while tracking positions.
///
/// Looks ahead at most one character, and only after a CR.
pub struct LineBreaks<I: Iterator<Item = char>> {
    chars: Peekable<I>,
    line: usize,
    column: usize,
}

impl<I: Iterator<Item = char>> LineBreaks<I> {
    pub fn new(chars: I) -> Self {
        Self {
            chars: chars.peekable(),
            line: 0,
            column: 0,
        }
    }

    fn break_line(&mut self) {
        self.line += 1;
        self.column = 0;
    }
}

impl<I: Iterator<Item = char>> Iterator for LineBreaks<I> {
    type Item = Positioned;

    fn next(&mut self) -> Option<Positioned> {
        let ch = self.chars.next()?;
        self.column += 1;

        let at = Positioned {
            ch,
            line: self.line,
            column: self.column,
        };

        match classify(ch) {
            CharClass::CarriageReturn => {
                // CR+LF counts as one break
                self.chars.next_if_eq(&'\n');
                self.break_line();
                Some(Positioned { ch: '\n', ..at })
            }
            CharClass::LineFeed => {
                self.break_line();
                Some(at)
            }
            _ => Some(at),
        }
    }
}
