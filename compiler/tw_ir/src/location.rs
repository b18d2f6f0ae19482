//! Source locations.
//!
//! A [`SourceLocation`] is a point in the document: absolute character
//! index plus zero-based line and column. Markup diagnostics are reported
//! against these, so every node and token carries one.

use std::fmt;

/// A point in the source document.
///
/// All three components are zero-based and count characters, not bytes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct SourceLocation {
    /// Characters from the start of the document.
    pub absolute_index: u32,
    /// Zero-based line number.
    pub line_index: u32,
    /// Zero-based column within the line.
    pub character_index: u32,
}

impl SourceLocation {
    /// The start of the document.
    pub const ZERO: SourceLocation = SourceLocation {
        absolute_index: 0,
        line_index: 0,
        character_index: 0,
    };

    #[inline]
    pub const fn new(absolute_index: u32, line_index: u32, character_index: u32) -> Self {
        SourceLocation {
            absolute_index,
            line_index,
            character_index,
        }
    }

    /// Location immediately after `text`, assuming `text` starts here.
    ///
    /// `\n` and a lone `\r` start a new line; `\r\n` counts as a single
    /// line break.
    #[must_use]
    pub fn advance(self, text: &str) -> SourceLocation {
        let mut location = self;
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            location.absolute_index += 1;
            let breaks_line = c == '\n' || (c == '\r' && chars.peek() != Some(&'\n'));
            if breaks_line {
                location.line_index += 1;
                location.character_index = 0;
            } else {
                location.character_index += 1;
            }
        }
        location
    }
}

impl fmt::Debug for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}:{},{})",
            self.absolute_index, self.line_index, self.character_index
        )
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line_index + 1, self.character_index + 1)
    }
}

/// Character length of `text` as used in diagnostics.
pub fn char_len(text: &str) -> u32 {
    u32::try_from(text.chars().count()).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests;
