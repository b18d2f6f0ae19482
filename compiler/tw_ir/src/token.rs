//! Markup tokens.
//!
//! Tokens are produced by the markup tokenizer upstream of this crate and
//! are never modified here. The rewriter only inspects `kind` and
//! `content`, and uses `start` for location bookkeeping.

use std::fmt;

use super::SourceLocation;

/// A markup token with its starting location.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub content: String,
    pub start: SourceLocation,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, content: impl Into<String>, start: SourceLocation) -> Self {
        Token {
            kind,
            content: content.into(),
            start,
        }
    }

    /// Location immediately after this token.
    pub fn end(&self) -> SourceLocation {
        self.start.advance(&self.content)
    }

    /// Whether the token is `'` or `"`.
    #[inline]
    pub fn is_quote(&self) -> bool {
        self.kind.is_quote()
    }

    /// Whether the token is horizontal or vertical whitespace.
    #[inline]
    pub fn is_whitespace(&self) -> bool {
        matches!(self.kind, TokenKind::Whitespace | TokenKind::NewLine)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?}) @ {:?}", self.kind, self.content, self.start)
    }
}

/// Markup token kinds.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// A run of non-special characters: names, values, words.
    Text,
    /// Spaces and tabs.
    Whitespace,
    /// `\n`, `\r\n`, or `\r`.
    NewLine,
    /// `=`
    Equals,
    /// `'`
    SingleQuote,
    /// `"`
    DoubleQuote,
    /// `<`
    OpenAngle,
    /// `>`
    CloseAngle,
    /// `/`
    ForwardSlash,
    /// `!`
    Bang,
    /// `?`
    QuestionMark,
    /// `@`, switching from markup to code.
    Transition,
    /// Anything the tokenizer did not classify.
    Other,
}

impl TokenKind {
    #[inline]
    pub fn is_quote(self) -> bool {
        matches!(self, TokenKind::SingleQuote | TokenKind::DoubleQuote)
    }

    /// Single-character punctuation kind for `c`, if any.
    pub fn punctuation(c: char) -> Option<TokenKind> {
        let kind = match c {
            '=' => TokenKind::Equals,
            '\'' => TokenKind::SingleQuote,
            '"' => TokenKind::DoubleQuote,
            '<' => TokenKind::OpenAngle,
            '>' => TokenKind::CloseAngle,
            '/' => TokenKind::ForwardSlash,
            '!' => TokenKind::Bang,
            '?' => TokenKind::QuestionMark,
            '@' => TokenKind::Transition,
            _ => return None,
        };
        Some(kind)
    }
}
