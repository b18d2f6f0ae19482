//! Tree builder for tests.
//!
//! Splits markup fragments into tokens the way the markup tokenizer does
//! for attribute-level text, assigning exact locations as it goes. Each
//! call continues where the previous one stopped, so nodes built in
//! document order get the locations a real parse would give them.

use crate::{
    BlockCodeGen, BlockKind, Composite, ContentKind, Leaf, Node, SourceLocation, SpanCodeGen,
    Token, TokenKind,
};

/// Builds token trees with consistent source locations.
#[derive(Clone, Debug, Default)]
pub struct TreeBuilder {
    location: SourceLocation,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building at `location`.
    pub fn at(location: SourceLocation) -> Self {
        TreeBuilder { location }
    }

    /// Where the next token will start.
    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// Tokenize `text` at the current location and move past it.
    pub fn tokens(&mut self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut rest = text;
        while let Some(c) = rest.chars().next() {
            let (kind, len) = if let Some(kind) = TokenKind::punctuation(c) {
                (kind, c.len_utf8())
            } else if rest.starts_with("\r\n") {
                (TokenKind::NewLine, 2)
            } else if c == '\n' || c == '\r' {
                (TokenKind::NewLine, 1)
            } else if c.is_whitespace() {
                (TokenKind::Whitespace, run_len(rest, is_inline_space))
            } else {
                (TokenKind::Text, run_len(rest, is_text_char))
            };
            let (content, tail) = rest.split_at(len);
            let token = Token::new(kind, content, self.location);
            self.location = token.end();
            tokens.push(token);
            rest = tail;
        }
        tokens
    }

    pub fn leaf(&mut self, kind: ContentKind, code_gen: SpanCodeGen, text: &str) -> Node {
        let start = self.location;
        let tokens = self.tokens(text);
        Leaf::new(kind, code_gen, tokens, start).into()
    }

    /// A markup leaf rendered verbatim.
    pub fn markup(&mut self, text: &str) -> Node {
        self.leaf(ContentKind::Markup, SpanCodeGen::Markup, text)
    }

    /// A markup leaf with no descriptor, as attribute framing is parsed.
    pub fn framing(&mut self, text: &str) -> Node {
        self.leaf(ContentKind::Markup, SpanCodeGen::Null, text)
    }

    /// A code leaf rendered as an expression.
    pub fn code(&mut self, text: &str) -> Node {
        self.leaf(ContentKind::Code, SpanCodeGen::Expression, text)
    }

    /// A composite whose children are built by `children`, in order.
    pub fn block(
        &mut self,
        kind: BlockKind,
        code_gen: BlockCodeGen,
        children: impl FnOnce(&mut Self) -> Vec<Node>,
    ) -> Node {
        let start = self.location;
        let children = children(self);
        Composite {
            kind,
            code_gen,
            children,
            start,
        }
        .into()
    }

    /// A start tag composite.
    pub fn tag(&mut self, children: impl FnOnce(&mut Self) -> Vec<Node>) -> Composite {
        let start = self.location;
        Composite {
            kind: BlockKind::Tag,
            code_gen: BlockCodeGen::Null,
            children: children(self),
            start,
        }
    }
}

fn is_inline_space(c: char) -> bool {
    c.is_whitespace() && c != '\n' && c != '\r'
}

fn is_text_char(c: char) -> bool {
    !c.is_whitespace() && TokenKind::punctuation(c).is_none()
}

fn run_len(text: &str, pred: impl Fn(char) -> bool) -> usize {
    text.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(text.len(), |(i, _)| i)
}
