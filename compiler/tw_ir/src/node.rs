//! Leaf and composite nodes.
//!
//! A [`Leaf`] is an uninterrupted run of tokens of one content kind. A
//! [`Composite`] groups children in document order. Nodes are immutable
//! by convention: passes that need a different descriptor or child list
//! build a new node (see [`Leaf::with_code_gen`]) instead of patching a
//! shared one.

use smallvec::SmallVec;

use crate::{BlockCodeGen, SourceLocation, SpanCodeGen, Token, TokenKind};

/// Whether a leaf is markup text or embedded code.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum ContentKind {
    #[default]
    Markup,
    Code,
}

/// What a composite groups together.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum BlockKind {
    #[default]
    Markup,
    /// A start tag, `<name attrs... >`.
    Tag,
    Expression,
    Statement,
    Template,
}

/// Inline capacity for leaf tokens. Attribute leaves are short.
pub type LeafTokens = SmallVec<[Token; 4]>;

/// A contiguous run of tokens.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Leaf {
    pub kind: ContentKind,
    pub code_gen: SpanCodeGen,
    pub tokens: LeafTokens,
    pub start: SourceLocation,
}

impl Leaf {
    pub fn new(
        kind: ContentKind,
        code_gen: SpanCodeGen,
        tokens: impl IntoIterator<Item = Token>,
        start: SourceLocation,
    ) -> Self {
        Leaf {
            kind,
            code_gen,
            tokens: tokens.into_iter().collect(),
            start,
        }
    }

    /// A leaf with no tokens, used for minimized attribute values.
    pub fn empty(kind: ContentKind, code_gen: SpanCodeGen, start: SourceLocation) -> Self {
        Leaf::new(kind, code_gen, [], start)
    }

    /// Concatenated token text.
    pub fn content(&self) -> String {
        self.tokens.iter().map(|t| t.content.as_str()).collect()
    }

    /// Location immediately after the last token.
    pub fn end(&self) -> SourceLocation {
        self.tokens.last().map_or(self.start, Token::end)
    }

    /// Whether the content is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        self.tokens
            .iter()
            .all(|t| t.content.chars().all(char::is_whitespace))
    }

    /// First token of `kind`.
    pub fn first_of(&self, kind: TokenKind) -> Option<&Token> {
        self.tokens.iter().find(|t| t.kind == kind)
    }

    #[must_use]
    pub fn with_code_gen(mut self, code_gen: SpanCodeGen) -> Self {
        self.code_gen = code_gen;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ContentKind) -> Self {
        self.kind = kind;
        self
    }
}

/// An ordered group of child nodes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Composite {
    pub kind: BlockKind,
    pub code_gen: BlockCodeGen,
    pub children: Vec<Node>,
    pub start: SourceLocation,
}

impl Composite {
    /// Create a composite starting at its first child.
    pub fn new(kind: BlockKind, code_gen: BlockCodeGen, children: Vec<Node>) -> Self {
        let start = children.first().map_or(SourceLocation::ZERO, Node::start);
        Composite {
            kind,
            code_gen,
            children,
            start,
        }
    }

    pub fn content(&self) -> String {
        self.leaves().map(|l| l.content()).collect()
    }

    /// All descendant leaves in document order.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves {
            single: None,
            stack: vec![self.children.iter()],
        }
    }

    pub fn first_leaf(&self) -> Option<&Leaf> {
        self.leaves().next()
    }

    pub fn last_leaf(&self) -> Option<&Leaf> {
        self.children.iter().rev().find_map(Node::last_leaf)
    }

    pub fn is_blank(&self) -> bool {
        self.leaves().all(Leaf::is_blank)
    }
}

/// Either kind of node.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Node {
    Leaf(Leaf),
    Composite(Composite),
}

impl Node {
    pub fn start(&self) -> SourceLocation {
        match self {
            Node::Leaf(leaf) => leaf.start,
            Node::Composite(composite) => composite.start,
        }
    }

    pub fn content(&self) -> String {
        match self {
            Node::Leaf(leaf) => leaf.content(),
            Node::Composite(composite) => composite.content(),
        }
    }

    pub fn leaves(&self) -> Leaves<'_> {
        match self {
            Node::Leaf(leaf) => Leaves {
                single: Some(leaf),
                stack: Vec::new(),
            },
            Node::Composite(composite) => composite.leaves(),
        }
    }

    pub fn first_leaf(&self) -> Option<&Leaf> {
        self.leaves().next()
    }

    pub fn last_leaf(&self) -> Option<&Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Composite(composite) => composite.last_leaf(),
        }
    }

    /// Whether the flattened content is empty or whitespace only.
    pub fn is_blank(&self) -> bool {
        match self {
            Node::Leaf(leaf) => leaf.is_blank(),
            Node::Composite(composite) => composite.is_blank(),
        }
    }

    pub fn as_leaf(&self) -> Option<&Leaf> {
        match self {
            Node::Leaf(leaf) => Some(leaf),
            Node::Composite(_) => None,
        }
    }

    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Node::Leaf(_) => None,
            Node::Composite(composite) => Some(composite),
        }
    }
}

impl From<Leaf> for Node {
    fn from(leaf: Leaf) -> Self {
        Node::Leaf(leaf)
    }
}

impl From<Composite> for Node {
    fn from(composite: Composite) -> Self {
        Node::Composite(composite)
    }
}

/// Depth-first iterator over descendant leaves.
pub struct Leaves<'a> {
    single: Option<&'a Leaf>,
    stack: Vec<std::slice::Iter<'a, Node>>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Leaf;

    fn next(&mut self) -> Option<&'a Leaf> {
        if let Some(leaf) = self.single.take() {
            return Some(leaf);
        }
        loop {
            let next = self.stack.last_mut()?.next();
            match next {
                Some(Node::Leaf(leaf)) => return Some(leaf),
                Some(Node::Composite(composite)) => self.stack.push(composite.children.iter()),
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}
