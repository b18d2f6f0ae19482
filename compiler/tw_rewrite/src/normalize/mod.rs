//! Normalization of attributes with structured values.
//!
//! An attribute whose value mixes literal text and code arrives as a
//! composite: a `name="` framing leaf, the value pieces, and a closing
//! quote leaf. The framing is stripped, and the descriptors the markup
//! parser attached for ordinary HTML attributes are replaced. A tag helper
//! receives a typed value, so the generated code must not rebuild an HTML
//! attribute string.

use tracing::trace;
use tw_diagnostic::DiagnosticSink;
use tw_ir::{
    char_len, AttributeValueStyle, BlockCodeGen, Composite, ContentKind, Leaf, Node, SpanCodeGen,
    Token, TokenKind,
};

use crate::extract::has_space_before_equals;
use crate::{extract_attribute, AttributeError, AttributeResult, BoundAttributes};

/// Read one attribute out of a composite.
///
/// The first child must be a markup leaf holding at least the name. A
/// composite with a single child is plain text and is read by
/// [`extract_attribute`].
pub fn normalize_attribute_block(
    tag_name: &str,
    block: &Composite,
    bound: &BoundAttributes<'_>,
    sink: &mut dyn DiagnosticSink,
) -> Option<AttributeResult> {
    let Some(first) = block.children.first() else {
        trace!(block_start = ?block.start, "empty attribute block");
        return None;
    };

    let Some(framing) = first.as_leaf().filter(|l| l.kind == ContentKind::Markup) else {
        let error = AttributeError::CodeInDeclaration {
            tag_name: tag_name.to_string(),
        };
        sink.record(error.into_diagnostic(first.start(), char_len(&first.content())));
        return None;
    };

    if block.children.len() == 1 {
        return extract_attribute(framing, bound, sink);
    }

    let Some(name_token) = framing.first_of(TokenKind::Text) else {
        let error = AttributeError::MissingName {
            tag_name: tag_name.to_string(),
        };
        sink.record(error.into_diagnostic(framing.start, char_len(&framing.content())));
        return None;
    };
    if has_space_before_equals(&framing.tokens) {
        trace!(framing_start = ?framing.start, "whitespace before `=`");
        let error = AttributeError::Malformed;
        sink.record(error.into_diagnostic(framing.start, char_len(&framing.content())));
        return None;
    }
    let name = name_token.content.clone();

    let mut children = block.children[1..].to_vec();
    let closes_with_quote = children
        .last()
        .and_then(Node::as_leaf)
        .and_then(|l| l.tokens.last())
        .is_some_and(Token::is_quote);
    if closes_with_quote {
        children.pop();
    }

    let start = children.first().map_or_else(|| framing.end(), Node::start);
    let stripped = Composite {
        kind: block.kind,
        code_gen: block.code_gen.clone(),
        children,
        start,
    };
    let rebuilt = rebuild_code_gens(stripped);

    // A lone leaf is a simple value, classified like a single-leaf attribute.
    let value = if let [Node::Leaf(leaf)] = rebuilt.children.as_slice() {
        Node::Leaf(bound.classify(&name, leaf.clone()))
    } else if bound.non_string_type(&name).is_some() {
        Node::Composite(retag_as_code(rebuilt))
    } else {
        Node::Composite(rebuilt)
    };

    Some(AttributeResult {
        name,
        value,
        value_style: framing_style(framing),
    })
}

/// Replace HTML attribute descriptors throughout `block`.
///
/// - Attribute and dynamic attribute composites get [`BlockCodeGen::Null`].
/// - Literal attribute leaves get their value's generator, or
///   [`SpanCodeGen::Markup`] when the value is plain text.
/// - Under a dynamic attribute composite, [`SpanCodeGen::Null`] leaves get
///   [`SpanCodeGen::Markup`]. Dynamic attribute rendering treats them as
///   synthesized markup, which they are not inside a tag helper attribute.
///
/// Returns a new tree. Applying it to its own output changes nothing.
pub fn rebuild_code_gens(block: Composite) -> Composite {
    let Composite {
        kind,
        code_gen,
        children,
        start,
    } = block;

    let is_dynamic = code_gen.is_dynamic_attribute();
    let code_gen = if code_gen.is_attribute() {
        BlockCodeGen::Null
    } else {
        code_gen
    };

    let children = children
        .into_iter()
        .map(|child| match child {
            Node::Composite(composite) => Node::Composite(rebuild_code_gens(composite)),
            Node::Leaf(leaf) => Node::Leaf(rebuild_leaf(leaf, is_dynamic)),
        })
        .collect();

    Composite {
        kind,
        code_gen,
        children,
        start,
    }
}

fn rebuild_leaf(leaf: Leaf, parent_is_dynamic: bool) -> Leaf {
    let replacement = match &leaf.code_gen {
        SpanCodeGen::LiteralAttribute {
            value_generator, ..
        } => Some(
            value_generator
                .as_deref()
                .cloned()
                .unwrap_or(SpanCodeGen::Markup),
        ),
        code_gen if parent_is_dynamic && code_gen.is_null() => Some(SpanCodeGen::Markup),
        _ => None,
    };
    match replacement {
        Some(code_gen) => leaf.with_code_gen(code_gen),
        None => leaf,
    }
}

/// Mark every markup leaf of a non-string bound value as code.
fn retag_as_code(block: Composite) -> Composite {
    let children = block
        .children
        .into_iter()
        .map(|child| match child {
            Node::Composite(composite) => Node::Composite(retag_as_code(composite)),
            Node::Leaf(leaf) => Node::Leaf(leaf.with_kind(ContentKind::Code)),
        })
        .collect();
    Composite { children, ..block }
}

/// Quote style from the `name="` framing leaf.
fn framing_style(framing: &Leaf) -> AttributeValueStyle {
    match framing.tokens.last().map(|t| t.kind) {
        Some(TokenKind::DoubleQuote) => AttributeValueStyle::DoubleQuotes,
        Some(TokenKind::SingleQuote) => AttributeValueStyle::SingleQuotes,
        Some(TokenKind::Equals) => AttributeValueStyle::NoQuotes,
        _ => AttributeValueStyle::Minimized,
    }
}
