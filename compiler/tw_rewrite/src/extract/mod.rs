//! Attribute value extraction from a single leaf.
//!
//! Reads `name`, `name=value`, `name='value'`, or `name="value"` out of one
//! leaf in a single left-to-right pass:
//!
//! 1. Whitespace is skipped and the first text token becomes the name.
//! 2. At `=`, an immediately following quote is taken as the opening
//!    delimiter. The value starts right after the `=` or the quote.
//! 3. Everything after that is the value, minus a trailing quote when an
//!    opening quote was consumed.
//!
//! Whitespace between the name and `=` is not supported and is reported
//! as a malformed attribute.

use tracing::trace;
use tw_diagnostic::DiagnosticSink;
use tw_ir::{char_len, AttributeValueStyle, Leaf, LeafTokens, Node, Token, TokenKind};

use crate::{AttributeError, AttributeResult, BoundAttributes, ValueStartTracker};

/// Read one attribute out of `leaf`.
///
/// Returns `None` when no attribute could be read. A leaf holding only
/// whitespace fails silently: it is what an attribute list looks like
/// while the next attribute is still being typed. Anything else that
/// fails is reported as [`AttributeError::Malformed`].
pub fn extract_attribute(
    leaf: &Leaf,
    bound: &BoundAttributes<'_>,
    sink: &mut dyn DiagnosticSink,
) -> Option<AttributeResult> {
    let tokens = &leaf.tokens;
    if has_space_before_equals(tokens) {
        trace!(leaf_start = ?leaf.start, "whitespace before `=`");
        return malformed(leaf, sink);
    }

    let mut tracker = ValueStartTracker::new(leaf.start);
    let mut name = None;
    let mut value_style = AttributeValueStyle::Minimized;
    let mut value_range = None;

    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        match token.kind {
            TokenKind::Equals => {
                tracker.resume_after(token);
                value_style = AttributeValueStyle::NoQuotes;

                let mut value_from = i + 1;
                let mut quoted = false;
                if let Some(quote) = tokens.get(value_from).filter(|t| t.is_quote()) {
                    tracker.resume_after(quote);
                    value_style = if quote.kind == TokenKind::SingleQuote {
                        AttributeValueStyle::SingleQuotes
                    } else {
                        AttributeValueStyle::DoubleQuotes
                    };
                    value_from += 1;
                    quoted = true;
                }

                let mut value_to = tokens.len();
                if quoted && value_to > value_from && tokens[value_to - 1].is_quote() {
                    value_to -= 1;
                }
                value_range = Some(value_from..value_to);
                break;
            }
            TokenKind::Text if name.is_none() => {
                name = Some(token.content.clone());
                tracker.skip(token);
            }
            _ => tracker.skip(token),
        }
        i += 1;
    }

    let Some(name) = name else {
        if leaf.is_blank() {
            trace!(leaf_start = ?leaf.start, "blank attribute fragment");
            return None;
        }
        return malformed(leaf, sink);
    };

    let value_tokens: LeafTokens = value_range
        .map(|range| tokens[range].iter().cloned().collect())
        .unwrap_or_default();
    let value = Leaf {
        kind: leaf.kind,
        code_gen: leaf.code_gen.clone(),
        tokens: value_tokens,
        start: tracker.location(),
    };
    let value = bound.classify(&name, value);

    Some(AttributeResult {
        name,
        value: Node::Leaf(value),
        value_style,
    })
}

/// Whether the name is separated from `=` by whitespace, as in `name ="x"`.
///
/// Unsupported in both attribute forms. The attribute is reported as
/// malformed.
pub(crate) fn has_space_before_equals(tokens: &[Token]) -> bool {
    let Some(equals) = tokens.iter().position(|t| t.kind == TokenKind::Equals) else {
        return false;
    };
    let named = tokens[..equals].iter().any(|t| t.kind == TokenKind::Text);
    named && equals > 0 && tokens[equals - 1].is_whitespace()
}

fn malformed(leaf: &Leaf, sink: &mut dyn DiagnosticSink) -> Option<AttributeResult> {
    sink.record(AttributeError::Malformed.into_diagnostic(leaf.start, char_len(&leaf.content())));
    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
