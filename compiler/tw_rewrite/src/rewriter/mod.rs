//! Tag helper start tag rewriting.
//!
//! A start tag arrives as a composite: the `<name` leaf, one child per
//! attribute, and the closing `>` or `/>` leaf. Each attribute child is
//! read by [`extract_attribute`] or [`normalize_attribute_block`] and the
//! results are gathered into an [`AttributeMap`].

use tracing::{debug, trace};
use tw_diagnostic::DiagnosticSink;
use tw_ir::{
    char_len, AttributeMap, Composite, Node, RewrittenTag, SourceLocation, TagHelperDescriptor,
    TokenKind,
};

use crate::{
    extract_attribute, normalize_attribute_block, AttributeError, AttributeResult,
    BoundAttributes,
};

/// One start tag to rewrite, with the tag helpers that apply to it.
#[derive(Copy, Clone, Debug)]
pub struct TagRewriteRequest<'a> {
    pub tag_name: &'a str,
    pub tag: &'a Composite,
    pub descriptors: &'a [TagHelperDescriptor],
}

impl<'a> TagRewriteRequest<'a> {
    pub fn new(
        tag_name: &'a str,
        tag: &'a Composite,
        descriptors: &'a [TagHelperDescriptor],
    ) -> Self {
        TagRewriteRequest {
            tag_name,
            tag,
            descriptors,
        }
    }
}

/// Rewrite one start tag.
///
/// Never fails. Attributes that cannot be read are dropped and reported to
/// `sink`. When two attributes share a name (ignoring case), the later one
/// is kept.
#[tracing::instrument(level = "debug", skip_all, fields(tag = request.tag_name))]
pub fn rewrite_tag(request: &TagRewriteRequest<'_>, sink: &mut dyn DiagnosticSink) -> RewrittenTag {
    let tag = request.tag;
    let bound = BoundAttributes::from_descriptors(request.descriptors);

    // `<name` always leads; `>` or `/>` trails only when the tag is closed.
    let trailing = if has_closing_marker(tag) { 2 } else { 1 };
    let attribute_count = tag.children.len().saturating_sub(trailing);

    let mut attributes = AttributeMap::new();
    let mut dropped = 0usize;
    for child in tag.children.iter().skip(1).take(attribute_count) {
        let result = match child {
            Node::Leaf(leaf) => extract_attribute(leaf, &bound, sink),
            Node::Composite(block) => {
                normalize_attribute_block(request.tag_name, block, &bound, sink)
            }
        };
        let Some(result) = result else {
            trace!(child_start = ?child.start(), "dropped attribute");
            dropped += 1;
            continue;
        };
        trace!(name = %result.name, style = ?result.value_style, "read attribute");

        check_bound_value(request.tag_name, child, &result, &bound, sink);
        attributes.insert(result.into_attribute());
    }

    let self_closing = is_self_closing(tag);
    debug!(
        attributes = attributes.len(),
        dropped,
        self_closing,
        bound = bound.len(),
        "rewrote tag helper start tag"
    );

    RewrittenTag {
        tag_name: request.tag_name.to_string(),
        self_closing,
        start: tag.start,
        attributes,
        descriptors: request.descriptors.to_vec(),
    }
}

/// Report an empty value given to an attribute bound to a non-string
/// property. The attribute is kept either way.
fn check_bound_value(
    tag_name: &str,
    child: &Node,
    result: &AttributeResult,
    bound: &BoundAttributes<'_>,
    sink: &mut dyn DiagnosticSink,
) {
    let Some(type_name) = bound.non_string_type(&result.name) else {
        return;
    };
    if !result.value.is_blank() {
        return;
    }

    let error = AttributeError::EmptyBoundValue {
        attribute: result.name.clone(),
        tag_name: tag_name.to_string(),
        type_name: type_name.to_string(),
    };
    sink.record(error.into_diagnostic(attribute_name_start(child), char_len(&result.name)));
}

/// Whether the tag ends in `>`, i.e. its last child is a leaf whose last
/// token is a close angle.
fn has_closing_marker(tag: &Composite) -> bool {
    tag.children
        .last()
        .and_then(Node::as_leaf)
        .and_then(|leaf| leaf.tokens.last())
        .is_some_and(|token| token.kind == TokenKind::CloseAngle)
}

/// `/>` must be literal: `/ >` is not self-closing.
fn is_self_closing(tag: &Composite) -> bool {
    tag.last_leaf()
        .is_some_and(|leaf| leaf.content().ends_with("/>"))
}

/// Where the attribute name written in `child` begins.
fn attribute_name_start(child: &Node) -> SourceLocation {
    child
        .first_leaf()
        .and_then(|leaf| leaf.tokens.iter().find(|token| !token.is_whitespace()))
        .map_or_else(|| child.start(), |token| token.start)
}
