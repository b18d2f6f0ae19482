use pretty_assertions::assert_eq;
use tw_diagnostic::{Diagnostic, ErrorCode};
use tw_ir::fixtures::TreeBuilder;
use tw_ir::{
    AttributeDescriptor, ContentKind, SourceLocation, SpanCodeGen, TagHelperDescriptor,
    STRING_TYPE_NAME,
};

use super::*;

/// Leaf for `text`, placed as if it followed `<my-th` on the first line.
fn leaf(text: &str) -> Leaf {
    let mut b = TreeBuilder::at(SourceLocation::new(6, 0, 6));
    match b.markup(text) {
        Node::Leaf(leaf) => leaf,
        Node::Composite(_) => unreachable!(),
    }
}

fn extract(text: &str) -> (Option<AttributeResult>, Vec<Diagnostic>) {
    extract_bound(text, &[])
}

fn extract_bound(
    text: &str,
    descriptors: &[TagHelperDescriptor],
) -> (Option<AttributeResult>, Vec<Diagnostic>) {
    let bound = BoundAttributes::from_descriptors(descriptors);
    let mut sink = Vec::new();
    let result = extract_attribute(&leaf(text), &bound, &mut sink);
    (result, sink)
}

fn value_leaf(result: &AttributeResult) -> &Leaf {
    result.value.as_leaf().unwrap()
}

#[test]
fn double_quoted_value() {
    let (result, diags) = extract(" class=\"btn\"");
    let result = result.unwrap();

    assert!(diags.is_empty());
    assert_eq!(result.name, "class");
    assert_eq!(result.value.content(), "btn");
    assert_eq!(result.value_style, AttributeValueStyle::DoubleQuotes);
    assert_eq!(result.value.start(), SourceLocation::new(14, 0, 14));
}

#[test]
fn single_quoted_value_keeps_inner_whitespace() {
    let (result, _) = extract(" title='a b'");
    let result = result.unwrap();
    assert_eq!(result.name, "title");
    assert_eq!(result.value.content(), "a b");
    assert_eq!(result.value_style, AttributeValueStyle::SingleQuotes);
}

#[test]
fn unquoted_value_starts_after_equals() {
    let (result, _) = extract(" count=5");
    let result = result.unwrap();
    assert_eq!(result.value.content(), "5");
    assert_eq!(result.value_style, AttributeValueStyle::NoQuotes);
    assert_eq!(result.value.start(), SourceLocation::new(13, 0, 13));
}

#[test]
fn minimized_attribute_has_empty_value_after_name() {
    let (result, diags) = extract(" disabled");
    let result = result.unwrap();

    assert!(diags.is_empty());
    assert_eq!(result.name, "disabled");
    assert_eq!(result.value.content(), "");
    assert_eq!(result.value_style, AttributeValueStyle::Minimized);
    assert_eq!(result.value.start(), SourceLocation::new(15, 0, 15));
}

#[test]
fn leading_newline_is_tracked() {
    let (result, _) = extract("\n    disabled");
    assert_eq!(
        result.unwrap().value.start(),
        SourceLocation::new(19, 1, 12)
    );
}

#[test]
fn name_case_is_preserved() {
    let (result, _) = extract(" Asp-For=\"x\"");
    assert_eq!(result.unwrap().name, "Asp-For");
}

#[test]
fn empty_quoted_value() {
    let (result, _) = extract(" a=\"\"");
    let result = result.unwrap();
    assert_eq!(result.value.content(), "");
    assert_eq!(result.value.start(), SourceLocation::new(10, 0, 10));
}

#[test]
fn exactly_one_quote_stripped_from_each_end() {
    let (result, _) = extract(" a=\"\"x\"\"");
    assert_eq!(result.unwrap().value.content(), "\"x\"");
}

#[test]
fn one_sided_quote_is_best_effort() {
    let (result, diags) = extract(" a=\"x");
    assert!(diags.is_empty());
    assert_eq!(result.unwrap().value.content(), "x");

    let (result, _) = extract(" a=x\"");
    assert_eq!(result.unwrap().value.content(), "x\"");
}

#[test]
fn blank_leaf_fails_silently() {
    let (result, diags) = extract("   ");
    assert!(result.is_none());
    assert!(diags.is_empty());
}

#[test]
fn missing_name_is_malformed() {
    let (result, diags) = extract("=\"btn\"");

    assert!(result.is_none());
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E1001);
    assert_eq!(diags[0].location, SourceLocation::new(6, 0, 6));
    assert_eq!(diags[0].length, 6);
}

#[test]
fn whitespace_before_equals_is_malformed() {
    let (result, diags) = extract(" count =\"5\"");
    assert!(result.is_none());
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E1001);
}

#[test]
fn space_before_equals_detection() {
    let detect = |text: &str| has_space_before_equals(&leaf(text).tokens);
    assert!(detect(" count =\"5\""));
    assert!(detect(" count\n=5"));
    assert!(!detect(" count=\"5\""));
    assert!(!detect(" count= \"5\""));
    assert!(!detect(" =\"5\""));
    assert!(!detect(" disabled"));
}

#[test]
fn value_inherits_descriptor_and_kind() {
    let (result, _) = extract(" class=\"btn\"");
    let result = result.unwrap();
    let value = value_leaf(&result);
    assert_eq!(value.kind, ContentKind::Markup);
    assert_eq!(value.code_gen, SpanCodeGen::Markup);
}

#[test]
fn non_string_binding_makes_value_code() {
    let descriptors = [TagHelperDescriptor::new(
        "my-th",
        "MyTagHelper",
        vec![
            AttributeDescriptor::new("count", "System.Int32"),
            AttributeDescriptor::new("title", STRING_TYPE_NAME),
        ],
    )];

    let (count, _) = extract_bound(" COUNT=\"5\"", &descriptors);
    assert_eq!(value_leaf(&count.unwrap()).kind, ContentKind::Code);

    let (title, _) = extract_bound(" title=\"5\"", &descriptors);
    assert_eq!(value_leaf(&title.unwrap()).kind, ContentKind::Markup);
}
