use pretty_assertions::assert_eq;
use tw_diagnostic::ErrorCode;
use tw_ir::fixtures::TreeBuilder;
use tw_ir::{AttributeDescriptor, Composite, SourceLocation, TagHelperDescriptor};

use super::*;

fn descriptors() -> Vec<TagHelperDescriptor> {
    vec![TagHelperDescriptor::new(
        "my-th",
        "MyTagHelper",
        vec![AttributeDescriptor::new("count", "System.Int32")],
    )]
}

/// One tag per line: `<my-th count="{value}">`.
fn tags_on_lines(values: &[&str]) -> Vec<Composite> {
    let mut offset = 0;
    values
        .iter()
        .enumerate()
        .map(|(line, value)| {
            let start = SourceLocation::new(offset, u32::try_from(line).unwrap(), 0);
            let mut b = TreeBuilder::at(start);
            let tag = b.tag(|b| {
                vec![
                    b.markup("<my-th"),
                    b.markup(&format!(" count=\"{value}\"")),
                    b.markup(">"),
                ]
            });
            offset = b.location().absolute_index + 1;
            tag
        })
        .collect()
}

fn requests<'a>(
    tags: &'a [Composite],
    descriptors: &'a [TagHelperDescriptor],
) -> Vec<TagRewriteRequest<'a>> {
    tags.iter()
        .map(|tag| TagRewriteRequest::new("my-th", tag, descriptors))
        .collect()
}

#[test]
fn empty_batch() {
    let batch = rewrite_tags(&[], DiagnosticConfig::default());
    assert!(batch.tags.is_empty());
    assert!(batch.diagnostics.is_empty());
}

#[test]
fn tags_come_back_in_request_order() {
    let descriptors = descriptors();
    let tags = tags_on_lines(&["1", "2", "3", "4", "5", "6", "7", "8"]);
    let batch = rewrite_tags(&requests(&tags, &descriptors), DiagnosticConfig::default());

    let values: Vec<_> = batch
        .tags
        .iter()
        .map(|t| t.attributes.get("count").unwrap().value.content())
        .collect();
    assert_eq!(values, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    assert!(batch.diagnostics.is_empty());
}

#[test]
fn diagnostics_are_in_document_order() {
    let descriptors = descriptors();
    let tags = tags_on_lines(&["", "1", "", " ", "2", ""]);
    // Requests arrive back to front.
    let mut reqs = requests(&tags, &descriptors);
    reqs.reverse();

    let batch = rewrite_tags(&reqs, DiagnosticConfig::unlimited());
    let lines: Vec<_> = batch
        .diagnostics
        .iter()
        .map(|d| d.location.line_index)
        .collect();
    assert_eq!(lines, vec![0, 2, 3, 5]);
    assert!(batch.diagnostics.iter().all(|d| d.code == ErrorCode::E2001));
}

#[test]
fn matches_sequential_rewrite() {
    let descriptors = descriptors();
    let tags = tags_on_lines(&["", "x", " ", "", "9"]);
    let reqs = requests(&tags, &descriptors);

    let batch = rewrite_tags(&reqs, DiagnosticConfig::default());

    let mut queue = DiagnosticQueue::new();
    let sequential: Vec<_> = reqs.iter().map(|r| rewrite_tag(r, &mut queue)).collect();
    assert_eq!(batch.tags, sequential);
    assert_eq!(batch.diagnostics, queue.flush());
}

#[test]
fn error_limit_applies_across_tags() {
    let descriptors = descriptors();
    let tags = tags_on_lines(&["", "", "", ""]);
    let config = DiagnosticConfig {
        error_limit: 2,
        deduplicate: true,
    };
    let batch = rewrite_tags(&requests(&tags, &descriptors), config);

    assert_eq!(batch.tags.len(), 4);
    assert_eq!(batch.diagnostics.len(), 2);
}

#[test]
fn identical_reports_are_deduplicated() {
    let descriptors = descriptors();
    let tags = tags_on_lines(&[""]);
    let reqs = vec![requests(&tags, &descriptors)[0]; 3];

    let batch = rewrite_tags(&reqs, DiagnosticConfig::default());
    assert_eq!(batch.tags.len(), 3);
    assert_eq!(batch.diagnostics.len(), 1);

    let batch = rewrite_tags(&reqs, DiagnosticConfig::unlimited());
    assert_eq!(batch.diagnostics.len(), 3);
}
