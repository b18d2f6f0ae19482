use pretty_assertions::assert_eq;

use super::*;
use crate::fixtures::TreeBuilder;

fn attribute(b: &mut TreeBuilder, name: &str, value: &str) -> TagHelperAttribute {
    TagHelperAttribute {
        name: name.to_string(),
        value: b.markup(value),
        value_style: AttributeValueStyle::DoubleQuotes,
    }
}

#[test]
fn lookup_ignores_case() {
    let mut b = TreeBuilder::new();
    let map: AttributeMap = [attribute(&mut b, "Class", "btn")].into_iter().collect();
    assert!(map.contains("class"));
    assert!(map.contains("CLASS"));
    assert_eq!(map.get("cLaSs").unwrap().name, "Class");
}

#[test]
fn later_insert_replaces_earlier() {
    let mut b = TreeBuilder::new();
    let mut map = AttributeMap::new();
    assert!(map.insert(attribute(&mut b, "id", "first")).is_none());
    let replaced = map.insert(attribute(&mut b, "ID", "second")).unwrap();

    assert_eq!(replaced.value.content(), "first");
    assert_eq!(map.len(), 1);
    let current = map.get("id").unwrap();
    assert_eq!(current.name, "ID");
    assert_eq!(current.value.content(), "second");
}

#[test]
fn value_start_is_value_node_start() {
    let mut b = TreeBuilder::at(SourceLocation::new(7, 0, 7));
    let attr = attribute(&mut b, "id", "x");
    assert_eq!(attr.value_start(), SourceLocation::new(7, 0, 7));
}

#[test]
fn string_type_is_ordinal() {
    assert!(crate::is_string_type("System.String"));
    assert!(!crate::is_string_type("system.string"));
    assert!(!crate::is_string_type("string"));
    assert!(!crate::is_string_type("System.Int32"));
}
