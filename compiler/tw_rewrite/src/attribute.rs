//! Result of reading one attribute.

use tw_ir::{AttributeValueStyle, Node, TagHelperAttribute};

/// A successfully read attribute: its name and its unframed value.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct AttributeResult {
    /// Name as written.
    pub name: String,
    /// Value without name, `=`, or quotes. Starts at the value's location.
    pub value: Node,
    pub value_style: AttributeValueStyle,
}

impl AttributeResult {
    pub fn into_attribute(self) -> TagHelperAttribute {
        TagHelperAttribute {
            name: self.name,
            value: self.value,
            value_style: self.value_style,
        }
    }
}
