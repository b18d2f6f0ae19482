//! Tag helper descriptors.
//!
//! Supplied by the descriptor registry for the tag being rewritten. Only
//! attribute names and their expected type names matter to the rewriter.

/// Fully qualified name of the string type. Attributes bound to any other
/// type have their values treated as code.
pub const STRING_TYPE_NAME: &str = "System.String";

/// A tag helper that applies to a tag name.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TagHelperDescriptor {
    pub tag_name: String,
    /// Fully qualified name of the tag helper type.
    pub type_name: String,
    pub attributes: Vec<AttributeDescriptor>,
}

impl TagHelperDescriptor {
    pub fn new(
        tag_name: impl Into<String>,
        type_name: impl Into<String>,
        attributes: Vec<AttributeDescriptor>,
    ) -> Self {
        TagHelperDescriptor {
            tag_name: tag_name.into(),
            type_name: type_name.into(),
            attributes,
        }
    }
}

/// An attribute a tag helper binds to one of its properties.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct AttributeDescriptor {
    /// Attribute name as written in markup. Matched case-insensitively.
    pub name: String,
    /// Fully qualified name of the property type.
    pub type_name: String,
}

impl AttributeDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        AttributeDescriptor {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Whether `type_name` names the string type.
#[inline]
pub fn is_string_type(type_name: &str) -> bool {
    type_name == STRING_TYPE_NAME
}
