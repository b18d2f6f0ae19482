//! Rewritten tag output.
//!
//! The result of rewriting one tag helper start tag, consumed by the code
//! generator.

use rustc_hash::FxHashMap;

use crate::{Node, SourceLocation, TagHelperDescriptor};

/// How an attribute value was delimited in source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum AttributeValueStyle {
    #[default]
    DoubleQuotes,
    SingleQuotes,
    /// `name=value`
    NoQuotes,
    /// `name` with no `=` at all.
    Minimized,
}

/// One attribute of a rewritten tag.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TagHelperAttribute {
    /// Name as written (case preserved).
    pub name: String,
    /// Value with name, `=`, and quote framing removed.
    pub value: Node,
    pub value_style: AttributeValueStyle,
}

impl TagHelperAttribute {
    /// Where the value starts in source.
    pub fn value_start(&self) -> SourceLocation {
        self.value.start()
    }
}

/// Attributes keyed by case-insensitive name.
///
/// Inserting an attribute whose name matches an existing one (ignoring
/// case) replaces it, name spelling included.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct AttributeMap {
    entries: FxHashMap<String, TagHelperAttribute>,
}

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, returning the attribute this one replaced.
    pub fn insert(&mut self, attribute: TagHelperAttribute) -> Option<TagHelperAttribute> {
        self.entries.insert(fold_name(&attribute.name), attribute)
    }

    pub fn get(&self, name: &str) -> Option<&TagHelperAttribute> {
        self.entries.get(&fold_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&fold_name(name))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attributes in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &TagHelperAttribute> {
        self.entries.values()
    }
}

impl FromIterator<TagHelperAttribute> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = TagHelperAttribute>>(iter: I) -> Self {
        let mut map = AttributeMap::new();
        for attribute in iter {
            map.insert(attribute);
        }
        map
    }
}

/// Key used for case-insensitive attribute lookups.
#[inline]
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// A tag helper start tag after attribute rewriting.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct RewrittenTag {
    pub tag_name: String,
    pub self_closing: bool,
    pub start: SourceLocation,
    pub attributes: AttributeMap,
    pub descriptors: Vec<TagHelperDescriptor>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
