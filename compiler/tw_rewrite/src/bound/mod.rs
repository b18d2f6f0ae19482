//! Bound attribute lookup.
//!
//! Merges the attribute descriptors of every tag helper that applies to a
//! tag into one case-insensitive `name -> type name` table. When several
//! tag helpers bind the same attribute, the first descriptor wins.

use rustc_hash::FxHashMap;
use tw_ir::{fold_name, is_string_type, ContentKind, Leaf, TagHelperDescriptor};

/// Expected value types of the attributes bound on one tag.
#[derive(Clone, Debug, Default)]
pub struct BoundAttributes<'a> {
    types: FxHashMap<String, &'a str>,
}

impl<'a> BoundAttributes<'a> {
    pub fn from_descriptors(descriptors: &'a [TagHelperDescriptor]) -> Self {
        let mut types = FxHashMap::default();
        for attribute in descriptors.iter().flat_map(|d| &d.attributes) {
            types
                .entry(fold_name(&attribute.name))
                .or_insert(attribute.type_name.as_str());
        }
        BoundAttributes { types }
    }

    /// Expected type of the attribute `name`, if any tag helper binds it.
    pub fn type_name(&self, name: &str) -> Option<&'a str> {
        self.types.get(&fold_name(name)).copied()
    }

    /// Expected type of `name` when it is bound to a non-string property.
    pub fn non_string_type(&self, name: &str) -> Option<&'a str> {
        self.type_name(name).filter(|ty| !is_string_type(ty))
    }

    /// Mark a value leaf as code when `name` is bound to a non-string
    /// property. Other leaves keep their kind.
    pub fn classify(&self, name: &str, value: Leaf) -> Leaf {
        if self.non_string_type(name).is_some() {
            value.with_kind(ContentKind::Code)
        } else {
            value
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
