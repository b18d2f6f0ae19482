//! Tagwright IR - token trees and tag helper descriptors.
//!
//! This crate contains the data the tag helper rewriter reads and writes:
//! - Source locations (character index, line, column)
//! - Markup tokens
//! - Leaf and composite nodes with their code-generation descriptors
//! - Tag helper and attribute descriptors
//! - The rewritten tag handed to the code generator
//!
//! Token trees are built upstream by the markup tokenizer and tree
//! builder. Nothing in this crate parses markup; the `fixtures` feature
//! adds a small builder so tests can produce realistic trees.

mod code_gen;
mod descriptor;
mod location;
mod node;
mod tag;
mod token;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub use code_gen::{BlockCodeGen, SpanCodeGen};
pub use descriptor::{is_string_type, AttributeDescriptor, TagHelperDescriptor, STRING_TYPE_NAME};
pub use location::{char_len, SourceLocation};
pub use node::{BlockKind, Composite, ContentKind, Leaf, LeafTokens, Leaves, Node};
pub use tag::{fold_name, AttributeMap, AttributeValueStyle, RewrittenTag, TagHelperAttribute};
pub use token::{Token, TokenKind};
