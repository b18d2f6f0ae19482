//! Tag helper attribute rewriting.
//!
//! Runs after the markup parser has built a token tree for a start tag
//! that one or more tag helpers apply to. For every attribute written on
//! the tag, the rewriter recovers the name and a value node with the
//! `name=` and quote framing removed, and classifies the value as markup
//! or code from the type of the tag helper property it binds to.
//!
//! # Entry points
//!
//! - [`rewrite_tag`] rewrites one tag into a [`tw_ir::RewrittenTag`],
//!   reporting problems to a [`tw_diagnostic::DiagnosticSink`].
//! - [`rewrite_tags`] rewrites many independent tags in parallel.
//!
//! The building blocks are public as well: [`extract_attribute`] reads a
//! single-leaf attribute, [`normalize_attribute_block`] reads an attribute
//! whose value mixes text and code.
//!
//! Rewriting never fails. An attribute that cannot be read is dropped and
//! reported; the tag is still rewritten.

mod attribute;
mod batch;
mod bound;
mod error;
mod extract;
mod location;
mod normalize;
mod rewriter;

pub use attribute::AttributeResult;
pub use batch::{rewrite_tags, RewriteBatch};
pub use bound::BoundAttributes;
pub use error::AttributeError;
pub use extract::extract_attribute;
pub use location::ValueStartTracker;
pub use normalize::{normalize_attribute_block, rebuild_code_gens};
pub use rewriter::{rewrite_tag, TagRewriteRequest};
