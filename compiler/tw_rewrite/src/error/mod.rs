//! Attribute rewrite errors.
//!
//! Every error here is local to one attribute: it is turned into a
//! diagnostic and the rewrite moves on to the next attribute.

use tw_diagnostic::{Diagnostic, ErrorCode};
use tw_ir::SourceLocation;

/// A problem with one attribute of a tag helper element.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum AttributeError {
    #[error("tag helper attributes must be well-formed")]
    Malformed,

    #[error(
        "the tag helper '{tag_name}' must not have code in the attribute declaration area"
    )]
    CodeInDeclaration { tag_name: String },

    #[error("tag helper '{tag_name}' attributes must have a name")]
    MissingName { tag_name: String },

    #[error(
        "attribute '{attribute}' on tag helper element '{tag_name}' requires a value; \
         tag helper bound attributes of type '{type_name}' cannot be empty \
         or contain only whitespace"
    )]
    EmptyBoundValue {
        attribute: String,
        tag_name: String,
        type_name: String,
    },
}

impl AttributeError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AttributeError::Malformed => ErrorCode::E1001,
            AttributeError::CodeInDeclaration { .. } => ErrorCode::E1002,
            AttributeError::MissingName { .. } => ErrorCode::E1003,
            AttributeError::EmptyBoundValue { .. } => ErrorCode::E2001,
        }
    }

    /// Convert into a diagnostic covering `length` characters at `location`.
    pub fn into_diagnostic(self, location: SourceLocation, length: u32) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_location(location, length);
        match self {
            AttributeError::CodeInDeclaration { .. } => diag.with_suggestion(
                "move the code into an attribute value, e.g. `name=\"@value\"`",
            ),
            AttributeError::EmptyBoundValue { .. } => {
                diag.with_note("the attribute is still passed to the tag helper")
            }
            AttributeError::Malformed | AttributeError::MissingName { .. } => diag,
        }
    }
}
