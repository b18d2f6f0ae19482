//! Error codes for rewriter diagnostics.
//!
//! The first digit gives the category:
//! - E1xxx: structural errors in an attribute's shape
//! - E2xxx: binding errors between an attribute and its tag helper

use std::fmt;

/// Error codes for all rewriter diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Structural Errors (E1xxx)
    /// Tag helper attribute list is malformed
    E1001,
    /// Code is not permitted in a tag helper's attribute declaration
    E1002,
    /// Tag helper attribute has no name
    E1003,

    // Binding Errors (E2xxx)
    /// Empty or whitespace value bound to a non-string attribute
    E2001,
}

impl ErrorCode {
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E2001,
    ];

    /// Get the error code as a string (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests;
