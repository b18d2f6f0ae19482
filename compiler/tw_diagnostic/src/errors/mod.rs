//! Embedded error documentation, one markdown page per error code.
//!
//! Each error code has a markdown file in this directory explaining the
//! error with an example and a fix. They are embedded at compile time.
//!
//! # Adding New Documentation
//!
//! 1. Create a new file `EXXXX.md` in this directory
//! 2. Add an entry to the `DOCS` array below

use crate::ErrorCode;

/// Registry of embedded error documentation.
pub struct ErrorDocs;

impl ErrorDocs {
    /// Get the markdown documentation for an error code.
    pub fn get(code: ErrorCode) -> Option<&'static str> {
        DOCS.iter().find(|(c, _)| *c == code).map(|(_, doc)| *doc)
    }
}

static DOCS: &[(ErrorCode, &str)] = &[
    // Structural errors (E1xxx)
    (ErrorCode::E1001, include_str!("E1001.md")),
    (ErrorCode::E1002, include_str!("E1002.md")),
    (ErrorCode::E1003, include_str!("E1003.md")),
    // Binding errors (E2xxx)
    (ErrorCode::E2001, include_str!("E2001.md")),
];

#[cfg(test)]
mod tests;
