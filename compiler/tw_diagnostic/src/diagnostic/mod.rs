//! Core diagnostic types.

use std::fmt;

use tw_ir::SourceLocation;

use crate::ErrorCode;

/// A diagnostic anchored at a source location.
///
/// `length` is the number of characters the problem covers, starting at
/// `location`. Editors use it to underline the offending text.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be recorded or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main error message.
    pub message: String,
    pub location: SourceLocation,
    pub length: u32,
    /// Additional notes providing context.
    pub notes: Vec<String>,
    /// Human-readable fixes.
    pub suggestions: Vec<String>,
}

impl Diagnostic {
    /// Create an error diagnostic with no message or location yet.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            location: SourceLocation::ZERO,
            length: 0,
            notes: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Anchor the diagnostic at `location`, covering `length` characters.
    pub fn with_location(mut self, location: SourceLocation, length: u32) -> Self {
        self.location = location;
        self.length = length;
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error [{}]: {}", self.code, self.message)?;
        write!(f, "\n  --> {} ({} chars)", self.location, self.length)?;

        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }

        for suggestion in &self.suggestions {
            write!(f, "\n  = help: {suggestion}")?;
        }

        Ok(())
    }
}
