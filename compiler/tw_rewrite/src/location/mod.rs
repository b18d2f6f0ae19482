//! Value-start location accumulator.
//!
//! While scanning an attribute leaf, the rewriter has to know where the
//! value begins, even when there is no value at all (`disabled`). The
//! tracker starts at the leaf's start and is moved forward token by token.

use tw_ir::{SourceLocation, Token};

/// Running estimate of where an attribute value starts.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ValueStartTracker {
    location: SourceLocation,
}

impl ValueStartTracker {
    pub fn new(start: SourceLocation) -> Self {
        ValueStartTracker { location: start }
    }

    pub fn location(&self) -> SourceLocation {
        self.location
    }

    /// Move past a token that precedes the value.
    pub fn skip(&mut self, token: &Token) {
        self.location = self.location.advance(&token.content);
    }

    /// Jump to the end of `token`, wherever the tracker currently is.
    ///
    /// Used after `=` and after an opening quote, whose own locations are
    /// exact.
    pub fn resume_after(&mut self, token: &Token) {
        self.location = token.end();
    }
}

#[cfg(test)]
mod tests;
