//! Diagnostic system for tag helper rewriting.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Location and length (where it went wrong)
//! - Notes and suggestions (why, and how to fix)
//!
//! Rewriting never aborts. Problems are recorded into a [`DiagnosticSink`]
//! supplied by the caller and the pass carries on with a best-effort
//! result.

mod diagnostic;
mod error_code;
pub mod errors;
pub mod queue;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
pub use queue::{DiagnosticConfig, DiagnosticQueue, DiagnosticSink};
