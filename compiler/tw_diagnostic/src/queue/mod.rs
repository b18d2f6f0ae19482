//! Diagnostic sinks and the collecting queue.
//!
//! Features:
//! - Error limits to prevent overwhelming output
//! - Deduplication of identical reports
//! - Location-sorted flush, so output order does not depend on the order
//!   in which independent tags were rewritten

use crate::Diagnostic;

/// Destination for diagnostics produced during rewriting.
///
/// A single sink may be shared by every tag rewrite in a document, as long
/// as rewrites run one after another. Parallel rewrites use one sink each
/// and merge through a [`DiagnosticQueue`].
pub trait DiagnosticSink {
    fn record(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
    /// Drop diagnostics identical in code, location, and message to one
    /// already queued.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 100,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// rewrite_tag(&request, &mut queue);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    /// Diagnostics rejected by the limit or deduplication.
    dropped: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic to the queue.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if self.limit_reached() || (self.config.deduplicate && self.is_duplicate(&diag)) {
            self.dropped += 1;
            return false;
        }

        self.diagnostics.push(diag);
        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.diagnostics.len() >= self.config.error_limit
    }

    /// Number of diagnostics filtered out since the last flush.
    pub fn dropped_count(&self) -> usize {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Sort diagnostics by location and return them.
    ///
    /// The sort is stable: diagnostics at the same location keep their
    /// insertion order. Clears the queue.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let key = |d: &Diagnostic| (d.location.line_index, d.location.character_index);

        // Already in order in the common sequential case.
        let already_sorted = self
            .diagnostics
            .windows(2)
            .all(|w| key(&w[0]) <= key(&w[1]));
        if !already_sorted {
            self.diagnostics.sort_by_key(key);
        }

        self.dropped = 0;
        std::mem::take(&mut self.diagnostics)
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    fn is_duplicate(&self, diag: &Diagnostic) -> bool {
        self.diagnostics.iter().any(|queued| {
            queued.code == diag.code
                && queued.location == diag.location
                && queued.message == diag.message
        })
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn record(&mut self, diagnostic: Diagnostic) {
        self.add(diagnostic);
    }
}
