//! Rewriting many independent tags at once.
//!
//! Tags do not depend on one another, so a batch is rewritten in parallel
//! with Rayon. Each tag gets its own sink; the sinks are merged through a
//! [`DiagnosticQueue`], whose flush puts diagnostics back in document order.

use rayon::prelude::*;
use tracing::debug;
use tw_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue};
use tw_ir::RewrittenTag;

use crate::{rewrite_tag, TagRewriteRequest};

/// Output of [`rewrite_tags`].
#[derive(Clone, Debug, Default)]
pub struct RewriteBatch {
    /// One rewritten tag per request, in request order.
    pub tags: Vec<RewrittenTag>,
    /// Diagnostics from every tag, sorted by location.
    pub diagnostics: Vec<Diagnostic>,
}

/// Rewrite every tag in `requests`.
///
/// Produces the same tags and diagnostics as rewriting the requests one
/// after another into a [`DiagnosticQueue`] built from `config`.
pub fn rewrite_tags(requests: &[TagRewriteRequest<'_>], config: DiagnosticConfig) -> RewriteBatch {
    let results: Vec<(RewrittenTag, Vec<Diagnostic>)> = if requests.len() <= 1 {
        requests.iter().map(rewrite_one).collect()
    } else {
        requests.par_iter().map(rewrite_one).collect()
    };

    let mut queue = DiagnosticQueue::with_config(config);
    let mut tags = Vec::with_capacity(results.len());
    for (tag, diagnostics) in results {
        for diagnostic in diagnostics {
            queue.add(diagnostic);
        }
        tags.push(tag);
    }

    let dropped = queue.dropped_count();
    let diagnostics = queue.flush();
    debug!(
        tags = tags.len(),
        diagnostics = diagnostics.len(),
        dropped,
        "rewrote tag batch"
    );

    RewriteBatch { tags, diagnostics }
}

fn rewrite_one(request: &TagRewriteRequest<'_>) -> (RewrittenTag, Vec<Diagnostic>) {
    let mut sink = Vec::new();
    let tag = rewrite_tag(request, &mut sink);
    (tag, sink)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
