//! Advisory narrative boundary.
//!
//! The reconciliation core hands an external collaborator one opaque
//! statistics string and accepts one opaque narrative string back. The
//! collaborator is injected; this crate never constructs or configures a
//! concrete client, and nothing that happens here can affect the CSV
//! output path. Every failure mode degrades to a fixed placeholder.

use tracing::warn;

/// Placeholder when no credential is configured.
pub const UNAVAILABLE_MESSAGE: &str = "AI analysis unavailable (Missing API Key).";
/// Placeholder when the service call fails for any reason.
pub const ERROR_MESSAGE: &str = "Error generating analysis.";
/// Placeholder when the service succeeds but returns nothing usable.
pub const EMPTY_MESSAGE: &str = "No analysis generated.";

/// Errors from the advisory collaborator. Fully contained here; they never
/// propagate past [`narrative_or_fallback`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdvisoryError {
    #[error("advisory credential missing")]
    MissingCredential,
    #[error("advisory service failed: {0}")]
    Service(String),
}

/// The injected collaborator: one operation, opaque text in, opaque text
/// out.
pub trait Summarizer {
    fn summarize(&self, stats_text: &str) -> Result<String, AdvisoryError>;
}

/// The stand-in used when no real client is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl Summarizer for Unavailable {
    fn summarize(&self, _stats_text: &str) -> Result<String, AdvisoryError> {
        Err(AdvisoryError::MissingCredential)
    }
}

/// Call the summarizer and degrade every failure to a placeholder string.
pub fn narrative_or_fallback(summarizer: &dyn Summarizer, stats_text: &str) -> String {
    match summarizer.summarize(stats_text) {
        Ok(narrative) if narrative.trim().is_empty() => EMPTY_MESSAGE.to_string(),
        Ok(narrative) => narrative,
        Err(AdvisoryError::MissingCredential) => UNAVAILABLE_MESSAGE.to_string(),
        Err(error) => {
            warn!(%error, "advisory call failed");
            ERROR_MESSAGE.to_string()
        }
    }
}

/// Holds the most recently resolved narrative, independent of the merge
/// pipeline.
///
/// There is no generation token: when a newer stats object supersedes an
/// in-flight call, whichever response resolves last is kept. Acceptable
/// for advisory-only data; the staleness hazard is documented by the tests
/// below.
#[derive(Debug, Clone, Default)]
pub struct NarrativeCell {
    narrative: Option<String>,
}

impl NarrativeCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a resolved narrative, unconditionally replacing the previous
    /// one.
    pub fn record(&mut self, narrative: String) {
        self.narrative = Some(narrative);
    }

    pub fn latest(&self) -> Option<&str> {
        self.narrative.as_deref()
    }
}
