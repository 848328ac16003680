//! The responder trait.

use async_trait::async_trait;

use crate::preferences::Preferences;

/// Trait for turning a research query into free text.
///
/// Responders are fail-soft: `respond` always yields a string, never an
/// error. Implementations convert every internal failure — missing
/// capabilities, network errors, upstream API errors — into a
/// human-readable result string. Callers must treat the output as
/// always-a-string and reserve their own error channels for identity and
/// store failures.
#[async_trait]
pub trait Responder: Send + Sync {
    /// Answer the query, shaped by the user's preferences when present.
    async fn respond(&self, query: &str, preferences: Option<&Preferences>) -> String;

    /// Name of this responder implementation, for logging.
    fn name(&self) -> &str;
}
