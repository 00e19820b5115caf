//! Strategies for messages that have no catalog entry.

use tracing::warn;

use crate::interpreter::error::compute_suggestions;
use crate::interpreter::{Catalog, RenderError};
use crate::parser::CompiledFormatter;
use crate::types::MessageRequest;

/// A lookup that found nothing along the whole fallback chain.
pub struct MissingText<'a> {
    pub request: &'a MessageRequest,
    pub locale: &'a str,
    /// The fallback chain that was searched, in order.
    pub searched: &'a [String],
    pub catalog: &'a Catalog,
}

impl MissingText<'_> {
    /// Keys close to the missing one, across the searched locales.
    pub fn suggestions(&self) -> Vec<String> {
        let mut known: Vec<String> = self
            .searched
            .iter()
            .flat_map(|locale| self.catalog.keys(locale))
            .map(ToString::to_string)
            .collect();
        known.sort();
        known.dedup();
        compute_suggestions(self.request.key(), &known)
    }

    /// The failure reported by [`FailFast`].
    pub fn to_error(&self) -> RenderError {
        RenderError::MissingText {
            key: self.request.key().to_string(),
            locale: self.locale.to_string(),
            searched: self.searched.to_vec(),
            suggestions: self.suggestions(),
        }
    }
}

/// Decides what to render when a message has no catalog entry.
///
/// The returned formatter is rendered in place of a catalog hit.
pub trait MissingTextStrategy: Send + Sync {
    fn apply(&self, missing: &MissingText<'_>) -> Result<CompiledFormatter, RenderError>;
}

/// Fail on missing texts. Catches problems early during development.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailFast;

impl MissingTextStrategy for FailFast {
    fn apply(&self, missing: &MissingText<'_>) -> Result<CompiledFormatter, RenderError> {
        Err(missing.to_error())
    }
}

/// Log a warning and render the request's debug form instead.
///
/// Keeps an application usable in production when a translation is missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAndSubstitute;

impl MissingTextStrategy for LogAndSubstitute {
    fn apply(&self, missing: &MissingText<'_>) -> Result<CompiledFormatter, RenderError> {
        warn!(
            key = missing.request.key(),
            locale = missing.locale,
            searched = ?missing.searched,
            "missing text"
        );
        Ok(CompiledFormatter::text(missing.request.to_string()))
    }
}
