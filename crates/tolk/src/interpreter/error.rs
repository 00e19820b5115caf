//! Error types for catalog loading and translation.

use std::io;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

use crate::parser::{PatternError, SpecError};
use crate::types::{MessageRequest, ValueType};

/// Errors that occur while loading a catalog document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a catalog file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document is not valid JSON or not an object of patterns.
    #[error("invalid catalog document for locale '{locale}': {source}")]
    Json {
        locale: String,
        #[source]
        source: serde_json::Error,
    },

    /// A pattern inside the document is malformed.
    #[error("invalid pattern for '{key}' in locale '{locale}': {source}")]
    Pattern {
        key: String,
        locale: String,
        #[source]
        source: PatternError,
    },
}

/// An error raised while looking up or rendering a message.
///
/// These never cross the [`TranslationService`](crate::TranslationService)
/// boundary directly; they are always wrapped in a [`TranslationError`].
#[derive(Debug, Error)]
pub enum RenderError {
    /// Positional argument index out of range.
    #[error("argument index {index} out of range, message has {len} positional arguments")]
    ArgumentIndex { index: usize, len: usize },

    /// Named argument absent from the request.
    #[error("missing named argument '{name}'{}", format_available(available))]
    ArgumentName {
        name: String,
        available: Vec<String>,
    },

    /// No registered factory handles the value's type.
    #[error("no formatter can handle {value_type} value {value}")]
    NoFormatter {
        value_type: ValueType,
        value: String,
    },

    /// A formatter was handed a value of a type it does not render.
    #[error("{formatter} formatter cannot render {value_type} value")]
    UnexpectedValue {
        formatter: &'static str,
        value_type: ValueType,
    },

    /// No catalog entry for a key along the whole fallback chain.
    #[error(
        "missing text for '{key}' in locale '{locale}' (searched: {}){}",
        searched.join(", "),
        format_suggestions(suggestions)
    )]
    MissingText {
        key: String,
        locale: String,
        searched: Vec<String>,
        suggestions: Vec<String>,
    },

    /// A formatting option is unknown or has the wrong type.
    #[error("invalid option '{option}' for {formatter} formatter: {message}")]
    InvalidOption {
        formatter: &'static str,
        option: String,
        message: String,
    },

    /// A localized numeric-format spec could not be parsed.
    #[error(transparent)]
    NumberSpec(#[from] SpecError),

    /// A message re-entered itself while it was being rendered.
    #[error("cyclic message reference detected: {}", chain.join(" -> "))]
    CyclicReference { chain: Vec<String> },

    /// Nested messages went deeper than the configured limit.
    #[error("maximum message nesting depth {max_depth} exceeded")]
    MaxDepthExceeded { max_depth: usize },

    /// A nested message failed to translate.
    #[error(transparent)]
    Nested(Box<TranslationError>),
}

impl RenderError {
    /// Whether this failure, or the nested failure it wraps, is a missing
    /// text.
    pub fn is_missing_text(&self) -> bool {
        match self {
            RenderError::MissingText { .. } => true,
            RenderError::Nested(nested) => nested.source.is_missing_text(),
            _ => false,
        }
    }
}

impl From<TranslationError> for RenderError {
    fn from(err: TranslationError) -> Self {
        RenderError::Nested(Box::new(err))
    }
}

/// The one error type returned by
/// [`TranslationService::translate`](crate::TranslationService::translate).
///
/// It carries the request, the effective locale and the underlying cause,
/// available through [`std::error::Error::source`].
#[derive(Debug, Error)]
#[error("error translating {request}, locale={locale:?}: {source}")]
pub struct TranslationError {
    pub request: MessageRequest,
    pub locale: String,
    #[source]
    pub source: RenderError,
}

impl TranslationError {
    pub fn new(request: MessageRequest, locale: impl Into<String>, source: RenderError) -> Self {
        Self {
            request,
            locale: locale.into(),
            source,
        }
    }

    /// The innermost render error, following nested translations.
    pub fn root_cause(&self) -> &RenderError {
        match &self.source {
            RenderError::Nested(nested) => nested.root_cause(),
            other => other,
        }
    }

    pub fn is_missing_text(&self) -> bool {
        self.source.is_missing_text()
    }
}

fn format_available(available: &[String]) -> String {
    if available.is_empty() {
        String::new()
    } else {
        format!(", available: {}", available.join(", "))
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute "did you mean" suggestions for a missing key.
///
/// Returns up to 3 keys within edit distance 1 (keys of up to 3 characters)
/// or 2 (longer keys), closest first.
pub fn compute_suggestions(target: &str, available: &[String]) -> Vec<String> {
    let max_distance = if target.len() <= 3 { 1 } else { 2 };
    let mut candidates: Vec<(usize, &String)> = available
        .iter()
        .map(|key| (levenshtein(target, key), key))
        .filter(|(distance, _)| *distance > 0 && *distance <= max_distance)
        .collect();
    candidates.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));
    candidates
        .into_iter()
        .take(3)
        .map(|(_, key)| key.clone())
        .collect()
}
