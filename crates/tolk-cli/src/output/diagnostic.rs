//! Miette diagnostics for catalog documents.

use std::io;
use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;
use tolk::{LoadError, PatternError};

/// A problem located inside a catalog document.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(tolk::catalog))]
pub struct CatalogDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl CatalogDiagnostic {
    /// Point at the line and column serde_json reported.
    pub fn from_json_error(path: &Path, content: &str, err: &serde_json::Error) -> Self {
        // Sum of (line_length + 1) for lines before the error line, plus column.
        let offset = content
            .lines()
            .take(err.line().saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>()
            + err.column().saturating_sub(1);

        Self {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset.min(content.len()), 1).into(),
            message: format!("invalid catalog document: {err}"),
            help: Some(
                "a catalog is a JSON object mapping message keys to a string or a list of segments"
                    .to_string(),
            ),
        }
    }

    /// Point at the key whose pattern failed to compile.
    pub fn from_pattern_error(path: &Path, content: &str, key: &str, err: &PatternError) -> Self {
        let quoted = format!("\"{key}\"");
        let span = match content.find(&quoted) {
            Some(offset) => (offset, quoted.len()),
            None => (0, 0),
        };
        let help = match err {
            PatternError::NegativeIndex { .. } => "argument indices start at 0",
            PatternError::UnsupportedSegment { .. } => {
                "segments are strings, or objects with an \"arg\" index or name"
            }
        };

        Self {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: span.into(),
            message: format!("invalid pattern for '{key}': {err}"),
            help: Some(help.to_string()),
        }
    }
}

/// Failures reported by the CLI commands.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("cannot read {}", path.display())]
    #[diagnostic(code(tolk::io))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} has no file stem to use as locale", path.display())]
    #[diagnostic(code(tolk::locale), help("name catalog files after their locale, e.g. en_US.json"))]
    NoLocale { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Catalog(CatalogDiagnostic),

    #[error(transparent)]
    #[diagnostic(code(tolk::load))]
    Load(#[from] LoadError),
}

impl CliError {
    /// Turn a load failure on `content` into a located diagnostic when
    /// possible.
    pub fn from_load(path: &Path, content: &str, err: LoadError) -> Self {
        match &err {
            LoadError::Json { source, .. } => {
                CliError::Catalog(CatalogDiagnostic::from_json_error(path, content, source))
            }
            LoadError::Pattern { key, source, .. } => {
                CliError::Catalog(CatalogDiagnostic::from_pattern_error(path, content, key, source))
            }
            LoadError::Io { .. } => CliError::Load(err),
        }
    }
}
