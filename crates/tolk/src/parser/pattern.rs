//! Message patterns and their compilation into fragments.
//!
//! A pattern is either a literal string or a list of segments. Literal
//! strings never interpolate: braces are plain text. Interpolation only
//! happens through explicit argument descriptors:
//!
//! ```json
//! ["Hello, ", {"arg": "name"}, "."]
//! ```

use serde::{Deserialize, Serialize};

use super::ast::{ArgumentRef, CompiledFormatter, FormatOptions, Fragment};
use super::error::PatternError;

/// Author-supplied definition of one message in one locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Pattern {
    /// Literal text, taken verbatim.
    Text(String),
    /// Ordered text and argument segments.
    Segments(Vec<PatternSegment>),
}

/// One element of a segmented pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternSegment {
    Text(String),
    Argument(ArgumentDescriptor),
    /// Anything else found in a catalog document. Rejected by [`parse`].
    Unsupported(serde_json::Value),
}

/// `{"arg": <index|name>, ...options}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArgumentDescriptor {
    pub arg: ArgSelector,
    #[serde(flatten)]
    pub options: FormatOptions,
}

/// The `arg` field of a descriptor: an integer selects by position, a string
/// by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgSelector {
    Index(i64),
    Name(String),
}

impl Pattern {
    /// Start a segmented pattern.
    pub fn segments() -> PatternBuilder {
        PatternBuilder::default()
    }
}

impl From<&str> for Pattern {
    fn from(text: &str) -> Self {
        Pattern::Text(text.to_string())
    }
}

impl From<String> for Pattern {
    fn from(text: String) -> Self {
        Pattern::Text(text)
    }
}

impl From<Vec<PatternSegment>> for Pattern {
    fn from(segments: Vec<PatternSegment>) -> Self {
        Pattern::Segments(segments)
    }
}

/// Fluent construction of segmented patterns from Rust code.
///
/// ```
/// use tolk::parser::{Pattern, parse};
///
/// let pattern = Pattern::segments()
///     .text("Hello, ")
///     .arg("name")
///     .text(".")
///     .build();
/// let compiled = parse(&pattern).unwrap();
/// assert_eq!(compiled.fragments().len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct PatternBuilder {
    segments: Vec<PatternSegment>,
}

impl PatternBuilder {
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.segments.push(PatternSegment::Text(text.into()));
        self
    }

    /// Reference a named argument.
    #[must_use]
    pub fn arg(self, name: impl Into<String>) -> Self {
        self.arg_with(ArgSelector::Name(name.into()), FormatOptions::new())
    }

    /// Reference a positional argument.
    #[must_use]
    pub fn index(self, index: i64) -> Self {
        self.arg_with(ArgSelector::Index(index), FormatOptions::new())
    }

    /// Reference an argument with formatting options.
    #[must_use]
    pub fn arg_with(mut self, arg: ArgSelector, options: FormatOptions) -> Self {
        self.segments
            .push(PatternSegment::Argument(ArgumentDescriptor { arg, options }));
        self
    }

    pub fn build(self) -> Pattern {
        Pattern::Segments(self.segments)
    }
}

/// Compile a pattern into a [`CompiledFormatter`].
///
/// An `arg` must be a non-negative integer or a string. Any other JSON
/// value there (`1.5`, `true`, `null`) makes the whole descriptor an
/// unsupported segment rather than a by-name reference.
///
/// # Errors
///
/// Returns [`PatternError`] for unsupported segments and negative argument
/// indices.
pub fn parse(pattern: &Pattern) -> Result<CompiledFormatter, PatternError> {
    match pattern {
        Pattern::Text(text) => Ok(CompiledFormatter::text(text.clone())),
        Pattern::Segments(segments) => segments
            .iter()
            .enumerate()
            .map(|(position, segment)| compile_segment(position, segment))
            .collect::<Result<Vec<_>, _>>()
            .map(CompiledFormatter::new),
    }
}

fn compile_segment(position: usize, segment: &PatternSegment) -> Result<Fragment, PatternError> {
    match segment {
        PatternSegment::Text(text) => Ok(Fragment::Text(text.clone())),
        PatternSegment::Argument(ArgumentDescriptor { arg, options }) => {
            let reference = match arg {
                ArgSelector::Index(index) => usize::try_from(*index)
                    .map(ArgumentRef::ByIndex)
                    .map_err(|_| PatternError::NegativeIndex {
                        position,
                        index: *index,
                    })?,
                ArgSelector::Name(name) => ArgumentRef::ByName(name.clone()),
            };
            Ok(Fragment::Argument {
                reference,
                options: options.clone(),
            })
        }
        PatternSegment::Unsupported(value) => Err(PatternError::UnsupportedSegment {
            position,
            segment: value.to_string(),
        }),
    }
}
