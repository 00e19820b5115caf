//! Parse error types.

use thiserror::Error;

/// A malformed message pattern.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    /// A segment that is neither a string nor an argument descriptor.
    #[error("unsupported pattern segment at position {position}: {segment}")]
    UnsupportedSegment { position: usize, segment: String },

    /// An argument descriptor with a negative index.
    #[error("argument index {index} at position {position} must not be negative")]
    NegativeIndex { position: usize, index: i64 },
}

/// A malformed numeric-format spec such as `%.2q`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid number format '{spec}' at offset {offset}: {message}")]
pub struct SpecError {
    pub spec: String,
    pub offset: usize,
    pub message: String,
}
