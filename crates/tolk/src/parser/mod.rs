//! Pattern and numeric-format parsing.
//!
//! Patterns compile into [`CompiledFormatter`]s once, at registration time.
//! Numeric-format specs are parsed when a number is rendered.

pub mod ast;
pub mod error;
mod number_spec;
mod pattern;

pub use ast::*;
pub use error::{PatternError, SpecError};
pub use number_spec::{Number, NumberSpec, parse_number_spec};
pub use pattern::{ArgSelector, ArgumentDescriptor, Pattern, PatternBuilder, PatternSegment, parse};
