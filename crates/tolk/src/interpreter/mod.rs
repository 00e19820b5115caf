//! Translation engine.
//!
//! Looks up compiled formatters in a locale-scoped catalog and renders
//! their fragments, dispatching each argument value to a formatter chosen
//! by the value's type. Nested message arguments recurse through the same
//! service.

mod catalog;
mod context;
mod dispatch;
mod error;
mod fallback;
mod formatters;
mod missing;
mod plural;
mod render;
mod service;

pub use catalog::Catalog;
pub use context::RenderContext;
pub use dispatch::{Formatter, FormatterFactory, FormatterRegistry};
pub use error::{LoadError, RenderError, TranslationError, compute_suggestions};
pub use fallback::{LocaleFallback, TruncatingFallback};
pub use formatters::{
    ListFormatterFactory, ListKind, NestedMessageFormatterFactory, NumberFormatterFactory,
    StringFormatterFactory,
};
pub use missing::{FailFast, LogAndSubstitute, MissingText, MissingTextStrategy};
pub use plural::{PluralLookup, PluralTag};
pub use render::{render, resolve_argument};
pub use service::{DEFAULT_MAX_DEPTH, TranslationService};
