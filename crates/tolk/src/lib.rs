pub mod config;
pub mod interpreter;
pub mod keys;
pub mod parser;
pub mod types;

pub use interpreter::{
    Catalog, FailFast, Formatter, FormatterFactory, FormatterRegistry, LoadError, LocaleFallback,
    LogAndSubstitute, MissingText, MissingTextStrategy, PluralLookup, PluralTag, RenderContext,
    RenderError, TranslationError, TranslationService, TruncatingFallback, compute_suggestions,
};
pub use parser::{CompiledFormatter, Pattern, PatternError};
pub use types::{CustomValue, MessageRequest, Value, ValueType};

/// Creates a [`MessageRequest`] binding each `name = value` pair both
/// positionally and by name, in order.
///
/// Values are converted via `Into<Value>`, so integers, floats, strings,
/// vectors and nested requests can be passed directly.
///
/// # Example
///
/// ```
/// use tolk::{message, Value};
///
/// let request = message!("items.count", count = 3, owner = "Alice");
/// assert_eq!(request.key(), "items.count");
/// assert_eq!(request.args()[0].as_integer(), Some(3));
/// assert_eq!(request.named_arg("owner").and_then(Value::as_str), Some("Alice"));
///
/// let bare = message!("list.empty");
/// assert!(bare.args().is_empty());
/// ```
#[macro_export]
macro_rules! message {
    ($key:expr) => {
        $crate::MessageRequest::new($key)
    };
    ($key:expr, $($name:ident = $value:expr),+ $(,)?) => {
        $crate::MessageRequest::new($key)
            $(.bind(stringify!($name), $value))+
    };
}
