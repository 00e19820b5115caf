//! Type-directed formatter dispatch.
//!
//! Argument values are rendered by formatters created from an ordered list of
//! factories. The first factory whose `can_handle` accepts a value wins, and
//! the choice is memoized per [`ValueType`] so later values of that type skip
//! the scan.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value as JsonValue;
use tracing::debug;

use crate::interpreter::formatters::{
    ListFormatterFactory, NestedMessageFormatterFactory, NumberFormatterFactory,
    StringFormatterFactory,
};
use crate::interpreter::{PluralLookup, RenderContext, RenderError};
use crate::parser::FormatOptions;
use crate::types::{Value, ValueType};

/// Renders one value as text.
pub trait Formatter {
    fn format(&self, value: &Value, cx: &mut RenderContext<'_>) -> Result<String, RenderError>;
}

/// Creates formatters for the values it can handle.
///
/// Implement this to plug additional value types (dates, currencies, ...)
/// into a [`TranslationService`](crate::TranslationService).
pub trait FormatterFactory: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Whether this factory creates formatters for `value`.
    fn can_handle(&self, value: &Value) -> bool;

    /// Create a formatter for `locale` configured by `options`.
    ///
    /// Factories may hand out a fresh formatter per call or a shared
    /// stateless one.
    fn create_formatter(
        &self,
        locale: &str,
        options: &FormatOptions,
    ) -> Result<Box<dyn Formatter>, RenderError>;
}

/// Ordered factories plus the per-type resolution cache.
pub struct FormatterRegistry {
    factories: Vec<Arc<dyn FormatterFactory>>,
    /// Index into `factories` of the first match per value type.
    cache: RwLock<HashMap<ValueType, usize>>,
}

impl FormatterRegistry {
    /// A registry with no factories at all.
    pub fn empty() -> Self {
        Self {
            factories: Vec::new(),
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// A registry with the built-in factories: string, nested message, list
    /// and number, in that order.
    pub fn with_builtins(plural_lookup: PluralLookup) -> Self {
        let mut registry = Self::empty();
        registry.register(StringFormatterFactory);
        registry.register(NestedMessageFormatterFactory);
        registry.register(ListFormatterFactory);
        registry.register(NumberFormatterFactory::new(plural_lookup));
        registry
    }

    /// Append a factory. It is tried after every factory registered before it
    /// and never replaces a resolution already cached for a type.
    pub fn register(&mut self, factory: impl FormatterFactory + 'static) {
        self.factories.push(Arc::new(factory));
    }

    /// Number of registered factories.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// The factory responsible for `value`, resolving and caching it on the
    /// first encounter of the value's type.
    pub fn factory_for(&self, value: &Value) -> Result<&dyn FormatterFactory, RenderError> {
        let value_type = value.value_type();
        let cached = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&value_type)
            .copied();
        if let Some(index) = cached {
            return Ok(self.factories[index].as_ref());
        }

        let Some(index) = self.factories.iter().position(|f| f.can_handle(value)) else {
            return Err(RenderError::NoFormatter {
                value_type,
                value: format!("{value:?}"),
            });
        };

        // A concurrent first use may have resolved the type already; keep the
        // first entry so every caller agrees.
        let index = *self
            .cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(value_type)
            .or_insert(index);
        let factory = self.factories[index].as_ref();
        debug!(%value_type, factory = factory.name(), "resolved formatter factory");
        Ok(factory)
    }

    /// Create a formatter for `value` in `locale` with `options`.
    pub fn create_formatter(
        &self,
        value: &Value,
        locale: &str,
        options: &FormatOptions,
    ) -> Result<Box<dyn Formatter>, RenderError> {
        self.factory_for(value)?.create_formatter(locale, options)
    }

    /// Dispatch and render `value` in one step.
    pub fn format(
        &self,
        value: &Value,
        locale: &str,
        options: &FormatOptions,
        cx: &mut RenderContext<'_>,
    ) -> Result<String, RenderError> {
        self.create_formatter(value, locale, options)?
            .format(value, cx)
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::with_builtins(PluralLookup::default())
    }
}

/// Reject option keys a factory does not understand.
pub fn check_options(
    formatter: &'static str,
    options: &FormatOptions,
    allowed: &[&str],
) -> Result<(), RenderError> {
    match options.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(unknown) => Err(RenderError::InvalidOption {
            formatter,
            option: unknown.clone(),
            message: if allowed.is_empty() {
                "this formatter takes no options".to_string()
            } else {
                format!("expected one of: {}", allowed.join(", "))
            },
        }),
        None => Ok(()),
    }
}

/// Read an optional string option.
pub fn string_option<'o>(
    formatter: &'static str,
    options: &'o FormatOptions,
    name: &str,
) -> Result<Option<&'o str>, RenderError> {
    match options.get(name) {
        None => Ok(None),
        Some(JsonValue::String(s)) => Ok(Some(s)),
        Some(other) => Err(RenderError::InvalidOption {
            formatter,
            option: name.to_string(),
            message: format!("expected a string, got {other}"),
        }),
    }
}
