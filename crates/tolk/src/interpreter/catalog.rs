//! Message catalog: compiled formatters keyed by locale and message key.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::interpreter::missing::{MissingText, MissingTextStrategy};
use crate::interpreter::{LoadError, LocaleFallback, RenderError};
use crate::parser::{CompiledFormatter, Pattern, PatternError, parse};
use crate::types::MessageRequest;

/// Compiled messages for one locale.
type MessageTable = HashMap<String, CompiledFormatter>;

/// Store of compiled, locale-scoped message renderings.
///
/// Patterns are parsed when registered. Lookups walk the locale fallback
/// chain and hand total misses to the configured [`MissingTextStrategy`].
/// Registering needs `&mut self`; once the catalog is shared, it is read-only.
///
/// # Example
///
/// ```
/// use tolk::{Catalog, FailFast, MessageRequest, TruncatingFallback};
///
/// let mut catalog = Catalog::new(Box::new(TruncatingFallback::new("en_US")), Box::new(FailFast));
/// catalog.register("color", "en", "colour").unwrap();
/// catalog.register("color", "en_US", "color").unwrap();
///
/// assert!(catalog.find("color", "en_GB").is_some());
/// assert!(catalog.lookup(&MessageRequest::new("colour"), "en").is_err());
/// ```
pub struct Catalog {
    tables: HashMap<String, MessageTable>,
    fallback: Box<dyn LocaleFallback>,
    missing_text: Box<dyn MissingTextStrategy>,
}

impl Catalog {
    pub fn new(
        fallback: Box<dyn LocaleFallback>,
        missing_text: Box<dyn MissingTextStrategy>,
    ) -> Self {
        Self {
            tables: HashMap::new(),
            fallback,
            missing_text,
        }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Parse `pattern` and store it under (`locale`, `key`).
    ///
    /// Registering an existing key replaces its formatter.
    pub fn register(
        &mut self,
        key: impl Into<String>,
        locale: impl Into<String>,
        pattern: impl Into<Pattern>,
    ) -> Result<(), PatternError> {
        let compiled = parse(&pattern.into())?;
        self.register_compiled(key, locale, compiled);
        Ok(())
    }

    /// Store an already compiled formatter.
    pub fn register_compiled(
        &mut self,
        key: impl Into<String>,
        locale: impl Into<String>,
        formatter: CompiledFormatter,
    ) {
        self.tables
            .entry(locale.into())
            .or_default()
            .insert(key.into(), formatter);
    }

    /// Register every pattern of a JSON catalog document for `locale`.
    ///
    /// The document is an object mapping message keys to patterns. Nothing
    /// is registered unless every pattern compiles. Returns the number of
    /// messages registered.
    ///
    /// ```
    /// use tolk::{Catalog, FailFast, TruncatingFallback};
    ///
    /// let mut catalog = Catalog::new(Box::new(TruncatingFallback::new("en")), Box::new(FailFast));
    /// let count = catalog.load_json_str("en", r#"{
    ///     "color": "colour",
    ///     "hello": ["Hello, ", {"arg": "name"}, "."]
    /// }"#).unwrap();
    /// assert_eq!(count, 2);
    /// ```
    pub fn load_json_str(&mut self, locale: &str, content: &str) -> Result<usize, LoadError> {
        let document: BTreeMap<String, Pattern> =
            serde_json::from_str(content).map_err(|source| LoadError::Json {
                locale: locale.to_string(),
                source,
            })?;

        let compiled = document
            .into_iter()
            .map(|(key, pattern)| match parse(&pattern) {
                Ok(formatter) => Ok((key, formatter)),
                Err(source) => Err(LoadError::Pattern {
                    key,
                    locale: locale.to_string(),
                    source,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let count = compiled.len();
        for (key, formatter) in compiled {
            self.register_compiled(key, locale, formatter);
        }
        debug!(locale, count, "loaded catalog document");
        Ok(count)
    }

    /// Read a JSON catalog document from `path` and register it for `locale`.
    pub fn load_json_file(
        &mut self,
        locale: &str,
        path: impl AsRef<Path>,
    ) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_json_str(locale, &content)
    }

    // =========================================================================
    // Lookup
    // =========================================================================

    /// The locales searched for `locale`, in order.
    pub fn fallback_chain(&self, locale: &str) -> Vec<String> {
        self.fallback.apply(locale)
    }

    /// The formatter registered for exactly (`locale`, `key`).
    pub fn get(&self, key: &str, locale: &str) -> Option<&CompiledFormatter> {
        self.tables.get(locale).and_then(|table| table.get(key))
    }

    /// The first formatter for `key` along the fallback chain of `locale`.
    pub fn find(&self, key: &str, locale: &str) -> Option<&CompiledFormatter> {
        self.find_in(key, &self.fallback_chain(locale))
    }

    /// Whether `key` resolves anywhere along the fallback chain of `locale`.
    pub fn contains(&self, key: &str, locale: &str) -> bool {
        self.find(key, locale).is_some()
    }

    fn find_in(&self, key: &str, chain: &[String]) -> Option<&CompiledFormatter> {
        chain.iter().find_map(|candidate| {
            let formatter = self.get(key, candidate)?;
            trace!(key, locale = %candidate, "found message");
            Some(formatter)
        })
    }

    /// Resolve the formatter for `request` in `locale`.
    ///
    /// Falls back to the missing-text strategy when no locale in the chain
    /// has an entry.
    pub fn lookup(
        &self,
        request: &MessageRequest,
        locale: &str,
    ) -> Result<Cow<'_, CompiledFormatter>, RenderError> {
        let chain = self.fallback_chain(locale);
        debug!(key = request.key(), locales = ?chain, "looking up message");
        if let Some(formatter) = self.find_in(request.key(), &chain) {
            return Ok(Cow::Borrowed(formatter));
        }

        let missing = MissingText {
            request,
            locale,
            searched: &chain,
            catalog: self,
        };
        self.missing_text.apply(&missing).map(Cow::Owned)
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Locales with at least one registered message, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Keys registered for exactly `locale`, sorted.
    pub fn keys(&self, locale: &str) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .tables
            .get(locale)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Total number of (locale, key) entries.
    pub fn len(&self) -> usize {
        self.tables.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
