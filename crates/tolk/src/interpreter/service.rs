//! The translation service: catalog lookup plus rendering behind one error
//! type.

use bon::bon;

use crate::config::detect_default_locale;
use crate::interpreter::render::render;
use crate::interpreter::{
    Catalog, FailFast, FormatterFactory, FormatterRegistry, LocaleFallback, MissingTextStrategy,
    PluralLookup, RenderContext, RenderError, TranslationError, TruncatingFallback,
};
use crate::keys::BUILTIN_MESSAGES;
use crate::parser::{CompiledFormatter, Pattern, PatternError};
use crate::types::MessageRequest;

/// Default limit for nested message translation.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Turns [`MessageRequest`]s into text.
///
/// The service owns a [`Catalog`] and a [`FormatterRegistry`]. Register
/// messages and factories first (`&mut self`), then share the service for
/// translation (`&self`); it is `Send + Sync`.
///
/// # Example
///
/// ```
/// use tolk::{MessageRequest, TranslationService};
/// use tolk::parser::Pattern;
///
/// let mut service = TranslationService::builder()
///     .default_locale("en_US")
///     .build();
/// service.register("color", "en", "colour").unwrap();
/// service.register("color", "en_US", "color").unwrap();
/// service
///     .register("hello", "en", Pattern::segments().text("Hello, ").arg("name").text(".").build())
///     .unwrap();
///
/// let hello = MessageRequest::new("hello").bind("name", MessageRequest::new("color"));
/// assert_eq!(service.translate(&hello).unwrap(), "Hello, color.");
/// assert_eq!(service.translate_to(&hello, "en").unwrap(), "Hello, colour.");
/// ```
pub struct TranslationService {
    default_locale: String,
    catalog: Catalog,
    formatters: FormatterRegistry,
    max_depth: usize,
}

#[bon]
impl TranslationService {
    /// Build a service.
    ///
    /// - `default_locale`: used when neither the call nor the request names a
    ///   locale, and as the tail of every fallback chain. Detected from the
    ///   environment when omitted (see [`detect_default_locale`]).
    /// - `missing_text`: defaults to [`FailFast`].
    /// - `fallback`: defaults to [`TruncatingFallback`] over the default locale.
    /// - `plural_lookup`: defaults to [`PluralLookup::ByTag`].
    /// - `max_depth`: nested translation limit, defaults to
    ///   [`DEFAULT_MAX_DEPTH`].
    #[builder]
    pub fn new(
        #[builder(into)] default_locale: Option<String>,
        missing_text: Option<Box<dyn MissingTextStrategy>>,
        fallback: Option<Box<dyn LocaleFallback>>,
        #[builder(default)] plural_lookup: PluralLookup,
        #[builder(default = DEFAULT_MAX_DEPTH)] max_depth: usize,
    ) -> Self {
        let default_locale = default_locale.unwrap_or_else(detect_default_locale);
        let fallback =
            fallback.unwrap_or_else(|| Box::new(TruncatingFallback::new(default_locale.clone())));
        let missing_text = missing_text.unwrap_or_else(|| Box::new(FailFast));
        Self {
            catalog: Catalog::new(fallback, missing_text),
            formatters: FormatterRegistry::with_builtins(plural_lookup),
            default_locale,
            max_depth,
        }
    }
}

impl Default for TranslationService {
    fn default() -> Self {
        TranslationService::builder().build()
    }
}

impl TranslationService {
    /// A service with default settings and the given default locale.
    pub fn with_default_locale(locale: impl Into<String>) -> Self {
        TranslationService::builder()
            .default_locale(locale.into())
            .build()
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn formatters(&self) -> &FormatterRegistry {
        &self.formatters
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Parse and register a message pattern. See [`Catalog::register`].
    pub fn register(
        &mut self,
        key: impl Into<String>,
        locale: impl Into<String>,
        pattern: impl Into<Pattern>,
    ) -> Result<(), PatternError> {
        self.catalog.register(key, locale, pattern)
    }

    /// Add a formatter factory after the built-ins and any earlier additions.
    pub fn register_factory(&mut self, factory: impl FormatterFactory + 'static) {
        self.formatters.register(factory);
    }

    /// Register English defaults for the list joiners and number specs under
    /// `locale`: `""`, `", "`, `" and "`, `" or "`, `%d` and `%.2f`.
    pub fn register_builtin_messages(&mut self, locale: &str) {
        for (key, text) in BUILTIN_MESSAGES {
            self.catalog
                .register_compiled(*key, locale, CompiledFormatter::text(*text));
        }
    }

    // =========================================================================
    // Translation
    // =========================================================================

    /// Translate in the request's preferred locale, or the default locale.
    pub fn translate(&self, request: &MessageRequest) -> Result<String, TranslationError> {
        self.translate_opt(request, None)
    }

    /// Translate in `locale`, overriding the request's preferred locale.
    pub fn translate_to(
        &self,
        request: &MessageRequest,
        locale: &str,
    ) -> Result<String, TranslationError> {
        self.translate_opt(request, Some(locale))
    }

    /// Translate with an optional explicit locale.
    ///
    /// The effective locale is `locale`, else the request's preferred
    /// locale, else the default locale.
    pub fn translate_opt(
        &self,
        request: &MessageRequest,
        locale: Option<&str>,
    ) -> Result<String, TranslationError> {
        let locale = locale
            .or(request.preferred_locale())
            .unwrap_or(&self.default_locale);
        let mut cx = RenderContext::new(self, self.max_depth);
        self.translate_within(&mut cx, request, locale)
    }

    /// Translate as part of an ongoing rendering.
    pub(crate) fn translate_within(
        &self,
        cx: &mut RenderContext<'_>,
        request: &MessageRequest,
        locale: &str,
    ) -> Result<String, TranslationError> {
        self.render_request(cx, request, locale)
            .map_err(|source| TranslationError::new(request.clone(), locale, source))
    }

    fn render_request(
        &self,
        cx: &mut RenderContext<'_>,
        request: &MessageRequest,
        locale: &str,
    ) -> Result<String, RenderError> {
        cx.push(request, locale)?;
        let result = self
            .catalog
            .lookup(request, locale)
            .and_then(|formatter| render(&formatter, request, locale, cx));
        cx.pop();
        result
    }
}
