//! Locale fallback strategies.

/// Determines the order in which locales are searched for a message.
pub trait LocaleFallback: Send + Sync {
    /// Ordered candidate locales for `requested`, most specific first.
    fn apply(&self, requested: &str) -> Vec<String>;
}

/// Strips `_suffix` segments from the requested locale, then from the
/// default locale.
///
/// `de_CH` with a default of `en_US` searches `de_CH`, `de`, `en_US`, `en`.
/// Duplicates are kept: `en` with a default of `en` searches `en` twice.
///
/// ```
/// use tolk::{LocaleFallback, TruncatingFallback};
///
/// let fallback = TruncatingFallback::new("en_US");
/// assert_eq!(fallback.apply("de_CH"), ["de_CH", "de", "en_US", "en"]);
/// ```
#[derive(Debug, Clone)]
pub struct TruncatingFallback {
    default_locale: String,
}

impl TruncatingFallback {
    pub fn new(default_locale: impl Into<String>) -> Self {
        Self {
            default_locale: default_locale.into(),
        }
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }
}

impl LocaleFallback for TruncatingFallback {
    fn apply(&self, requested: &str) -> Vec<String> {
        let mut chain = Vec::new();
        push_truncations(&mut chain, requested);
        push_truncations(&mut chain, &self.default_locale);
        chain
    }
}

fn push_truncations(chain: &mut Vec<String>, locale: &str) {
    let mut current = locale;
    loop {
        chain.push(current.to_string());
        match current.rfind('_') {
            Some(pos) => current = &current[..pos],
            None => break,
        }
    }
}
