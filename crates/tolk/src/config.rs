//! Default-locale detection.
//!
//! A service built without an explicit default locale asks, in order:
//! the `TOLK_LOCALE` environment variable, the operating system locale, and
//! finally falls back to `en`. Raw values such as `de_CH.UTF-8` or `en-US`
//! are normalized to the underscore form the catalog uses.

use std::env;

/// Environment variable that overrides the detected default locale.
pub const LOCALE_ENV: &str = "TOLK_LOCALE";

/// Locale used when nothing else yields a usable value.
pub const FALLBACK_LOCALE: &str = "en";

/// Read-only environment access.
pub trait EnvProvider {
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}

/// Source of the host's locale.
pub trait SystemLocale {
    fn system_locale(&self) -> Option<String>;
}

/// Host locale via `sys-locale`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SysLocale;

impl SystemLocale for SysLocale {
    fn system_locale(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// Normalize a raw locale string to `lang[_REGION...]` form.
///
/// Strips encoding (`.UTF-8`) and modifier (`@euro`) suffixes and turns
/// hyphens into underscores. Returns `None` for empty values, the `C` and
/// `POSIX` pseudo-locales, and anything that is not alphanumeric segments.
///
/// ```
/// use tolk::config::normalize_locale;
///
/// assert_eq!(normalize_locale("de_CH.UTF-8").as_deref(), Some("de_CH"));
/// assert_eq!(normalize_locale("en-US").as_deref(), Some("en_US"));
/// assert_eq!(normalize_locale("POSIX"), None);
/// ```
#[must_use]
pub fn normalize_locale(raw: &str) -> Option<String> {
    let stripped = raw.trim().split(['.', '@']).next().unwrap_or_default().trim();
    if stripped.is_empty() || stripped == "C" || stripped == "POSIX" {
        return None;
    }
    let candidate = stripped.replace('-', "_");
    let valid = candidate
        .split('_')
        .all(|segment| !segment.is_empty() && segment.chars().all(|c| c.is_ascii_alphanumeric()));
    valid.then_some(candidate)
}

/// Resolve the default locale from `env`, then `system`, then
/// [`FALLBACK_LOCALE`].
#[must_use]
pub fn resolve_default_locale(env: &impl EnvProvider, system: &impl SystemLocale) -> String {
    let from_env = env.var(LOCALE_ENV);
    let from_system = system.system_locale();
    [from_env.as_deref(), from_system.as_deref()]
        .into_iter()
        .flatten()
        .find_map(normalize_locale)
        .unwrap_or_else(|| FALLBACK_LOCALE.to_string())
}

/// Default locale of the running process.
#[must_use]
pub fn detect_default_locale() -> String {
    resolve_default_locale(&SystemEnv, &SysLocale)
}
