use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::Value;

/// A deferred message: which text to show and with which arguments.
///
/// Requests say *what* should be shown. Locale selection and rendering
/// happen later, in [`TranslationService::translate`](crate::TranslationService::translate).
///
/// Named arguments are a name-keyed view of the positional ones. The caller
/// binds them; [`bind`](Self::bind) appends a value to both at once, which is
/// what a call-site helper like [`message!`](crate::message) does.
///
/// Equality compares the key and both argument collections. The preferred
/// locale is ignored.
///
/// # Example
///
/// ```
/// use tolk::MessageRequest;
///
/// let hello = MessageRequest::new("hello").bind("name", "user");
/// assert_eq!(hello.key(), "hello");
/// assert_eq!(hello.args().len(), 1);
/// assert!(hello.named_arg("name").is_some());
///
/// let italian = hello.with_locale("it");
/// assert_eq!(italian.preferred_locale(), Some("it"));
/// assert_eq!(hello.preferred_locale(), None);
/// assert_eq!(hello, italian);
/// ```
#[derive(Debug, Clone)]
pub struct MessageRequest {
    key: String,
    locale: Option<String>,
    args: Vec<Value>,
    named: BTreeMap<String, Value>,
}

impl MessageRequest {
    /// Create a request for `key` without arguments.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            locale: None,
            args: Vec::new(),
            named: BTreeMap::new(),
        }
    }

    /// Append a positional argument.
    #[must_use]
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Set a named argument without touching the positional ones.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.named.insert(name.into(), value.into());
        self
    }

    /// Append a value as the next positional argument and bind it to `name`.
    #[must_use]
    pub fn bind(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.named.insert(name.into(), value.clone());
        self.args.push(value);
        self
    }

    /// A copy of this request that prefers `locale`. The original is untouched.
    #[must_use]
    pub fn with_locale(&self, locale: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
            ..self.clone()
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn preferred_locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }

    pub fn named_args(&self) -> &BTreeMap<String, Value> {
        &self.named
    }

    pub fn named_arg(&self, name: &str) -> Option<&Value> {
        self.named.get(name)
    }
}

impl PartialEq for MessageRequest {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.args == other.args && self.named == other.named
    }
}

/// Debug rendering used for diagnostics and as substitute text for
/// missing translations, e.g. `MessageRequest(hello, ["user"], {name: "user"})`.
impl Display for MessageRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "MessageRequest({}", self.key)?;
        if let Some(locale) = &self.locale {
            write!(f, ", locale={locale:?}")?;
        }
        write!(f, ", {:?}, {{", self.args)?;
        for (i, (name, value)) in self.named.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value:?}")?;
        }
        f.write_str("})")
    }
}
