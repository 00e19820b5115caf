//! Built-in formatters: string, nested message, list and number.
//!
//! List joiners and numeric-format specs are themselves catalog messages
//! (see [`keys`](crate::keys)), so they follow the same locale fallback as
//! everything else.

use crate::interpreter::dispatch::{check_options, string_option};
use crate::interpreter::{
    Formatter, FormatterFactory, PluralLookup, PluralTag, RenderContext, RenderError,
};
use crate::keys;
use crate::parser::{FormatOptions, Number, parse_number_spec};
use crate::types::{MessageRequest, Value};

fn unexpected(formatter: &'static str, value: &Value) -> RenderError {
    RenderError::UnexpectedValue {
        formatter,
        value_type: value.value_type(),
    }
}

fn translate_key(
    cx: &mut RenderContext<'_>,
    key: impl Into<String>,
    locale: &str,
) -> Result<String, RenderError> {
    cx.translate(&MessageRequest::new(key), locale)
}

// =============================================================================
// String
// =============================================================================

/// Plain text, rendered verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringFormatterFactory;

struct StringFormatter;

impl FormatterFactory for StringFormatterFactory {
    fn name(&self) -> &'static str {
        "string"
    }

    fn can_handle(&self, value: &Value) -> bool {
        matches!(value, Value::String(_))
    }

    fn create_formatter(
        &self,
        _locale: &str,
        options: &FormatOptions,
    ) -> Result<Box<dyn Formatter>, RenderError> {
        check_options(self.name(), options, &[])?;
        Ok(Box::new(StringFormatter))
    }
}

impl Formatter for StringFormatter {
    fn format(&self, value: &Value, _cx: &mut RenderContext<'_>) -> Result<String, RenderError> {
        value
            .as_str()
            .map(ToString::to_string)
            .ok_or_else(|| unexpected("string", value))
    }
}

// =============================================================================
// Nested message
// =============================================================================

/// Message requests passed as arguments are translated recursively.
#[derive(Debug, Clone, Copy, Default)]
pub struct NestedMessageFormatterFactory;

struct NestedMessageFormatter {
    locale: String,
}

impl FormatterFactory for NestedMessageFormatterFactory {
    fn name(&self) -> &'static str {
        "message"
    }

    fn can_handle(&self, value: &Value) -> bool {
        matches!(value, Value::Message(_))
    }

    fn create_formatter(
        &self,
        locale: &str,
        options: &FormatOptions,
    ) -> Result<Box<dyn Formatter>, RenderError> {
        check_options(self.name(), options, &[])?;
        Ok(Box::new(NestedMessageFormatter {
            locale: locale.to_string(),
        }))
    }
}

impl Formatter for NestedMessageFormatter {
    fn format(&self, value: &Value, cx: &mut RenderContext<'_>) -> Result<String, RenderError> {
        let request = value
            .as_message()
            .ok_or_else(|| unexpected("message", value))?;
        cx.translate(request, &self.locale)
    }
}

// =============================================================================
// List
// =============================================================================

/// Whether the last two list items are joined with "and" or "or".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListKind {
    #[default]
    And,
    Or,
}

impl ListKind {
    fn joiner_key(self) -> &'static str {
        match self {
            ListKind::And => keys::LIST_AND,
            ListKind::Or => keys::LIST_OR,
        }
    }
}

/// Natural-language lists: `a`, `a and b`, `a, b and c`.
///
/// Option `type` selects the final joiner: `"and"` (default) or `"or"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListFormatterFactory;

struct ListFormatter {
    locale: String,
    kind: ListKind,
}

impl FormatterFactory for ListFormatterFactory {
    fn name(&self) -> &'static str {
        "list"
    }

    fn can_handle(&self, value: &Value) -> bool {
        matches!(value, Value::List(_))
    }

    fn create_formatter(
        &self,
        locale: &str,
        options: &FormatOptions,
    ) -> Result<Box<dyn Formatter>, RenderError> {
        check_options(self.name(), options, &["type"])?;
        let kind = match string_option(self.name(), options, "type")? {
            None | Some("and") => ListKind::And,
            Some("or") => ListKind::Or,
            Some(other) => {
                return Err(RenderError::InvalidOption {
                    formatter: self.name(),
                    option: "type".to_string(),
                    message: format!("expected \"and\" or \"or\", got \"{other}\""),
                });
            }
        };
        Ok(Box::new(ListFormatter {
            locale: locale.to_string(),
            kind,
        }))
    }
}

impl Formatter for ListFormatter {
    fn format(&self, value: &Value, cx: &mut RenderContext<'_>) -> Result<String, RenderError> {
        let items = value.as_list().ok_or_else(|| unexpected("list", value))?;
        if items.is_empty() {
            return translate_key(cx, keys::LIST_EMPTY, &self.locale);
        }

        let formatters = cx.service().formatters();
        let no_options = FormatOptions::new();
        let texts = items
            .iter()
            .map(|item| formatters.format(item, &self.locale, &no_options, cx))
            .collect::<Result<Vec<_>, _>>()?;

        let Some((last, head)) = texts.split_last() else {
            return Ok(String::new());
        };
        let head = match head {
            [] => return Ok(last.clone()),
            [single] => single.clone(),
            _ => head.join(translate_key(cx, keys::LIST_COMMA, &self.locale)?.as_str()),
        };
        let joiner = translate_key(cx, self.kind.joiner_key(), &self.locale)?;
        Ok(format!("{head}{joiner}{last}"))
    }
}

// =============================================================================
// Number
// =============================================================================

/// Integers and floats, rendered through the localized `number.int` /
/// `number.float` spec.
///
/// Option `plural` names a base key; the result then becomes
/// `"<number> <plural text>"` with the plural text taken from
/// `<base>.zero|one|two|other` according to the configured [`PluralLookup`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberFormatterFactory {
    plural_lookup: PluralLookup,
}

struct NumberFormatter {
    locale: String,
    plural: Option<String>,
    plural_lookup: PluralLookup,
}

impl NumberFormatterFactory {
    pub fn new(plural_lookup: PluralLookup) -> Self {
        Self { plural_lookup }
    }
}

impl FormatterFactory for NumberFormatterFactory {
    fn name(&self) -> &'static str {
        "number"
    }

    fn can_handle(&self, value: &Value) -> bool {
        matches!(value, Value::Integer(_) | Value::Float(_))
    }

    fn create_formatter(
        &self,
        locale: &str,
        options: &FormatOptions,
    ) -> Result<Box<dyn Formatter>, RenderError> {
        check_options(self.name(), options, &["plural"])?;
        let plural = string_option(self.name(), options, "plural")?.map(ToString::to_string);
        Ok(Box::new(NumberFormatter {
            locale: locale.to_string(),
            plural,
            plural_lookup: self.plural_lookup,
        }))
    }
}

impl Formatter for NumberFormatter {
    fn format(&self, value: &Value, cx: &mut RenderContext<'_>) -> Result<String, RenderError> {
        let (number, spec_key) = match value {
            Value::Integer(n) => (Number::Integer(*n), keys::NUMBER_INT),
            Value::Float(f) => (Number::Float(*f), keys::NUMBER_FLOAT),
            _ => return Err(unexpected("number", value)),
        };
        let spec = translate_key(cx, spec_key, &self.locale)?;
        let text = parse_number_spec(&spec)?.apply(number)?;

        let Some(base) = &self.plural else {
            return Ok(text);
        };
        let plural = self.plural_text(base, PluralTag::of(number), cx)?;
        Ok(format!("{text} {plural}"))
    }
}

impl NumberFormatter {
    fn plural_text(
        &self,
        base: &str,
        tag: PluralTag,
        cx: &mut RenderContext<'_>,
    ) -> Result<String, RenderError> {
        let other = format!("{base}.{}", PluralTag::Other);
        match self.plural_lookup {
            PluralLookup::ByTag => {
                let tagged = format!("{base}.{tag}");
                let key = if tag != PluralTag::Other
                    && cx.service().catalog().contains(&tagged, &self.locale)
                {
                    tagged
                } else {
                    other
                };
                translate_key(cx, key, &self.locale)
            }
            PluralLookup::OneFirst => {
                match translate_key(cx, format!("{base}.{}", PluralTag::One), &self.locale) {
                    Err(err) if err.is_missing_text() && tag != PluralTag::Other => {
                        translate_key(cx, other, &self.locale)
                    }
                    result => result,
                }
            }
        }
    }
}
