//! Catalog keys the built-in formatters translate.
//!
//! List joiners and numeric-format specs are ordinary messages, so a
//! locale customizes them by registering these keys. See
//! [`TranslationService::register_builtin_messages`](crate::TranslationService::register_builtin_messages)
//! for English defaults.

/// Rendering of an empty list.
pub const LIST_EMPTY: &str = "list.empty";

/// Separator between list items except the last two.
pub const LIST_COMMA: &str = "list.comma";

/// Joiner before the last item of an "and" list.
pub const LIST_AND: &str = "list.and";

/// Joiner before the last item of an "or" list.
pub const LIST_OR: &str = "list.or";

/// printf-style spec for integers.
pub const NUMBER_INT: &str = "number.int";

/// printf-style spec for floats.
pub const NUMBER_FLOAT: &str = "number.float";

/// English defaults for every built-in key.
pub const BUILTIN_MESSAGES: &[(&str, &str)] = &[
    (LIST_EMPTY, ""),
    (LIST_COMMA, ", "),
    (LIST_AND, " and "),
    (LIST_OR, " or "),
    (NUMBER_INT, "%d"),
    (NUMBER_FLOAT, "%.2f"),
];
