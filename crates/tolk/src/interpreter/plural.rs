//! Reduced plural tagging.
//!
//! Only four coarse tags exist: `zero`, `one`, `two` and `other`. Languages
//! with `few`/`many` categories are not modelled; their counts fall into
//! `other`.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::parser::Number;

/// Coarse plural category of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralTag {
    Zero,
    One,
    Two,
    Other,
}

impl PluralTag {
    /// Tag a number: exactly 0, 1 or 2 get their own tag, everything else is
    /// `Other`. Floats equal to those integers count as well.
    ///
    /// ```
    /// use tolk::PluralTag;
    /// use tolk::parser::Number;
    ///
    /// assert_eq!(PluralTag::of(Number::Integer(1)), PluralTag::One);
    /// assert_eq!(PluralTag::of(Number::Float(2.0)), PluralTag::Two);
    /// assert_eq!(PluralTag::of(Number::Integer(-1)), PluralTag::Other);
    /// ```
    pub fn of(number: Number) -> Self {
        let exact = match number {
            Number::Integer(n) => Some(n),
            Number::Float(f) if f == 0.0 => Some(0),
            Number::Float(f) if f == 1.0 => Some(1),
            Number::Float(f) if f == 2.0 => Some(2),
            Number::Float(_) => None,
        };
        match exact {
            Some(0) => PluralTag::Zero,
            Some(1) => PluralTag::One,
            Some(2) => PluralTag::Two,
            _ => PluralTag::Other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PluralTag::Zero => "zero",
            PluralTag::One => "one",
            PluralTag::Two => "two",
            PluralTag::Other => "other",
        }
    }
}

impl Display for PluralTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Which `{base}.<suffix>` messages the number formatter consults for the
/// plural text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PluralLookup {
    /// `{base}.{tag}` if it resolves along the fallback chain, otherwise
    /// `{base}.other`.
    #[default]
    ByTag,
    /// `{base}.one` regardless of the tag. If it is missing, `other` counts
    /// fail and every other tag retries with `{base}.other`.
    OneFirst,
}
