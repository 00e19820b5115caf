//! Numeric-format spec parser using winnow.
//!
//! Number rendering is driven by localized spec messages (`number.int`,
//! `number.float`) written as printf-style templates:
//! - Literal text, copied to the output
//! - `%%` for a literal percent sign
//! - Conversions `%[flags][width][.precision]type` with flags `-` (left
//!   align), `+` (always sign) and `0` (zero pad), and types `d`/`i`
//!   (integer), `f`/`F` (fixed point) and `s` (plain rendering)
//!
//! This is deliberately not locale-aware: grouping and decimal symbols belong
//! to a custom formatter registered through dispatch.
//!
//! `%s` renders floats with Rust's shortest round-trip form, so exponents
//! read `1e20` rather than printf's `1e+20`. `%d` rejects NaN and infinities.

use winnow::ascii::digit1;
use winnow::combinator::{alt, opt, preceded};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use super::error::SpecError;

/// A number handed to a [`NumberSpec`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i128),
    Float(f64),
}

/// A parsed numeric-format spec.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberSpec {
    source: String,
    pieces: Vec<SpecPiece>,
}

#[derive(Debug, Clone, PartialEq)]
enum SpecPiece {
    Literal(String),
    Conversion(Conversion),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Conversion {
    offset: usize,
    left_align: bool,
    plus_sign: bool,
    zero_pad: bool,
    width: Option<usize>,
    precision: Option<usize>,
    kind: ConversionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConversionKind {
    Integer,
    Fixed,
    Plain,
}

/// Parse a numeric-format spec.
///
/// # Errors
///
/// Returns [`SpecError`] with the offset of the first character that is not
/// part of a valid literal or conversion.
///
/// # Example
///
/// ```
/// use tolk::parser::{Number, parse_number_spec};
///
/// let spec = parse_number_spec("%.2f").unwrap();
/// assert_eq!(spec.apply(Number::Float(3.1415)).unwrap(), "3.14");
/// ```
pub fn parse_number_spec(spec: &str) -> Result<NumberSpec, SpecError> {
    let mut remaining = spec;
    let mut pieces = Vec::new();
    while !remaining.is_empty() {
        let offset = spec.len() - remaining.len();
        match piece.parse_next(&mut remaining) {
            Ok(SpecPiece::Conversion(conversion)) => {
                pieces.push(SpecPiece::Conversion(Conversion { offset, ..conversion }));
            }
            Ok(literal) => pieces.push(literal),
            Err(_) => {
                let rest = &spec[offset..];
                return Err(SpecError {
                    spec: spec.to_string(),
                    offset,
                    message: format!(
                        "unsupported conversion '{}'",
                        rest.chars().take(2).collect::<String>()
                    ),
                });
            }
        }
    }
    Ok(NumberSpec { source: spec.to_string(), pieces })
}

fn piece(input: &mut &str) -> ModalResult<SpecPiece> {
    alt((
        take_while(1.., |c: char| c != '%').map(|s: &str| SpecPiece::Literal(s.to_string())),
        "%%".value(SpecPiece::Literal("%".to_string())),
        conversion.map(SpecPiece::Conversion),
    ))
    .parse_next(input)
}

fn conversion(input: &mut &str) -> ModalResult<Conversion> {
    let (flags, width, precision, kind) = preceded(
        '%',
        (
            take_while(0.., ['-', '+', '0']),
            opt(number),
            opt(preceded('.', number)),
            one_of(['d', 'i', 'f', 'F', 's']),
        ),
    )
    .parse_next(input)?;
    let kind = match kind {
        'd' | 'i' => ConversionKind::Integer,
        'f' | 'F' => ConversionKind::Fixed,
        _ => ConversionKind::Plain,
    };
    Ok(Conversion {
        offset: 0,
        left_align: flags.contains('-'),
        plus_sign: flags.contains('+'),
        zero_pad: flags.contains('0'),
        width,
        precision,
        kind,
    })
}

fn number(input: &mut &str) -> ModalResult<usize> {
    digit1.parse_to().parse_next(input)
}

impl NumberSpec {
    /// Render `value` through every conversion in the spec.
    ///
    /// # Errors
    ///
    /// Returns [`SpecError`] pointing at an integer conversion when `value`
    /// is NaN or infinite.
    pub fn apply(&self, value: Number) -> Result<String, SpecError> {
        let mut output = String::new();
        for piece in &self.pieces {
            match piece {
                SpecPiece::Literal(text) => output.push_str(text),
                SpecPiece::Conversion(conversion) => {
                    let rendered = conversion.apply(value).ok_or_else(|| SpecError {
                        spec: self.source.clone(),
                        offset: conversion.offset,
                        message: format!("cannot convert {value:?} to an integer"),
                    })?;
                    output.push_str(&rendered);
                }
            }
        }
        Ok(output)
    }
}

impl Conversion {
    /// `None` when an integer conversion meets a non-finite float.
    fn apply(&self, value: Number) -> Option<String> {
        let body = match (self.kind, value) {
            (ConversionKind::Integer, Number::Integer(n)) => n.to_string(),
            (ConversionKind::Integer, Number::Float(f)) if !f.is_finite() => return None,
            (ConversionKind::Integer, Number::Float(f)) => truncate(f),
            (ConversionKind::Fixed, Number::Integer(n)) => {
                let precision = self.precision.unwrap_or(6);
                if precision == 0 {
                    n.to_string()
                } else {
                    format!("{n}.{}", "0".repeat(precision))
                }
            }
            (ConversionKind::Fixed, Number::Float(f)) => {
                format!("{f:.precision$}", precision = self.precision.unwrap_or(6))
            }
            (ConversionKind::Plain, Number::Integer(n)) => self.clip(n.to_string()),
            (ConversionKind::Plain, Number::Float(f)) => self.clip(format!("{f:?}")),
        };
        Some(self.pad(self.sign(body)))
    }

    fn clip(&self, text: String) -> String {
        match self.precision {
            Some(precision) => text.chars().take(precision).collect(),
            None => text,
        }
    }

    fn sign(&self, body: String) -> String {
        if self.plus_sign && !body.starts_with('-') {
            format!("+{body}")
        } else {
            body
        }
    }

    fn pad(&self, body: String) -> String {
        let len = body.chars().count();
        let Some(fill) = self.width.and_then(|w| w.checked_sub(len)) else {
            return body;
        };
        if self.left_align {
            format!("{body}{}", " ".repeat(fill))
        } else if self.zero_pad && self.kind != ConversionKind::Plain {
            let sign_len = usize::from(body.starts_with(['-', '+']));
            let (sign, digits) = body.split_at(sign_len);
            format!("{sign}{}{digits}", "0".repeat(fill))
        } else {
            format!("{}{body}", " ".repeat(fill))
        }
    }
}

/// `%d` applied to a float truncates toward zero.
fn truncate(f: f64) -> String {
    let truncated = f.trunc();
    if truncated == 0.0 {
        "0".to_string()
    } else {
        format!("{truncated:.0}")
    }
}
