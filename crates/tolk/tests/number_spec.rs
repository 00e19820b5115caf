//! Tests for the printf-style numeric-format spec parser.

use tolk::parser::{Number, parse_number_spec};

fn render(spec: &str, number: Number) -> String {
    parse_number_spec(spec).unwrap().apply(number).unwrap()
}

fn int(n: i128) -> Number {
    Number::Integer(n)
}

fn float(f: f64) -> Number {
    Number::Float(f)
}

#[test]
fn test_integer_conversions() {
    assert_eq!(render("%d", int(42)), "42");
    assert_eq!(render("%i", int(-7)), "-7");
    assert_eq!(render("%d", int(0)), "0");
}

#[test]
fn test_integer_conversion_truncates_floats() {
    assert_eq!(render("%d", float(3.99)), "3");
    assert_eq!(render("%d", float(-3.99)), "-3");
    assert_eq!(render("%d", float(-0.5)), "0");
}

#[test]
fn test_fixed_conversions() {
    assert_eq!(render("%.2f", float(3.1415)), "3.14");
    assert_eq!(render("%.2f", float(3.145)), "3.15");
    assert_eq!(render("%.0f", float(2.4)), "2");
    assert_eq!(render("%f", float(1.5)), "1.500000");
    assert_eq!(render("%.3F", float(-0.25)), "-0.250");
}

#[test]
fn test_fixed_conversion_of_integers_is_exact() {
    assert_eq!(render("%.2f", int(5)), "5.00");
    assert_eq!(
        render("%.1f", int(123_456_789_012_345_678_901_234_567_890)),
        "123456789012345678901234567890.0"
    );
    assert_eq!(render("%.0f", int(-3)), "-3");
}

#[test]
fn test_plain_conversion() {
    assert_eq!(render("%s", int(12)), "12");
    assert_eq!(render("%s", float(0.5)), "0.5");
    assert_eq!(render("%.2s", int(12345)), "12");
}

#[test]
fn test_width_and_flags() {
    assert_eq!(render("%5d", int(42)), "   42");
    assert_eq!(render("%-5d|", int(42)), "42   |");
    assert_eq!(render("%05d", int(-42)), "-0042");
    assert_eq!(render("%+d", int(42)), "+42");
    assert_eq!(render("%+d", int(-42)), "-42");
    assert_eq!(render("%+08.2f", float(3.14159)), "+0003.14");
    assert_eq!(render("%2d", int(12345)), "12345");
    assert_eq!(render("%05s", int(7)), "    7");
}

#[test]
fn test_literals_and_percent() {
    assert_eq!(render("%d%%", int(50)), "50%");
    assert_eq!(render("~%.1f km", float(12.34)), "~12.3 km");
    assert_eq!(render("no conversion", int(1)), "no conversion");
    assert_eq!(render("", int(1)), "");
}

#[test]
fn test_every_conversion_gets_the_value() {
    assert_eq!(render("%d/%d", int(3)), "3/3");
}

#[test]
fn test_unsupported_conversion() {
    let err = parse_number_spec("%.2q").unwrap_err();
    assert_eq!(err.offset, 0);
    assert_eq!(err.spec, "%.2q");
    assert!(err.to_string().starts_with("invalid number format '%.2q' at offset 0"));
}

#[test]
fn test_error_offset_after_literal() {
    let err = parse_number_spec("total: %x").unwrap_err();
    assert_eq!(err.offset, 7);
}

#[test]
fn test_trailing_percent() {
    let err = parse_number_spec("100%").unwrap_err();
    assert_eq!(err.offset, 3);
}

#[test]
fn test_integer_conversion_rejects_non_finite_floats() {
    let spec = parse_number_spec("count: %d").unwrap();
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = spec.apply(float(value)).unwrap_err();
        assert_eq!(err.spec, "count: %d");
        assert_eq!(err.offset, 7);
        assert!(err.message.contains("cannot convert"));
    }
}

#[test]
fn test_non_integer_conversions_render_non_finite_floats() {
    assert_eq!(render("%f", float(f64::INFINITY)), "inf");
    assert_eq!(render("%s", float(f64::NAN)), "NaN");
    assert_eq!(render("%s", float(1e20)), "1e20");
}
