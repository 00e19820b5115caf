//! Integration tests for pattern compilation.

use insta::assert_snapshot;
use tolk::parser::{
    ArgSelector, ArgumentRef, FormatOptions, Fragment, Pattern, PatternError, PatternSegment,
    parse,
};

fn compile(json: &str) -> String {
    let pattern: Pattern = serde_json::from_str(json).unwrap();
    parse(&pattern).unwrap().to_string()
}

#[test]
fn test_plain_text() {
    assert_snapshot!(compile(r#""xxx""#), @r#"CompiledFormatter(text("xxx"))"#);
}

#[test]
fn test_just_arg0() {
    assert_snapshot!(compile(r#"[{"arg": 0}]"#), @"CompiledFormatter(arg([0]))");
}

#[test]
fn test_arg_with_text_before() {
    assert_snapshot!(compile(r#"["a", {"arg": 0}]"#), @r#"CompiledFormatter(text("a"), arg([0]))"#);
}

#[test]
fn test_arg_with_text_after() {
    assert_snapshot!(compile(r#"[{"arg": 0}, "b"]"#), @r#"CompiledFormatter(arg([0]), text("b"))"#);
}

#[test]
fn test_arg_with_text_around() {
    assert_snapshot!(
        compile(r#"["a", {"arg": 0}, "b"]"#),
        @r#"CompiledFormatter(text("a"), arg([0]), text("b"))"#
    );
}

#[test]
fn test_named_arg() {
    assert_snapshot!(
        compile(r#"["Hello, ", {"arg": "name"}, "."]"#),
        @r#"CompiledFormatter(text("Hello, "), arg(["name"]), text("."))"#
    );
}

#[test]
fn test_arg_with_options() {
    assert_snapshot!(
        compile(r#"[{"arg": 0, "options": ["a", "b", "c"]}]"#),
        @r#"CompiledFormatter(arg([0], {"options":["a","b","c"]}))"#
    );
}

#[test]
fn test_options_are_kept_for_the_formatter() {
    let pattern: Pattern = serde_json::from_str(r#"[{"arg": "items", "type": "or"}]"#).unwrap();
    let compiled = parse(&pattern).unwrap();
    match &compiled.fragments()[0] {
        Fragment::Argument { reference, options } => {
            assert_eq!(reference, &ArgumentRef::ByName("items".to_string()));
            assert_eq!(options.get("type"), Some(&serde_json::json!("or")));
            assert_eq!(options.len(), 1);
        }
        other => panic!("expected argument fragment, got {other:?}"),
    }
}

// =============================================================================
// Braces are literal text
// =============================================================================

#[test]
fn test_single_open_brace() {
    assert_snapshot!(compile(r#""{""#), @r#"CompiledFormatter(text("{"))"#);
}

#[test]
fn test_many_open_braces() {
    assert_snapshot!(compile(r#""{{{""#), @r#"CompiledFormatter(text("{{{"))"#);
}

#[test]
fn test_single_close_brace() {
    assert_snapshot!(compile(r#""}""#), @r#"CompiledFormatter(text("}"))"#);
}

#[test]
fn test_many_close_braces() {
    assert_snapshot!(compile(r#""}}}""#), @r#"CompiledFormatter(text("}}}"))"#);
}

#[test]
fn test_braces_around_text() {
    assert_snapshot!(compile(r#""{a}""#), @r#"CompiledFormatter(text("{a}"))"#);
}

#[test]
fn test_braces_around_arg() {
    assert_snapshot!(
        compile(r#"["{", {"arg": 0}, "}"]"#),
        @r#"CompiledFormatter(text("{"), arg([0]), text("}"))"#
    );
}

#[test]
fn test_braces_before_arg() {
    assert_snapshot!(
        compile(r#"["{a}", {"arg": 0}]"#),
        @r#"CompiledFormatter(text("{a}"), arg([0]))"#
    );
}

// =============================================================================
// Edge cases
// =============================================================================

#[test]
fn test_empty_text() {
    let compiled = parse(&Pattern::from("")).unwrap();
    assert_eq!(compiled.fragments(), [Fragment::Text(String::new())]);
}

#[test]
fn test_empty_segment_list() {
    let compiled = parse(&Pattern::segments().build()).unwrap();
    assert!(compiled.fragments().is_empty());
    assert_eq!(compiled.to_string(), "CompiledFormatter()");
}

#[test]
fn test_builder_matches_json() {
    let built = Pattern::segments()
        .text("Hello, ")
        .arg("name")
        .text(".")
        .build();
    let json: Pattern = serde_json::from_str(r#"["Hello, ", {"arg": "name"}, "."]"#).unwrap();
    assert_eq!(built, json);
}

#[test]
fn test_builder_with_options() {
    let mut options = FormatOptions::new();
    options.insert("type".to_string(), serde_json::json!("or"));
    let pattern = Pattern::segments()
        .arg_with(ArgSelector::Name("items".to_string()), options)
        .build();
    assert_snapshot!(parse(&pattern).unwrap(), @r#"CompiledFormatter(arg(["items"], {"type":"or"}))"#);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_negative_index_rejected() {
    let err = parse(&Pattern::segments().text("x").index(-1).build()).unwrap_err();
    assert_eq!(
        err,
        PatternError::NegativeIndex {
            position: 1,
            index: -1
        }
    );
}

#[test]
fn test_non_argument_object_rejected() {
    let pattern: Pattern = serde_json::from_str(r#"["a", {"name": "x"}]"#).unwrap();
    assert!(matches!(
        pattern,
        Pattern::Segments(ref segments) if matches!(segments[1], PatternSegment::Unsupported(_))
    ));
    let err = parse(&pattern).unwrap_err();
    assert!(matches!(
        err,
        PatternError::UnsupportedSegment { position: 1, .. }
    ));
}

#[test]
fn test_number_segment_rejected() {
    let pattern: Pattern = serde_json::from_str(r#"[42]"#).unwrap();
    let err = parse(&pattern).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported pattern segment at position 0: 42"
    );
}

#[test]
fn test_non_integer_non_string_arg_rejected() {
    for json in [r#"[{"arg": 1.5}]"#, r#"[{"arg": true}]"#, r#"[{"arg": null}]"#] {
        let pattern: Pattern = serde_json::from_str(json).unwrap();
        assert!(matches!(
            parse(&pattern),
            Err(PatternError::UnsupportedSegment { position: 0, .. })
        ));
    }
}

#[test]
fn test_pattern_must_be_string_or_list() {
    assert!(serde_json::from_str::<Pattern>("42").is_err());
    assert!(serde_json::from_str::<Pattern>(r#"{"arg": 0}"#).is_err());
}
