//! End-to-end translation through the service.

use tolk::parser::Pattern;
use tolk::{MessageRequest, TranslationService, message};

const EN: &str = "en";
const EN_US: &str = "en_US";
const DE: &str = "de_DE";
const IT: &str = "it";

fn service() -> TranslationService {
    let mut service = TranslationService::with_default_locale(EN_US);
    service.register("color", EN, "colour").unwrap();
    service.register("color", EN_US, "color").unwrap();
    service
        .register(
            "hello",
            EN,
            Pattern::segments().text("Hello, ").arg("name").text(".").build(),
        )
        .unwrap();
    service
        .register(
            "hello",
            IT,
            Pattern::segments().text("Ciao, ").arg("name").text(".").build(),
        )
        .unwrap();
    service
}

fn hello(name: &str) -> MessageRequest {
    message!("hello", name = name)
}

#[test]
fn test_request_display() {
    assert_eq!(
        hello("user").to_string(),
        r#"MessageRequest(hello, ["user"], {name: "user"})"#
    );
}

#[test]
fn test_request_args() {
    let request = hello("user");
    assert_eq!(request.key(), "hello");
    assert_eq!(request.args().len(), 1);
    assert_eq!(request.args()[0].as_str(), Some("user"));
    assert_eq!(
        request.named_arg("name").and_then(|v| v.as_str()),
        Some("user")
    );
    assert_eq!(request.preferred_locale(), None);
}

#[test]
fn test_with_locale_copies() {
    let request = hello("user");
    let italian = request.with_locale(IT);
    assert_eq!(italian.preferred_locale(), Some(IT));
    assert_eq!(request.preferred_locale(), None);
}

#[test]
fn test_hello() {
    assert_eq!(service().translate(&hello("user")).unwrap(), "Hello, user.");
}

#[test]
fn test_default_locale_it() {
    let mut service = TranslationService::with_default_locale(IT);
    service
        .register(
            "hello",
            IT,
            Pattern::segments().text("Ciao, ").arg("name").text(".").build(),
        )
        .unwrap();
    assert_eq!(service.translate(&hello("user")).unwrap(), "Ciao, user.");
}

#[test]
fn test_preferred_locale() {
    let request = hello("user").with_locale(IT);
    assert_eq!(service().translate(&request).unwrap(), "Ciao, user.");
}

#[test]
fn test_explicit_locale() {
    assert_eq!(
        service().translate_to(&hello("user"), IT).unwrap(),
        "Ciao, user."
    );
}

#[test]
fn test_explicit_locale_overrides_preferred() {
    let request = hello("user").with_locale(DE);
    assert_eq!(service().translate_to(&request, IT).unwrap(), "Ciao, user.");
}

#[test]
fn test_translate_opt() {
    let service = service();
    assert_eq!(service.translate_opt(&hello("user"), None).unwrap(), "Hello, user.");
    assert_eq!(
        service.translate_opt(&hello("user"), Some(IT)).unwrap(),
        "Ciao, user."
    );
}

#[test]
fn test_fallback_exact_match() {
    let color = MessageRequest::new("color");
    assert_eq!(service().translate_to(&color, EN_US).unwrap(), "color");
}

#[test]
fn test_fallback_language_only() {
    let color = MessageRequest::new("color");
    assert_eq!(service().translate_to(&color, EN).unwrap(), "colour");
}

#[test]
fn test_fallback_to_default_locale() {
    // de_DE -> de -> en_US
    let color = MessageRequest::new("color");
    assert_eq!(service().translate_to(&color, DE).unwrap(), "color");
}

#[test]
fn test_nested_message_display() {
    let outer = message!("hello", name = MessageRequest::new("color"));
    assert_eq!(
        outer.to_string(),
        "MessageRequest(hello, [MessageRequest(color, [], {})], {name: MessageRequest(color, [], {})})"
    );
}

#[test]
fn test_nested_message_en_us() {
    let outer = message!("hello", name = MessageRequest::new("color"));
    assert_eq!(
        service().translate_to(&outer, EN_US).unwrap(),
        "Hello, color."
    );
}

#[test]
fn test_nested_message_en() {
    let outer = message!("hello", name = MessageRequest::new("color"));
    assert_eq!(service().translate_to(&outer, EN).unwrap(), "Hello, colour.");
}

#[test]
fn test_nested_message_keeps_its_own_locale() {
    let outer = message!("hello", name = MessageRequest::new("color").with_locale(EN));
    assert_eq!(
        service().translate_to(&outer, EN_US).unwrap(),
        "Hello, colour."
    );
}

#[test]
fn test_same_message_nested_in_itself() {
    let inner = hello("user");
    let outer = message!("hello", name = inner);
    assert_eq!(
        service().translate(&outer).unwrap(),
        "Hello, Hello, user.."
    );
}

#[test]
fn test_positional_argument() {
    let mut service = service();
    service
        .register("pair", EN, Pattern::segments().index(1).text("/").index(0).build())
        .unwrap();
    let request = MessageRequest::new("pair").arg("a").arg("b");
    assert_eq!(service.translate(&request).unwrap(), "b/a");
}

#[test]
fn test_named_only_argument() {
    let mut service = service();
    service
        .register("greet", EN, Pattern::segments().text("Hi ").arg("who").build())
        .unwrap();
    let request = MessageRequest::new("greet").named("who", "there");
    assert!(request.args().is_empty());
    assert_eq!(service.translate(&request).unwrap(), "Hi there");
}

#[test]
fn test_literal_braces_render_verbatim() {
    let mut service = service();
    service.register("braces", EN, "{name}").unwrap();
    assert_eq!(
        service.translate(&message!("braces", name = "x")).unwrap(),
        "{name}"
    );
}

#[test]
fn test_reregistering_replaces() {
    let mut service = service();
    service.register("color", EN, "colour!").unwrap();
    assert_eq!(
        service.translate_to(&MessageRequest::new("color"), EN).unwrap(),
        "colour!"
    );
}

#[test]
fn test_builder_defaults() {
    let service = TranslationService::builder().default_locale("fr").build();
    assert_eq!(service.default_locale(), "fr");
    assert_eq!(service.formatters().len(), 4);
    assert!(service.catalog().is_empty());
}
