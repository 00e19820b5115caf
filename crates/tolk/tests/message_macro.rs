//! Tests for the message! macro.

use tolk::{MessageRequest, Value, message};

#[test]
fn test_message_without_arguments() {
    let request = message!("color");
    assert_eq!(request, MessageRequest::new("color"));
    assert!(request.args().is_empty());
    assert!(request.named_args().is_empty());
}

#[test]
fn test_message_binds_positionally_and_by_name() {
    let request = message!("summary", who = "Alice", count = 3, ratio = 0.5,);
    assert_eq!(
        request.args(),
        [Value::from("Alice"), Value::from(3), Value::from(0.5)]
    );
    assert_eq!(request.named_arg("count"), Some(&Value::Integer(3)));
    assert_eq!(
        request.named_args().keys().collect::<Vec<_>>(),
        ["count", "ratio", "who"]
    );
}

#[test]
fn test_message_with_nested_request() {
    let request = message!("hello", name = message!("color"));
    assert_eq!(
        request.named_arg("name").and_then(Value::as_message),
        Some(&MessageRequest::new("color"))
    );
}
