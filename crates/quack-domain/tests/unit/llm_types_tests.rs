//! Tests for chat value objects

use quack_domain::{ChatMessage, LlmOptions, Role};

#[test]
fn test_message_constructors() {
    assert_eq!(ChatMessage::system("s").role, Role::System);
    assert_eq!(ChatMessage::user("u").role, Role::User);
    assert_eq!(ChatMessage::assistant("a").role, Role::Assistant);
}

#[test]
fn test_role_serializes_lowercase() {
    let message = ChatMessage::user("Test message");
    let json = serde_json::to_value(&message).unwrap();
    assert_eq!(json["role"], "user");
    assert_eq!(json["content"], "Test message");
    assert_eq!(Role::Assistant.as_str(), "assistant");
}

#[test]
fn test_options_builder() {
    let options = LlmOptions::default()
        .with_temperature(0.5)
        .with_max_tokens(256)
        .with_model("gpt-4o");

    assert_eq!(options.temperature, Some(0.5));
    assert_eq!(options.max_tokens, Some(256));
    assert_eq!(options.model.as_deref(), Some("gpt-4o"));
    assert!(options.stop.is_empty());
}
