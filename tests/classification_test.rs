//! Query classification tests
//!
//! Exercises sanitize → classify through the public API.

use onion_lib::modules::query::{classify, sanitize, Query, QueryCategory};

#[test]
fn test_classifies_common_inputs() {
    let cases = [
        ("192.168.0.1", QueryCategory::Ip),
        ("255.255.255.255", QueryCategory::Ip),
        ("256.1.1.1", QueryCategory::Unrecognized),
        ("+79001234567", QueryCategory::Phone),
        ("8-900-123-45-67", QueryCategory::Phone),
        ("7(900)1234567", QueryCategory::Phone),
        ("+1 555 123 4567", QueryCategory::Unrecognized),
        ("user.name+tag@mail.example.org", QueryCategory::Email),
        ("user@localhost", QueryCategory::Unrecognized),
        ("hello world", QueryCategory::Unrecognized),
        ("", QueryCategory::Unrecognized),
    ];

    for (input, expected) in cases {
        assert_eq!(classify(input), expected, "input: {:?}", input);
    }
}

#[test]
fn test_markup_is_stripped_before_classification() {
    let query = Query::parse("<user@example.com>").unwrap();
    assert_eq!(query.as_str(), "user@example.com");
    assert_eq!(query.category(), QueryCategory::Email);
}

#[test]
fn test_blank_input_has_no_query() {
    assert!(Query::parse("   ").is_none());
    assert!(Query::parse("<>\"'&").is_none());
}

#[test]
fn test_sanitize_is_idempotent() {
    for input in ["<script>", "a&b", "plain", "\"quoted\""] {
        let once = sanitize(input);
        assert_eq!(sanitize(&once), once);
    }
}
