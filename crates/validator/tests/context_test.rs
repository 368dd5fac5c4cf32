//! Integration tests for field chains against the built-in validator.

use fieldcheck_validator::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn signup() -> Validator {
    Validator::new(json!({
        "age": "17",
        "name": "  ",
        "nick": " Bob ",
        "email": "bob.example.com",
        "tags": ["a", "b", "c"],
        "address": { "zip": "12345" },
    }))
}

// ============================================================================
// DOCUMENTED EXAMPLES
// ============================================================================

#[test]
fn min_failure_renders_custom_template() {
    let validator = signup();
    let age = validator
        .check("age")
        .is_with("min 18", "{label} must be at least {param}");

    assert!(age.is_invalid());
    assert_eq!(age.test(), Some("min"));
    insta::assert_snapshot!(age.message().unwrap(), @"age must be at least 18");
}

#[test]
fn trim_then_not_empty_fails_on_blank() {
    let validator = signup();
    let name = validator.check("name").filter("trim").is("not-empty");

    assert!(name.is_filtered());
    assert_eq!(name.value().as_ref(), &json!(""));
    assert_eq!(name.test(), Some("not-empty"));
    insta::assert_snapshot!(name.message().unwrap(), @"name is required.");
}

#[test]
fn trim_then_notempty_alias_fails_on_blank() {
    let validator = Validator::new(json!({ "name": "  " }));
    let name = validator.check("name").filter("trim").is("notempty");

    assert!(name.is_invalid());
    assert_eq!(name.value().as_ref(), &json!(""));
    assert_eq!(name.test(), Some("notempty"));
    assert_eq!(name.message(), Some("name is required."));
}

#[test]
fn empty_message_falls_back_to_default() {
    let validator = Validator::new(json!({ "name": "" }));
    let name = validator.check("name").is_with("not-empty", "");

    assert_eq!(name.message(), Some("name is required."));
}

// ============================================================================
// CHAINS
// ============================================================================

#[test]
fn filters_feed_later_tests() {
    let validator = signup();
    let nick = validator
        .check_labeled("nick", "Nickname")
        .filter("trim")
        .filter("lower")
        .is("alpha")
        .is("max-length 3");

    assert!(nick.is_valid());
    assert_eq!(nick.value().as_ref(), &json!("bob"));
}

#[test]
fn first_failure_wins() {
    let validator = signup();
    let email = validator
        .check_labeled("email", "E-mail")
        .is("not-empty")
        .is("email")
        .is("max-length 3")
        .filter("upper");

    assert_eq!(email.test(), Some("email"));
    assert_eq!(email.message(), Some("E-mail must be a valid email address."));
    assert_eq!(email.value().as_ref(), &json!("bob.example.com"));
    assert!(!email.is_filtered());
}

#[test]
fn optional_field_passes_until_required() {
    let validator = signup();

    let phone = validator.check("phone").is("numeric").is("min-length 7");
    assert!(phone.is_valid());
    assert_eq!(phone.value().as_ref(), &Value::Null);

    let phone = validator.check("phone").is("not-empty").is("numeric");
    assert_eq!(phone.test(), Some("not-empty"));
}

#[test]
fn default_filter_fills_absent_fields() {
    let validator = signup();
    let country = validator
        .check("country")
        .filter("trim")
        .filter_with("default", "Nowhere Land")
        .is("not-empty");

    assert!(country.is_valid());
    assert_eq!(country.value().as_ref(), &json!("Nowhere Land"));
}

#[test]
fn nested_paths_and_arrays() {
    let validator = signup();

    let zip = validator.check("address.zip").is("integer").is("== 12345");
    assert!(zip.is_valid());

    let tags = validator.check("tags").is("array").is("max-length 2");
    assert_eq!(tags.message(), Some("tags must be at most 2 characters."));

    let first = validator.check("tags.0").is("in a, b");
    assert!(first.is_valid());
}

#[test]
fn numeric_filters_change_value_type() {
    let validator = signup();
    let age = validator.check("age").filter("int").is(">= 16");

    assert!(age.is_valid());
    assert_eq!(age.value().as_ref(), &json!(17));
}

#[test]
fn value_placeholder_uses_tested_value() {
    let validator = signup();
    let nick = validator
        .check("nick")
        .filter("trim")
        .is_with("in alice, carol", "'{value}' is not one of {param}");

    assert_eq!(nick.message(), Some("'Bob' is not one of alice, carol"));
}

#[test]
fn callback_template_gets_param_value_and_label() {
    let validator = signup();
    let age = validator.check_labeled("age", "Your age").is_with(
        "min 21",
        MessageTemplate::callback(|param, value, label| {
            format!("{label} ({value}) is below {}", param.unwrap_or_default())
        }),
    );

    assert_eq!(age.message(), Some(r#"Your age ("17") is below 21"#));
}

// ============================================================================
// MISCONFIGURATION
// ============================================================================

#[test]
fn unknown_test_marks_field_invalid() {
    let validator = signup();
    let age = validator.check("age").is("adult").is("not-empty");

    assert_eq!(age.test(), Some("adult"));
    assert_eq!(age.message(), Some("unknown validity test 'adult'"));
}

#[test]
fn malformed_parameter_marks_field_invalid() {
    let validator = signup();
    let age = validator.check("age").is("min eighteen");

    assert_eq!(age.test(), Some("min"));
    assert_eq!(
        age.message(),
        Some("rule 'min' cannot use parameter 'eighteen': expected a number")
    );
}

#[test]
fn unknown_filter_marks_field_invalid() {
    let validator = signup();
    let nick = validator.check("nick").filter("reverse");

    assert!(nick.is_invalid());
    assert_eq!(nick.test(), Some("reverse"));
}

// ============================================================================
// MESSAGES
// ============================================================================

#[test]
fn catalog_overrides_default_messages() {
    let catalog = MessageCatalog::from_json_str(
        r#"{ "not-empty": "Please fill in {label}.", "email": "{value} is not an address" }"#,
    )
    .unwrap();
    let validator = signup().with_catalog(&catalog);

    let name = validator.check_labeled("name", "your name").filter("trim").is("not-empty");
    assert_eq!(name.message(), Some("Please fill in your name."));

    let email = validator.check("email").is("email");
    assert_eq!(email.message(), Some("bob.example.com is not an address"));

    let nick = validator.check("nick").is("max-length 2");
    assert_eq!(nick.message(), Some("nick must be at most 2 characters."));
}

#[test]
fn explicit_message_beats_catalog() {
    let catalog = MessageCatalog::new().with("not-empty", "from catalog");
    let validator = signup().with_catalog(&catalog);

    let name = validator
        .check("missing")
        .is_with("not-empty", "from call site");
    assert_eq!(name.message(), Some("from call site"));
}

// ============================================================================
// LOGGING
// ============================================================================

#[derive(Clone, Default)]
struct Capture(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn failures_and_misconfiguration_are_logged() {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let validator = signup();
        let _ = validator.check("age").is("min 18").is("max 99");
        let _ = validator.check("nick").filter("trim");
        let _ = validator.check("nick").is("bogus");
    });

    let logs = String::from_utf8(capture.0.lock().unwrap().clone()).unwrap();
    assert!(logs.contains("validity test failed"), "{logs}");
    assert!(logs.contains("field=age"), "{logs}");
    assert!(logs.contains("skipping test on invalid field"), "{logs}");
    assert!(logs.contains("filter produced a value"), "{logs}");
    assert!(logs.contains("rule could not be evaluated"), "{logs}");
}
