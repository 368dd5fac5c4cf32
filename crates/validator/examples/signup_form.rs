//! Validates a sign-up form and prints the resulting report as JSON.
//!
//! Run with:
//!
//! ```text
//! cargo run -p fieldcheck-validator --example signup_form
//! ```

use fieldcheck_validator::prelude::*;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let catalog = MessageCatalog::from_json_str(
        r#"{ "not-empty": "Please fill in {label}.", "min": "{label} must be {param} or older." }"#,
    )?;

    let validator = Validator::new(json!({
        "username": "  Alice ",
        "age": "17",
        "email": "alice@example",
        "website": "",
    }))
    .with_catalog(&catalog);

    let report: ValidationReport = [
        validator
            .check_labeled("username", "a user name")
            .filter("trim")
            .is("not-empty")
            .is("alpha-numeric")
            .is("max-length 16"),
        validator
            .check_labeled("age", "You")
            .is("not-empty")
            .is("integer")
            .filter("int")
            .is("min 18"),
        validator.check_labeled("email", "E-mail").is("not-empty").is("email"),
        validator.check_labeled("website", "Website").is("url"),
    ]
    .iter()
    .map(ValidationContext::report)
    .collect();

    println!("{}", serde_json::to_string_pretty(&report)?);
    for (field, message) in report.errors() {
        println!("{field}: {message}");
    }
    Ok(())
}
