//! Error message templates
//!
//! A template is either text with `{param}`, `{value}` and `{label}`
//! placeholders, or a callback that builds the message itself.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldcheck_validator::foundation::MessageTemplate;
//! use serde_json::json;
//!
//! let text = MessageTemplate::from("{label} must be at least {param}");
//! assert_eq!(text.render(Some("18"), &json!("17"), "age"), "age must be at least 18");
//!
//! let callback = MessageTemplate::callback(|param, _value, label| {
//!     format!("{label}: expected {}", param.unwrap_or("something"))
//! });
//! assert_eq!(callback.render(None, &json!(null), "age"), "age: expected something");
//! ```

use crate::foundation::value;
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Callback signature for computed messages: `(param, value, label)`.
pub type MessageFn = dyn Fn(Option<&str>, &Value, &str) -> String + Send + Sync;

/// A message template attached to a validity test.
///
/// Text placeholders are replaced in one pass, not one placeholder after
/// another: a `{label}` inside the substituted param or value stays literal.
#[derive(Clone)]
pub enum MessageTemplate {
    /// Text with placeholder substitution.
    Text(Cow<'static, str>),
    /// Computed message.
    Callback(Arc<MessageFn>),
}

impl MessageTemplate {
    /// Wraps a closure as a callback template.
    pub fn callback<F>(f: F) -> Self
    where
        F: Fn(Option<&str>, &Value, &str) -> String + Send + Sync + 'static,
    {
        Self::Callback(Arc::new(f))
    }

    /// True for empty text. Callbacks are never blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(text) if text.is_empty())
    }

    /// Builds the final message.
    #[must_use]
    pub fn render(&self, param: Option<&str>, value: &Value, label: &str) -> String {
        match self {
            Self::Text(text) => substitute(text, param, value, label),
            Self::Callback(f) => f(param, value, label),
        }
    }
}

/// Replaces placeholders in a single pass; substituted text is not re-scanned.
fn substitute(template: &str, param: Option<&str>, value: &Value, label: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let replaced = [
            ("{param}", Cow::Borrowed(param.unwrap_or(""))),
            ("{value}", value::display(value)),
            ("{label}", Cow::Borrowed(label)),
        ]
        .into_iter()
        .find(|(placeholder, _)| tail.starts_with(placeholder));

        match replaced {
            Some((placeholder, text)) => {
                out.push_str(&text);
                rest = &tail[placeholder.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

impl From<&'static str> for MessageTemplate {
    fn from(text: &'static str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for MessageTemplate {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl fmt::Debug for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Callback(_) => f.debug_tuple("Callback").field(&"<function>").finish(),
        }
    }
}
