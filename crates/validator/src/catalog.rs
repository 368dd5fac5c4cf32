//! Message catalog
//!
//! A [`MessageCatalog`] maps test names to message templates and is the
//! configuration surface of the crate: applications keep their wording (or
//! translations) in a JSON document and merge it into a [`Validator`].
//!
//! ```json
//! {
//!   "not-empty": "Please fill in {label}.",
//!   "min-length": "{label} needs {param} characters or more."
//! }
//! ```
//!
//! [`Validator`]: crate::validator::Validator

use crate::foundation::{MessageTemplate, ValidatorError};
use crate::rules::RuleSet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Message templates by test name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    messages: IndexMap<String, String>,
}

impl MessageCatalog {
    /// An empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a catalog from a JSON object of strings.
    pub fn from_json_str(json: &str) -> Result<Self, ValidatorError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Adds or replaces the template for `test`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, test: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(test, template);
        self
    }

    /// Adds or replaces the template for `test`.
    pub fn insert(&mut self, test: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(test.into(), template.into());
    }

    /// Template for `test`, if any.
    pub fn get(&self, test: &str) -> Option<&str> {
        self.messages.get(test).map(String::as_str)
    }

    /// Number of templates.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the catalog has no templates.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Templates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Installs every template as a message override.
    pub fn apply_to(&self, rules: &mut RuleSet) {
        for (test, template) in &self.messages {
            rules.set_message(test.clone(), MessageTemplate::from(template.clone()));
        }
    }
}

impl<K, V> FromIterator<(K, V)> for MessageCatalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
