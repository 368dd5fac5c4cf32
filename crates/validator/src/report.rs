//! Validation results for whole forms
//!
//! [`FieldReport`] is a detached, serializable snapshot of a
//! [`ValidationContext`](crate::context::ValidationContext). A
//! [`ValidationReport`] collects them per field, in the order they were
//! checked, and answers form-level questions.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

// ============================================================================
// FIELD REPORT
// ============================================================================

/// Final state of one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    /// Field name.
    pub name: String,
    /// Display label.
    pub label: String,
    /// Whether every test passed.
    pub valid: bool,
    /// First failed test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
    /// Message of the first failed test.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Field value after filters.
    pub value: Value,
}

// ============================================================================
// VALIDATION REPORT
// ============================================================================

/// Field reports keyed by field name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationReport {
    fields: IndexMap<String, FieldReport>,
}

impl ValidationReport {
    /// An empty report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing an earlier report for the same name in place.
    pub fn push(&mut self, field: FieldReport) {
        self.fields.insert(field.name.clone(), field);
    }

    /// Report for `name`.
    pub fn field(&self, name: &str) -> Option<&FieldReport> {
        self.fields.get(name)
    }

    /// True when every field is valid (and for an empty report).
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|f| f.valid)
    }

    /// Inverse of [`is_valid`](Self::is_valid).
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Messages of invalid fields by field name.
    pub fn errors(&self) -> IndexMap<&str, &str> {
        self.fields
            .values()
            .filter(|f| !f.valid)
            .map(|f| (f.name.as_str(), f.message.as_deref().unwrap_or_default()))
            .collect()
    }

    /// Filtered values of all fields as a JSON object.
    pub fn values(&self) -> Map<String, Value> {
        self.fields
            .values()
            .map(|f| (f.name.clone(), f.value.clone()))
            .collect()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether no field has been added.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field reports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldReport> {
        self.fields.values()
    }
}

impl Extend<FieldReport> for ValidationReport {
    fn extend<I: IntoIterator<Item = FieldReport>>(&mut self, iter: I) {
        for field in iter {
            self.push(field);
        }
    }
}

impl FromIterator<FieldReport> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = FieldReport>>(iter: I) -> Self {
        let mut report = Self::new();
        report.extend(iter);
        report
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a FieldReport;
    type IntoIter = indexmap::map::Values<'a, String, FieldReport>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.values()
    }
}
