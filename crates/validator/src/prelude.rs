//! Prelude module for convenient imports.
//!
//! `use fieldcheck_validator::prelude::*;` brings in the validator, the
//! context, reports, rule definitions and the registry seam.

pub use crate::catalog::MessageCatalog;
pub use crate::context::ValidationContext;
pub use crate::foundation::{
    FilterOutcome, MessageTemplate, Registry, RuleExpr, RuleResult, TestOutcome, ValidatorError,
};
pub use crate::report::{FieldReport, ValidationReport};
pub use crate::rules::{FilterRule, RuleSet, TestRule};
pub use crate::validator::Validator;
