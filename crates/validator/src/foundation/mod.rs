//! Foundation types shared by every part of the crate
//!
//! - **Traits**: [`Registry`] and its outcomes [`TestOutcome`], [`FilterOutcome`]
//! - **Errors**: [`ValidatorError`]
//! - **Expressions**: [`RuleExpr`] parses `"<name> <param>"`
//! - **Messages**: [`MessageTemplate`]
//! - **Values**: helpers over `serde_json::Value` in [`value`]

pub mod error;
pub mod expression;
pub mod template;
pub mod traits;
pub mod value;

pub use error::{RuleResult, ValidatorError};
pub use expression::RuleExpr;
pub use template::{MessageFn, MessageTemplate};
pub use traits::{FilterOutcome, Registry, TestOutcome};
