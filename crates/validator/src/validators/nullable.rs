//! Presence tests: `empty` and `not-empty`
//!
//! Both are complex, so they see `null`, `""` and `[]` instead of being
//! skipped for them like every other test. `notempty` is an alias of
//! `not-empty`.

use crate::foundation::value;
use crate::rules::{RuleSet, TestRule};

fn not_empty() -> TestRule {
    TestRule::new(|v, _| Ok(!value::is_empty(v)))
        .complex()
        .with_message("{label} is required.")
}

pub(crate) fn register(rules: &mut RuleSet) {
    rules
        .define_test(
            "empty",
            TestRule::new(|v, _| Ok(value::is_empty(v)))
                .complex()
                .with_message("{label} must be empty."),
        )
        .define_test("not-empty", not_empty())
        .define_test("notempty", not_empty());
}
