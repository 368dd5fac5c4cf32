//! Constant tests: `pass` and `fail`

use crate::rules::{RuleSet, TestRule};

pub(crate) fn register(rules: &mut RuleSet) {
    rules
        .define_test("pass", TestRule::new(|_, _| Ok(true)).complex())
        .define_test(
            "fail",
            TestRule::new(|_, _| Ok(false))
                .complex()
                .with_message("{label} is invalid."),
        );
}
