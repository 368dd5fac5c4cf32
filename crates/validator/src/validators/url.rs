//! `url` test: absolute URLs with a host

use crate::rules::{RuleSet, TestRule};
use serde_json::Value;

fn is_url(input: &Value) -> bool {
    input
        .as_str()
        .and_then(|s| ::url::Url::parse(s).ok())
        .is_some_and(|url| url.has_host())
}

pub(crate) fn register(rules: &mut RuleSet) {
    rules.define_test(
        "url",
        TestRule::new(|v, _| Ok(is_url(v))).with_message("{label} must be a valid URL."),
    );
}
