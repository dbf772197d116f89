//! # Email Syntax
//!
//! Syntax-only email check. No TLD allow-list and no DNS lookup: the domain
//! only has to be at least two dot-separated labels.

use std::sync::LazyLock;

use regex::Regex;

const MAX_LOCAL_LEN: usize = 64;
const MAX_ADDRESS_LEN: usize = 254;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)+$",
    )
    .expect("email pattern is a valid regex")
});

/// Whether `value` is a syntactically valid email address.
pub fn is_valid_email(value: &str) -> bool {
    if value.len() > MAX_ADDRESS_LEN || !EMAIL.is_match(value) {
        return false;
    }
    let Some((local, _domain)) = value.split_once('@') else {
        return false;
    };
    local.len() <= MAX_LOCAL_LEN
        && !local.starts_with('.')
        && !local.ends_with('.')
        && !local.contains("..")
}
