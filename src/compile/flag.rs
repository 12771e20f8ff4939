//! Formatting a single flag/value pair into argument tokens.

use super::expand::expand_with;
use crate::config::DEFAULT_JOINER;

/// Format a flag and its value.
///
/// The value is expanded first, then wrapped in double quotes if it contains
/// a space. A joiner of exactly one space produces two tokens (`name`,
/// `value`); any other joiner produces the single token `name + joiner + value`.
pub fn format_flag<F>(name: &str, value: &str, joiner: &str, lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut value = expand_with(value, lookup);

    if value.contains(' ') {
        value = format!("\"{}\"", value);
    }

    if joiner == DEFAULT_JOINER {
        return vec![name.to_string(), value];
    }

    vec![format!("{}{}{}", name, joiner, value)]
}
