//! Environment variable expansion.
//!
//! # Syntax
//!
//! - `${NAME}` - Substitutes the value of variable `NAME`
//! - `$NAME` - Same, where `NAME` matches `[A-Za-z_][A-Za-z0-9_]*`
//!
//! Unset variables expand to the empty string. Substituted text is not
//! scanned again, and there is no escape for a literal `$`: a `$` that does
//! not start either form is copied through unchanged.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static ENV_REF_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]*)\}|\$([A-Za-z_][A-Za-z0-9_]*)").expect("Invalid env reference regex")
});

/// Expand `$NAME` and `${NAME}` using `lookup` to resolve variables.
///
/// # Examples
///
/// ```ignore
/// let home = |name: &str| (name == "HOME").then(|| "/home/ci".to_string());
/// assert_eq!(expand_with("${HOME}/.cache", home), "/home/ci/.cache");
/// assert_eq!(expand_with("$UNSET-x", home), "-x");
/// ```
pub fn expand_with<F>(s: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if !s.contains('$') {
        return s.to_string();
    }

    ENV_REF_REGEX
        .replace_all(s, |caps: &Captures<'_>| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map_or("", |m| m.as_str());
            let value = lookup(name);
            if value.is_none() {
                tracing::trace!(name, "environment variable is unset");
            }
            value.unwrap_or_default()
        })
        .into_owned()
}

/// Resolve a variable from the process environment. Non-UTF-8 values count
/// as unset.
pub fn process_env(name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    std::env::var(name).ok()
}
