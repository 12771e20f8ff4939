//! Compiling config items into command-line arguments.
//!
//! Each item produces zero or more tokens, in item order:
//!
//! - Positional items (empty name) produce their expanded string value
//! - Flag items produce one formatted flag per value (see [`format_flag`])
//!
//! Values that do not fit an item's slot are skipped rather than reported.

mod expand;
mod flag;

#[cfg(test)]
mod tests;

pub use expand::{expand_with, process_env};
pub use flag::format_flag;

use crate::config::{ConfigItem, ConfigValue};

/// Compile items into arguments, resolving variables from the process environment.
pub fn compile(items: &[ConfigItem]) -> Vec<String> {
    compile_with(items, process_env)
}

/// Compile items into arguments, resolving variables with `lookup`.
pub fn compile_with<F>(items: &[ConfigItem], lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut args = Vec::new();

    for item in items {
        if item.is_positional() {
            match &item.value {
                ConfigValue::String(s) => args.push(expand_with(s, &lookup)),
                // Only plain strings can be positional; everything else is dropped.
                other => tracing::debug!(value = ?other, "skipping non-string positional value"),
            }
            continue;
        }

        let name = item.name.as_str();
        let joiner = item.joiner.as_str();

        match &item.value {
            ConfigValue::String(s) => args.extend(format_flag(name, s, joiner, &lookup)),
            ConfigValue::StringList(values) => {
                for value in values {
                    args.extend(format_flag(name, value, joiner, &lookup));
                }
            }
            ConfigValue::Scalar(scalar) => {
                args.extend(format_flag(name, &scalar.to_string(), joiner, &lookup));
            }
            ConfigValue::Null => args.push(item.name.clone()),
            ConfigValue::Unsupported(kind) => {
                tracing::warn!(flag = name, kind, "skipping flag with unsupported value type");
            }
        }
    }

    tracing::debug!(count = args.len(), "compiled config arguments");
    args
}
