//! Loading config documents from YAML.
//!
//! Two document shapes are accepted, tried in this order:
//!
//! ```yaml
//! # (a) a mapping with an `items` list
//! items:
//!   - name: --region
//!     value: eu-west-1
//! ```
//!
//! ```yaml
//! # (b) a bare list of items or plain strings
//! - plan
//! - name: --var-file
//!   value: [base.tfvars, prod.tfvars]
//!   joiner: "="
//! ```
//!
//! Shape (b) is only consulted when shape (a) yields no items.

use super::types::{ConfigItem, ConfigValue, DEFAULT_JOINER, value_kind};
use crate::error::{Result, RunnerError};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use std::path::Path;

/// Shape (a): `items:` under a top-level mapping.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ItemsDocument {
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    name: String,
    #[serde(default)]
    value: ConfigValue,
    joiner: Option<String>,
}

impl From<RawItem> for ConfigItem {
    fn from(raw: RawItem) -> Self {
        let joiner = raw.joiner.unwrap_or_else(|| DEFAULT_JOINER.to_string());
        ConfigItem::flag(raw.name, raw.value).with_joiner(joiner)
    }
}

/// Load config items from a YAML file.
///
/// # Returns
///
/// * `Ok(Vec<ConfigItem>)` - Items in document order
/// * `Err(RunnerError::Read)` - The file could not be read
/// * `Err(RunnerError::Parse)` - Invalid YAML, or neither document shape
/// * `Err(RunnerError::UnsupportedItemType)` - A bare-list entry of the wrong type
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<ConfigItem>> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), "loading config");

    let content = std::fs::read_to_string(path).map_err(|source| RunnerError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    from_yaml(&content)
}

/// Parse config items from a YAML string.
pub fn from_yaml(yaml: &str) -> Result<Vec<ConfigItem>> {
    match serde_yaml::from_str::<ItemsDocument>(yaml) {
        Ok(doc) if !doc.items.is_empty() => {
            tracing::debug!(count = doc.items.len(), "loaded config from `items` mapping");
            return Ok(doc.items.into_iter().map(ConfigItem::from).collect());
        }
        _ => {}
    }

    let root: Value =
        serde_yaml::from_str(yaml).map_err(|e| RunnerError::Parse(e.to_string()))?;

    let entries = match root {
        Value::Sequence(entries) => entries,
        Value::Null => Vec::new(),
        other => {
            return Err(RunnerError::Parse(format!(
                "expected a list of items or a mapping with a non-empty `items` list, found {}",
                value_kind(&other)
            )));
        }
    };

    let items = entries
        .into_iter()
        .map(item_from_entry)
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(count = items.len(), "loaded config from bare list");
    Ok(items)
}

/// Convert one top-level entry of a bare-list document.
fn item_from_entry(entry: Value) -> Result<ConfigItem> {
    match entry {
        Value::String(s) => Ok(ConfigItem::positional(s)),
        Value::Mapping(map) => Ok(item_from_mapping(&map)),
        other => Err(RunnerError::UnsupportedItemType(
            value_kind(&other).to_string(),
        )),
    }
}

/// Bare-list mappings are read leniently: a non-string `name` counts as
/// empty and a non-string `joiner` falls back to the default.
fn item_from_mapping(map: &Mapping) -> ConfigItem {
    let name = map.get("name").and_then(Value::as_str).unwrap_or_default();
    let value = map.get("value").cloned().map(ConfigValue::from).unwrap_or_default();
    let joiner = map
        .get("joiner")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_JOINER);

    ConfigItem::flag(name, value).with_joiner(joiner)
}
