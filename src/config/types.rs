//! Configuration item types.

use serde::Deserialize;
use serde_yaml::Value;
use std::fmt;

/// Joiner used when an item does not specify one: name and value become two
/// separate arguments.
pub const DEFAULT_JOINER: &str = " ";

/// One configuration entry, producing zero or more command-line arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigItem {
    /// Flag name such as `--output`. Empty means positional.
    pub name: String,
    pub value: ConfigValue,
    /// How `name` and `value` are combined.
    pub joiner: String,
}

impl ConfigItem {
    /// Create a flag item with the default joiner.
    pub fn flag(name: impl Into<String>, value: ConfigValue) -> Self {
        Self {
            name: name.into(),
            value,
            joiner: DEFAULT_JOINER.to_string(),
        }
    }

    /// Create a positional item (no flag name).
    pub fn positional(value: impl Into<String>) -> Self {
        Self::flag(String::new(), ConfigValue::String(value.into()))
    }

    /// Override the joiner.
    pub fn with_joiner(mut self, joiner: impl Into<String>) -> Self {
        self.joiner = joiner.into();
        self
    }

    /// Whether this item contributes a bare value rather than a flag.
    pub fn is_positional(&self) -> bool {
        self.name.is_empty()
    }
}

/// The value of a configuration item.
///
/// Built from arbitrary YAML, so the loader never rejects a value: shapes
/// the compiler cannot render end up in [`ConfigValue::Unsupported`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ConfigValue {
    /// No value (`value` missing or `null`).
    ///
    /// A named item with no value compiles to the bare flag name, like a
    /// switch. This deliberately does not render a placeholder such as
    /// `<nil>` as the value.
    #[default]
    Null,
    String(String),
    /// A sequence. Non-string elements are dropped when the list is built.
    StringList(Vec<String>),
    /// A number or boolean.
    Scalar(Scalar),
    /// A mapping or tagged value; carries the YAML kind for diagnostics.
    ///
    /// Skipped with a warning when compiled. There is deliberately no textual
    /// form (e.g. `map[a:b]`) for nested structures.
    Unsupported(&'static str),
}

// Equivalent to `#[serde(from = "Value")]`, written by hand because the
// derive infers a `'de: 'static` borrow from the `&'static str` field.
impl<'de> Deserialize<'de> for ConfigValue {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(ConfigValue::from)
    }
}

impl From<Value> for ConfigValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ConfigValue::Null,
            Value::String(s) => ConfigValue::String(s),
            Value::Bool(b) => ConfigValue::Scalar(Scalar::Bool(b)),
            Value::Number(n) => ConfigValue::Scalar(Scalar::Number(n)),
            Value::Sequence(seq) => ConfigValue::StringList(
                seq.into_iter()
                    .filter_map(|element| match element {
                        Value::String(s) => Some(s),
                        other => {
                            tracing::debug!(
                                kind = value_kind(&other),
                                "dropping non-string list element"
                            );
                            None
                        }
                    })
                    .collect(),
            ),
            Value::Mapping(_) => ConfigValue::Unsupported("mapping"),
            Value::Tagged(_) => ConfigValue::Unsupported("tagged value"),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<Vec<&str>> for ConfigValue {
    fn from(values: Vec<&str>) -> Self {
        ConfigValue::StringList(values.into_iter().map(str::to_string).collect())
    }
}

/// A non-string scalar, rendered with its default textual form.
///
/// Numbers use `serde_yaml::Number`'s `Display`: integers as written, floats
/// in shortest round-trip form that always keeps a fraction, so `1.0` stays
/// `1.0` rather than collapsing to `1`.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Number(serde_yaml::Number),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Human-readable name of a YAML value's type, used in error messages.
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
