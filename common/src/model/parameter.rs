use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A declared placeholder definition, one entry of a parameter catalog.
///
/// The catalog is stored by its owner (a test case or a test-data definition)
/// as a single JSON text blob. The field order of this struct is the field
/// order of that blob: `name`, `type`, `description`, `defaultValue`, then
/// any other keys the user wrote, kept as they were.
///
/// Reading is lenient beyond `name`: a `type` or `description` that is not a
/// string is still accepted (see `lenient_type`, `lenient_text`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Identifier used in text as `$name`. The `$` sigil is never stored here.
    pub name: String,
    /// Declared type. Missing in the JSON means `string`.
    #[serde(rename = "type", default, deserialize_with = "lenient_type")]
    pub param_type: ParameterType,
    /// Free text shown next to the parameter in the catalog editor.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_text"
    )]
    pub description: Option<String>,
    /// Value used when the caller supplies none. Any JSON shape is accepted
    /// here; it is only checked against `param_type` when resolved.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_value"
    )]
    pub default_value: Option<Value>,
    /// Keys outside the four above, e.g. notes added by hand.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Keeps an explicit `"defaultValue": null` as `Some(Value::Null)` so that
/// it survives a parse/format cycle.
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A string tag maps to its type; `null` is the default type; any other JSON
/// value becomes an unknown tag holding its JSON text, which validates
/// everything.
fn lenient_type<'de, D>(deserializer: D) -> Result<ParameterType, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(tag) => ParameterType::from(tag),
        Value::Null => ParameterType::default(),
        other => ParameterType::Other(other.to_string()),
    })
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Null => None,
        other => Some(other.to_string()),
    })
}

impl Parameter {
    /// Creates the entry added for a newly detected placeholder: type
    /// `string`, a generated description and an empty default value.
    pub fn detected(name: &str) -> Self {
        Self {
            name: name.to_string(),
            param_type: ParameterType::String,
            description: Some(generated_description(name)),
            default_value: Some(Value::String(String::new())),
            extra: Map::new(),
        }
    }

    /// The stored description, or the generated `"Parameter for <name>"`.
    pub fn description_or_default(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| generated_description(&self.name))
    }
}

fn generated_description(name: &str) -> String {
    format!("Parameter for {}", name)
}

/// The declared type of a parameter.
///
/// Serialized as its lowercase tag. Tags outside the known eight are kept
/// verbatim in `Other` so a hand-edited catalog survives a round trip, and
/// the validator accepts any value for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParameterType {
    #[default]
    String,
    Number,
    Boolean,
    Array,
    Object,
    Date,
    Email,
    Url,
    Other(String),
}

impl ParameterType {
    pub fn as_str(&self) -> &str {
        match self {
            ParameterType::String => "string",
            ParameterType::Number => "number",
            ParameterType::Boolean => "boolean",
            ParameterType::Array => "array",
            ParameterType::Object => "object",
            ParameterType::Date => "date",
            ParameterType::Email => "email",
            ParameterType::Url => "url",
            ParameterType::Other(tag) => tag.as_str(),
        }
    }
}

impl From<String> for ParameterType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "string" => ParameterType::String,
            "number" => ParameterType::Number,
            "boolean" => ParameterType::Boolean,
            "array" => ParameterType::Array,
            "object" => ParameterType::Object,
            "date" => ParameterType::Date,
            "email" => ParameterType::Email,
            "url" => ParameterType::Url,
            _ => ParameterType::Other(tag),
        }
    }
}

impl From<ParameterType> for String {
    fn from(param_type: ParameterType) -> Self {
        match param_type {
            ParameterType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter paired with the concrete value it takes in one rendering.
///
/// Built transiently while validating or substituting; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterValue {
    pub parameter: Parameter,
    pub value: Value,
}

impl ParameterValue {
    pub fn new(parameter: Parameter, value: Value) -> Self {
        Self { parameter, value }
    }
}
