use serde::{Deserialize, Serialize};

/// The templated part of a test case or of a test-data definition.
///
/// `parameters` is the serialized parameter catalog exactly as the owner
/// stores it (see `params::codec`). It is kept as text because it is edited
/// by hand and may be momentarily malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestContent {
    pub steps: String,
    pub expected_result: String,
    #[serde(default)]
    pub parameters: String,
}

/// A test instance with concrete values materialized into its text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedTest {
    pub steps: String,
    pub expected_result: String,
    /// Placeholder names that had no value and were left as `$name`,
    /// in order of first appearance (steps first).
    pub unresolved: Vec<String>,
    /// Values that were substituted but do not match their declared type.
    pub invalid: Vec<InvalidValue>,
}

/// A substituted value that failed its parameter's type rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidValue {
    pub name: String,
    pub expected_type: String,
    pub message: String,
}
