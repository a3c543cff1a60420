//! Request and response payloads of the `/api/parameters` endpoints.
//!
//! Shared so that any Rust client builds exactly what the backend reads.

use crate::model::parameter::Parameter;
use crate::model::segment::Segment;
use crate::model::test_case::{RenderedTest, TestContent};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Texts to scan, in scan order (steps first).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectRequest {
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectResponse {
    pub names: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentResponse {
    pub segments: Vec<Segment>,
}

/// Catalog text to read. Never rejected; unreadable text gives no parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseCatalogRequest {
    pub json: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseCatalogResponse {
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatCatalogRequest {
    pub parameters: Vec<Parameter>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatCatalogResponse {
    pub json: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRequest {
    pub parameter: Parameter,
    pub value: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveRequest {
    pub text: String,
    #[serde(default)]
    pub values: HashMap<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub text: String,
}

/// Current editor contents. `catalog` is the catalog text area as typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReconcileRequest {
    #[serde(default)]
    pub steps: String,
    #[serde(default)]
    pub expected_result: String,
    #[serde(default)]
    pub catalog: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileResponse {
    pub detected: Vec<String>,
    pub catalog: String,
}

/// Renders `content` once with `values`, or once per entry of `rows` when
/// rows are given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderRequest {
    pub content: TestContent,
    #[serde(default)]
    pub values: HashMap<String, Value>,
    #[serde(default)]
    pub rows: Option<Vec<HashMap<String, Value>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResponse {
    pub instances: Vec<RenderedTest>,
}
