//! Produces concrete test instances from templated test content.
//!
//! This is the preview/run path: the catalog stored with the content is read,
//! declared defaults are overlaid with the caller's values, each value is
//! checked against its parameter type and substituted into the steps and
//! expected result.
//!
//! Type mismatches do not stop rendering. The value is substituted anyway and
//! reported in `RenderedTest::invalid` so the caller can decide what to do.

use super::{codec, scanner, substitution, validator};
use crate::model::parameter::Parameter;
use crate::model::test_case::{InvalidValue, RenderedTest, TestContent};
use indexmap::IndexMap;
use log::debug;
use serde_json::Value;
use std::collections::HashMap;

/// Renders one instance of `content` with `values`.
pub fn render(content: &TestContent, values: &HashMap<String, Value>) -> RenderedTest {
    let catalog = codec::deserialize(&content.parameters);
    render_with_catalog(content, &catalog, values)
}

/// Renders one instance per row, in row order. The catalog is read once.
pub fn render_rows(content: &TestContent, rows: &[HashMap<String, Value>]) -> Vec<RenderedTest> {
    let catalog = codec::deserialize(&content.parameters);
    rows.iter()
        .map(|row| render_with_catalog(content, &catalog, row))
        .collect()
}

fn render_with_catalog(
    content: &TestContent,
    catalog: &[Parameter],
    values: &HashMap<String, Value>,
) -> RenderedTest {
    let mut effective = codec::default_values(catalog);
    effective.extend(values.iter().map(|(k, v)| (k.clone(), v.clone())));

    let used = scanner::extract_from_fields(&[
        content.steps.as_str(),
        content.expected_result.as_str(),
    ]);
    let unresolved: Vec<String> = used
        .into_iter()
        .filter(|name| !effective.contains_key(name))
        .collect();

    let rendered = RenderedTest {
        steps: substitution::resolve(&content.steps, &effective),
        expected_result: substitution::resolve(&content.expected_result, &effective),
        unresolved,
        invalid: invalid_values(catalog, &effective),
    };
    debug!(
        "Rendered test instance: {} unresolved, {} invalid",
        rendered.unresolved.len(),
        rendered.invalid.len()
    );
    rendered
}

/// Checks every cataloged parameter that has a value. A name declared twice
/// is checked against its last declaration, reported at its first position.
fn invalid_values(catalog: &[Parameter], values: &HashMap<String, Value>) -> Vec<InvalidValue> {
    let mut declared: IndexMap<&str, &Parameter> = IndexMap::new();
    for parameter in catalog {
        declared.insert(parameter.name.as_str(), parameter);
    }

    declared
        .into_iter()
        .filter_map(|(name, parameter)| {
            let value = values.get(name)?;
            validator::check(parameter, value)
                .err()
                .map(|e| InvalidValue {
                    name: name.to_string(),
                    expected_type: parameter.param_type.to_string(),
                    message: e.to_string(),
                })
        })
        .collect()
}
