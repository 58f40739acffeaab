use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const CALCULATE_PATH: &str = "/calculate";

/// Symbolic variables forwarded to the calculation service. Keys are free-form.
pub type VariableMap = BTreeMap<String, Value>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CalculateRequest {
    pub image: String,
    pub dict_of_vars: VariableMap,
}

impl CalculateRequest {
    pub fn new(image: String, dict_of_vars: VariableMap) -> Self {
        Self {
            image,
            dict_of_vars,
        }
    }
}

/// One recognized expression as reported by the calculation service.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CalculateResponse {
    #[serde(default)]
    pub expr: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub result: String,
    #[serde(default)]
    pub assign: bool,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

pub fn calculate_url(base: &str) -> String {
    format!("{}{CALCULATE_PATH}", base.trim().trim_end_matches('/'))
}

/// Extracts response items from a body shaped as a single object, an array
/// of objects, or an envelope with a `data` array. Unknown shapes yield `None`.
pub fn parse_calculate_response(body: &str) -> Option<Vec<CalculateResponse>> {
    let value: Value = serde_json::from_str(body).ok()?;
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            Some(Value::Object(item)) => vec![Value::Object(item)],
            Some(_) => return None,
            None => vec![Value::Object(map)],
        },
        _ => return None,
    };
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).ok())
        .collect()
}

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;
