//! JSON-described fixture trees.
//!
//! Tests declare render trees as tagged JSON rather than hand-building
//! [`Value`] graphs. The convention:
//!
//! - `null` → absent optional; `{"$some": x}` → present optional
//! - `{"$type": "Name", ...}` → record with the remaining keys as fields
//! - `{"$type": "Name", "$case": "case", ...}` → case with the remaining
//!   keys as labeled payloads
//! - scalars and arrays map directly
//!
//! Key order is preserved (serde_json `preserve_order`), so label order in
//! fixtures matches the JSON source.

use serde_json::Value as Json;
use thiserror::Error;

use crate::value::Value;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FromJsonError {
    /// An object fixture is missing its `$type` tag.
    #[error("object fixture missing \"$type\" tag")]
    MissingTypeTag,
    /// A `$type` or `$case` tag is not a JSON string.
    #[error("fixture tag {0:?} must be a string")]
    TagNotString(String),
    /// A JSON number that fits neither i64 nor f64.
    #[error("unrepresentable number in fixture")]
    BadNumber,
}

/// Convert a tagged JSON fixture description into a [`Value`] tree.
///
/// # Example
///
/// ```
/// use nodelens_value::{from_json, Value};
/// use serde_json::json;
///
/// let v = from_json(&json!({
///     "$type": "Text",
///     "storage": {"$type": "TextStorage", "verbatim": "Hi"},
/// })).unwrap();
/// assert_eq!(v.type_name(), "Text");
/// ```
pub fn from_json(json: &Json) -> Result<Value, FromJsonError> {
    match json {
        Json::Null => Ok(Value::none()),
        Json::Bool(b) => Ok(Value::Bool(*b)),
        Json::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                Err(FromJsonError::BadNumber)
            }
        }
        Json::String(s) => Ok(Value::Str(s.clone())),
        Json::Array(items) => {
            let converted: Result<Vec<Value>, FromJsonError> = items.iter().map(from_json).collect();
            Ok(Value::Seq(converted?))
        }
        Json::Object(map) => {
            if let Some(inner) = map.get("$some") {
                return Ok(Value::some(from_json(inner)?));
            }
            let type_name = match map.get("$type") {
                Some(Json::String(s)) => s.clone(),
                Some(_) => return Err(FromJsonError::TagNotString("$type".to_string())),
                None => return Err(FromJsonError::MissingTypeTag),
            };
            let members: Result<Vec<(String, Value)>, FromJsonError> = map
                .iter()
                .filter(|(k, _)| !k.starts_with('$'))
                .map(|(k, v)| Ok((k.clone(), from_json(v)?)))
                .collect();
            let members = members?;
            match map.get("$case") {
                Some(Json::String(case_name)) => {
                    Ok(Value::case(type_name, case_name.clone(), members))
                }
                Some(_) => Err(FromJsonError::TagNotString("$case".to_string())),
                None => Ok(Value::record(type_name, members)),
            }
        }
    }
}
