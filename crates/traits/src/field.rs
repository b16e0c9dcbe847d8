//! Data binding: resolving `Property` key paths against the bound object.

use serde_json::Value;
use std::fmt::{self, Debug};

/// A scalar read from the data object.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

pub trait FieldResolver: Send + Sync + Debug {
    /// Resolves `path` against `data`. `None` means the path is missing or
    /// does not lead to a scalar.
    fn resolve(&self, path: &str, data: &Value) -> Option<FieldValue>;
}

/// Resolves dotted key paths such as `customer.address.city`,
/// `lines.0.amount` or `lines[0].amount` in JSON data. A path starting with
/// `/` is treated as a JSON pointer, and `.` names the data object itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFieldResolver;

impl JsonFieldResolver {
    fn lookup<'a>(path: &str, data: &'a Value) -> Option<&'a Value> {
        let path = path.trim();
        if path == "." || path.is_empty() {
            return Some(data);
        }
        if path.starts_with('/') {
            return data.pointer(path);
        }
        let normalized = path.replace('[', ".").replace(']', "");
        normalized
            .split('.')
            .filter(|segment| !segment.is_empty())
            .try_fold(data, |current, segment| match current {
                Value::Object(map) => map.get(segment),
                Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            })
    }
}

impl FieldResolver for JsonFieldResolver {
    fn resolve(&self, path: &str, data: &Value) -> Option<FieldValue> {
        match Self::lookup(path, data)? {
            Value::String(s) => Some(FieldValue::Text(s.clone())),
            Value::Number(n) => n.as_f64().map(FieldValue::Number),
            Value::Bool(b) => Some(FieldValue::Bool(*b)),
            Value::Null => None,
            Value::Array(_) | Value::Object(_) => {
                log::debug!("Key path '{}' does not lead to a scalar value", path);
                None
            }
        }
    }
}
