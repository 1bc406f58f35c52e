//! Computed style values.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// The result of evaluating a [`StyleSpec`](crate::StyleSpec).
///
/// Flat and interpolated values are `Number` or `Text` (`rgb(...)` colors).
/// Passthrough mappings hand back the attribute's value untouched as `Data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StyleValue {
    Number(f64),
    Text(String),
    Data(Value),
}

impl StyleValue {
    /// Returns the value as a float if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StyleValue::Number(n) => Some(*n),
            StyleValue::Text(_) => None,
            StyleValue::Data(value) => value.as_f64(),
        }
    }

    /// Returns the value as text if it is textual.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StyleValue::Number(_) => None,
            StyleValue::Text(text) => Some(text),
            StyleValue::Data(value) => value.as_str(),
        }
    }

    /// Converts into a JSON value, e.g. to hand to the graph library.
    pub fn into_json(self) -> Value {
        match self {
            StyleValue::Number(n) => serde_json::json!(n),
            StyleValue::Text(text) => Value::String(text),
            StyleValue::Data(value) => value,
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) => write!(f, "{}", n),
            StyleValue::Text(text) => f.write_str(text),
            StyleValue::Data(Value::String(text)) => f.write_str(text),
            StyleValue::Data(value) => write!(f, "{}", value),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        StyleValue::Number(n)
    }
}

impl From<String> for StyleValue {
    fn from(text: String) -> Self {
        StyleValue::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors() {
        assert_eq!(StyleValue::Number(3.0).as_f64(), Some(3.0));
        assert_eq!(StyleValue::Number(3.0).as_str(), None);
        assert_eq!(StyleValue::Text("rgb(1, 2, 3)".into()).as_str(), Some("rgb(1, 2, 3)"));
        assert_eq!(StyleValue::Data(json!(7)).as_f64(), Some(7.0));
        assert_eq!(StyleValue::Data(json!("red")).as_str(), Some("red"));
        assert_eq!(StyleValue::Data(Value::Null).as_f64(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(StyleValue::Number(15.0).to_string(), "15");
        assert_eq!(StyleValue::Text("rgb(0, 0, 0)".into()).to_string(), "rgb(0, 0, 0)");
        assert_eq!(StyleValue::Data(json!("blue")).to_string(), "blue");
        assert_eq!(StyleValue::Data(json!([1, 2])).to_string(), "[1,2]");
    }

    #[test]
    fn test_serialize_untagged() {
        assert_eq!(serde_json::to_value(StyleValue::Number(2.5)).unwrap(), json!(2.5));
        assert_eq!(
            serde_json::to_value(StyleValue::Data(json!({"a": 1}))).unwrap(),
            json!({"a": 1})
        );
    }

    #[test]
    fn test_into_json() {
        assert_eq!(StyleValue::Text("x".into()).into_json(), json!("x"));
        assert_eq!(StyleValue::Number(1.5).into_json(), json!(1.5));
    }
}
