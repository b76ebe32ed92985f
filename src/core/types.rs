//! Dynamically typed input values accepted by the validators.
//!
//! Validators receive a [`Value`] rather than a concrete Rust type so that
//! callers can pass through whatever they were handed (a numeric string from
//! a form field, a missing value, a number where a code was expected) and
//! get a structured failure back instead of a parse error somewhere else.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A loosely typed input value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "data")]
pub enum Value {
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point number
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Boolean value
    Boolean(bool),
    /// Sequence of values
    Array(Vec<Value>),
    /// Represents absence of value
    None,
}

/// The type tag of a [`Value`], used in failure reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// Integer value
    Integer,
    /// Floating point value
    Float,
    /// String value
    String,
    /// Boolean value
    Boolean,
    /// Array value
    Array,
    /// Missing value
    None,
}

impl Value {
    /// Get the type tag of this value.
    pub fn get_type(&self) -> ValueType {
        match self {
            Value::Integer(_) => ValueType::Integer,
            Value::Float(_) => ValueType::Float,
            Value::String(_) => ValueType::String,
            Value::Boolean(_) => ValueType::Boolean,
            Value::Array(_) => ValueType::Array,
            Value::None => ValueType::None,
        }
    }

    /// Try to get this value as a number.
    /// Integers are automatically converted to floats; strings never are.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_string(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Check if this value is numeric (integer or float).
    pub fn is_number(&self) -> bool {
        self.get_type().is_numeric()
    }

    /// Check if this value is None.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Parse a command-line argument into a value.
    ///
    /// `null` becomes [`Value::None`], `true`/`false` become booleans,
    /// anything that parses as an integer or float becomes a number, and a
    /// double-quoted argument (`"12"`) is always kept as a string.
    pub fn from_cli_arg(arg: &str) -> Self {
        if arg.len() >= 2 && arg.starts_with('"') && arg.ends_with('"') {
            return Value::String(arg[1..arg.len() - 1].to_string());
        }

        match arg {
            "null" => Value::None,
            "true" => Value::Boolean(true),
            "false" => Value::Boolean(false),
            _ => {
                if let Ok(i) = arg.parse::<i64>() {
                    Value::Integer(i)
                } else if let Ok(f) = arg.parse::<f64>() {
                    Value::Float(f)
                } else {
                    Value::String(arg.to_string())
                }
            }
        }
    }
}

impl ValueType {
    /// Whether values of this type count as numbers.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ValueType::Integer | ValueType::Float)
    }

    /// Get a human-readable name for this type.
    pub fn display_name(&self) -> &'static str {
        match self {
            ValueType::Integer => "Integer",
            ValueType::Float => "Float",
            ValueType::String => "String",
            ValueType::Boolean => "Boolean",
            ValueType::Array => "Array",
            ValueType::None => "None",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Array(arr) => write!(f, "Array[{}]", arr.len()),
            Value::None => write!(f, "None"),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::None)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_coercion() {
        assert_eq!(Value::Integer(42).as_number(), Some(42.0));
        assert_eq!(Value::Float(2.5).as_number(), Some(2.5));
        assert_eq!(Value::from("20").as_number(), None); // No string coercion
        assert_eq!(Value::None.as_number(), None);
    }

    #[test]
    fn test_value_type_inference() {
        assert_eq!(Value::from(7).get_type(), ValueType::Integer);
        assert_eq!(Value::from(0.5).get_type(), ValueType::Float);
        assert_eq!(Value::from("x").get_type(), ValueType::String);
        assert_eq!(Value::from(None::<i64>).get_type(), ValueType::None);
        assert_eq!(Value::from(vec![1, 2]).get_type(), ValueType::Array);
        assert!(ValueType::Float.is_numeric());
        assert!(!ValueType::String.is_numeric());
    }

    #[test]
    fn test_from_cli_arg() {
        assert_eq!(Value::from_cli_arg("100"), Value::Integer(100));
        assert_eq!(Value::from_cli_arg("-10"), Value::Integer(-10));
        assert_eq!(Value::from_cli_arg("12.5"), Value::Float(12.5));
        assert_eq!(Value::from_cli_arg("SAVE10"), Value::from("SAVE10"));
        assert_eq!(Value::from_cli_arg("\"12\""), Value::from("12"));
        assert_eq!(Value::from_cli_arg("null"), Value::None);
        assert_eq!(Value::from_cli_arg("true"), Value::Boolean(true));
    }

    #[test]
    fn test_serde_tagging() {
        let json = serde_json::to_string(&Value::Integer(3)).unwrap();
        assert_eq!(json, r#"{"type":"Integer","data":3}"#);

        let back: Value = serde_json::from_str(r#"{"type":"String","data":"US"}"#).unwrap();
        assert_eq!(back, Value::from("US"));
    }
}
