//! Attribute and option values.
//!
//! A value is exactly one of four literal forms:
//! - `"text"` is [`Value::String`]
//! - `42` or `-7` is [`Value::Integer`]
//! - `3.14` is [`Value::Float`] (any numeric literal containing `.`)
//! - `true` / `false` is [`Value::Boolean`]

use std::fmt;

/// A literal value attached to a config attribute or a template option.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
#[repr(u8)]
pub enum Value {
    /// String content, without quotes or escapes.
    String(String),
    /// 64-bit signed integer.
    Integer(i64),
    /// 64-bit float.
    Float(f64),
    /// Boolean.
    Boolean(bool),
}

impl Value {
    /// Get as a string slice, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as an integer, if this is an integer.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as a float. Integers widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get as a boolean, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The attribute type this value naturally has.
    pub fn attribute_type(&self) -> AttributeType {
        match self {
            Value::String(_) => AttributeType::String,
            Value::Integer(_) => AttributeType::Integer,
            Value::Float(_) => AttributeType::Float,
            Value::Boolean(_) => AttributeType::Boolean,
        }
    }
}

impl fmt::Display for Value {
    /// Human-readable rendering: strings appear unquoted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

/// Declared type of a template attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "facet", derive(facet::Facet))]
#[repr(u8)]
pub enum AttributeType {
    /// `string`
    String,
    /// `int`
    Integer,
    /// `float`
    Float,
    /// `bool`
    Boolean,
}

impl AttributeType {
    pub fn name(&self) -> &'static str {
        match self {
            AttributeType::String => "String",
            AttributeType::Integer => "Integer",
            AttributeType::Float => "Float",
            AttributeType::Boolean => "Boolean",
        }
    }

    /// Whether a config value satisfies this declared type.
    ///
    /// Integers are accepted where a float is declared.
    pub fn accepts(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (AttributeType::String, Value::String(_))
                | (AttributeType::Integer, Value::Integer(_))
                | (AttributeType::Float, Value::Float(_) | Value::Integer(_))
                | (AttributeType::Boolean, Value::Boolean(_))
        )
    }

    /// Convert the raw text of a default literal into a value of this type.
    ///
    /// Returns `None` when the text does not fit the type.
    pub fn parse_literal(&self, raw: &str) -> Option<Value> {
        match self {
            AttributeType::String => Some(Value::String(raw.to_string())),
            AttributeType::Integer => raw.parse().ok().map(Value::Integer),
            AttributeType::Float => raw.parse().ok().map(Value::Float),
            AttributeType::Boolean => match raw {
                "true" => Some(Value::Boolean(true)),
                "false" => Some(Value::Boolean(false)),
                _ => None,
            },
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
