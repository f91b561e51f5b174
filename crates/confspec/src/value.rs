//! Resolved configuration values.
//!
//! [`ResolvedValue`] is the typed output of field conversion: once a raw
//! `toml::Value` has passed a field's conversion rule it becomes one of these
//! variants and never changes again. Defaults are declared as resolved values
//! too, which is what lets the engine use them verbatim without running them
//! back through conversion.

use std::fmt;

use toml::Value;
use toml::value::Table;

/// A configuration value after type conversion.
#[derive(Debug, Clone)]
pub enum ResolvedValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Value>),
    Dict(Table),
    Regex(regex::Regex),
}

impl ResolvedValue {
    /// The type name used in documentation and conversion errors.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ResolvedValue::Text(_) => "str",
            ResolvedValue::Int(_) => "int",
            ResolvedValue::Float(_) => "float",
            ResolvedValue::Bool(_) => "bool",
            ResolvedValue::List(_) => "list",
            ResolvedValue::Dict(_) => "dict",
            ResolvedValue::Regex(_) => "regex",
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResolvedValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ResolvedValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            ResolvedValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ResolvedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            ResolvedValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Table> {
        match self {
            ResolvedValue::Dict(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_regex(&self) -> Option<&regex::Regex> {
        match self {
            ResolvedValue::Regex(re) => Some(re),
            _ => None,
        }
    }

    /// Render back into a plain TOML value. Regexes render as their pattern.
    pub fn to_value(&self) -> Value {
        match self {
            ResolvedValue::Text(s) => Value::String(s.clone()),
            ResolvedValue::Int(i) => Value::Integer(*i),
            ResolvedValue::Float(f) => Value::Float(*f),
            ResolvedValue::Bool(b) => Value::Boolean(*b),
            ResolvedValue::List(items) => Value::Array(items.clone()),
            ResolvedValue::Dict(table) => Value::Table(table.clone()),
            ResolvedValue::Regex(re) => Value::String(re.as_str().to_string()),
        }
    }
}

impl PartialEq for ResolvedValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ResolvedValue::Text(a), ResolvedValue::Text(b)) => a == b,
            (ResolvedValue::Int(a), ResolvedValue::Int(b)) => a == b,
            (ResolvedValue::Float(a), ResolvedValue::Float(b)) => a == b,
            (ResolvedValue::Bool(a), ResolvedValue::Bool(b)) => a == b,
            (ResolvedValue::List(a), ResolvedValue::List(b)) => a == b,
            (ResolvedValue::Dict(a), ResolvedValue::Dict(b)) => a == b,
            // Regexes compare by pattern text.
            (ResolvedValue::Regex(a), ResolvedValue::Regex(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl fmt::Display for ResolvedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_value())
    }
}

impl serde::Serialize for ResolvedValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl From<&str> for ResolvedValue {
    fn from(value: &str) -> Self {
        ResolvedValue::Text(value.to_string())
    }
}

impl From<String> for ResolvedValue {
    fn from(value: String) -> Self {
        ResolvedValue::Text(value)
    }
}

impl From<i32> for ResolvedValue {
    fn from(value: i32) -> Self {
        ResolvedValue::Int(i64::from(value))
    }
}

impl From<i64> for ResolvedValue {
    fn from(value: i64) -> Self {
        ResolvedValue::Int(value)
    }
}

impl From<f64> for ResolvedValue {
    fn from(value: f64) -> Self {
        ResolvedValue::Float(value)
    }
}

impl From<bool> for ResolvedValue {
    fn from(value: bool) -> Self {
        ResolvedValue::Bool(value)
    }
}

impl From<Vec<Value>> for ResolvedValue {
    fn from(value: Vec<Value>) -> Self {
        ResolvedValue::List(value)
    }
}

impl From<Table> for ResolvedValue {
    fn from(value: Table) -> Self {
        ResolvedValue::Dict(value)
    }
}

impl From<regex::Regex> for ResolvedValue {
    fn from(value: regex::Regex) -> Self {
        ResolvedValue::Regex(value)
    }
}
