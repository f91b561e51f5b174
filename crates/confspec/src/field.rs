//! Field descriptors and type conversion.
//!
//! A [`Field`] is one declared configuration entry: a name, a doc string, a
//! conversion rule, and the absence-handling knobs (`required`, default,
//! fallback chain). Fields are declared with the per-kind constructors and
//! builder-style modifiers:
//!
//! ```
//! use confspec::{Field, SingleField};
//!
//! let host = Field::text("host", "Hostname to connect to.").required();
//! let port = Field::int("port", "Port to connect to.").default(8080);
//! let addr = Field::text("address", "Deprecated alias for host.")
//!     .fallback(SingleField::new("host"));
//! ```

use toml::Value;

use crate::error::{Error, Result};
use crate::fallback::Fallback;
use crate::source::RawSource;
use crate::value::ResolvedValue;

/// The type-conversion rule a field applies to raw values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Int,
    Float,
    Bool,
    List,
    Dict,
    Regex,
}

impl FieldKind {
    /// The type name used in documentation and conversion errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldKind::Text => "str",
            FieldKind::Int => "int",
            FieldKind::Float => "float",
            FieldKind::Bool => "bool",
            FieldKind::List => "list",
            FieldKind::Dict => "dict",
            FieldKind::Regex => "regex",
        }
    }

    /// Check whether an already-resolved value (e.g. a declared default) is
    /// of this kind.
    pub(crate) fn matches(&self, value: &ResolvedValue) -> bool {
        matches!(
            (self, value),
            (FieldKind::Text, ResolvedValue::Text(_))
                | (FieldKind::Int, ResolvedValue::Int(_))
                | (FieldKind::Float, ResolvedValue::Float(_))
                | (FieldKind::Bool, ResolvedValue::Bool(_))
                | (FieldKind::List, ResolvedValue::List(_))
                | (FieldKind::Dict, ResolvedValue::Dict(_))
                | (FieldKind::Regex, ResolvedValue::Regex(_))
        )
    }

    /// Convert a raw value into a resolved value of this kind.
    ///
    /// Conversion is idempotent on well-typed input, which is what allows
    /// fallback-produced values to go through the same path as direct raw
    /// values.
    pub(crate) fn convert(&self, field: &str, value: &Value) -> Result<ResolvedValue> {
        match self {
            FieldKind::Text => match value {
                Value::String(s) => Ok(ResolvedValue::Text(s.clone())),
                other => Err(self.mismatch(field, other)),
            },
            FieldKind::Int => match value {
                Value::Integer(i) => Ok(ResolvedValue::Int(*i)),
                Value::String(s) => s.trim().parse::<i64>().map(ResolvedValue::Int).map_err(
                    |_| self.error(field, format!("'{s}' is not an integer")),
                ),
                // Floats are refused rather than silently truncated.
                other => Err(self.mismatch(field, other)),
            },
            FieldKind::Float => match value {
                Value::Float(f) => Ok(ResolvedValue::Float(*f)),
                Value::Integer(i) => Ok(ResolvedValue::Float(*i as f64)),
                Value::String(s) => s.trim().parse::<f64>().map(ResolvedValue::Float).map_err(
                    |_| self.error(field, format!("'{s}' is not a number")),
                ),
                other => Err(self.mismatch(field, other)),
            },
            FieldKind::Bool => match value {
                Value::Boolean(b) => Ok(ResolvedValue::Bool(*b)),
                Value::String(s) => {
                    let lowered = s.trim().to_lowercase();
                    Ok(ResolvedValue::Bool(!matches!(
                        lowered.as_str(),
                        "false" | "0" | ""
                    )))
                }
                Value::Integer(i) => Ok(ResolvedValue::Bool(*i != 0)),
                other => Err(self.mismatch(field, other)),
            },
            FieldKind::List => match value {
                Value::Array(items) => Ok(ResolvedValue::List(items.clone())),
                other => Err(self.mismatch(field, other)),
            },
            FieldKind::Dict => match value {
                Value::Table(table) => Ok(ResolvedValue::Dict(table.clone())),
                other => Err(self.mismatch(field, other)),
            },
            FieldKind::Regex => match value {
                Value::String(s) => regex::Regex::new(s)
                    .map(ResolvedValue::Regex)
                    .map_err(|e| self.error(field, e.to_string())),
                other => Err(self.mismatch(field, other)),
            },
        }
    }

    fn mismatch(&self, field: &str, value: &Value) -> Error {
        self.error(field, format!("unexpected {} value", value_type(value)))
    }

    fn error(&self, field: &str, message: String) -> Error {
        Error::Conversion {
            field: field.to_string(),
            target: self.type_name(),
            message,
        }
    }
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "string",
        Value::Integer(_) => "integer",
        Value::Float(_) => "float",
        Value::Boolean(_) => "boolean",
        Value::Datetime(_) => "datetime",
        Value::Array(_) => "array",
        Value::Table(_) => "table",
    }
}

/// A single declared configuration field.
#[derive(Debug)]
pub struct Field {
    name: String,
    doc: String,
    kind: FieldKind,
    required: bool,
    default: Option<ResolvedValue>,
    fallbacks: Vec<Box<dyn Fallback>>,
    static_only: bool,
}

impl Clone for Field {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            doc: self.doc.clone(),
            kind: self.kind,
            required: self.required,
            default: self.default.clone(),
            fallbacks: self.fallbacks.iter().map(|f| f.clone_box()).collect(),
            static_only: self.static_only,
        }
    }
}

impl Field {
    fn new(name: impl Into<String>, doc: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            doc: doc.into(),
            kind,
            required: false,
            default: None,
            fallbacks: Vec::new(),
            static_only: false,
        }
    }

    /// Declare a text field.
    pub fn text(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self::new(name, doc, FieldKind::Text)
    }

    /// Declare an integer field.
    pub fn int(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self::new(name, doc, FieldKind::Int)
    }

    /// Declare a float field.
    pub fn float(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self::new(name, doc, FieldKind::Float)
    }

    /// Declare a boolean field.
    pub fn bool(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self::new(name, doc, FieldKind::Bool)
    }

    /// Declare a list field.
    pub fn list(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self::new(name, doc, FieldKind::List)
    }

    /// Declare a table field.
    pub fn dict(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self::new(name, doc, FieldKind::Dict)
    }

    /// Declare a regular-expression field. The raw value must be a string
    /// that compiles as a pattern.
    pub fn regex(name: impl Into<String>, doc: impl Into<String>) -> Self {
        Self::new(name, doc, FieldKind::Regex)
    }

    /// Mark this field as required. Mutually exclusive with a default;
    /// declaring both is rejected when the schema is built.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Declare a default, used verbatim when neither the raw data nor any
    /// fallback produces a value.
    pub fn default(mut self, value: impl Into<ResolvedValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Append a fallback strategy. Order is significant: the first strategy
    /// to find a value wins.
    pub fn fallback(mut self, strategy: impl Fallback + 'static) -> Self {
        self.fallbacks.push(Box::new(strategy));
        self
    }

    /// Mark this field as resolvable in a static-only pass
    /// (see [`Schema::load_static`](crate::Schema::load_static)).
    pub fn static_only(mut self) -> Self {
        self.static_only = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> &str {
        &self.doc
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> Option<&ResolvedValue> {
        self.default.as_ref()
    }

    pub fn is_static(&self) -> bool {
        self.static_only
    }

    pub(crate) fn fallbacks(&self) -> &[Box<dyn Fallback>] {
        &self.fallbacks
    }

    /// Resolve this field against a raw source.
    ///
    /// Lookup order: the field's own raw value, then the fallback chain in
    /// declared order, then the default. A required field with no value at
    /// the end of that chain is an error; an optional one resolves to `None`.
    pub(crate) fn resolve(&self, source: &dyn RawSource) -> Result<Option<ResolvedValue>> {
        if let Some(raw) = source.get(&self.name) {
            return self.kind.convert(&self.name, raw).map(Some);
        }
        for fallback in &self.fallbacks {
            if let Some(raw) = fallback.find(source) {
                tracing::debug!(field = %self.name, "resolved via fallback");
                return self.kind.convert(&self.name, &raw).map(Some);
            }
        }
        if let Some(default) = &self.default {
            tracing::debug!(field = %self.name, "using declared default");
            return Ok(Some(default.clone()));
        }
        if self.required {
            return Err(Error::MissingField {
                field: self.name.clone(),
            });
        }
        Ok(None)
    }
}
