//! Fallback strategies for missing fields.
//!
//! When a field has no raw value of its own, its fallback chain is consulted
//! in declared order and the first strategy to find a value wins. Strategies
//! read *raw* data only — never another field's default or resolved value —
//! so declared defaults can never leak into a fallback chain and remain the
//! last resort they are documented to be. This also makes reference cycles
//! between fields inert: a strategy cannot trigger another field's
//! resolution.
//!
//! Two standard strategies are provided; callers can implement [`Fallback`]
//! for their own.

use std::fmt;

use toml::Value;

use crate::source::RawSource;

/// A strategy for deriving a field's value from other raw fields.
pub trait Fallback: fmt::Debug + Send + Sync {
    /// The field names this strategy reads. Used at schema-build time to
    /// reject references to undeclared fields.
    fn depends_on(&self) -> &[String];

    /// Attempt to produce a substitute value from raw data. Absence is not
    /// an error; return `None` and the next strategy (or the default, or the
    /// required check) takes over.
    fn find(&self, source: &dyn RawSource) -> Option<Value>;

    /// Object-safe clone, needed because fields are cloneable for schema
    /// inheritance.
    fn clone_box(&self) -> Box<dyn Fallback>;
}

impl Clone for Box<dyn Fallback> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Fall back to the raw value of one other field.
///
/// The value is handed over unconverted; the owning field applies its own
/// conversion rule afterwards.
#[derive(Debug, Clone)]
pub struct SingleField {
    depends: [String; 1],
}

impl SingleField {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            depends: [field.into()],
        }
    }
}

impl Fallback for SingleField {
    fn depends_on(&self) -> &[String] {
        &self.depends
    }

    fn find(&self, source: &dyn RawSource) -> Option<Value> {
        source.get(&self.depends[0]).cloned()
    }

    fn clone_box(&self) -> Box<dyn Fallback> {
        Box::new(self.clone())
    }
}

/// Build a string value from a template with `{name}` placeholders.
///
/// Found only when every listed field has a present raw value. Optional
/// placeholder fields (added with [`FormatString::optional`]) do not gate
/// discovery; an absent optional field renders as the empty string.
///
/// ```
/// use confspec::{FormatString, Fallback};
///
/// let fallback = FormatString::new("{host}:{port}", ["host", "port"]);
/// let data: toml::value::Table = toml::from_str(r#"
/// host = "example.org"
/// port = 8080
/// "#).unwrap();
/// assert_eq!(
///     fallback.find(&data),
///     Some(toml::Value::String("example.org:8080".to_string()))
/// );
/// ```
#[derive(Debug, Clone)]
pub struct FormatString {
    template: String,
    required: Vec<String>,
    optional: Vec<String>,
    // required + optional, kept flat for depends_on
    referenced: Vec<String>,
}

impl FormatString {
    pub fn new(
        template: impl Into<String>,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let required: Vec<String> = fields.into_iter().map(Into::into).collect();
        Self {
            template: template.into(),
            referenced: required.clone(),
            required,
            optional: Vec::new(),
        }
    }

    /// Add placeholder fields that may be absent from the raw data.
    pub fn optional(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        for field in fields {
            let field = field.into();
            self.referenced.push(field.clone());
            self.optional.push(field);
        }
        self
    }
}

impl Fallback for FormatString {
    fn depends_on(&self) -> &[String] {
        &self.referenced
    }

    fn find(&self, source: &dyn RawSource) -> Option<Value> {
        if !self.required.iter().all(|field| source.has(field)) {
            return None;
        }
        let mut rendered = self.template.clone();
        for field in &self.referenced {
            let text = source.get(field).map(render_raw).unwrap_or_default();
            rendered = rendered.replace(&format!("{{{field}}}"), &text);
        }
        Some(Value::String(rendered))
    }

    fn clone_box(&self) -> Box<dyn Fallback> {
        Box::new(self.clone())
    }
}

/// Render a raw value for placeholder substitution. Strings render bare;
/// everything else uses its TOML representation.
fn render_raw(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
