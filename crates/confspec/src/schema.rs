//! Configuration schemas: ordered field declarations plus instance
//! construction.
//!
//! A [`Schema`] is the static, shared shape of a configuration type. It is
//! built once through [`SchemaBuilder`], is immutable afterwards, and can be
//! used concurrently by any number of [`Schema::load`] calls — loading is a
//! pure in-memory pass over the declared fields with no shared mutable
//! state.
//!
//! # Example
//!
//! ```
//! use confspec::{Field, Schema};
//!
//! let schema = Schema::builder("Connection settings.")
//!     .field(Field::text("host", "Hostname to connect to.").required())
//!     .field(Field::int("port", "Port to connect to.").default(8080))
//!     .build()?;
//!
//! let raw: toml::value::Table = toml::from_str(r#"host = "example.org""#)?;
//! let config = schema.load(&raw)?;
//! assert_eq!(config.get_text("host"), Some("example.org"));
//! assert_eq!(config.get_int("port"), Some(8080));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::Config;
use crate::docs;
use crate::error::{Error, Result};
use crate::field::Field;
use crate::source::RawSource;

type PostValidateFn = dyn Fn(&Config) -> Result<()> + Send + Sync;

/// The static, shared schema of a configuration type.
#[derive(Clone)]
pub struct Schema {
    description: String,
    fields: Vec<Field>,
    post_validate: Option<Arc<PostValidateFn>>,
}

impl fmt::Debug for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("description", &self.description)
            .field("fields", &self.fields)
            .field("post_validate", &self.post_validate.is_some())
            .finish()
    }
}

impl Schema {
    /// Start declaring a schema with the given description.
    pub fn builder(description: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            description: description.into(),
            fields: Vec::new(),
            post_validate: None,
        }
    }

    /// The schema-level description, without the generated field entries.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The declared fields, in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Look up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// The description plus one generated entry per declared field, in
    /// declaration order. Purely derived from static metadata; rendering is
    /// byte-stable across calls.
    pub fn documentation(&self) -> String {
        docs::render(self)
    }

    /// Resolve every declared field against a raw source, producing a
    /// read-only [`Config`].
    ///
    /// Fields resolve in declaration order and the first failure aborts
    /// construction — no partial instance is ever exposed. Keys in the raw
    /// source that match no declared field are ignored.
    pub fn load(&self, source: &dyn RawSource) -> Result<Config> {
        let config = self.load_fields(source, false)?;
        if let Some(hook) = &self.post_validate {
            hook(&config)?;
        }
        Ok(config)
    }

    /// Resolve only the fields marked [`static_only`](Field::static_only).
    ///
    /// Useful before the full configuration is available, e.g. during early
    /// startup. Cross-field validation hooks are skipped: they may reference
    /// fields this pass never resolves.
    pub fn load_static(&self, source: &dyn RawSource) -> Result<Config> {
        self.load_fields(source, true)
    }

    fn load_fields(&self, source: &dyn RawSource, static_pass: bool) -> Result<Config> {
        let mut values = HashMap::new();
        for field in &self.fields {
            if static_pass && !field.is_static() {
                continue;
            }
            if let Some(value) = field.resolve(source)? {
                values.insert(field.name().to_string(), value);
            }
        }
        tracing::debug!(
            resolved = values.len(),
            declared = self.fields.len(),
            "configuration resolved"
        );
        Ok(Config::new(values))
    }
}

/// Builder for [`Schema`].
///
/// Fields are registered explicitly and keep their registration order.
/// Re-declaring a name fully replaces the earlier descriptor — no attribute
/// merging — while keeping its original position, so documentation order
/// stays stable under inheritance.
pub struct SchemaBuilder {
    description: String,
    fields: Vec<Field>,
    post_validate: Option<Arc<PostValidateFn>>,
}

impl SchemaBuilder {
    /// Start from an existing schema's declarations, so a schema can inherit
    /// and selectively override another's fields.
    pub fn from_schema(parent: &Schema) -> Self {
        Self {
            description: parent.description.clone(),
            fields: parent.fields.clone(),
            post_validate: parent.post_validate.clone(),
        }
    }

    /// Replace the inherited description.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declare a field. A name declared before is fully replaced in place.
    pub fn field(mut self, field: Field) -> Self {
        match self.fields.iter_mut().find(|f| f.name() == field.name()) {
            Some(slot) => *slot = field,
            None => self.fields.push(field),
        }
        self
    }

    /// Register a cross-field validation hook, run after all fields resolve.
    /// A hook error aborts construction like any field error.
    pub fn post_validate(
        mut self,
        hook: impl Fn(&Config) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.post_validate = Some(Arc::new(hook));
        self
    }

    /// Validate the declarations and produce an immutable [`Schema`].
    ///
    /// Definition-time errors:
    /// - a field declared both `required` and with a default
    /// - a default whose type does not match the field's kind
    /// - a fallback depending on an undeclared field name
    /// - an empty field description
    pub fn build(self) -> Result<Schema> {
        for field in &self.fields {
            if field.doc().trim().is_empty() {
                return Err(definition_error(field.name(), "has an empty description"));
            }
            if field.is_required() && field.default_value().is_some() {
                return Err(definition_error(
                    field.name(),
                    "declared both required and a default",
                ));
            }
            if let Some(default) = field.default_value() {
                if !field.kind().matches(default) {
                    return Err(definition_error(
                        field.name(),
                        &format!(
                            "default of type {} does not match field type {}",
                            default.kind_name(),
                            field.kind().type_name()
                        ),
                    ));
                }
            }
            for fallback in field.fallbacks() {
                for dependency in fallback.depends_on() {
                    if !self.fields.iter().any(|f| f.name() == dependency) {
                        return Err(definition_error(
                            field.name(),
                            &format!("fallback references undeclared field '{dependency}'"),
                        ));
                    }
                }
            }
        }
        Ok(Schema {
            description: self.description,
            fields: self.fields,
            post_validate: self.post_validate,
        })
    }
}

fn definition_error(field: &str, message: &str) -> Error {
    Error::Definition {
        field: field.to_string(),
        message: message.to_string(),
    }
}
