//! Resolved configuration instances.

use std::collections::HashMap;

use toml::value::Table;
use toml::Value;

use crate::value::ResolvedValue;

/// A validated, resolved configuration instance.
///
/// Produced by [`Schema::load`](crate::Schema::load). Holds one resolved
/// value per declared field that resolved to a present value; optional
/// fields that stayed absent simply have no entry. There is no mutation
/// API — an instance never changes after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    values: HashMap<String, ResolvedValue>,
}

impl Config {
    pub(crate) fn new(values: HashMap<String, ResolvedValue>) -> Self {
        Self { values }
    }

    /// Get the resolved value for a field, if present.
    pub fn get(&self, name: &str) -> Option<&ResolvedValue> {
        self.values.get(name)
    }

    /// Check whether a field resolved to a present value.
    pub fn has(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Get a text field. `None` for absent fields or a different kind.
    pub fn get_text(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_text()
    }

    /// Get an integer field.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        self.get(name)?.as_int()
    }

    /// Get a float field.
    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name)?.as_float()
    }

    /// Get a boolean field.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name)?.as_bool()
    }

    /// Get a list field.
    pub fn get_list(&self, name: &str) -> Option<&[Value]> {
        self.get(name)?.as_list()
    }

    /// Get a table field.
    pub fn get_dict(&self, name: &str) -> Option<&Table> {
        self.get(name)?.as_dict()
    }

    /// Get a compiled regular-expression field.
    pub fn get_regex(&self, name: &str) -> Option<&regex::Regex> {
        self.get(name)?.as_regex()
    }

    /// Names of all fields that resolved to a present value, sorted.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.values.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of fields that resolved to a present value.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no field resolved to a present value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Render the resolved values back into a plain TOML table. Regexes
    /// render as their pattern string.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        for name in self.field_names() {
            table.insert(name.to_string(), self.values[name].to_value());
        }
        table
    }
}

impl serde::Serialize for Config {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_table().serialize(serializer)
    }
}
