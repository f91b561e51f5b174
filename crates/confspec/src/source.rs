//! Raw configuration sources.
//!
//! A [`RawSource`] is the narrow capability the resolution engine needs from
//! whatever loaded the configuration data: given a field name, say whether a
//! value is present and hand it over. Plain key-value mappings satisfy it
//! directly, so a caller that has already parsed a TOML document can pass the
//! resulting table straight to [`Schema::load`](crate::Schema::load).
//!
//! No file parsing happens here; producing the mapping is the caller's job.

use std::collections::{BTreeMap, HashMap};

use toml::Value;

/// A source of raw, unvalidated configuration values.
///
/// Implementations only answer point lookups by field name. The engine never
/// enumerates a source, which is why unknown keys in the supplied data are
/// ignored rather than rejected.
pub trait RawSource {
    /// Look up the raw value for a field name.
    fn get(&self, field: &str) -> Option<&Value>;

    /// Check whether a raw value is present for a field name.
    fn has(&self, field: &str) -> bool {
        self.get(field).is_some()
    }
}

impl RawSource for toml::value::Table {
    fn get(&self, field: &str) -> Option<&Value> {
        toml::value::Table::get(self, field)
    }
}

impl RawSource for HashMap<String, Value> {
    fn get(&self, field: &str) -> Option<&Value> {
        HashMap::get(self, field)
    }
}

impl RawSource for BTreeMap<String, Value> {
    fn get(&self, field: &str) -> Option<&Value> {
        BTreeMap::get(self, field)
    }
}
