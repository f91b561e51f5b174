//! Declarative configuration schemas with validation.
//!
//! A caller declares the shape of its configuration once — an ordered set of
//! typed, documented fields — and loads raw key-value data against it. The
//! result is either a fully resolved, read-only [`Config`] or a typed error;
//! there is no partially valid instance.
//!
//! Field values are located through a fixed chain: the field's own raw
//! value, then its fallback strategies in declared order, then its declared
//! default. Required fields with no value at the end of the chain fail the
//! whole load. Raw data is a plain mapping of `toml::Value`s (anything
//! implementing [`RawSource`]); how it was parsed is the caller's business.
//!
//! Schemas also render their own reference documentation from the same
//! metadata, see [`Schema::documentation`].
//!
//! # Example
//!
//! ```
//! use confspec::{Field, FormatString, Schema};
//!
//! let schema = Schema::builder("HTTP client settings.")
//!     .field(Field::text("host", "Hostname to connect to.").required())
//!     .field(Field::int("port", "Port to connect to.").default(8080))
//!     .field(
//!         Field::text("endpoint", "Full endpoint address.")
//!             .fallback(FormatString::new("{host}:{port}", ["host", "port"])),
//!     )
//!     .build()?;
//!
//! let raw: toml::value::Table = toml::from_str(r#"
//! host = "example.org"
//! port = 8080
//! "#)?;
//! let config = schema.load(&raw)?;
//! assert_eq!(config.get_text("endpoint"), Some("example.org:8080"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod docs;
pub mod error;
pub mod fallback;
pub mod field;
pub mod schema;
pub mod source;
pub mod value;

pub use config::Config;
pub use error::{Error, Result};
pub use fallback::{Fallback, FormatString, SingleField};
pub use field::{Field, FieldKind};
pub use schema::{Schema, SchemaBuilder};
pub use source::RawSource;
pub use value::ResolvedValue;
