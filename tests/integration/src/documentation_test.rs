//! Generated documentation: stable layout, declaration order, no instance
//! data involved.

use confspec::{docs, Field, Schema, SingleField};
use pretty_assertions::assert_eq;

fn documented_schema() -> Schema {
    Schema::builder("Settings for a small HTTP service.")
        .field(Field::text("host", "Hostname to bind.").required())
        .field(Field::int("port", "Port to bind.").default(8080))
        .field(
            Field::text("bind_address", "Deprecated combined address.")
                .fallback(SingleField::new("host")),
        )
        .field(Field::bool("verbose", "Emit verbose logs.").default(false))
        .build()
        .unwrap()
}

#[test]
fn full_rendering_is_fixed() {
    let expected = "\
Settings for a small HTTP service.

Configuration options:

:param str host: (required)
    Hostname to bind.

:param int port: (optional, default: 8080)
    Port to bind.

:param str bind_address: (optional)
    Deprecated combined address.

:param bool verbose: (optional, default: false)
    Emit verbose logs.
";
    assert_eq!(documented_schema().documentation(), expected);
}

#[test]
fn rendering_twice_is_byte_identical() {
    let schema = documented_schema();
    assert_eq!(schema.documentation(), schema.documentation());
}

#[test]
fn rendering_ignores_instance_data() {
    let schema = documented_schema();
    let before = schema.documentation();

    let raw: toml::value::Table = toml::from_str(r#"host = "example.org""#).unwrap();
    let _config = schema.load(&raw).unwrap();

    assert_eq!(schema.documentation(), before);
}

#[test]
fn render_function_matches_method() {
    let schema = documented_schema();
    assert_eq!(docs::render(&schema), schema.documentation());
}

#[test]
fn documentation_needs_no_instance() {
    // Static metadata only: a schema whose required fields were never
    // satisfied still documents itself.
    let schema = Schema::builder("Never instantiated.")
        .field(Field::text("secret", "A value nobody supplies.").required())
        .build()
        .unwrap();
    assert!(schema.documentation().contains(":param str secret: (required)"));
}
