//! End-to-end resolution scenarios: raw data in, resolved config or typed
//! error out.

use confspec::{Error, Field, FormatString, Schema, SchemaBuilder, SingleField};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn table(raw: &str) -> toml::value::Table {
    toml::from_str(raw).unwrap()
}

fn cave_schema() -> Schema {
    Schema::builder("Settings for a cave of wonders.")
        .field(Field::text("incantation", "The opening incantation.").required())
        .field(Field::int("magic_number", "A number of some significance.").default(40))
        .build()
        .unwrap()
}

#[test]
fn round_trip() {
    let config = cave_schema()
        .load(&table(r#"incantation = "Open sesame!""#))
        .unwrap();
    assert_eq!(config.get_text("incantation"), Some("Open sesame!"));
    assert_eq!(config.get_int("magic_number"), Some(40));
}

#[test]
fn conversion_failure_names_the_field() {
    let error = cave_schema()
        .load(&table(r#"
incantation = "Open sesame!"
magic_number = "six"
"#))
        .unwrap_err();
    assert!(matches!(error, Error::Conversion { .. }));
    assert_eq!(error.field(), Some("magic_number"));
}

#[test]
fn missing_required_field_names_the_field() {
    let error = cave_schema().load(&table("")).unwrap_err();
    assert!(matches!(error, Error::MissingField { .. }));
    assert_eq!(error.field(), Some("incantation"));
}

#[test]
fn unknown_raw_keys_never_fail_construction() {
    let config = cave_schema()
        .load(&table(r#"
incantation = "Open sesame!"
thieves = 40
hideout = "cave"
"#))
        .unwrap();
    assert_eq!(config.field_names(), vec!["incantation", "magic_number"]);
}

#[test]
fn fallback_order_is_first_found_wins() {
    let schema = Schema::builder("Renamed twice over the years.")
        .field(Field::text("newer_name", "First-choice legacy spelling."))
        .field(Field::text("older_name", "Second-choice legacy spelling."))
        .field(
            Field::text("name", "The current spelling.")
                .fallback(SingleField::new("newer_name"))
                .fallback(SingleField::new("older_name")),
        )
        .build()
        .unwrap();

    // Both fallbacks could fire; the first declared one wins.
    let config = schema
        .load(&table(r#"
newer_name = "from-newer"
older_name = "from-older"
"#))
        .unwrap();
    assert_eq!(config.get_text("name"), Some("from-newer"));

    let config = schema
        .load(&table(r#"older_name = "from-older""#))
        .unwrap();
    assert_eq!(config.get_text("name"), Some("from-older"));
}

#[test]
fn defaults_are_last_resort() {
    let schema = Schema::builder("Fallbacks before defaults.")
        .field(Field::text("primary", "Preferred source."))
        .field(
            Field::text("derived", "Derived when possible.")
                .fallback(SingleField::new("primary"))
                .default("the-default"),
        )
        .build()
        .unwrap();

    // No fallback satisfied: the default applies.
    let config = schema.load(&table("")).unwrap();
    assert_eq!(config.get_text("derived"), Some("the-default"));

    // A satisfied fallback beats the default.
    let config = schema.load(&table(r#"primary = "from-primary""#)).unwrap();
    assert_eq!(config.get_text("derived"), Some("from-primary"));
}

#[test]
fn format_fallback_builds_the_address() {
    let schema = Schema::builder("Address assembly.")
        .field(Field::text("host", "Hostname."))
        .field(Field::int("port", "Port."))
        .field(
            Field::text("address", "host:port address.")
                .fallback(FormatString::new("{host}:{port}", ["host", "port"]))
                .default("localhost:80"),
        )
        .build()
        .unwrap();

    let config = schema
        .load(&table(r#"
host = "example.org"
port = 8080
"#))
        .unwrap();
    assert_eq!(config.get_text("address"), Some("example.org:8080"));

    // Only host present: the fallback is not found and the default applies.
    let config = schema.load(&table(r#"host = "example.org""#)).unwrap();
    assert_eq!(config.get_text("address"), Some("localhost:80"));
}

#[test]
fn format_fallback_missing_fields_fail_required_target() {
    let schema = Schema::builder("Address assembly, strict.")
        .field(Field::text("host", "Hostname."))
        .field(Field::int("port", "Port."))
        .field(
            Field::text("address", "host:port address.")
                .fallback(FormatString::new("{host}:{port}", ["host", "port"]))
                .required(),
        )
        .build()
        .unwrap();

    let error = schema.load(&table(r#"host = "example.org""#)).unwrap_err();
    assert!(matches!(error, Error::MissingField { .. }));
    assert_eq!(error.field(), Some("address"));
}

#[rstest]
#[case(r#"flag = true"#, Some(true))]
#[case(r#"flag = "false""#, Some(false))]
#[case(r#"flag = "0""#, Some(false))]
#[case(r#"flag = "anything else""#, Some(true))]
#[case(r#"flag = 0"#, Some(false))]
#[case("", None)]
fn boolean_fields_accept_lenient_raw_forms(#[case] raw: &str, #[case] expected: Option<bool>) {
    let schema = Schema::builder("One flag.")
        .field(Field::bool("flag", "An optional flag."))
        .build()
        .unwrap();
    let config = schema.load(&table(raw)).unwrap();
    assert_eq!(config.get_bool("flag"), expected);
}

#[test]
fn list_dict_and_regex_fields_resolve() {
    let schema = Schema::builder("Structured fields.")
        .field(Field::list("servers", "Server names."))
        .field(Field::dict("limits", "Per-resource limits."))
        .field(Field::regex("name_pattern", "Accepted name shapes."))
        .build()
        .unwrap();

    let config = schema
        .load(&table(r#"
servers = ["a", "b"]
name_pattern = "^[a-z]+$"

[limits]
memory = 512
"#))
        .unwrap();

    assert_eq!(config.get_list("servers").unwrap().len(), 2);
    assert_eq!(
        config.get_dict("limits").unwrap()["memory"],
        toml::Value::Integer(512)
    );
    assert!(config.get_regex("name_pattern").unwrap().is_match("abc"));
    assert!(!config.get_regex("name_pattern").unwrap().is_match("Abc"));
}

#[test]
fn inherited_schema_replaces_parent_descriptor_wholesale() {
    let base = Schema::builder("Base service settings.")
        .field(Field::text("name", "Service name.").required())
        .field(Field::int("workers", "Worker count.").default(4))
        .build()
        .unwrap();

    let strict = SchemaBuilder::from_schema(&base)
        .field(Field::int("workers", "Worker count, no default here.").required())
        .build()
        .unwrap();

    // The override dropped the parent's default entirely.
    let error = strict.load(&table(r#"name = "svc""#)).unwrap_err();
    assert_eq!(error.field(), Some("workers"));

    // The parent is unaffected.
    let config = base.load(&table(r#"name = "svc""#)).unwrap();
    assert_eq!(config.get_int("workers"), Some(4));
}

#[test]
fn static_load_then_full_load() {
    let schema = Schema::builder("Two-phase startup.")
        .field(Field::text("log_dir", "Directory for logs.").static_only().default("/tmp"))
        .field(Field::text("api_key", "Key for the API.").required())
        .build()
        .unwrap();

    let boot = schema.load_static(&table("")).unwrap();
    assert_eq!(boot.get_text("log_dir"), Some("/tmp"));
    assert_eq!(boot.len(), 1);

    let full = schema
        .load(&table(r#"api_key = "secret""#))
        .unwrap();
    assert_eq!(full.get_text("api_key"), Some("secret"));
    assert_eq!(full.get_text("log_dir"), Some("/tmp"));
}

#[test]
fn same_raw_data_reproduces_the_same_error() {
    let schema = cave_schema();
    let raw = table(r#"magic_number = "six""#);
    let first = schema.load(&raw).unwrap_err().to_string();
    let second = schema.load(&raw).unwrap_err().to_string();
    assert_eq!(first, second);
}

#[test]
fn resolved_config_serializes_to_plain_values() {
    let config = cave_schema()
        .load(&table(r#"incantation = "Open sesame!""#))
        .unwrap();
    let rendered = toml::to_string(&config).unwrap();
    assert!(rendered.contains(r#"incantation = "Open sesame!""#));
    assert!(rendered.contains("magic_number = 40"));
}
