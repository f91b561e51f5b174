//! Documentation rendering for schemas.
//!
//! Pure functions from schema metadata to text. The layout is deliberately
//! fixed — downstream documentation tooling keys off the exact structure, so
//! rendering the same schema twice must yield byte-identical output:
//!
//! ```text
//! Connection settings.
//!
//! Configuration options:
//!
//! :param str host: (required)
//!     Hostname to connect to.
//!
//! :param int port: (optional, default: 8080)
//!     Port to connect to.
//! ```

use crate::field::Field;
use crate::schema::Schema;

const WRAP_COLUMN: usize = 78;
const INDENT: &str = "    ";

/// Render a schema's description plus one entry per declared field, in
/// declaration order. Never touches instance data.
pub fn render(schema: &Schema) -> String {
    let mut out = String::new();
    let description = schema.description().trim_end();
    if !description.is_empty() {
        out.push_str(description);
        out.push_str("\n\n");
    }
    out.push_str("Configuration options:\n");
    for field in schema.fields() {
        out.push('\n');
        out.push_str(&field_entry(field));
    }
    out
}

fn field_entry(field: &Field) -> String {
    let mut notes = vec![if field.is_required() {
        "required".to_string()
    } else {
        "optional".to_string()
    }];
    if let Some(default) = field.default_value() {
        notes.push(format!("default: {default}"));
    }
    if field.is_static() {
        notes.push("static".to_string());
    }

    let mut entry = format!(
        ":param {} {}: ({})\n",
        field.kind().type_name(),
        field.name(),
        notes.join(", ")
    );
    for line in wrap(field.doc(), WRAP_COLUMN - INDENT.len()) {
        entry.push_str(INDENT);
        entry.push_str(&line);
        entry.push('\n');
    }
    entry
}

/// Greedy word wrap. Words longer than the width get a line of their own.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
