//! Field declarations produced by a migration.
//!
//! The declarations are appended as bare lines at the end of the document,
//! they are not moved inside the braces of the matching interface.
// TODO: insert migration fields into the matching interface block instead of
// appending them after it.

use super::normalize::{declaration_line, normalize_fields};
use crate::types::FieldSpec;
use tracing::debug;

/// Build the text appended for `migration_label`.
pub fn generate_migration_string(migration_label: &str, fields: &[FieldSpec]) -> String {
    let normalized = normalize_fields(fields);
    debug!(
        migration = migration_label,
        declaration_count = normalized.len(),
        "Generating migration declarations"
    );

    let mut output = format!("// AUTO-GENERATED from migration {}\n", migration_label);
    for field in &normalized {
        output.push_str(&declaration_line(field));
        output.push('\n');
    }
    output
}
