//! TypeScript Type Mapper
//!
//! Maps a model attribute's [`FieldKind`] to the TypeScript type used in the
//! definitions document.

use crate::types::FieldKind;

pub const NUMBER: &str = "number";
pub const BOOLEAN: &str = "boolean";
pub const STRING: &str = "string";

/// Map a field kind to its TypeScript type name.
///
/// Unknown kinds fall back to `string`; this never fails.
pub fn field_kind_to_typescript(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Integer | FieldKind::Float | FieldKind::Decimal => NUMBER,
        FieldKind::Boolean => BOOLEAN,
        FieldKind::Reference | FieldKind::Other(_) => STRING,
    }
}
