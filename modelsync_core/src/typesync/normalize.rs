//! Attribute normalization.
//!
//! Turns the attribute list of a model into interface declarations. A
//! reference attribute becomes two declarations: the foreign key scalar
//! (`<name>_id: number`, always required) immediately followed by the nested
//! object (`<name>?: <Pascal>`, optional until reconciled).

use super::type_mapper::{NUMBER, field_kind_to_typescript};
use crate::types::{FieldSpec, NormalizedField};
use tracing::trace;

pub fn normalize_fields(fields: &[FieldSpec]) -> Vec<NormalizedField> {
    let mut normalized = Vec::with_capacity(fields.len());

    for field in fields {
        if field.kind.is_reference() {
            trace!(field = %field.name, "Expanding reference attribute");
            normalized.push(NormalizedField {
                name: format!("{}_id", field.name),
                type_name: NUMBER.to_string(),
                forced_required: true,
            });
            normalized.push(NormalizedField {
                name: field.name.clone(),
                type_name: field.object_type_name(),
                forced_required: false,
            });
        } else {
            normalized.push(NormalizedField {
                name: field.name.clone(),
                type_name: field_kind_to_typescript(&field.kind).to_string(),
                forced_required: false,
            });
        }
    }

    normalized
}

/// Render one declaration line, `  name?: type;` unless the field is forced required.
pub fn declaration_line(field: &NormalizedField) -> String {
    let marker = if field.forced_required { "" } else { "?" };
    format!("  {}{}: {};", field.name, marker, field.type_name)
}
