//! Derive the set of field names that must not be optional.

use crate::types::{AssociationKind, ModelSchema, ValidatorKind};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Field names that must be emitted without the `?` marker.
pub type RequiredSet = HashSet<String>;

/// Attributes covered by presence validators, plus both the bare and `_id`
/// name of every belongs-to association explicitly marked as required.
pub fn extract_required_fields(model: &ModelSchema) -> RequiredSet {
    let mut required = RequiredSet::new();

    for validator in &model.validators {
        if validator.kind == ValidatorKind::Presence {
            trace!(attributes = ?validator.attributes, "Presence validator");
            required.extend(validator.attributes.iter().cloned());
        }
    }

    for association in &model.associations {
        if association.kind == AssociationKind::BelongsTo && association.is_explicitly_required() {
            trace!(association = %association.name, "Required belongs_to association");
            required.insert(association.name.clone());
            required.insert(format!("{}_id", association.name));
        }
    }

    debug!(
        model = %model.name,
        required_count = required.len(),
        "Extracted required fields"
    );
    required
}
