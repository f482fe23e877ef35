mod field_kind;

pub use crate::types::field_kind::FieldKind;
use crate::{ModelsyncError, Result, naming::pascal_case};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString};

/// Generator-style attribute argument: `name`, `name:kind`, `name:kind{opts}`,
/// optionally followed by an `:index` / `:uniq` suffix.
static ATTRIBUTE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)(?::([A-Za-z_]+)(?:\{([^{}]*)\})?)?(?::(?:index|uniq))?$")
        .expect("Invalid attribute regex")
});

/// One declared model attribute as reported by model introspection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(default)]
    pub kind: FieldKind,
    /// Target model of a reference when it differs from the attribute name.
    #[serde(default, alias = "class_name", skip_serializing_if = "Option::is_none")]
    pub referenced_name: Option<String>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, kind: impl Into<FieldKind>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            referenced_name: None,
        }
    }

    pub fn reference(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Reference)
    }

    pub fn with_referenced_name(mut self, referenced_name: impl Into<String>) -> Self {
        self.referenced_name = Some(referenced_name.into());
        self
    }

    /// Type name of the nested object a reference points at.
    pub fn object_type_name(&self) -> String {
        pascal_case(self.referenced_name.as_deref().unwrap_or(&self.name))
    }
}

impl FromStr for FieldSpec {
    type Err = ModelsyncError;

    fn from_str(s: &str) -> Result<Self> {
        let captures = ATTRIBUTE_RE.captures(s.trim()).ok_or_else(|| {
            ModelsyncError::invalid_attribute(format!(
                "'{}' is not of the form name[:kind[{{options}}]]",
                s
            ))
        })?;

        let name = captures[1].to_string();
        let kind = captures
            .get(2)
            .map(|m| FieldKind::from(m.as_str()))
            .unwrap_or_default();

        Ok(FieldSpec::new(name, kind))
    }
}

/// Parse a list of generator-style attribute arguments, preserving order.
pub fn parse_attributes<S: AsRef<str>>(args: &[S]) -> Result<Vec<FieldSpec>> {
    args.iter().map(|arg| arg.as_ref().parse()).collect()
}

/// Result of normalizing a [`FieldSpec`]: one declaration line in an interface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NormalizedField {
    pub name: String,
    pub type_name: String,
    pub forced_required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ValidatorKind {
    Presence,
    Absence,
    Length,
    Format,
    Numericality,
    Uniqueness,
    Inclusion,
    Exclusion,
    Acceptance,
    Confirmation,
    Comparison,
    #[serde(other)]
    Custom,
}

/// A registered validator and the attributes it covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidatorSpec {
    pub kind: ValidatorKind,
    #[serde(default)]
    pub attributes: Vec<String>,
}

impl ValidatorSpec {
    pub fn presence<S: Into<String>>(attributes: impl IntoIterator<Item = S>) -> Self {
        Self {
            kind: ValidatorKind::Presence,
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AssociationKind {
    BelongsTo,
    HasOne,
    HasMany,
    HasAndBelongsToMany,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Association {
    pub name: String,
    pub kind: AssociationKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl Association {
    pub fn belongs_to(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AssociationKind::BelongsTo,
            optional: None,
            required: None,
        }
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = Some(optional);
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Only an explicit `optional: false` or `required: true` counts.
    pub fn is_explicitly_required(&self) -> bool {
        self.optional == Some(false) || self.required == Some(true)
    }
}

/// Everything model introspection reports about one model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSchema {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
    #[serde(default)]
    pub validators: Vec<ValidatorSpec>,
    #[serde(default)]
    pub associations: Vec<Association>,
}

impl ModelSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            validators: Vec::new(),
            associations: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn with_validator(mut self, validator: ValidatorSpec) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn with_association(mut self, association: Association) -> Self {
        self.associations.push(association);
        self
    }

    pub fn interface_name(&self) -> String {
        pascal_case(&self.name)
    }
}
