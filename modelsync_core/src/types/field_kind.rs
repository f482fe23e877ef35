use core::fmt;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::str::FromStr;

/// The declared kind of a model attribute.
///
/// Parsing never fails: anything that is not a known numeric, boolean or
/// association kind is kept verbatim in [`FieldKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldKind {
    Integer,
    Float,
    Decimal,
    Boolean,
    Reference,
    Other(String),
}

impl Default for FieldKind {
    fn default() -> Self {
        FieldKind::Other("string".to_string())
    }
}

impl FieldKind {
    pub fn is_reference(&self) -> bool {
        matches!(self, FieldKind::Reference)
    }
}

impl FromStr for FieldKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "integer" | "int" | "bigint" => FieldKind::Integer,
            "float" => FieldKind::Float,
            "decimal" | "numeric" => FieldKind::Decimal,
            "boolean" | "bool" => FieldKind::Boolean,
            "references" | "reference" | "belongs_to" => FieldKind::Reference,
            "" => FieldKind::default(),
            _ => FieldKind::Other(s.trim().to_string()),
        };
        Ok(kind)
    }
}

impl From<String> for FieldKind {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<&str> for FieldKind {
    fn from(value: &str) -> Self {
        FieldKind::from(value.to_string())
    }
}

impl From<FieldKind> for String {
    fn from(kind: FieldKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Integer => write!(f, "integer"),
            FieldKind::Float => write!(f, "float"),
            FieldKind::Decimal => write!(f, "decimal"),
            FieldKind::Boolean => write!(f, "boolean"),
            FieldKind::Reference => write!(f, "references"),
            FieldKind::Other(raw) => write!(f, "{}", raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!(FieldKind::from("integer"), FieldKind::Integer);
        assert_eq!(FieldKind::from("BigInt"), FieldKind::Integer);
        assert_eq!(FieldKind::from("float"), FieldKind::Float);
        assert_eq!(FieldKind::from("decimal"), FieldKind::Decimal);
        assert_eq!(FieldKind::from("bool"), FieldKind::Boolean);
        assert_eq!(FieldKind::from("references"), FieldKind::Reference);
        assert_eq!(FieldKind::from("belongs_to"), FieldKind::Reference);
        assert_eq!(FieldKind::from(""), FieldKind::Other("string".to_string()));
    }

    #[test]
    fn test_parse_unknown_kind_is_kept() {
        assert_eq!(
            FieldKind::from("datetime"),
            FieldKind::Other("datetime".to_string())
        );
        assert_eq!(FieldKind::from("jsonb").to_string(), "jsonb");
    }

    #[test]
    fn test_serde_uses_plain_strings() {
        let kind: FieldKind = serde_json::from_str("\"Decimal\"").unwrap();
        assert_eq!(kind, FieldKind::Decimal);
        assert_eq!(
            serde_json::to_string(&FieldKind::Reference).unwrap(),
            "\"references\""
        );
    }
}
