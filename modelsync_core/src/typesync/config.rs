use bon::Builder;
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_PATH: &str = "app/javascript/types/models.d.ts";

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

/// Configuration for Typesync operations (TypeScript interface maintenance)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Builder)]
pub struct TypesyncConfig {
    /// Path of the definitions document that holds the generated interfaces
    #[serde(default = "default_output_path")]
    #[builder(into, default = default_output_path())]
    pub output_path: String,
    /// Whether newly generated interfaces are declared with `export`
    #[serde(default)]
    #[builder(default)]
    pub export_interfaces: bool,
}

impl Default for TypesyncConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
