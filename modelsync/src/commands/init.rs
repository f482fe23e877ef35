//! Init command - initializes modelsync.toml configuration.

use crate::cli::InitArgs;
use modelsync_core::{
    config::{CONFIG_FILE_NAME, DEFAULT_MODELS_PATH},
    error::Result,
    typesync::config::DEFAULT_OUTPUT_PATH,
};
use std::fs;
use std::path::Path;
use tracing::{error, info};

/// Runs the init command in `dir`.
pub fn run(dir: &Path, args: InitArgs) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        error!("{} already exists. Use --force to overwrite.", CONFIG_FILE_NAME);
        return Ok(());
    }

    let content = if args.minimal {
        generate_minimal_config()
    } else {
        generate_full_config()
    };

    fs::write(&config_path, content)?;
    info!("Created {}", CONFIG_FILE_NAME);

    // Also create an empty model manifest if it doesn't exist
    let manifest_path = dir.join(DEFAULT_MODELS_PATH);
    if !manifest_path.exists() {
        if let Some(parent) = manifest_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&manifest_path, generate_manifest_template())?;
        info!("Created {}", DEFAULT_MODELS_PATH);
    }

    info!("Modelsync initialized successfully!");
    info!("Next steps:");
    info!("  1. Describe your models in {}", DEFAULT_MODELS_PATH);
    info!("  2. Run 'modelsync model <name>' after creating a model");
    info!("  3. Run 'modelsync validations <name>' after changing its validations");

    Ok(())
}

fn generate_minimal_config() -> String {
    format!(
        r#"[typesync]
output_path = "{DEFAULT_OUTPUT_PATH}"
"#
    )
}

fn generate_full_config() -> String {
    format!(
        r#"# Modelsync Configuration

[general]
# Model manifest (TOML, or JSON when the extension is .json)
models_path = "{DEFAULT_MODELS_PATH}"

[typesync]
# Definitions document holding the generated interfaces.
# Supports ${{VAR}} and ${{VAR:-default}} substitution.
output_path = "{DEFAULT_OUTPUT_PATH}"

# Declare newly generated interfaces with `export`
export_interfaces = false
"#
    )
}

fn generate_manifest_template() -> &'static str {
    r#"# Model manifest read by `modelsync model` and `modelsync validations`.
#
# [[models]]
# name = "post"
# fields = [
#   { name = "title", kind = "string" },
#   { name = "author", kind = "references" },
# ]
# validators = [{ kind = "presence", attributes = ["title"] }]
# associations = [{ name = "author", kind = "belongs_to", optional = false }]
"#
}
