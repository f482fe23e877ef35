//! Command handlers for the Modelsync CLI.

pub mod info;
pub mod init;
pub mod migration;
pub mod model;
pub mod validations;

use modelsync_core::{
    DefinitionsDocument, ModelRegistry, Typesync, config::ModelsyncConfig, error::Result,
};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

/// Configuration resolved from the config file and the global CLI overrides.
pub struct Context {
    pub config: ModelsyncConfig,
}

impl Context {
    pub fn load(
        config_path: Option<&Path>,
        output: Option<&Path>,
        models: Option<&Path>,
    ) -> Result<Self> {
        let loaded = match config_path {
            Some(path) => ModelsyncConfig::from_path(path),
            None => ModelsyncConfig::new(),
        };
        let mut config = match loaded {
            Ok(cfg) => cfg,
            Err(e) => {
                error!("Failed to load configuration: {}", e);
                return Err(e);
            }
        };

        if let Some(output) = output {
            debug!("Output path overridden to {:?}", output);
            config.typesync.output_path = output.to_string_lossy().to_string();
        }
        if let Some(models) = models {
            debug!("Models path overridden to {:?}", models);
            config.general.models_path = models.to_string_lossy().to_string();
        }

        Ok(Self { config })
    }

    pub fn document(&self) -> DefinitionsDocument {
        DefinitionsDocument::new(&self.config.typesync.output_path)
    }

    pub fn models_path(&self) -> PathBuf {
        PathBuf::from(&self.config.general.models_path)
    }

    pub fn registry(&self) -> Result<ModelRegistry> {
        let registry = ModelRegistry::from_manifest(&self.models_path())?;
        info!("Found {} models", registry.len());
        Ok(registry)
    }

    pub fn typesync<'a>(&self) -> Typesync<'a> {
        Typesync::new(self.document()).with_export_interfaces(self.config.typesync.export_interfaces)
    }
}
