use crate::error::{ModelsyncError, Result};
use crate::typesync::config::TypesyncConfig;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, error, info, trace, warn};

pub const CONFIG_FILE_NAME: &str = "modelsync.toml";
pub const DEFAULT_MODELS_PATH: &str = "config/models.toml";

/// `${VAR_NAME}` or `${VAR_NAME:-default}`
static ENV_VAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}")
        .expect("Invalid regex for environment variable substitution")
});

fn default_models_path() -> String {
    DEFAULT_MODELS_PATH.to_string()
}

/// General configuration for Modelsync operations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Model manifest describing fields, validators and associations
    #[serde(default = "default_models_path")]
    pub models_path: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            models_path: default_models_path(),
        }
    }
}

/// Root configuration, read from `modelsync.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModelsyncConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub typesync: TypesyncConfig,
}

impl ModelsyncConfig {
    /// Load configuration by searching for `modelsync.toml` in the current
    /// directory and its ancestors. Defaults are used when none is found.
    pub fn new() -> Result<ModelsyncConfig> {
        info!("Loading Modelsync configuration");
        dotenv::dotenv().ok();
        debug!("Environment variables loaded from .env if present");

        match Self::find_config_file(&env::current_dir()?) {
            Some(config_path) => Self::from_path(&config_path),
            None => {
                warn!("{} not found, using default configuration", CONFIG_FILE_NAME);
                Ok(ModelsyncConfig::default())
            }
        }
    }

    /// Load an explicit configuration file. Relative paths inside it are left
    /// relative to the working directory.
    pub fn from_path(config_path: &Path) -> Result<ModelsyncConfig> {
        info!("Found configuration file at: {:?}", config_path);
        dotenv::dotenv().ok();

        let contents = fs::read_to_string(config_path).map_err(|e| {
            error!("Failed to read configuration file: {}", e);
            ModelsyncError::from(e)
        })?;
        debug!("Configuration file size: {} bytes", contents.len());

        let mut config = Self::from_toml_str(&contents)?;
        config.substitute_all_env_vars()?;

        info!("Configuration loaded successfully");
        debug!(
            "Models path: {}, output path: {}, export interfaces: {}",
            config.general.models_path,
            config.typesync.output_path,
            config.typesync.export_interfaces
        );
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<ModelsyncConfig> {
        toml::from_str(contents).map_err(|e| {
            error!("Failed to parse TOML configuration: {}", e);
            ModelsyncError::config(e.to_string())
        })
    }

    fn substitute_all_env_vars(&mut self) -> Result<()> {
        debug!("Substituting environment variables in configuration");
        self.general.models_path = Self::substitute_env_vars(&self.general.models_path)?;
        self.typesync.output_path = Self::substitute_env_vars(&self.typesync.output_path)?;
        Ok(())
    }

    /// Searches for `modelsync.toml` starting from `start` and traversing up
    /// to the root.
    pub fn find_config_file(start: &Path) -> Option<PathBuf> {
        debug!("Starting config file search from: {:?}", start);

        for path in start.ancestors() {
            let config_path = path.join(CONFIG_FILE_NAME);
            trace!("Checking for config at: {:?}", config_path);
            if config_path.is_file() {
                return Some(config_path);
            }
        }
        None
    }

    /// Substitute environment variables in config strings.
    /// Supports `${VAR_NAME:-default}` syntax.
    fn substitute_env_vars(value: &str) -> Result<String> {
        trace!("Substituting environment variables in: {}", value);
        let mut result = value.to_string();

        for cap in ENV_VAR_RE.captures_iter(value) {
            let var_name = &cap[1];
            let default_value = cap.get(2).map(|m| m.as_str());

            let replacement = match env::var(var_name) {
                Ok(val) => {
                    debug!("Resolved environment variable: {}", var_name);
                    val
                }
                Err(_) => match default_value {
                    Some(default) => {
                        warn!(
                            "Environment variable {} not set, using default: {}",
                            var_name, default
                        );
                        default.to_string()
                    }
                    None => {
                        error!(
                            "Environment variable {} not set and no default provided",
                            var_name
                        );
                        return Err(ModelsyncError::EnvVarNotSet(var_name.to_string()));
                    }
                },
            };

            result = result.replace(&cap[0], &replacement);
        }

        Ok(result)
    }
}
