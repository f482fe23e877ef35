//! Model introspection.
//!
//! [`ModelSource`] is what the typesync operations read model metadata
//! through. [`ModelRegistry`] is the in-memory implementation; it can be
//! filled by hand or loaded from a TOML / JSON model manifest.

use crate::error::{ModelsyncError, Result};
use crate::naming::snake_case;
use crate::types::ModelSchema;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, trace};

/// Resolves a model name to its fields, validators and associations.
pub trait ModelSource {
    /// Fails with [`ModelsyncError::MissingModel`] when the model is unknown.
    fn model(&self, name: &str) -> Result<ModelSchema>;
}

/// Runtime-accessible model registry, keyed by snake_case model name.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    models: BTreeMap<String, ModelSchema>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    models: Vec<ModelSchema>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a model, rejecting a second model with the same name.
    pub fn register(&mut self, model: ModelSchema) -> Result<()> {
        let key = snake_case(&model.name);
        if self.models.contains_key(&key) {
            return Err(ModelsyncError::duplicate_definition(format!(
                "model '{}' is defined more than once",
                model.name
            )));
        }
        trace!(model = %model.name, "Registered model");
        self.models.insert(key, model);
        Ok(())
    }

    pub fn with_model(mut self, model: ModelSchema) -> Result<Self> {
        self.register(model)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&ModelSchema> {
        self.models.get(&snake_case(name))
    }

    pub fn models(&self) -> impl Iterator<Item = &ModelSchema> {
        self.models.values()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Load a model manifest. `.json` files are read as JSON, everything
    /// else as TOML.
    pub fn from_manifest(path: &Path) -> Result<Self> {
        info!("Loading model manifest from {:?}", path);
        let contents = fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let manifest: Manifest = if is_json {
            serde_json::from_str(&contents)
                .map_err(|e| ModelsyncError::manifest(path, e.to_string()))?
        } else {
            toml::from_str(&contents).map_err(|e| ModelsyncError::manifest(path, e.to_string()))?
        };

        let mut registry = Self::new();
        for model in manifest.models {
            if model.name.trim().is_empty() {
                return Err(ModelsyncError::manifest(path, "model with an empty name"));
            }
            registry.register(model).map_err(|e| match e {
                ModelsyncError::DuplicateDefinition(message) => {
                    ModelsyncError::manifest(path, message)
                }
                other => other,
            })?;
        }

        debug!(model_count = registry.len(), "Model manifest loaded");
        Ok(registry)
    }
}

impl ModelSource for ModelRegistry {
    fn model(&self, name: &str) -> Result<ModelSchema> {
        self.get(name)
            .cloned()
            .ok_or_else(|| ModelsyncError::missing_model(name))
    }
}
