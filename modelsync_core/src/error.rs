use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelsyncError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("Model not found: {model}")]
    MissingModel { model: String },

    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),

    #[error("Manifest error in {file}: {message}")]
    Manifest { file: PathBuf, message: String },

    #[error("Duplicate definition: {0}")]
    DuplicateDefinition(String),

    #[error("Document persist error: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("Invalid regex pattern: {0}")]
    Regex(String),
}

impl From<regex::Error> for ModelsyncError {
    fn from(err: regex::Error) -> Self {
        ModelsyncError::Regex(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ModelsyncError>;

impl ModelsyncError {
    pub fn config(message: impl Into<String>) -> Self {
        ModelsyncError::Config(message.into())
    }

    pub fn missing_model(model: impl Into<String>) -> Self {
        ModelsyncError::MissingModel {
            model: model.into(),
        }
    }

    pub fn invalid_attribute(message: impl Into<String>) -> Self {
        ModelsyncError::InvalidAttribute(message.into())
    }

    pub fn manifest(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ModelsyncError::Manifest {
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn duplicate_definition(message: impl Into<String>) -> Self {
        ModelsyncError::DuplicateDefinition(message.into())
    }
}
