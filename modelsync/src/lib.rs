pub use modelsync_core::{config, document, error, naming, registry, types, typesync};
pub use modelsync_core::{DefinitionsDocument, ModelRegistry, ModelSource, ReconcileOutcome, Typesync};

pub mod cli;
pub mod commands;
