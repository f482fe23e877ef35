// Modelsync - keeps TypeScript interface definitions in step with backend models

// Common modules
pub mod config;
pub mod document;
pub mod error;
pub mod naming;
pub mod registry;
pub mod types;
// TypeSync - TypeScript interface generation and reconciliation
pub mod typesync;

// Re-export commonly used items for convenience
pub use document::DefinitionsDocument;
pub use error::{ModelsyncError, Result};
pub use registry::{ModelRegistry, ModelSource};
pub use typesync::{ReconcileOutcome, Typesync};
