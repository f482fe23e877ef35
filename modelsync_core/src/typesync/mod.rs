// TypeSync - TypeScript interface maintenance
pub mod config;
pub mod interface;
pub mod migration;
pub mod normalize;
pub mod presence;
pub mod reconcile;
pub mod type_mapper;

use crate::{
    document::DefinitionsDocument,
    error::{ModelsyncError, Result},
    registry::ModelSource,
    types::FieldSpec,
};
use tracing::{debug, info, trace};

pub use interface::generate_interface_string;
pub use migration::generate_migration_string;
pub use normalize::normalize_fields;
pub use presence::{RequiredSet, extract_required_fields};
pub use reconcile::{ReconcileOutcome, ScanReport, reconcile_document};
pub use type_mapper::field_kind_to_typescript;

/// The three typesync operations, bound to one definitions document.
///
/// Every call reads and writes the document whole; callers are expected to
/// run one operation at a time against a given document.
pub struct Typesync<'a> {
    document: DefinitionsDocument,
    models: Option<&'a dyn ModelSource>,
    export_interfaces: bool,
}

impl<'a> Typesync<'a> {
    pub fn new(document: DefinitionsDocument) -> Self {
        trace!(path = ?document.path(), "Creating new Typesync instance");
        Self {
            document,
            models: None,
            export_interfaces: false,
        }
    }

    pub fn with_models(mut self, models: &'a dyn ModelSource) -> Self {
        self.models = Some(models);
        self
    }

    pub fn with_export_interfaces(mut self, export_interfaces: bool) -> Self {
        debug!("Configuring Typesync with export_interfaces = {}", export_interfaces);
        self.export_interfaces = export_interfaces;
        self
    }

    pub fn document(&self) -> &DefinitionsDocument {
        &self.document
    }

    fn models(&self) -> Result<&'a dyn ModelSource> {
        self.models
            .ok_or_else(|| ModelsyncError::config("no model source configured"))
    }

    /// Append a freshly generated interface for `model_name` and return the
    /// appended text.
    pub fn generate_model(&self, model_name: &str, fields: &[FieldSpec]) -> Result<String> {
        info!(model = model_name, "Generating interface");
        let normalized = normalize_fields(fields);
        let text = generate_interface_string(model_name, &normalized, self.export_interfaces);
        self.document.append(&text)?;
        info!(
            model = model_name,
            path = ?self.document.path(),
            "Interface appended to definitions document"
        );
        Ok(text)
    }

    /// Same as [`Typesync::generate_model`] with the fields read through the
    /// model source.
    pub fn generate_model_from_source(&self, model_name: &str) -> Result<String> {
        let model = self.models()?.model(model_name)?;
        self.generate_model(&model.name, &model.fields)
    }

    /// Append the declarations added by a migration at end-of-document.
    pub fn append_migration(&self, migration_label: &str, fields: &[FieldSpec]) -> Result<String> {
        info!(migration = migration_label, "Appending migration fields");
        let text = generate_migration_string(migration_label, fields);
        self.document.append(&text)?;
        Ok(text)
    }

    /// Bring the optional markers of the model's interface in line with its
    /// presence validators and required associations.
    ///
    /// The model is resolved before the document is read; an unknown model
    /// fails without touching anything.
    pub fn sync_validations(&self, model_name: &str) -> Result<ReconcileOutcome> {
        let model = self.models()?.model(model_name)?;
        let required = extract_required_fields(&model);

        let Some(content) = self.document.read()? else {
            info!(
                path = ?self.document.path(),
                "No definitions document yet, nothing to reconcile"
            );
            return Ok(ReconcileOutcome::MissingDocument);
        };

        let (reconciled, report) = reconcile_document(&content, &model.name, &required)?;

        if !report.block_found {
            info!(model = %model.name, "No interface found for model, nothing to reconcile");
            return Ok(ReconcileOutcome::NoMatchingBlock);
        }
        if reconciled == content {
            info!(model = %model.name, "Interface already up to date");
            return Ok(ReconcileOutcome::Unchanged);
        }

        self.document.replace(&reconciled)?;
        info!(
            model = %model.name,
            changed_lines = report.changed_lines,
            "Interface reconciled"
        );
        Ok(ReconcileOutcome::Updated {
            changed_lines: report.changed_lines,
        })
    }
}
