//! Validations command - reconciles optional markers with model validations.

use super::Context;
use crate::cli::ValidationsArgs;
use modelsync_core::{ReconcileOutcome, error::Result};
use tracing::info;

pub fn run(ctx: &Context, args: ValidationsArgs) -> Result<()> {
    let registry = ctx.registry()?;
    let typesync = ctx.typesync().with_models(&registry);

    for model in &args.names {
        match typesync.sync_validations(model)? {
            ReconcileOutcome::MissingDocument => {
                info!("{}: no definitions document yet, skipped", model)
            }
            ReconcileOutcome::NoMatchingBlock => {
                info!("{}: no interface in the definitions document, skipped", model)
            }
            ReconcileOutcome::Unchanged => info!("{}: already up to date", model),
            ReconcileOutcome::Updated { changed_lines } => {
                info!("{}: updated {} field line(s)", model, changed_lines)
            }
        }
    }
    Ok(())
}
