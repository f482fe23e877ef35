//! Model command - appends the interface for a newly created model.

use super::Context;
use crate::cli::ModelArgs;
use modelsync_core::{error::Result, types::parse_attributes};
use tracing::{debug, info};

pub fn run(ctx: &Context, args: ModelArgs) -> Result<()> {
    let text = if args.attributes.is_empty() {
        debug!("No attributes given, reading {} from the model manifest", args.name);
        let registry = ctx.registry()?;
        ctx.typesync()
            .with_models(&registry)
            .generate_model_from_source(&args.name)?
    } else {
        let fields = parse_attributes(&args.attributes)?;
        ctx.typesync().generate_model(&args.name, &fields)?
    };

    debug!("Appended:\n{}", text);
    info!(
        "Interface for {} written to {}",
        args.name, ctx.config.typesync.output_path
    );
    Ok(())
}
