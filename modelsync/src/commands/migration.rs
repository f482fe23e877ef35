//! Migration command - appends the declarations a migration adds.

use super::Context;
use crate::cli::MigrationArgs;
use modelsync_core::{error::Result, types::parse_attributes};
use tracing::{debug, info, warn};

pub fn run(ctx: &Context, args: MigrationArgs) -> Result<()> {
    let fields = parse_attributes(&args.attributes)?;
    if fields.is_empty() {
        warn!("Migration {} adds no attributes", args.label);
    }

    let text = ctx.typesync().append_migration(&args.label, &fields)?;

    debug!("Appended:\n{}", text);
    info!(
        "Migration {} declarations appended to {}",
        args.label, ctx.config.typesync.output_path
    );
    Ok(())
}
