//! Info command - displays the resolved configuration and known models.

use super::Context;
use crate::cli::{InfoArgs, InfoFormat};
use modelsync_core::{ModelRegistry, error::Result, typesync::extract_required_fields};
use serde_json::json;
use tracing::warn;

pub fn run(ctx: &Context, args: InfoArgs) -> Result<()> {
    let registry = match ctx.registry() {
        Ok(registry) => registry,
        Err(e) => {
            warn!("Could not load model manifest: {}", e);
            ModelRegistry::new()
        }
    };

    match args.format {
        InfoFormat::Pretty => print_pretty(ctx, &registry),
        InfoFormat::Json => print_json(ctx, &registry)?,
    }
    Ok(())
}

fn print_pretty(ctx: &Context, registry: &ModelRegistry) {
    let document = ctx.document();

    println!("\n=== Configuration ===\n");
    println!("Models Path:       {}", ctx.config.general.models_path);
    println!(
        "Output Path:       {} ({})",
        ctx.config.typesync.output_path,
        if document.exists() { "exists" } else { "not created yet" }
    );
    println!(
        "Export Interfaces: {}",
        if ctx.config.typesync.export_interfaces {
            "enabled"
        } else {
            "disabled"
        }
    );

    println!("\n=== Models ===\n");
    if registry.is_empty() {
        println!("  (none)");
    }
    for model in registry.models() {
        let mut required: Vec<String> = extract_required_fields(model).into_iter().collect();
        required.sort();
        println!(
            "  {} -> {} ({} fields, required: [{}])",
            model.name,
            model.interface_name(),
            model.fields.len(),
            required.join(", ")
        );
        for association in &model.associations {
            println!("      {} {}", association.kind, association.name);
        }
    }
}

fn print_json(ctx: &Context, registry: &ModelRegistry) -> Result<()> {
    let models: Vec<_> = registry
        .models()
        .map(|model| {
            let mut required: Vec<String> = extract_required_fields(model).into_iter().collect();
            required.sort();
            json!({
                "name": model.name,
                "interface": model.interface_name(),
                "fields": model.fields,
                "required": required,
            })
        })
        .collect();

    let output = json!({
        "config": ctx.config,
        "document_exists": ctx.document().exists(),
        "models": models,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
