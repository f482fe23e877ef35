//! Command-line interface definitions for Modelsync.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Modelsync - keep TypeScript interface definitions in step with backend models
#[derive(Parser, Debug)]
#[command(name = "modelsync")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to modelsync.toml configuration file
    #[arg(short, long, global = true, env = "MODELSYNC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Definitions document path (overrides config file)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Model manifest path (overrides config file)
    #[arg(short, long, global = true)]
    pub models: Option<PathBuf>,

    /// Enable verbose output (-v, -vv, -vvv for increasing verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Append a TypeScript interface for a newly created model
    Model(ModelArgs),

    /// Append the field declarations added by a migration
    Migration(MigrationArgs),

    /// Reconcile optional markers with the model's presence validations
    Validations(ValidationsArgs),

    /// Initialize a new modelsync.toml configuration file
    Init(InitArgs),

    /// Display the resolved configuration and known models
    Info(InfoArgs),
}

// ============================================================================
// Model Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Model name (e.g. post, blog_post, BlogPost)
    pub name: String,

    /// Attributes as name:kind (e.g. title:string author:references).
    /// When omitted the fields are read from the model manifest.
    pub attributes: Vec<String>,
}

// ============================================================================
// Migration Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct MigrationArgs {
    /// Migration label (e.g. AddCategoryToPosts)
    pub label: String,

    /// Attributes added by the migration, as name:kind
    pub attributes: Vec<String>,
}

// ============================================================================
// Validations Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct ValidationsArgs {
    /// Models whose interfaces should be reconciled
    #[arg(value_name = "MODEL", required = true)]
    pub names: Vec<String>,
}

// ============================================================================
// Init Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct InitArgs {
    /// Overwrite existing modelsync.toml if present
    #[arg(short, long)]
    pub force: bool,

    /// Initialize with minimal configuration
    #[arg(long)]
    pub minimal: bool,
}

// ============================================================================
// Info Arguments
// ============================================================================

#[derive(Args, Debug, Clone)]
pub struct InfoArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "pretty")]
    pub format: InfoFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InfoFormat {
    Pretty,
    Json,
}
