use clap::Parser;
use modelsync::{
    cli::{Cli, Commands},
    commands::{self, Context},
};
use modelsync_core::error::Result;
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

fn init_tracing(cli: &Cli) {
    // RUST_LOG wins over -v / --quiet when set
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(cli.verbose > 1)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    debug!("Running {:?}", cli.command);

    let load = || {
        Context::load(
            cli.config.as_deref(),
            cli.output.as_deref(),
            cli.models.as_deref(),
        )
    };

    match cli.command {
        Commands::Init(args) => commands::init::run(&std::env::current_dir()?, args),
        Commands::Model(args) => commands::model::run(&load()?, args),
        Commands::Migration(args) => commands::migration::run(&load()?, args),
        Commands::Validations(args) => commands::validations::run(&load()?, args),
        Commands::Info(args) => commands::info::run(&load()?, args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
