//! # domainsmith
//!
//! Domain-driven scaffolding for Laravel projects.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments.
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults, files, env) for the project root.
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                    |
//! |------|--------------------------------------------|
//! |  0   | Success, including runs with skipped files |
//! |  1   | Any failure                                |

use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before tracing init; a missing file is fine.
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(1);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        root = %cli.global.root.display(),
        "CLI started"
    );

    let root = cli.global.project_root();
    let config = match AppConfig::load(cli.global.config.as_deref(), &root) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e:#}");
            eprintln!("Error: Failed to load configuration: {e:#}");
            return ExitCode::from(1);
        }
    };

    let output = OutputManager::new(&cli.global, &config);
    let verbose = cli.global.verbose > 0;
    let colored = output.supports_color();

    match run(cli, config, output) {
        Ok(()) => {
            info!("domainsmith completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, colored),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::GenerateDomain(args) => {
            commands::domain::execute(args, cli.global, config, output)
        }
        Commands::GenerateSubdomain(args) => {
            commands::subdomain::execute(args, cli.global, config, output)
        }
        Commands::GenerateValueObject(args) => {
            commands::value_object::execute(args, cli.global, config, output)
        }
        Commands::Init(args) => commands::init::execute(args, cli.global, output),
        Commands::Completions(args) => commands::completions::execute(args),
        Commands::Config(cmd) => commands::config::execute(cmd, cli.global, config, output),
    }
}

/// Log the error, print it to stderr and pick the exit code.
fn handle_error(err: CliError, verbose: bool, colored: bool) -> ExitCode {
    err.log();

    let msg = if colored && std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}
