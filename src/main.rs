// Veil - Column-Level Data Masking Tool
// Copyright (c) 2025 Veil Contributors
// Licensed under the MIT License

use clap::Parser;
use std::process;
use veil::cli::{Cli, Commands};
use veil::config::LoggingConfig;
use veil::logging::init_logging;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Logging has to come up before the command runs, so the [logging] and
    // log-level settings are read here; a missing or broken configuration
    // file falls back to console-only defaults and is reported again by the
    // command itself
    let file_config = veil::config::load_config_or_default(&cli.config).unwrap_or_default();
    let log_level = cli
        .log_level
        .clone()
        .unwrap_or_else(|| file_config.application.log_level.clone());
    let logging_config: LoggingConfig = file_config.logging.clone();
    let _guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Veil - Column-Level Data Masking Tool"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e:#}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Mask(args) => args.execute(&cli.config),
        Commands::ValidateConfig(args) => args.execute(&cli.config),
        Commands::Rules(args) => args.execute(),
        Commands::Init(args) => args.execute(),
    }
}
