//! Host identity probe.
//!
//! Resolves the host identifier the same way the enrichment pipeline does, checks candidate identifiers, and runs the
//! entity host enrichment transform over sample telemetry, so host identity can be inspected on a real host.

#![deny(warnings)]
#![deny(missing_docs)]

use std::process::ExitCode;

use clap::Parser as _;
use hostid_app::prelude::*;
use hostid_config::{ConfigurationLoader, GenericConfiguration};
use hostid_env::host::{initialize_host_id, HostIdResolver};
use hostid_error::{ErrorContext as _, GenericError};
use tracing::error;

mod commands;
use self::commands::{handle_check_command, handle_enrich_command, handle_resolve_command};

mod config;
use self::config::{Action, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let configuration = load_configuration(&cli).unwrap_or_else(|e| {
        fatal_and_exit(format!("failed to load configuration: {:?}", e));
        unreachable!()
    });

    let logging_config = build_logging_configuration(&cli, &configuration).unwrap_or_else(|e| {
        fatal_and_exit(format!("failed to load logging configuration: {:?}", e));
        unreachable!()
    });

    let _guard = initialize_logging("hostid", &logging_config).unwrap_or_else(|e| {
        fatal_and_exit(format!("failed to initialize logging: {}", e));
        unreachable!()
    });

    match cli.action {
        Action::Resolve(config) => {
            println!("{}", handle_resolve_command(&config));
            ExitCode::SUCCESS
        }
        Action::Check(config) => match handle_check_command(&config) {
            Ok(verdict) => {
                println!("{}", verdict);
                ExitCode::SUCCESS
            }
            Err(reason) => {
                println!("{}", reason);
                ExitCode::FAILURE
            }
        },
        Action::Enrich => {
            initialize_host_id();

            match handle_enrich_command(&configuration, HostIdResolver::global()) {
                Ok(output) => {
                    print!("{}", output);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    error!("{:?}", e);
                    ExitCode::FAILURE
                }
            }
        }
    }
}

fn load_configuration(cli: &Cli) -> Result<GenericConfiguration, GenericError> {
    let configuration = ConfigurationLoader::default()
        .try_from_yaml(&cli.config)
        .from_environment("HOSTID")
        .error_context("Failed to read configuration from the environment.")?
        .into_generic();

    Ok(configuration)
}

fn build_logging_configuration(
    cli: &Cli, configuration: &GenericConfiguration,
) -> Result<LoggingConfiguration, GenericError> {
    let logging_config = LoggingConfiguration::from_configuration(configuration)?;
    match cli.log_level_override() {
        Some(directives) => logging_config.with_log_level(directives),
        None => Ok(logging_config),
    }
}
