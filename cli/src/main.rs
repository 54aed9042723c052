//! CLI entrypoint for wcs-delegates
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod dispatch;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use wcs_application::DelegateFinder;
use wcs_infrastructure::{ConfigLoader, FileConfig, FileLoggingConfig, build_registry};
use wcs_presentation::{Cli, Command, ConsoleFormatter};

use dispatch::{Outcome, execute, exit_status, formatter};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    // Load configuration
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    apply_overrides(&mut config, &cli);
    config.validate().context("Invalid configuration")?;

    let _guard = init_logging(cli.verbose, &config.logging)?;

    info!("Starting wcs-delegates");

    // === Dependency Injection ===
    let registry = build_registry(&config.delegates).context("Failed to build delegate registry")?;
    if let Ok(stats) = registry.stats() {
        info!(
            builtin = stats.builtin_delegates,
            plugins = stats.plugin_delegates,
            disabled = stats.disabled_ids,
            "Delegate registry ready"
        );
    }
    let finder = DelegateFinder::new(Arc::new(registry));

    ConsoleFormatter::set_color(config.output.color);

    let command = cli.command.unwrap_or(Command::Formats);
    let result = execute(command, &finder, formatter(config.output.style));
    let status = exit_status(&result);

    match result {
        Ok(Outcome::Report(report)) => println!("{}", report.trim_end()),
        Ok(Outcome::Unsupported(message)) => eprintln!("Error: {}", message),
        Err(e) => eprintln!("Error: {:#}", anyhow::Error::from(e)),
    }

    Ok(ExitCode::from(status))
}

/// CLI flags take precedence over the config file
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(dir) = &cli.plugin_dir {
        config.delegates.plugin_dir = Some(dir.clone());
    }
    config.delegates.disabled.extend(cli.disable.iter().cloned());
    if let Some(style) = cli.output {
        config.output.style = style.into();
    }
}

/// Initialize logging based on verbosity level, falling back to the config file
fn init_logging(verbose: u8, logging: &FileLoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => match &logging.level {
            Some(level) => EnvFilter::try_new(level)
                .with_context(|| format!("Invalid log level '{}'", level))?,
            None => EnvFilter::new("warn"),
        },
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match &logging.file {
        Some(file) => {
            let path = Path::new(file);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let name = path
                .file_name()
                .with_context(|| format!("Invalid log file path '{}'", file))?;

            let appender = tracing_appender::rolling::never(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            subscriber.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            subscriber.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}
