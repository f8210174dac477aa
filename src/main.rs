// src/main.rs
use std::path::PathBuf;

use clap::Parser;
use crossterm::style::Stylize;
use tracing::{debug, info, instrument};
use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, format::FmtSpan},
    prelude::*,
};

use tp_cli::cli::args::Cli;
use tp_cli::cli::error::{CliError, CliResult};
use tp_cli::config;
use tp_cli::exitcode;

#[instrument]
fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let data_dir = match resolve_data_dir(cli.data_dir.clone()) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            std::process::exit(exitcode::FAILURE);
        }
    };
    debug!("Using data directory {}", data_dir.display());

    if let Err(e) = tp_cli::cli::execute_command(cli, &data_dir) {
        let code = e.exit_code();
        eprintln!("{}", e.to_string().red());
        std::process::exit(code);
    }
}

/// Data directory precedence: `--data-dir` flag, then `TP_DATA_DIR`, then
/// `~/.tp`. An empty environment value counts as unset.
fn resolve_data_dir(flag: Option<PathBuf>) -> CliResult<PathBuf> {
    if let Some(dir) = flag {
        return Ok(dir);
    }
    if let Some(dir) = std::env::var_os(config::DATA_DIR_ENV) {
        if !dir.is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    config::default_data_dir()
        .ok_or_else(|| CliError::Other("Could not determine home directory".to_string()))
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // Human output goes to stderr so stdout stays parseable by the shell
    // wrapper
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => info!("Debug mode: info"),
        LevelFilter::DEBUG => debug!("Debug mode: debug"),
        LevelFilter::TRACE => debug!("Debug mode: trace"),
        _ => {}
    }
}
