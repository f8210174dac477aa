// src/cli/mod.rs
pub mod args;
pub mod commands;
pub mod error;

use std::path::Path;

use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands};
use crate::cli::error::CliResult;
use crate::config;

/// Routes a parsed command line to its handler.
///
/// A bare alias resolves like a subcommand named `go` would, and no
/// arguments at all means `list`. `data_dir` has already been resolved from
/// flag, environment or home directory by the caller.
#[instrument(skip(cli), level = "debug")]
pub fn execute_command(cli: Cli, data_dir: &Path) -> CliResult<()> {
    let settings = config::load_settings(&config::config_file(data_dir));
    let data_file = config::bookmarks_file(data_dir);
    debug!("Using bookmark store at {}", data_file.display());

    match cli.command {
        Some(Commands::Add { alias }) => commands::add(alias, &data_file, &settings),
        Some(Commands::Del { alias }) => commands::delete(alias, &data_file, &settings),
        Some(Commands::Ch {
            old_alias,
            new_alias,
        }) => commands::rename(old_alias, new_alias, &data_file, &settings),
        Some(Commands::Gc) => commands::garbage_collect(&data_file, &settings),
        Some(Commands::List) => commands::list(&data_file, &settings),
        None if cli.completions => commands::completions(&data_file, &settings),
        None => match cli.alias {
            Some(alias) => commands::go(&alias, &data_file, &settings),
            None => commands::list(&data_file, &settings),
        },
    }
}
