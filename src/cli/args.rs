// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tp-cli", author, version, about, long_about = None, disable_version_flag = true)]
/// Teleport to bookmarked directories
pub struct Cli {
    /// Bookmark alias to jump to; lists all bookmarks when omitted
    pub alias: Option<String>,

    /// Print all aliases, one per line, for shell completion engines
    #[arg(long = "completions")]
    pub completions: bool,

    /// Directory holding bookmarks.json and config.json [default: ~/.tp]
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bookmark the current directory under an alias
    Add {
        /// Alias for the current working directory
        alias: Option<String>,
    },
    /// Delete a bookmark
    Del {
        /// Alias to delete
        alias: Option<String>,
    },
    /// Rename an alias; merges when both point to the same directory
    Ch {
        /// Existing alias
        old_alias: Option<String>,
        /// Replacement alias
        new_alias: Option<String>,
    },
    /// Remove bookmarks whose directories no longer exist
    Gc,
    /// Show all bookmarks, newest first
    List,
}
