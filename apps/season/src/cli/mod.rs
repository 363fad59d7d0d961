//! # Season CLI Module
//!
//! ## Available Commands
//!
//! - (none) - Print the name of the configured value (Spring by default)
//! - `name` - Print the name of any integer value
//! - `list` - Print every season with its name under the current mapping
//! - `parse` - Print the integer value of a season name

mod commands;

use clap::{Parser, Subcommand};
use season_core::{Mapping, SeasonValue};
use std::path::PathBuf;

use crate::AppError;
use crate::config::SeasonConfig;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Season - integer enumeration to name conversion
///
/// Values without an explicit case in the selected mapping print "unknown".
#[derive(Parser, Debug)]
#[command(name = "season")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Name mapping: "partial" (no case for spring) or "full"
    #[arg(short, long, global = true)]
    pub mapping: Option<Mapping>,

    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the name of an integer value
    Name {
        /// Raw enumeration value (any integer)
        #[arg(allow_negative_numbers = true)]
        value: i64,
    },

    /// Print every season and its name
    List,

    /// Print the integer value of a season name
    Parse {
        /// Season name (case-insensitive)
        name: String,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub fn execute(cli: Cli) -> Result<(), AppError> {
    let config = SeasonConfig::load(cli.config.as_deref())?.with_mapping(cli.mapping);
    tracing::debug!(
        mapping = %config.mapping,
        value = config.value.get(),
        "resolved configuration"
    );

    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Name { value }) => cmd_name(SeasonValue(value), config.mapping, json_mode),
        Some(Commands::List) => cmd_list(config.mapping, json_mode),
        Some(Commands::Parse { name }) => cmd_parse(&name, json_mode),
        None => {
            // No subcommand - convert the configured constant
            cmd_name(config.value, config.mapping, json_mode)
        }
    }
}
