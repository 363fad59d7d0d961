//! # season
//!
//! Command-line front end for `season-core`.
//!
//! - `cli`: clap command tree and command implementations
//! - `config`: TOML file and environment configuration
//!
//! Command output goes to stdout, one line per result. Logs go to stderr.

pub mod cli;
pub mod config;
mod error;

pub use error::AppError;
