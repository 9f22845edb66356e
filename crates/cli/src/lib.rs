// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! slrs - Command-line front end for spoiler-aware show timelines.
//!
//! This crate wires [`sl_core`] into the `spoilerline` binary: content
//! validation at build time, filtered timeline previews and delta tools.
//!
//! # Main Components
//!
//! - [`Cli`] - Argument definitions (clap derive)
//! - [`Config`] - Project configuration read from `spoilerline.toml`
//! - [`Error`] - Error types for all commands
//!
//! ```rust,ignore
//! use clap::Parser;
//! use slrs::Cli;
//!
//! let cli = Cli::parse_from(["spoilerline", "validate", "season-1.json"]);
//! slrs::run(cli)?;
//! ```

mod cli;
mod commands;
mod schema;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, ContentArgs, FilterArgs, OutputFormat, SchemaCommand};
pub use config::Config;
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::Context;

/// Execute a parsed command line. Configuration is read from the `-C`
/// directory, or from the current directory.
pub fn run(cli: Cli) -> Result<()> {
    // Completion needs no configuration.
    if let Command::Completion { shell } = cli.command {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spoilerline", &mut std::io::stdout());
        return Ok(());
    }

    let ctx = Context::load(cli.directory.as_deref())?;
    match cli.command {
        Command::Validate { content } => commands::validate::run(&ctx, &content.files),
        Command::Timeline {
            filter,
            content,
            output,
        } => commands::timeline::run(&ctx, &filter, &content.files, output),
        Command::Catalog { content, output } => {
            commands::catalog::run(&ctx, &content.files, output)
        }
        Command::Diff { from, to } => commands::diff::run(&from, &to),
        Command::Schema(cmd) => commands::schema::run(cmd),
        Command::NextEpisode => commands::next_episode::run(&ctx),
        Command::Completion { .. } => Ok(()),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
