// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{ContentArgs, FilterArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "spoilerline")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Spoiler-aware timeline tools for show fan sites")]
#[command(
    long_about = "Spoiler-aware timeline tools for show fan sites.\n\n\
    Validate event content at build time, preview spoiler-filtered timelines, \
    and work with relative time deltas."
)]
pub struct Cli {
    /// Run as if spoilerline was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate content files against the event schema
    #[command(after_help = "\
Examples:
  spoilerline validate                          Validate files listed in spoilerline.toml
  spoilerline validate data/events/*.json       Validate specific files")]
    Validate {
        #[command(flatten)]
        content: ContentArgs,
    },

    /// Print the timeline with spoiler filtering applied
    #[command(after_help = "\
Examples:
  spoilerline timeline -s 1 -e 2                Hide everything after S1E2
  spoilerline timeline -s 1 -e 2 -r 4           ...but reveal item #4
  spoilerline timeline --show-all               Show everything
  spoilerline timeline --layout grid -o json    JSON output")]
    Timeline {
        #[command(flatten)]
        filter: FilterArgs,

        #[command(flatten)]
        content: ContentArgs,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// List known seasons and episodes
    Catalog {
        #[command(flatten)]
        content: ContentArgs,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Describe the time between two deltas
    #[command(after_help = "\
Examples:
  spoilerline diff \"0 hours\" \"25 hours\"          1 day later
  spoilerline diff \"2 weeks\" \"1 week 2 days\"     5 days earlier")]
    Diff {
        /// Starting delta
        #[arg(allow_hyphen_values = true)]
        from: String,
        /// Ending delta
        #[arg(allow_hyphen_values = true)]
        to: String,
    },

    /// Show JSON Schema for content files and JSON output
    #[command(subcommand)]
    Schema(SchemaCommand),

    /// Show the countdown to the next scheduled episode
    NextEpisode,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaCommand {
    /// Schema for event content files
    Content,
    /// Schema for `timeline -o json`
    Timeline,
    /// Schema for `catalog -o json`
    Catalog,
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
