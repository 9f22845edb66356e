// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that read content or accept filter parameters.

use std::path::PathBuf;

use clap::Args;
use sl_core::RawParams;

/// Content file arguments.
#[derive(Args, Clone, Debug, Default)]
pub struct ContentArgs {
    /// Content files to load (default: content.files from spoilerline.toml)
    #[arg(value_name = "file")]
    pub files: Vec<PathBuf>,
}

/// Spoiler filter arguments, passed through unvalidated.
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Last season watched
    #[arg(long, short)]
    pub season: Option<String>,

    /// Last episode watched
    #[arg(long, short)]
    pub episode: Option<String>,

    /// Disable spoiler filtering (bare flag means --show-all=true)
    #[arg(
        long = "show-all",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_name = "bool"
    )]
    pub show_all: Option<String>,

    /// Reveal hidden items by position or id (comma-separated)
    #[arg(long, short)]
    pub reveal: Option<String>,

    /// Timeline layout: list or grid
    #[arg(long)]
    pub layout: Option<String>,
}

impl FilterArgs {
    /// The arguments as raw filter parameters.
    pub fn to_raw_params(&self) -> RawParams {
        RawParams {
            season: self.season.clone(),
            episode: self.episode.clone(),
            show_all: self.show_all.clone(),
            reveal: self.reveal.clone(),
            layout: self.layout.clone(),
        }
    }
}
