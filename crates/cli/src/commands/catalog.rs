// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use super::Context;
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::schema::catalog::CatalogOutputJson;

/// Run the catalog command.
pub fn run(ctx: &Context, files: &[PathBuf], output: OutputFormat) -> Result<()> {
    let dataset = ctx.load_dataset(files)?;
    let catalog = CatalogOutputJson::from(dataset.catalog());
    match output {
        OutputFormat::Text => print!("{}", render_text(&catalog)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&catalog)?),
    }
    Ok(())
}

fn join(numbers: &[u32]) -> String {
    numbers
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn render_text(catalog: &CatalogOutputJson) -> String {
    if catalog.seasons.is_empty() {
        return "no seasons\n".to_string();
    }
    let mut out = String::new();
    for season in &catalog.seasons {
        out.push_str(&format!("Season {}: {}\n", season.season, join(&season.episodes)));
    }
    out.push_str(&format!("All episodes: {}\n", join(&catalog.all_episodes)));
    out
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
