// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Schema command implementation.
//!
//! Outputs JSON Schema specifications for content files and for commands
//! that support JSON output.

use schemars::schema::RootSchema;
use schemars::schema_for;
use sl_core::Event;

use crate::cli::SchemaCommand;
use crate::error::Result;
use crate::schema::{catalog, timeline};

/// Run the schema command.
pub fn run(cmd: SchemaCommand) -> Result<()> {
    let json = serde_json::to_string_pretty(&schema(cmd))?;
    println!("{}", json);
    Ok(())
}

pub(crate) fn schema(cmd: SchemaCommand) -> RootSchema {
    match cmd {
        SchemaCommand::Content => schema_for!(Vec<Event>),
        SchemaCommand::Timeline => schema_for!(timeline::TimelineOutputJson),
        SchemaCommand::Catalog => schema_for!(catalog::CatalogOutputJson),
    }
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
