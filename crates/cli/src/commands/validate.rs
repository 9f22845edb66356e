// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Validate command implementation.
//!
//! Checks every content file against the event schema and checks ids for
//! uniqueness across all files. Every problem is listed, not just the
//! first one.

use std::io::Write;
use std::path::PathBuf;

use sl_core::{Dataset, Source, ValidationReport};

use super::Context;
use crate::error::{Error, Result};

/// Run the validate command.
pub fn run(ctx: &Context, files: &[PathBuf]) -> Result<()> {
    let paths = ctx.content_files(files)?;
    let (report, sources) = Dataset::validate(&paths)?;

    if !report.is_ok() {
        let mut stderr = std::io::stderr().lock();
        write_problems(&mut stderr, &report, &sources)?;
        return Err(Error::ValidationFailed {
            count: report.problem_count(),
        });
    }

    tracing::info!("validated {} events", report.records.len());
    println!(
        "ok: {} events in {} {}",
        report.records.len(),
        paths.len(),
        if paths.len() == 1 { "file" } else { "files" }
    );
    Ok(())
}

/// Write one line per violation and per duplicated id.
pub(crate) fn write_problems(
    out: &mut impl Write,
    report: &ValidationReport,
    sources: &[Source],
) -> Result<()> {
    for violation in &report.violations {
        let location = violation
            .record
            .map(|i| locate(sources, i))
            .unwrap_or_default();
        match (location.is_empty(), violation.path.is_empty()) {
            (false, false) => writeln!(out, "{location}.{}: {}", violation.path, violation.message)?,
            (false, true) => writeln!(out, "{location}: {}", violation.message)?,
            (true, _) => writeln!(out, "{violation}")?,
        }
    }
    for duplicate in &report.duplicates {
        let locations: Vec<String> = duplicate.indices.iter().map(|&i| locate(sources, i)).collect();
        writeln!(
            out,
            "duplicate id {} at indices [{}]: {}",
            duplicate.id,
            duplicate
                .indices
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            locations.join(", ")
        )?;
    }
    Ok(())
}

fn locate(sources: &[Source], index: usize) -> String {
    sources
        .get(index)
        .map(Source::to_string)
        .unwrap_or_else(|| format!("[{index}]"))
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
