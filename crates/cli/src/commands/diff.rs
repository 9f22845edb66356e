// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use sl_core::{diff_description, parse_delta};

use crate::error::{Error, Result};

/// Run the diff command.
pub fn run(from: &str, to: &str) -> Result<()> {
    println!("{}", describe(from, to)?);
    Ok(())
}

/// Describe the time from `from` to `to`, naming the side that failed.
pub(crate) fn describe(from: &str, to: &str) -> Result<String> {
    for delta in [from, to] {
        if parse_delta(Some(delta)).is_none() {
            return Err(Error::UnparseableDelta(delta.to_string()));
        }
    }
    diff_description(Some(from), Some(to)).ok_or_else(|| Error::UnparseableDelta(to.to_string()))
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
