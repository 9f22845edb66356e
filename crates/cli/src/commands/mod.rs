// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod catalog;
pub mod diff;
pub mod next_episode;
pub mod schema;
pub mod timeline;
pub mod validate;

use std::path::{Path, PathBuf};

use sl_core::Dataset;

use crate::config::Config;
use crate::error::{Error, Result};

/// Where a command runs and the configuration found there.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Directory given with `-C`, if any.
    pub dir: Option<PathBuf>,
    pub config: Config,
}

impl Context {
    /// Load configuration from `dir`, or from the current directory.
    pub fn load(dir: Option<&str>) -> Result<Self> {
        let dir = dir.map(PathBuf::from);
        let config = Config::load(dir.as_deref().unwrap_or(Path::new(".")))?;
        Ok(Context { dir, config })
    }

    /// Resolve a relative path against the `-C` directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    /// Content files from the command line, or from configuration.
    pub fn content_files(&self, files: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let files: &[PathBuf] = if files.is_empty() {
            &self.config.content.files
        } else {
            files
        };
        if files.is_empty() {
            return Err(Error::NoContentFiles);
        }
        Ok(files.iter().map(|f| self.resolve(f)).collect())
    }

    /// Load and validate content.
    pub fn load_dataset(&self, files: &[PathBuf]) -> Result<Dataset> {
        let paths = self.content_files(files)?;
        Ok(Dataset::load(&paths)?)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
