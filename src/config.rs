//! Configuration loader for describing the import rewrite options.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;

use crate::plugin::ImportPrefixOptions;

const DEFAULT_CONFIG_FILE: &str = "import-prefix.config.json";

/// Discoverable rewrite configuration, usually kept next to the project manifest.
///
/// Field names are camelCase on disk to match the host bundler's own
/// configuration conventions.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteConfig {
    /// Text prepended to every rewritten relative import path.
    pub prefix: String,
    /// Optional pattern restricting which output file names are scanned.
    #[serde(default)]
    pub file_filter: Option<String>,
}

impl RewriteConfig {
    /// Load configuration from the conventional file in the provided directory.
    ///
    /// Unlike layout-style configuration there is no sensible default for
    /// `prefix`, so a missing or malformed file is an error rather than a
    /// silent fallback.
    pub fn discover(project_dir: &Path) -> Result<Self> {
        Self::from_path(&project_dir.join(DEFAULT_CONFIG_FILE))
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Compile the configuration into validated plugin options.
    pub fn into_options(self) -> Result<ImportPrefixOptions> {
        let file_filter = match self.file_filter {
            Some(pattern) => Some(
                Regex::new(&pattern)
                    .with_context(|| format!("invalid file filter pattern `{pattern}`"))?,
            ),
            None => None,
        };

        Ok(ImportPrefixOptions {
            prefix: self.prefix,
            file_filter,
        })
    }
}
