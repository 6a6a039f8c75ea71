//! Extension object wiring the import rewriter into the host bundler's hooks.

use std::borrow::Cow;

use anyhow::{Result, anyhow};
use regex::Regex;

use crate::models::{BuildOptions, OutputBundle};
use crate::rewrite::{is_rewrite_target, prefix_relative_imports};

/// Identifier reported to the host bundler for diagnostics and ordering.
pub const PLUGIN_NAME: &str = "add-import-prefix";

/// Options accepted when constructing an [`ImportPrefixPlugin`].
#[derive(Debug, Default, Clone)]
pub struct ImportPrefixOptions {
    /// Text prepended to every rewritten relative import path, e.g. `/my-prefix/`.
    pub prefix: String,
    /// Restricts which output entries are scanned. `None` selects the default
    /// filter matching `.js`, `.ts`, `.jsx` and `.tsx` file names.
    pub file_filter: Option<Regex>,
}

/// Post-generation extension that prefixes relative import paths in generated chunks.
///
/// Configuration is captured at construction and immutable for the lifetime of
/// the plugin, so a single instance can serve sequential builds. The plugin
/// holds no other state.
#[derive(Debug, Clone)]
pub struct ImportPrefixPlugin {
    prefix: String,
    file_filter: Option<Regex>,
}

impl ImportPrefixPlugin {
    /// Validate the options and build the plugin.
    ///
    /// An empty `prefix` is rejected here so a misconfigured build fails
    /// immediately instead of shipping chunks with malformed import paths.
    pub fn new(options: ImportPrefixOptions) -> Result<Self> {
        if options.prefix.is_empty() {
            return Err(anyhow!("import prefix must not be empty"));
        }

        Ok(Self {
            prefix: options.prefix,
            file_filter: options.file_filter,
        })
    }

    /// Name under which the host registers this extension.
    pub fn name(&self) -> &'static str {
        PLUGIN_NAME
    }

    /// Post-generation hook: rewrite relative imports in every eligible chunk.
    ///
    /// Called by the host once per build, after code generation and before the
    /// output set is finalized on disk. Only executable chunks whose file name
    /// passes the configured filter are touched; their `code` is mutated in
    /// place. A filter that matches nothing makes the call a no-op.
    pub fn generate_bundle(&self, _options: &BuildOptions, bundle: &mut OutputBundle) {
        for entry in bundle.values_mut() {
            let Some(chunk) = entry.as_chunk_mut() else {
                continue;
            };
            if !is_rewrite_target(&chunk.file_name, self.file_filter.as_ref()) {
                continue;
            }
            if let Cow::Owned(rewritten) = prefix_relative_imports(&chunk.code, &self.prefix) {
                chunk.code = rewritten;
            }
        }
    }
}
