#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod models;
pub mod plugin;
pub mod rewrite;

pub use config::RewriteConfig;
pub use models::{AssetEntry, BuildOptions, ChunkEntry, OutputBundle, OutputEntry};
pub use plugin::{ImportPrefixOptions, ImportPrefixPlugin, PLUGIN_NAME};
