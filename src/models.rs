//! Data structures describing the output of one bundler run.

use std::collections::BTreeMap;

/// Mapping of output file names to the entries produced by one build.
///
/// The host bundler owns the map and passes it to post-generation hooks, which
/// mutate entries in place before the host finalizes them on disk. The map only
/// lives for the duration of one build-finalization callback.
pub type OutputBundle = BTreeMap<String, OutputEntry>;

/// A single file emitted by the bundler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputEntry {
    /// An executable chunk of generated program text.
    Chunk(ChunkEntry),
    /// A non-code asset emitted alongside the chunks (images, stylesheets, wasm).
    Asset(AssetEntry),
}

impl OutputEntry {
    /// File name of the entry, regardless of its kind.
    pub fn file_name(&self) -> &str {
        match self {
            OutputEntry::Chunk(chunk) => &chunk.file_name,
            OutputEntry::Asset(asset) => &asset.file_name,
        }
    }

    /// Mutable access to the entry when it is an executable chunk.
    pub fn as_chunk_mut(&mut self) -> Option<&mut ChunkEntry> {
        match self {
            OutputEntry::Chunk(chunk) => Some(chunk),
            OutputEntry::Asset(_) => None,
        }
    }
}

/// Generated program text addressed by its output file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkEntry {
    /// Output file name, used for filter matching.
    pub file_name: String,
    /// Generated source text, mutated in place by post-generation hooks.
    pub code: String,
}

/// Raw asset bytes emitted by the bundler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry {
    /// Output file name of the asset.
    pub file_name: String,
    /// Asset contents as emitted by the bundler.
    pub source: Vec<u8>,
}

/// Generation options the host supplies alongside the bundle.
///
/// Post-generation hooks receive these for context but the rewriter does not
/// consult them; they are carried to mirror the host callback contract.
#[derive(Debug, Default, Clone)]
pub struct BuildOptions {
    /// Directory where the host writes the finalized output set.
    pub out_dir: Option<String>,
    /// Module format of the generated chunks (e.g. `es`).
    pub format: Option<String>,
}
