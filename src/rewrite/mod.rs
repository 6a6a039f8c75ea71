//! Pattern matching and substitution for relative import clauses.
//!
//! This module splits the responsibilities into focused submodules so that the
//! logic for selecting which output files to scan and the logic for rewriting
//! import paths inside them can be tested independently.

mod filters;
mod imports;

pub use filters::is_rewrite_target;
pub use imports::prefix_relative_imports;
