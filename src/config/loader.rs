// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{GraphFile, RawGraphFile};
use crate::errors::Result;

/// Load a graph file from a given path and return the raw `RawGraphFile`.
///
/// This only performs TOML deserialization; it does **not** check that
/// dependency names resolve. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawGraphFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let raw: RawGraphFile = toml::from_str(&contents)?;
    debug!(path = %path.display(), nodes = raw.node.len(), "parsed graph file");

    Ok(raw)
}

/// Load a graph file from path and validate its references.
///
/// Cycles are deliberately left in place; they are reported by the leveler.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<GraphFile> {
    let raw = load_from_path(&path)?;
    let graph_file = GraphFile::try_from(raw)?;
    Ok(graph_file)
}

/// `Buildlevels.toml` in the current working directory.
pub fn default_graph_path() -> PathBuf {
    PathBuf::from("Buildlevels.toml")
}
