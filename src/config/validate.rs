// src/config/validate.rs

use crate::config::model::{GraphFile, RawGraphFile};
use crate::errors::{BuildLevelsError, Result};

impl TryFrom<RawGraphFile> for GraphFile {
    type Error = BuildLevelsError;

    fn try_from(raw: RawGraphFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_graph(&raw)?;
        Ok(GraphFile::new_unchecked(raw.node))
    }
}

fn validate_raw_graph(raw: &RawGraphFile) -> Result<()> {
    ensure_has_nodes(raw)?;
    validate_dependency_names(raw)?;
    Ok(())
}

fn ensure_has_nodes(raw: &RawGraphFile) -> Result<()> {
    if raw.node.is_empty() {
        return Err(BuildLevelsError::ConfigError(
            "graph file must contain at least one [node.<name>] section".to_string(),
        ));
    }
    Ok(())
}

// Self-dependencies and cycles pass; the leveler rejects them.
fn validate_dependency_names(raw: &RawGraphFile) -> Result<()> {
    for (name, node) in raw.node.iter() {
        for dep in node.after.iter() {
            if !raw.node.contains_key(dep) {
                return Err(BuildLevelsError::ConfigError(format!(
                    "node '{}' has unknown dependency '{}' in `after`",
                    name, dep
                )));
            }
        }
    }
    Ok(())
}
