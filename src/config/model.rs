// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::graph::{Graph, GraphBuilder, GraphError, NodeRef};

/// Graph file as read from TOML, before validation.
///
/// ```toml
/// [node.app]
/// after = ["lib", "codegen"]
///
/// [node.lib]
///
/// [node.codegen]
/// after = ["lib"]
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawGraphFile {
    /// All nodes from `[node.<name>]`, keyed by name.
    #[serde(default)]
    pub node: BTreeMap<String, NodeConfig>,
}

/// `[node.<name>]` section.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct NodeConfig {
    /// Names of the nodes this one depends on.
    #[serde(default)]
    pub after: Vec<String>,
}

/// A graph file whose `after` references all name declared nodes.
///
/// Only constructed through `TryFrom<RawGraphFile>` (see `validate.rs`).
#[derive(Debug, Clone)]
pub struct GraphFile {
    node: BTreeMap<String, NodeConfig>,
}

impl GraphFile {
    pub(crate) fn new_unchecked(node: BTreeMap<String, NodeConfig>) -> Self {
        Self { node }
    }

    pub fn nodes(&self) -> &BTreeMap<String, NodeConfig> {
        &self.node
    }

    /// Build the node arena. Nodes are declared in name order.
    pub fn to_graph(&self) -> Result<Graph<String>, GraphError> {
        let mut builder = GraphBuilder::new();
        let refs: BTreeMap<&str, NodeRef> = self
            .node
            .keys()
            .map(|name| (name.as_str(), builder.declare(name.clone())))
            .collect();

        for (name, cfg) in &self.node {
            let node = refs[name.as_str()];
            // Validation guarantees every `after` entry resolves.
            let deps = cfg.after.iter().filter_map(|dep| refs.get(dep.as_str()).copied());
            builder.depends_on_all(node, deps)?;
        }

        Ok(builder.build())
    }
}
