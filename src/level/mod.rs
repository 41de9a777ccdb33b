// src/level/mod.rs

//! Build-level partitioning.
//!
//! Peels a dependency graph breadth-first: level 0 is every node without
//! dependencies, and each following level is every remaining node whose
//! dependencies have all been placed already. Each node therefore lands at
//! `1 + max(level of its dependencies)`.
//!
//! The computation is pure. It never mutates the graph or the caller's
//! node set, and a failed call returns no partial result.

mod levels;

pub use levels::{Level, Levels};

use std::collections::BTreeSet;

use thiserror::Error;
use tracing::trace;

use crate::graph::{Graph, NodeRef};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// No remaining node became eligible: the graph has a cycle, or some node
    /// depends on a node outside the leveled set.
    #[error(
        "the input nodes contain cyclic or unsatisfiable dependencies \
         ({} node(s) left unassigned after {assigned_levels} level(s))",
        .stuck.len()
    )]
    UnsatisfiableGraph {
        assigned_levels: usize,
        stuck: Vec<NodeRef>,
    },

    /// The requested node set names a node the graph does not hold.
    #[error("node {0} is not part of the graph")]
    UnknownNode(NodeRef),
}

/// Level every node in `graph`.
pub fn compute_levels<I>(graph: &Graph<I>) -> Result<Levels, LevelError> {
    compute_levels_for(graph, &graph.node_set())
}

/// Level the subset `nodes` of `graph`.
///
/// Dependencies pointing outside `nodes` can never be satisfied and make the
/// call fail with [`LevelError::UnsatisfiableGraph`].
pub fn compute_levels_for<I>(
    graph: &Graph<I>,
    nodes: &BTreeSet<NodeRef>,
) -> Result<Levels, LevelError> {
    if let Some(&unknown) = nodes.iter().find(|&&n| !graph.contains(n)) {
        return Err(LevelError::UnknownNode(unknown));
    }

    // Working copy; the caller's set stays untouched.
    let mut remaining = nodes.clone();
    let mut assigned: BTreeSet<NodeRef> = BTreeSet::new();
    let mut levels = Levels::default();

    while !remaining.is_empty() {
        let next: Level = remaining
            .iter()
            .copied()
            .filter(|&n| dependencies_within(graph, n, &assigned))
            .collect();

        if next.is_empty() {
            return Err(LevelError::UnsatisfiableGraph {
                assigned_levels: levels.len(),
                stuck: remaining.into_iter().collect(),
            });
        }

        trace!(level = levels.len(), size = next.len(), "assigned level");

        for n in &next {
            remaining.remove(n);
        }
        assigned.extend(next.iter().copied());
        levels.push(next);
    }

    Ok(levels)
}

/// True when every dependency of `node` is already in `available`.
///
/// With nothing assigned yet this selects exactly the zero-dependency nodes.
fn dependencies_within<I>(graph: &Graph<I>, node: NodeRef, available: &BTreeSet<NodeRef>) -> bool {
    graph
        .node(node)
        .is_some_and(|n| n.dependencies().is_subset(available))
}
