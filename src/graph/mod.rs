// src/graph/mod.rs

//! Arena-backed dependency graph.
//!
//! - [`node`] holds the immutable [`Node`] value and its [`NodeRef`] handle.
//! - [`builder`] provides the two-phase [`GraphBuilder`] used to declare
//!   nodes first and wire dependencies afterwards (so cycles can be expressed
//!   and later rejected by the leveler).
//!
//! Node identity is the arena index, not the caller-supplied id: two nodes
//! may share an id and still be distinct.

pub mod builder;
pub mod node;

use std::collections::BTreeSet;

pub use builder::GraphBuilder;
pub use node::{Node, NodeRef};

use thiserror::Error;

/// Errors raised while assembling a graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("node {0} was not declared in this graph")]
    UnknownNode(NodeRef),
}

/// Immutable set of nodes addressed by [`NodeRef`].
#[derive(Debug, Clone)]
pub struct Graph<I> {
    nodes: Vec<Node<I>>,
}

impl<I> Graph<I> {
    pub(crate) fn from_nodes(nodes: Vec<Node<I>>) -> Self {
        Self { nodes }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, node: NodeRef) -> bool {
        node.index() < self.nodes.len()
    }

    /// Look up a node by handle.
    pub fn node(&self, node: NodeRef) -> Option<&Node<I>> {
        self.nodes.get(node.index())
    }

    /// All handles, in declaration order.
    pub fn refs(&self) -> impl Iterator<Item = NodeRef> + '_ {
        (0..self.nodes.len()).map(NodeRef::new)
    }

    /// All `(handle, node)` pairs, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeRef, &Node<I>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (NodeRef::new(idx), node))
    }

    /// The complete node set, suitable as input to
    /// [`compute_levels_for`](crate::level::compute_levels_for).
    pub fn node_set(&self) -> BTreeSet<NodeRef> {
        self.refs().collect()
    }
}

impl<I: PartialEq> Graph<I> {
    /// Every node carrying `id`. Ids are not required to be unique, so this
    /// may return more than one handle.
    pub fn find(&self, id: &I) -> Vec<NodeRef> {
        self.iter()
            .filter(|(_, node)| node.id() == id)
            .map(|(r, _)| r)
            .collect()
    }
}

impl<I> Default for Graph<I> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}
