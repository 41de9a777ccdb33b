// src/graph/node.rs

use std::collections::BTreeSet;
use std::fmt;

/// Handle to a node inside a [`Graph`](super::Graph).
///
/// Equality and ordering are by arena position, so handles sort in
/// declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeRef(usize);

impl NodeRef {
    pub(crate) fn new(index: usize) -> Self {
        NodeRef(index)
    }

    /// Position of the node in its graph.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A graph vertex: a caller-assigned id plus the nodes it depends on.
///
/// The dependency set is fixed once the owning graph is built.
#[derive(Debug, Clone)]
pub struct Node<I> {
    id: I,
    dependencies: BTreeSet<NodeRef>,
}

impl<I> Node<I> {
    pub(crate) fn new(id: I) -> Self {
        Self {
            id,
            dependencies: BTreeSet::new(),
        }
    }

    pub(crate) fn add_dependency(&mut self, dep: NodeRef) {
        self.dependencies.insert(dep);
    }

    pub fn id(&self) -> &I {
        &self.id
    }

    pub fn dependencies(&self) -> &BTreeSet<NodeRef> {
        &self.dependencies
    }

    pub fn has_no_dependencies(&self) -> bool {
        self.dependencies.is_empty()
    }
}
