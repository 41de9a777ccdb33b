// src/graph/builder.rs

use super::{Graph, GraphError, Node, NodeRef};

/// Two-phase graph construction.
///
/// Nodes are declared first and receive a [`NodeRef`]; dependencies are then
/// attached between handles. Nothing is validated here: self-loops, cycles
/// and references to nodes that will not be part of the leveled set are all
/// accepted and only surface during leveling.
///
/// ```
/// use buildlevels::graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new();
/// let lib = b.node("lib", []);
/// let app = b.node("app", [lib]);
/// let graph = b.build();
///
/// assert!(graph.node(app).unwrap().dependencies().contains(&lib));
/// ```
#[derive(Debug, Clone)]
pub struct GraphBuilder<I> {
    nodes: Vec<Node<I>>,
}

impl<I> GraphBuilder<I> {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Declare a node with no dependencies yet.
    pub fn declare(&mut self, id: I) -> NodeRef {
        let node = NodeRef::new(self.nodes.len());
        self.nodes.push(Node::new(id));
        node
    }

    /// Declare a node together with dependencies that already have handles.
    pub fn node(&mut self, id: I, deps: impl IntoIterator<Item = NodeRef>) -> NodeRef {
        let node = self.declare(id);
        let slot = &mut self.nodes[node.index()];
        for dep in deps {
            slot.add_dependency(dep);
        }
        node
    }

    /// Record that `node` depends on `dep`. Repeated edges collapse.
    pub fn depends_on(&mut self, node: NodeRef, dep: NodeRef) -> Result<(), GraphError> {
        let slot = self
            .nodes
            .get_mut(node.index())
            .ok_or(GraphError::UnknownNode(node))?;
        slot.add_dependency(dep);
        Ok(())
    }

    pub fn depends_on_all(
        &mut self,
        node: NodeRef,
        deps: impl IntoIterator<Item = NodeRef>,
    ) -> Result<(), GraphError> {
        for dep in deps {
            self.depends_on(node, dep)?;
        }
        Ok(())
    }

    /// Freeze the builder into an immutable [`Graph`].
    pub fn build(self) -> Graph<I> {
        Graph::from_nodes(self.nodes)
    }
}

impl<I> Default for GraphBuilder<I> {
    fn default() -> Self {
        Self::new()
    }
}
