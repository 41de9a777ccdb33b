// src/diagnose.rs

//! Explain why a node set could not be leveled.
//!
//! The leveler only reports that it stalled. This module looks at the stuck
//! nodes afterwards and separates the two causes it merges:
//! - dependencies that point outside the leveled set (dangling), and
//! - genuine cycles, found as strongly connected components with `petgraph`.

use std::collections::{BTreeSet, HashMap, VecDeque};

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::graph::{Graph, NodeRef};

/// Causes behind an unsatisfiable node set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnosis {
    /// `(node, dependency)` pairs whose dependency is not in the leveled set.
    pub dangling: Vec<(NodeRef, NodeRef)>,
    /// Each entry is a closed dependency path: `cycle[i]` depends on
    /// `cycle[i + 1]`, and the last node depends on the first.
    pub cycles: Vec<Vec<NodeRef>>,
}

impl Diagnosis {
    pub fn is_empty(&self) -> bool {
        self.dangling.is_empty() && self.cycles.is_empty()
    }
}

/// Diagnose the `stuck` nodes left over from leveling `nodes`.
pub fn diagnose<I>(graph: &Graph<I>, nodes: &BTreeSet<NodeRef>, stuck: &[NodeRef]) -> Diagnosis {
    let stuck_set: BTreeSet<NodeRef> = stuck.iter().copied().collect();

    let mut dangling = Vec::new();
    // Edge direction: node -> dependency.
    let mut deps_graph: DiGraphMap<NodeRef, ()> = DiGraphMap::new();

    for &node in &stuck_set {
        deps_graph.add_node(node);
        let Some(n) = graph.node(node) else {
            continue;
        };
        for &dep in n.dependencies() {
            if !nodes.contains(&dep) {
                dangling.push((node, dep));
            } else if stuck_set.contains(&dep) {
                deps_graph.add_edge(node, dep, ());
            }
        }
    }

    let mut cycles: Vec<Vec<NodeRef>> = tarjan_scc(&deps_graph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || deps_graph.contains_edge(scc[0], scc[0]))
        .filter_map(|scc| cycle_path(&deps_graph, &scc))
        .collect();
    cycles.sort();

    Diagnosis { dangling, cycles }
}

/// Walk one closed path through a strongly connected component, starting at
/// its lowest node.
fn cycle_path(deps_graph: &DiGraphMap<NodeRef, ()>, scc: &[NodeRef]) -> Option<Vec<NodeRef>> {
    let members: BTreeSet<NodeRef> = scc.iter().copied().collect();
    let start = *members.first()?;

    if deps_graph.contains_edge(start, start) {
        return Some(vec![start]);
    }

    // Breadth-first search back to `start`, recording how each node was reached.
    let mut parent: HashMap<NodeRef, NodeRef> = HashMap::new();
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        for next in deps_graph.neighbors(current) {
            if !members.contains(&next) {
                continue;
            }
            if next == start {
                let mut path = vec![current];
                let mut at = current;
                while at != start {
                    at = parent[&at];
                    path.push(at);
                }
                path.reverse();
                return Some(path);
            }
            if !parent.contains_key(&next) {
                parent.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    None
}
