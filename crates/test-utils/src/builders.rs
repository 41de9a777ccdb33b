#![allow(dead_code)]

use std::collections::BTreeSet;

use buildlevels::graph::{Graph, GraphBuilder, NodeRef};
use buildlevels::level::Levels;

/// Build a `Graph<u32>` from `(id, deps)` rows, one node per row.
///
/// Dependencies name ids, so ids are expected to be unique. A dependency id
/// with no row of its own panics: use [`GraphBuilder`] directly for dangling
/// references.
pub fn graph_from_pairs(rows: &[(u32, &[u32])]) -> Graph<u32> {
    let owned: Vec<(u32, Vec<u32>)> = rows.iter().map(|(id, deps)| (*id, deps.to_vec())).collect();
    graph_from_rows(&owned)
}

/// Same as [`graph_from_pairs`], for rows built at runtime.
pub fn graph_from_rows(rows: &[(u32, Vec<u32>)]) -> Graph<u32> {
    let mut builder = GraphBuilder::new();
    let refs: Vec<NodeRef> = rows.iter().map(|(id, _)| builder.declare(*id)).collect();

    for (row, (id, deps)) in rows.iter().enumerate() {
        for dep in deps {
            let pos = rows
                .iter()
                .position(|(other, _)| other == dep)
                .unwrap_or_else(|| panic!("node {id} depends on undeclared id {dep}"));
            builder
                .depends_on(refs[row], refs[pos])
                .expect("ref came from this builder");
        }
    }

    builder.build()
}

/// Levels as sets of ids, for order-insensitive comparison.
pub fn level_ids<I: Ord + Clone>(graph: &Graph<I>, levels: &Levels) -> Vec<BTreeSet<I>> {
    levels
        .iter()
        .map(|level| {
            level
                .iter()
                .map(|&n| graph.node(n).expect("leveled node is in graph").id().clone())
                .collect()
        })
        .collect()
}

/// Assert that `levels` matches `expected`, compared level by level as id sets.
pub fn assert_levels_eq(graph: &Graph<u32>, levels: &Levels, expected: &[&[u32]]) {
    let expected: Vec<BTreeSet<u32>> = expected
        .iter()
        .map(|level| level.iter().copied().collect())
        .collect();
    assert_eq!(level_ids(graph, levels), expected);
}
