// tests/property/leveling.rs

use std::collections::{BTreeMap, BTreeSet, HashSet};

use buildlevels::graph::{GraphBuilder, NodeRef};
use buildlevels::level::{LevelError, compute_levels};
use buildlevels_test_utils::builders::{assert_levels_eq, graph_from_pairs, graph_from_rows, level_ids};
use proptest::prelude::*;

#[test]
fn scenario_two_roots() {
    let g = graph_from_pairs(&[(4, &[]), (5, &[]), (3, &[4]), (2, &[4, 5]), (1, &[2, 3])]);
    let levels = compute_levels(&g).unwrap();
    assert_levels_eq(&g, &levels, &[&[4, 5], &[2, 3], &[1]]);
}

#[test]
fn scenario_five_levels() {
    let g = graph_from_pairs(&[
        (7, &[]),
        (6, &[]),
        (5, &[6]),
        (4, &[5, 6, 7]),
        (3, &[4, 7]),
        (2, &[3, 6]),
        (1, &[5, 4, 7]),
    ]);
    let levels = compute_levels(&g).unwrap();
    assert_levels_eq(&g, &levels, &[&[6, 7], &[5], &[4], &[1, 3], &[2]]);
}

#[test]
fn scenario_mutual_cycle() {
    let g = graph_from_pairs(&[(1, &[2]), (2, &[1])]);
    assert!(matches!(
        compute_levels(&g),
        Err(LevelError::UnsatisfiableGraph { assigned_levels: 0, .. })
    ));
}

#[test]
fn scenario_indirect_cycle() {
    let g = graph_from_pairs(&[(1, &[2, 3]), (2, &[4]), (3, &[]), (4, &[1])]);
    assert!(matches!(
        compute_levels(&g),
        Err(LevelError::UnsatisfiableGraph { assigned_levels: 1, .. })
    ));
}

#[test]
fn scenario_single_node() {
    let g = graph_from_pairs(&[(1, &[])]);
    let levels = compute_levels(&g).unwrap();
    assert_levels_eq(&g, &levels, &[&[1]]);
}

// Acyclic by construction: node i may only depend on nodes 0..i.
fn dag_strategy(max_nodes: usize) -> impl Strategy<Value = Vec<(u32, Vec<u32>)>> {
    (1..=max_nodes).prop_flat_map(|num_nodes| {
        proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..num_nodes),
            num_nodes,
        )
        .prop_map(|raw_deps| {
            raw_deps
                .into_iter()
                .enumerate()
                .map(|(i, potential)| {
                    let deps: BTreeSet<u32> = if i == 0 {
                        BTreeSet::new()
                    } else {
                        potential.into_iter().map(|d| (d % i) as u32).collect()
                    };
                    (i as u32, deps.into_iter().collect())
                })
                .collect()
        })
    })
}

/// Reference depth: 0 for roots, otherwise one past the deepest dependency.
fn expected_depths(rows: &[(u32, Vec<u32>)]) -> BTreeMap<u32, usize> {
    let mut depth = BTreeMap::new();
    for (id, deps) in rows {
        let d = deps.iter().map(|dep| depth[dep] + 1).max().unwrap_or(0);
        depth.insert(*id, d);
    }
    depth
}

proptest! {
    #[test]
    fn levels_cover_every_node_once(rows in dag_strategy(24)) {
        let g = graph_from_rows(&rows);
        let levels = compute_levels(&g).unwrap();

        let mut seen = HashSet::new();
        for level in &levels {
            prop_assert!(!level.is_empty());
            for &n in level {
                prop_assert!(seen.insert(n), "node {} appears twice", n);
            }
        }
        prop_assert_eq!(seen.len(), g.len());
    }

    #[test]
    fn dependencies_sit_in_strictly_earlier_levels(rows in dag_strategy(24)) {
        let g = graph_from_rows(&rows);
        let levels = compute_levels(&g).unwrap();

        for (n, node) in g.iter() {
            let own = levels.level_of(n).unwrap();
            for &dep in node.dependencies() {
                prop_assert!(levels.level_of(dep).unwrap() < own);
            }
        }
    }

    #[test]
    fn nodes_land_at_their_minimal_level(rows in dag_strategy(24)) {
        let g = graph_from_rows(&rows);
        let levels = compute_levels(&g).unwrap();
        let depths = expected_depths(&rows);

        for (n, node) in g.iter() {
            prop_assert_eq!(levels.level_of(n).unwrap(), depths[node.id()]);
        }
    }

    #[test]
    fn declaration_order_does_not_change_membership(
        rows in dag_strategy(16),
        seed in any::<u64>(),
    ) {
        let g = graph_from_rows(&rows);
        let expected = level_ids(&g, &compute_levels(&g).unwrap());

        // Deterministic shuffle: rotate, then reverse.
        let mut shuffled = rows.clone();
        let k = (seed as usize) % shuffled.len();
        shuffled.rotate_left(k);
        shuffled.reverse();

        let g2 = graph_from_rows(&shuffled);
        prop_assert_eq!(level_ids(&g2, &compute_levels(&g2).unwrap()), expected);
    }

    #[test]
    fn a_back_edge_is_always_rejected(
        rows in dag_strategy(16),
        pick in any::<usize>(),
    ) {
        let mut b = GraphBuilder::new();
        let refs: Vec<NodeRef> = rows.iter().map(|(id, _)| b.declare(*id)).collect();
        for (i, (_, deps)) in rows.iter().enumerate() {
            b.depends_on_all(refs[i], deps.iter().map(|&d| refs[d as usize])).unwrap();
        }

        // Tie the last node and an arbitrary one together (a self-loop when
        // they coincide).
        let last = refs[refs.len() - 1];
        let target = refs[pick % refs.len()];
        b.depends_on(target, last).unwrap();
        b.depends_on(last, target).unwrap();
        let cyclic = b.build();

        let rejected = matches!(
            compute_levels(&cyclic),
            Err(LevelError::UnsatisfiableGraph { .. })
        );
        prop_assert!(rejected);
    }
}
