// src/report.rs

//! Human-readable rendering of leveling results.
//!
//! Output goes to stdout in `lib.rs`; this module only builds strings so it
//! stays testable.

use std::fmt::Display;

use crate::diagnose::Diagnosis;
use crate::graph::{Graph, NodeRef};
use crate::level::Levels;

/// One line per level, ids joined by `,`, in declaration order within a level.
pub fn render_levels<I: Display>(graph: &Graph<I>, levels: &Levels) -> String {
    let mut out = String::new();
    for level in levels {
        let line = level
            .iter()
            .map(|&n| label(graph, n))
            .collect::<Vec<_>>()
            .join(",");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Render cycles as `a -> b -> a` and dangling edges as `a depends on b`,
/// one per line.
pub fn render_diagnosis<I: Display>(graph: &Graph<I>, diagnosis: &Diagnosis) -> String {
    let mut out = String::new();

    for cycle in &diagnosis.cycles {
        let mut path: Vec<String> = cycle.iter().map(|&n| label(graph, n)).collect();
        if let Some(&first) = cycle.first() {
            path.push(label(graph, first));
        }
        out.push_str("cycle: ");
        out.push_str(&path.join(" -> "));
        out.push('\n');
    }

    for &(node, dep) in &diagnosis.dangling {
        out.push_str(&format!("{} depends on {}", label(graph, node), label(graph, dep)));
        if graph.contains(dep) {
            out.push_str(" (not in the leveled set)");
        }
        out.push('\n');
    }

    out
}

fn label<I: Display>(graph: &Graph<I>, node: NodeRef) -> String {
    match graph.node(node) {
        Some(n) => n.id().to_string(),
        None => format!("<missing {node}>"),
    }
}
