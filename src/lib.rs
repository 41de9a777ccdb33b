// src/lib.rs

pub mod cli;
pub mod config;
pub mod diagnose;
pub mod errors;
pub mod graph;
pub mod level;
pub mod logging;
pub mod report;

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::{GraphFile, load_and_validate};
use crate::diagnose::diagnose;
use crate::graph::Graph;
use crate::level::{LevelError, Levels, compute_levels};
use crate::report::{render_diagnosis, render_levels};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - graph file loading and validation
/// - leveling
/// - failure diagnosis
/// - printing the levels to stdout
pub fn run(args: CliArgs) -> Result<()> {
    let graph_file = load_and_validate(&args.graph)?;
    info!(
        path = %args.graph.display(),
        nodes = graph_file.nodes().len(),
        "loaded graph file"
    );

    if args.dry_run {
        print_dry_run(&graph_file);
        return Ok(());
    }

    let graph = graph_file.to_graph()?;
    let levels = match compute_levels(&graph) {
        Ok(levels) => levels,
        Err(err) => {
            report_failure(&graph, &err);
            return Err(err.into());
        }
    };

    info!(
        levels = levels.len(),
        nodes = levels.node_count(),
        "computed build levels"
    );
    for (idx, level) in levels.iter().enumerate() {
        debug!(level = idx, size = level.len(), "level contents");
    }

    print!("{}", render_levels(&graph, &levels));
    Ok(())
}

/// Load, validate and level a graph file in one step.
pub fn level_graph_file(path: impl AsRef<Path>) -> errors::Result<(Graph<String>, Levels)> {
    let graph = load_and_validate(path)?.to_graph()?;
    let levels = compute_levels(&graph)?;
    Ok((graph, levels))
}

/// Explain an unsatisfiable graph on stderr.
fn report_failure(graph: &Graph<String>, err: &LevelError) {
    let LevelError::UnsatisfiableGraph {
        assigned_levels,
        stuck,
    } = err
    else {
        return;
    };

    let diagnosis = diagnose(graph, &graph.node_set(), stuck);
    warn!(
        assigned_levels,
        stuck = stuck.len(),
        cycles = diagnosis.cycles.len(),
        dangling = diagnosis.dangling.len(),
        "graph could not be leveled"
    );
    eprint!("{}", render_diagnosis(graph, &diagnosis));
}

/// Simple dry-run output: print nodes and their dependencies.
fn print_dry_run(graph_file: &GraphFile) {
    println!("buildlevels dry-run");
    println!();

    println!("nodes ({}):", graph_file.nodes().len());
    for (name, node) in graph_file.nodes() {
        println!("  - {name}");
        if !node.after.is_empty() {
            println!("      after: {:?}", node.after);
        }
    }

    debug!("dry-run complete (no leveling)");
}
