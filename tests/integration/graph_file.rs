// tests/integration/graph_file.rs

use std::collections::BTreeSet;

use buildlevels::config::load_and_validate;
use buildlevels::level_graph_file;
use buildlevels::report::render_levels;
use buildlevels_test_utils::builders::level_ids;
use buildlevels_test_utils::{graph_file, init_tracing};

fn set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_levels_from_toml_file() {
    init_tracing();
    let file = graph_file(
        r#"
[node.app]
after = ["lib", "codegen"]

[node.lib]

[node.codegen]
after = ["lib"]

[node.docs]
"#,
    )
    .unwrap();

    let (graph, levels) = level_graph_file(file.path()).unwrap();

    assert_eq!(
        level_ids(&graph, &levels),
        vec![set(&["docs", "lib"]), set(&["codegen"]), set(&["app"])]
    );
}

#[test]
fn test_rendered_levels_follow_name_order() {
    let file = graph_file(
        r#"
[node.c]
after = ["a", "b"]

[node.b]

[node.a]
"#,
    )
    .unwrap();

    let (graph, levels) = level_graph_file(file.path()).unwrap();
    assert_eq!(render_levels(&graph, &levels), "a,b\nc\n");
}

#[test]
fn test_after_defaults_to_empty() {
    let file = graph_file("[node.only]\n").unwrap();

    let parsed = load_and_validate(file.path()).unwrap();
    assert!(parsed.nodes()["only"].after.is_empty());

    let graph = parsed.to_graph().unwrap();
    assert_eq!(graph.len(), 1);
}
