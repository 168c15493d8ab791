//! Tests for `CircuitGraph`.

use super::{CircuitGraph, NodeKind};

fn graph_ab() -> CircuitGraph {
  let mut g = CircuitGraph::new("C1");
  g.add_node("a", NodeKind::input());
  g.add_node("b", NodeKind::output());
  g
}

#[test]
fn new_graph_is_empty() {
  let g = CircuitGraph::new("empty");
  assert_eq!(g.name(), "empty");
  assert!(g.is_empty());
  assert_eq!(g.wire_count(), 0);
}

#[test]
fn parallel_wires_are_kept() {
  let mut g = graph_ab();
  g.add_wire("a", "b", "x");
  g.add_wire("a", "b", "y");
  assert_eq!(g.wire_count(), 2);
  assert_eq!(g.degree("a"), Some(2));
  assert_eq!(g.degree("b"), Some(2));
}

#[test]
fn wire_to_undeclared_node_creates_untyped_node() {
  let mut g = graph_ab();
  g.add_wire("a", "ghost", "p");
  let ghost = g.node("ghost").unwrap();
  assert!(ghost.kind.is_none());
  assert_eq!(ghost.type_label(), None);
  assert_eq!(g.node_count(), 3);
}

#[test]
fn add_node_sets_kind_of_existing() {
  let mut g = CircuitGraph::new("c");
  g.add_wire("a", "b", "p");
  g.add_node("a", NodeKind::internal("xor"));
  assert_eq!(g.node("a").unwrap().type_label(), Some("xor"));
  assert_eq!(g.node_count(), 2);
}

#[test]
fn self_loop_counts_twice() {
  let mut g = CircuitGraph::new("loop");
  g.add_node("n", NodeKind::internal("nand"));
  g.add_wire("n", "n", "a");
  assert_eq!(g.degree("n"), Some(2));
}

#[test]
fn degree_of_missing_node_is_none() {
  assert_eq!(graph_ab().degree("zzz"), None);
}

#[test]
fn prune_removes_only_isolated_nodes() {
  let mut g = graph_ab();
  g.add_node("c", NodeKind::internal("AND"));
  g.add_wire("a", "b", "w1");
  let removed = g.prune();
  assert_eq!(removed, vec!["c".to_string()]);
  assert!(g.contains_node("a"));
  assert!(g.contains_node("b"));
  assert!(!g.contains_node("c"));
  assert_eq!(g.wire_count(), 1);
}

#[test]
fn prune_without_wires_empties_graph() {
  let mut g = graph_ab();
  let removed = g.prune();
  assert_eq!(removed, vec!["a".to_string(), "b".to_string()]);
  assert!(g.is_empty());
}

#[test]
fn iteration_follows_insertion_order_after_prune() {
  let mut g = CircuitGraph::new("order");
  for id in ["d", "lonely", "c", "b", "a"] {
    g.add_node(id, NodeKind::internal("nand"));
  }
  g.add_wire("c", "a", "p");
  g.add_wire("d", "b", "q");
  g.add_wire("d", "c", "r");
  g.prune();
  let ids: Vec<&str> = g.nodes().map(|n| n.id.as_str()).collect();
  assert_eq!(ids, vec!["d", "c", "b", "a"]);
  let ports: Vec<&str> = g.wires().map(|(_, _, w)| w.port.as_str()).collect();
  assert_eq!(ports, vec!["p", "q", "r"]);
}

#[test]
fn wires_report_endpoints() {
  let mut g = graph_ab();
  g.add_wire("a", "b", "w1");
  let (src, dst, w) = g.wires().next().unwrap();
  assert_eq!(src.id, "a");
  assert_eq!(dst.id, "b");
  assert_eq!(w.port, "w1");
}
