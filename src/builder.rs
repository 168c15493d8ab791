//! Build the derived multigraph of a circuit.

use tracing::{instrument, warn};

use crate::types::{Circuit, CircuitGraph, Document};

/// Endpoints of a wire not yet in `graph`, each named once even for a self-loop.
pub(crate) fn undeclared_endpoints<'a>(
  graph: &CircuitGraph,
  source: &'a str,
  sink: &'a str,
) -> Vec<&'a str> {
  let mut missing = Vec::with_capacity(2);
  if !graph.contains_node(source) {
    missing.push(source);
  }
  if sink != source && !graph.contains_node(sink) {
    missing.push(sink);
  }
  missing
}

/// Builds the graph of one circuit: every declared node, then every wire of every group.
///
/// Wires naming an undeclared node create it untyped, and a warning is logged.
#[instrument(level = "trace", skip(circuit))]
pub fn build_graph(name: &str, circuit: &Circuit) -> CircuitGraph {
  let mut graph = CircuitGraph::new(name);
  for (id, info) in &circuit.nodes {
    graph.add_node(id, info.type_.clone());
  }
  for wire in circuit.wires() {
    for endpoint in undeclared_endpoints(&graph, &wire.source, wire.sink_node()) {
      warn!(circuit = name, node = endpoint, "wire references undeclared node");
    }
    graph.add_wire(&wire.source, wire.sink_node(), wire.sink_port());
  }
  graph
}

/// Builds and prunes the graph of one circuit.
pub fn build_pruned_graph(name: &str, circuit: &Circuit) -> (CircuitGraph, Vec<String>) {
  let mut graph = build_graph(name, circuit);
  let pruned = graph.prune();
  (graph, pruned)
}

/// Builds and prunes every circuit of the document, in document order.
pub fn build_document_graphs(doc: &Document) -> Vec<CircuitGraph> {
  doc
    .iter()
    .map(|(name, circuit)| build_pruned_graph(name, circuit).0)
    .collect()
}
