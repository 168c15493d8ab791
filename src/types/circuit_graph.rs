//! Derived directed multigraph of one circuit.

use indexmap::IndexMap;
use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};

use super::NodeKind;

/// A node of the derived graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitNode {
  pub id: String,
  /// `None` for nodes only referenced by a wire and never declared.
  pub kind: Option<NodeKind>,
}

impl CircuitNode {
  pub fn type_label(&self) -> Option<&str> {
    self.kind.as_ref().map(NodeKind::label)
  }
}

/// A directed edge; `port` is the sink port name (`sink[1]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wire {
  pub port: String,
}

/// Directed multigraph of one circuit, keyed by node identifier.
///
/// Node and wire iteration follow insertion order, also after pruning.
#[derive(Debug, Clone)]
pub struct CircuitGraph {
  name: String,
  graph: StableDiGraph<CircuitNode, Wire>,
  index: IndexMap<String, NodeIndex>,
}

impl CircuitGraph {
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      graph: StableDiGraph::new(),
      index: IndexMap::new(),
    }
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Adds a declared node, or sets the type of an existing one.
  pub fn add_node(&mut self, id: &str, kind: NodeKind) -> NodeIndex {
    let ix = self.ensure_node(id);
    self.graph[ix].kind = Some(kind);
    ix
  }

  /// Returns the node for `id`, creating an untyped one if absent.
  pub fn ensure_node(&mut self, id: &str) -> NodeIndex {
    if let Some(&ix) = self.index.get(id) {
      return ix;
    }
    let ix = self.graph.add_node(CircuitNode {
      id: id.to_string(),
      kind: None,
    });
    self.index.insert(id.to_string(), ix);
    ix
  }

  /// Adds a wire `source -> sink`. Parallel wires are kept.
  pub fn add_wire(&mut self, source: &str, sink: &str, port: impl Into<String>) {
    let a = self.ensure_node(source);
    let b = self.ensure_node(sink);
    self.graph.add_edge(a, b, Wire { port: port.into() });
  }

  pub fn contains_node(&self, id: &str) -> bool {
    self.index.contains_key(id)
  }

  pub fn node(&self, id: &str) -> Option<&CircuitNode> {
    self.index.get(id).map(|&ix| &self.graph[ix])
  }

  pub fn node_count(&self) -> usize {
    self.graph.node_count()
  }

  pub fn wire_count(&self) -> usize {
    self.graph.edge_count()
  }

  pub fn is_empty(&self) -> bool {
    self.graph.node_count() == 0
  }

  /// In-degree plus out-degree. A self-loop counts twice.
  pub fn degree(&self, id: &str) -> Option<usize> {
    self.index.get(id).map(|&ix| self.degree_of(ix))
  }

  fn degree_of(&self, ix: NodeIndex) -> usize {
    self.graph.edges_directed(ix, Direction::Incoming).count()
      + self.graph.edges_directed(ix, Direction::Outgoing).count()
  }

  pub fn nodes(&self) -> impl Iterator<Item = &CircuitNode> {
    self.graph.node_indices().map(|ix| &self.graph[ix])
  }

  /// Wires as `(source, sink, wire)` in insertion order.
  pub fn wires(&self) -> impl Iterator<Item = (&CircuitNode, &CircuitNode, &Wire)> {
    self.graph.edge_indices().filter_map(|e| {
      let (a, b) = self.graph.edge_endpoints(e)?;
      Some((&self.graph[a], &self.graph[b], &self.graph[e]))
    })
  }

  /// Removes every node with total degree zero and returns their ids.
  ///
  /// Degrees are measured for all nodes before any removal.
  pub fn prune(&mut self) -> Vec<String> {
    let isolated: Vec<NodeIndex> = self
      .graph
      .node_indices()
      .filter(|&ix| self.degree_of(ix) == 0)
      .collect();
    let mut removed = Vec::with_capacity(isolated.len());
    for ix in isolated {
      if let Some(node) = self.graph.remove_node(ix) {
        self.index.shift_remove(&node.id);
        removed.push(node.id);
      }
    }
    removed
  }
}
