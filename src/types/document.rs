//! Input document: named circuits, each a set of typed nodes and wire groups.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::NodeKind;

/// Top-level input: circuit name to circuit, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
  pub circuits: IndexMap<String, Circuit>,
}

impl Document {
  pub fn len(&self) -> usize {
    self.circuits.len()
  }

  pub fn is_empty(&self) -> bool {
    self.circuits.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &Circuit)> {
    self.circuits.iter().map(|(k, v)| (k.as_str(), v))
  }
}

/// One circuit (gate definition).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
  pub nodes: IndexMap<String, NodeInfo>,
  /// Wire groups; the group key does not take part in graph construction.
  pub edges: IndexMap<String, Vec<EdgeInfo>>,
}

impl Circuit {
  /// All wires of all groups, in input order.
  pub fn wires(&self) -> impl Iterator<Item = &EdgeInfo> {
    self.edges.values().flatten()
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
  pub type_: NodeKind,
}

/// A wire from `source` to `sink.0`, entering on the port named `sink.1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeInfo {
  pub source: String,
  pub sink: (String, String),
}

impl EdgeInfo {
  pub fn new(
    source: impl Into<String>,
    sink_node: impl Into<String>,
    sink_port: impl Into<String>,
  ) -> Self {
    Self {
      source: source.into(),
      sink: (sink_node.into(), sink_port.into()),
    }
  }

  pub fn sink_node(&self) -> &str {
    &self.sink.0
  }

  pub fn sink_port(&self) -> &str {
    &self.sink.1
  }
}
