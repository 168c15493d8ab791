//! Data model: the parsed input document and the graph derived from each circuit.

mod circuit_graph;
#[cfg(test)]
mod circuit_graph_test;
mod document;
mod node_kind;

pub use circuit_graph::{CircuitGraph, CircuitNode, Wire};
pub use document::{Circuit, Document, EdgeInfo, NodeInfo};
pub use node_kind::{BoundaryKind, NodeKind};
