//! Emit a [`CircuitGraph`] as Graphviz DOT source.
//!
//! Typed nodes get an HTML-like two-row table label: the node id on top and
//! the bold type label below. Untyped nodes fall back to Graphviz's default
//! label (the id).

use std::fmt::Write;

use crate::types::{CircuitGraph, CircuitNode};

/// Options for DOT emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DotOptions {
  /// Label each edge with its sink port name.
  pub edge_labels: bool,
}

impl Default for DotOptions {
  fn default() -> Self {
    Self { edge_labels: true }
  }
}

/// Renders the graph as a `digraph` named after the circuit.
pub fn to_dot(graph: &CircuitGraph, options: &DotOptions) -> String {
  let mut out = String::new();
  // Writing into a String cannot fail.
  let _ = writeln!(out, "digraph {} {{", quote_id(graph.name()));
  for node in graph.nodes() {
    let _ = writeln!(out, "  {};", node_stmt(node));
  }
  for (source, sink, wire) in graph.wires() {
    let _ = write!(out, "  {} -> {}", quote_id(&source.id), quote_id(&sink.id));
    if options.edge_labels {
      let _ = write!(out, " [label={}]", quote_id(&wire.port));
    }
    out.push_str(";\n");
  }
  out.push_str("}\n");
  out
}

fn node_stmt(node: &CircuitNode) -> String {
  match node.type_label() {
    Some(type_label) => format!(
      "{} [label={}]",
      quote_id(&node.id),
      table_label(&node.id, type_label)
    ),
    None => quote_id(&node.id),
  }
}

/// HTML-like label: id row over bold type row.
pub(crate) fn table_label(id: &str, type_label: &str) -> String {
  format!(
    "<<TABLE><TR><TD>{}</TD></TR><TR><TD><B>{}</B></TD></TR></TABLE>>",
    escape_html(id),
    escape_html(type_label)
  )
}

/// Quotes a DOT identifier, escaping backslashes, quotes and newlines.
pub(crate) fn quote_id(s: &str) -> String {
  let mut out = String::with_capacity(s.len() + 2);
  out.push('"');
  for c in s.chars() {
    match c {
      '\\' => out.push_str("\\\\"),
      '"' => out.push_str("\\\""),
      '\n' => out.push_str("\\n"),
      _ => out.push(c),
    }
  }
  out.push('"');
  out
}

/// Escapes text for use inside an HTML-like label.
pub(crate) fn escape_html(s: &str) -> String {
  s.replace('&', "&amp;")
    .replace('<', "&lt;")
    .replace('>', "&gt;")
    .replace('"', "&quot;")
}
