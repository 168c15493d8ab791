//! Node type of a circuit node (`type_` in the input document).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Public interface side of a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
  Input,
  Output,
}

impl fmt::Display for BoundaryKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      BoundaryKind::Input => write!(f, "Input"),
      BoundaryKind::Output => write!(f, "Output"),
    }
  }
}

/// Resolved node type.
///
/// On the wire this is `"Input"`, `"Output"` or `{"Internal": "<gate>"}`.
/// Any other shape fails deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "TypeTag", into = "TypeTag")]
pub enum NodeKind {
  /// Input or output of the enclosing gate.
  Boundary(BoundaryKind),
  /// Instance of another gate; holds that gate's type name.
  Internal(String),
}

impl NodeKind {
  pub fn input() -> Self {
    NodeKind::Boundary(BoundaryKind::Input)
  }

  pub fn output() -> Self {
    NodeKind::Boundary(BoundaryKind::Output)
  }

  pub fn internal(label: impl Into<String>) -> Self {
    NodeKind::Internal(label.into())
  }

  /// Display label: `Input`, `Output`, or the internal gate name.
  pub fn label(&self) -> &str {
    match self {
      NodeKind::Boundary(BoundaryKind::Input) => "Input",
      NodeKind::Boundary(BoundaryKind::Output) => "Output",
      NodeKind::Internal(label) => label,
    }
  }

  pub fn is_boundary(&self) -> bool {
    matches!(self, NodeKind::Boundary(_))
  }
}

impl fmt::Display for NodeKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// Externally tagged wire form of [`NodeKind`].
#[derive(Serialize, Deserialize)]
enum TypeTag {
  Input,
  Output,
  Internal(String),
}

impl From<TypeTag> for NodeKind {
  fn from(tag: TypeTag) -> Self {
    match tag {
      TypeTag::Input => NodeKind::Boundary(BoundaryKind::Input),
      TypeTag::Output => NodeKind::Boundary(BoundaryKind::Output),
      TypeTag::Internal(label) => NodeKind::Internal(label),
    }
  }
}

impl From<NodeKind> for TypeTag {
  fn from(kind: NodeKind) -> Self {
    match kind {
      NodeKind::Boundary(BoundaryKind::Input) => TypeTag::Input,
      NodeKind::Boundary(BoundaryKind::Output) => TypeTag::Output,
      NodeKind::Internal(label) => TypeTag::Internal(label),
    }
  }
}
