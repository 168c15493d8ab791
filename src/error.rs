//! Error type for parsing, building and rendering circuit documents.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`VisError`].
pub type Result<T> = std::result::Result<T, VisError>;

/// Every failure is fatal to the run; there is no per-circuit recovery.
#[derive(Error, Debug)]
pub enum VisError {
  /// Input is not JSON, or does not have the circuit document shape.
  #[error("malformed input: {source}")]
  MalformedInput {
    #[source]
    source: serde_json::Error,
  },

  /// Input file or stdin could not be read.
  #[error("failed to read input '{path}': {source}")]
  ReadInput {
    path: String,
    #[source]
    source: std::io::Error,
  },

  /// The layout program could not be spawned.
  #[error("graphviz program '{program}' could not be started: {source}")]
  GraphvizUnavailable {
    program: String,
    #[source]
    source: std::io::Error,
  },

  /// The layout program ran but exited unsuccessfully.
  #[error("rendering circuit '{circuit}' failed ({status}): {stderr}")]
  RenderFailed {
    circuit: String,
    status: String,
    stderr: String,
  },

  /// An artifact or DOT source file could not be written.
  #[error("failed to write '{}': {source}", .path.display())]
  WriteOutput {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

impl VisError {
  /// True for errors caused by the shape or syntax of the input document.
  pub fn is_malformed_input(&self) -> bool {
    matches!(self, VisError::MalformedInput { .. })
  }

  pub(crate) fn write_output(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
    Self::WriteOutput {
      path: path.into(),
      source,
    }
  }
}

impl From<serde_json::Error> for VisError {
  fn from(source: serde_json::Error) -> Self {
    Self::MalformedInput { source }
  }
}
