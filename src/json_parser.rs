//! Reading and deserializing circuit documents.

use std::io::Read;
use std::path::Path;

use tracing::{debug, instrument};

use crate::error::{Result, VisError};
use crate::types::Document;

/// Display name used for stdin in errors and logs.
pub const STDIN_NAME: &str = "<stdin>";

/// Parses JSON text into a [`Document`].
///
/// Syntax errors and shape mismatches both surface as [`VisError::MalformedInput`].
#[instrument(level = "trace", skip(source), fields(len = source.len()))]
pub fn parse(source: &str) -> Result<Document> {
  let doc: Document = serde_json::from_str(source)?;
  debug!(circuits = doc.len(), "parsed document");
  Ok(doc)
}

/// Parses a document from any reader.
pub fn parse_reader(reader: impl Read) -> Result<Document> {
  let doc: Document = serde_json::from_reader(reader)?;
  Ok(doc)
}

/// Reads the whole input: the file at `path`, or stdin when `path` is `None` or `-`.
#[instrument(level = "trace")]
pub fn read_input(path: Option<&Path>) -> Result<String> {
  match path {
    Some(p) if p != Path::new("-") => {
      std::fs::read_to_string(p).map_err(|source| VisError::ReadInput {
        path: p.display().to_string(),
        source,
      })
    }
    _ => {
      let mut buf = String::new();
      std::io::stdin()
        .lock()
        .read_to_string(&mut buf)
        .map_err(|source| VisError::ReadInput {
          path: STDIN_NAME.to_string(),
          source,
        })?;
      Ok(buf)
    }
  }
}

/// Reads and parses the input in one step.
pub fn load_document(path: Option<&Path>) -> Result<Document> {
  let source = read_input(path)?;
  parse(&source)
}
