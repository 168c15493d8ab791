//! Document pipeline: build, prune and render each circuit in order.

use std::collections::HashSet;
use std::path::PathBuf;

use clap::ValueEnum;
use tracing::{info, instrument, warn};

use crate::builder::build_pruned_graph;
use crate::dot_writer::{DotOptions, to_dot};
use crate::error::Result;
use crate::json_parser;
use crate::render::{RenderRequest, Renderer};
use crate::types::Document;

/// How artifact files are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ArtifactNaming {
  /// The circuit's key in the document.
  #[default]
  Key,
  /// The circuit's 0-based position in the document.
  Index,
}

/// Options for [run_document].
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
  pub naming: ArtifactNaming,
  pub dot: DotOptions,
}

/// Outcome of rendering one circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
  pub circuit: String,
  pub path: PathBuf,
  /// Nodes left after pruning.
  pub nodes: usize,
  pub wires: usize,
  /// Ids of the nodes removed by pruning.
  pub pruned: Vec<String>,
}

/// File name (without extension) for the circuit at `position`.
///
/// Path separators and NUL in keys are replaced so every artifact lands in the output directory.
pub fn file_stem(name: &str, position: usize, naming: ArtifactNaming) -> String {
  match naming {
    ArtifactNaming::Index => position.to_string(),
    ArtifactNaming::Key => {
      let stem: String = name
        .chars()
        .map(|c| match c {
          '/' | '\\' | '\0' => '_',
          c => c,
        })
        .collect();
      if stem.is_empty() { "_".to_string() } else { stem }
    }
  }
}

/// Returns `stem`, or `stem-1`, `stem-2`, ... if it is already taken.
///
/// Stems are compared case-insensitively so distinct artifacts stay distinct on case-insensitive
/// filesystems.
fn unique_stem(stem: String, used: &mut HashSet<String>) -> String {
  if used.insert(stem.to_lowercase()) {
    return stem;
  }
  let mut n = 1;
  loop {
    let candidate = format!("{}-{}", stem, n);
    if used.insert(candidate.to_lowercase()) {
      return candidate;
    }
    n += 1;
  }
}

/// Builds, prunes and renders every circuit; one artifact per circuit, in document order.
///
/// Keys that map to the same file name get a numeric suffix. Stops at the first error.
#[instrument(level = "trace", skip(doc, renderer))]
pub fn run_document(
  doc: &Document,
  renderer: &dyn Renderer,
  options: &RunOptions,
) -> Result<Vec<RenderedArtifact>> {
  let mut artifacts = Vec::with_capacity(doc.len());
  let mut used_stems = HashSet::with_capacity(doc.len());
  for (position, (name, circuit)) in doc.iter().enumerate() {
    let (graph, pruned) = build_pruned_graph(name, circuit);
    let dot = to_dot(&graph, &options.dot);
    let base = file_stem(name, position, options.naming);
    let stem = unique_stem(base.clone(), &mut used_stems);
    if stem != base {
      warn!(circuit = name, stem = %stem, "artifact name already taken; renamed");
    }
    let path = renderer.render(&RenderRequest {
      circuit: name,
      file_stem: &stem,
      dot: &dot,
    })?;
    info!(
      circuit = name,
      nodes = graph.node_count(),
      edges = graph.wire_count(),
      pruned = pruned.len(),
      path = %path.display(),
      "rendered circuit"
    );
    artifacts.push(RenderedArtifact {
      circuit: name.to_string(),
      path,
      nodes: graph.node_count(),
      wires: graph.wire_count(),
      pruned,
    });
  }
  info!(circuits = artifacts.len(), "run complete");
  Ok(artifacts)
}

/// Parses `source` and runs it. Malformed input fails before anything is rendered.
pub fn run_source(
  source: &str,
  renderer: &dyn Renderer,
  options: &RunOptions,
) -> Result<Vec<RenderedArtifact>> {
  let doc = json_parser::parse(source)?;
  run_document(&doc, renderer, options)
}
