//! # circuit-vis
//!
//! Render JSON circuit descriptions as Graphviz diagrams.
//!
//! ## Pipeline
//!
//! 1. [json_parser]: read the document (file or stdin) into [types::Document].
//! 2. [builder]: build a directed multigraph per circuit and prune
//!    nodes with no wires.
//! 3. [dot_writer]: emit DOT with an id/type table label per node.
//! 4. [render]: hand the DOT to a [render::Renderer] (Graphviz, or source only).
//!
//! [runner::run_document] drives the steps for every circuit in document order.

pub mod builder;
pub mod dot_writer;
pub mod error;
pub mod json_parser;
#[cfg(test)]
mod json_parser_test;
pub mod render;
pub mod runner;
pub mod types;

pub use builder::{build_document_graphs, build_graph};
pub use error::{Result, VisError};
pub use json_parser::parse;
pub use render::{DotSourceRenderer, GraphvizRenderer, OutputFormat, Renderer};
pub use runner::{ArtifactNaming, RenderedArtifact, RunOptions, run_document};
pub use types::{CircuitGraph, Document, NodeKind};
