//! CLI: render every circuit of a JSON document to an image.
//!
//! Reads the document from the given file, or from stdin when no path (or `-`) is given,
//! and writes one artifact per circuit into the output directory.
//!
//! Usage: `render_circuits [OPTIONS] [path-to-json]`
//! Example: `render_circuits -T svg -o diagrams gates.json`
//!
//! Set RUST_LOG=circuit_vis=debug for per-circuit logging.

use std::env;
use std::path::PathBuf;
use std::process;

use circuit_vis::dot_writer::{DotOptions, to_dot};
use circuit_vis::render::DEFAULT_DOT_PROGRAM;
use circuit_vis::{
  ArtifactNaming, DotSourceRenderer, GraphvizRenderer, OutputFormat, Renderer, RunOptions,
  build_document_graphs, json_parser, run_document,
};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render circuits from a JSON document with Graphviz.
#[derive(Parser, Debug)]
#[command(name = "render_circuits")]
#[command(
  after_help = r#"Environment variables (override --dot-bin and --output-dir when set):
  CIRCUIT_VIS_DOT          Graphviz program used for layout (default: dot).
  CIRCUIT_VIS_OUTPUT_DIR   Directory for rendered files (default: current directory).

Examples:
  render_circuits gates.json
  cat gates.json | render_circuits -T svg --name-by index"#
)]
struct Args {
  /// Path to the JSON document; stdin when omitted or `-`
  #[arg(value_name = "path-to-json")]
  input: Option<PathBuf>,

  /// Directory for rendered files. Overridden by CIRCUIT_VIS_OUTPUT_DIR if set.
  #[arg(short, long, value_name = "DIR", default_value = ".")]
  output_dir: PathBuf,

  /// Output format; `dot` writes the DOT source without running Graphviz
  #[arg(short = 'T', long, value_enum, default_value_t = OutputFormat::Pdf)]
  format: OutputFormat,

  /// Graphviz program. Overridden by CIRCUIT_VIS_DOT if set.
  #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_DOT_PROGRAM)]
  dot_bin: String,

  /// Keep `<name>.gv` source files next to rendered images
  #[arg(long)]
  keep_source: bool,

  /// Name artifacts by circuit key or by position in the document
  #[arg(long, value_enum, default_value_t = ArtifactNaming::Key)]
  name_by: ArtifactNaming,

  /// Do not label edges with their sink port
  #[arg(long)]
  no_edge_labels: bool,

  /// Print the DOT of every circuit to stdout instead of rendering
  #[arg(long)]
  print_dot: bool,
}

/// Value of `key`, unless it is unset or empty.
fn env_override(key: &str) -> Option<String> {
  env::var(key).ok().filter(|v| !v.is_empty())
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();

  let args = Args::parse();

  // Non-empty env vars override flags.
  let dot_bin = env_override("CIRCUIT_VIS_DOT").unwrap_or_else(|| args.dot_bin.clone());
  let output_dir = env_override("CIRCUIT_VIS_OUTPUT_DIR")
    .map(PathBuf::from)
    .unwrap_or_else(|| args.output_dir.clone());
  info!(dot_bin = %dot_bin, output_dir = %output_dir.display(), format = %args.format, "options (env or flags)");

  let doc = match json_parser::load_document(args.input.as_deref()) {
    Ok(d) => d,
    Err(e) => {
      eprintln!("Error: {}", e);
      process::exit(1);
    }
  };

  let options = RunOptions {
    naming: args.name_by,
    dot: DotOptions {
      edge_labels: !args.no_edge_labels,
    },
  };

  if args.print_dot {
    for graph in build_document_graphs(&doc) {
      print!("{}", to_dot(&graph, &options.dot));
    }
    return;
  }

  let renderer: Box<dyn Renderer> = match args.format {
    OutputFormat::Dot => Box::new(DotSourceRenderer::new(&output_dir)),
    format => Box::new(
      GraphvizRenderer::new(&output_dir, format)
        .with_program(dot_bin)
        .with_keep_source(args.keep_source),
    ),
  };

  match run_document(&doc, renderer.as_ref(), &options) {
    Ok(artifacts) => {
      for a in &artifacts {
        println!("{}", a.path.display());
      }
    }
    Err(e) => {
      eprintln!("Error: {}", e);
      process::exit(1);
    }
  }
}
