//! Rendering DOT source to files.
//!
//! [`Renderer`] is the seam to the external layout tool. [`GraphvizRenderer`]
//! pipes the DOT source into Graphviz; [`DotSourceRenderer`] only writes the
//! source and needs no Graphviz install.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use clap::ValueEnum;
use tracing::{debug, instrument, warn};

use crate::error::{Result, VisError};

/// Default Graphviz program.
pub const DEFAULT_DOT_PROGRAM: &str = "dot";

/// Extension of kept DOT sources next to rendered images.
pub const SOURCE_EXTENSION: &str = "gv";

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Pdf,
  Svg,
  Png,
  /// DOT source as emitted, no layout.
  Dot,
}

impl OutputFormat {
  pub fn extension(&self) -> &'static str {
    match self {
      OutputFormat::Pdf => "pdf",
      OutputFormat::Svg => "svg",
      OutputFormat::Png => "png",
      OutputFormat::Dot => "dot",
    }
  }
}

impl fmt::Display for OutputFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.extension())
  }
}

/// One circuit handed to a renderer.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
  /// Circuit name, for errors and logs.
  pub circuit: &'a str,
  /// Output file name without extension.
  pub file_stem: &'a str,
  /// DOT source.
  pub dot: &'a str,
}

/// Produces one artifact per request and returns its path.
pub trait Renderer {
  fn render(&self, request: &RenderRequest<'_>) -> Result<PathBuf>;
}

/// Returns true if `program -V` runs successfully.
pub fn is_graphviz_available(program: &str) -> bool {
  Command::new(program)
    .arg("-V")
    .stdout(Stdio::null())
    .stderr(Stdio::null())
    .status()
    .map(|s| s.success())
    .unwrap_or(false)
}

fn ensure_dir(dir: &Path) -> Result<()> {
  std::fs::create_dir_all(dir).map_err(|e| VisError::write_output(dir, e))
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
  std::fs::write(path, contents).map_err(|e| VisError::write_output(path, e))
}

/// Lays out and renders through the Graphviz command line.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
  /// Graphviz program (`dot` by default; any layout engine taking `-T`/`-o`).
  pub program: String,
  pub format: OutputFormat,
  pub output_dir: PathBuf,
  /// Also write `<stem>.gv` next to the image.
  pub keep_source: bool,
}

impl GraphvizRenderer {
  pub fn new(output_dir: impl Into<PathBuf>, format: OutputFormat) -> Self {
    Self {
      program: DEFAULT_DOT_PROGRAM.to_string(),
      format,
      output_dir: output_dir.into(),
      keep_source: false,
    }
  }

  pub fn with_program(mut self, program: impl Into<String>) -> Self {
    self.program = program.into();
    self
  }

  pub fn with_keep_source(mut self, keep_source: bool) -> Self {
    self.keep_source = keep_source;
    self
  }

  fn artifact_path(&self, stem: &str) -> PathBuf {
    self
      .output_dir
      .join(format!("{}.{}", stem, self.format.extension()))
  }
}

impl Renderer for GraphvizRenderer {
  #[instrument(level = "trace", skip(self, request), fields(circuit = request.circuit))]
  fn render(&self, request: &RenderRequest<'_>) -> Result<PathBuf> {
    ensure_dir(&self.output_dir)?;
    if self.keep_source {
      let source_path = self
        .output_dir
        .join(format!("{}.{}", request.file_stem, SOURCE_EXTENSION));
      write_file(&source_path, request.dot)?;
    }

    let out_path = self.artifact_path(request.file_stem);
    debug!(program = %self.program, format = %self.format, path = %out_path.display(), "running graphviz");
    let mut child = Command::new(&self.program)
      .arg(format!("-T{}", self.format.extension()))
      .arg("-o")
      .arg(&out_path)
      .stdin(Stdio::piped())
      .stdout(Stdio::null())
      .stderr(Stdio::piped())
      .spawn()
      .map_err(|source| VisError::GraphvizUnavailable {
        program: self.program.clone(),
        source,
      })?;

    // stdin is fed from its own thread while stderr is drained here, so neither pipe can fill up
    // and block both processes.
    let writer = child.stdin.take().map(|mut stdin| {
      let dot = request.dot.to_string();
      thread::spawn(move || stdin.write_all(dot.as_bytes()))
    });
    let output = child
      .wait_with_output()
      .map_err(|source| VisError::GraphvizUnavailable {
        program: self.program.clone(),
        source,
      })?;
    let write_result = match writer {
      Some(handle) => handle
        .join()
        .unwrap_or_else(|_| Err(std::io::Error::other("stdin writer panicked"))),
      None => Ok(()),
    };

    if !output.status.success() {
      let mut stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
      if let Err(e) = write_result {
        if !stderr.is_empty() {
          stderr.push_str("; ");
        }
        stderr.push_str(&format!("writing DOT to stdin failed: {}", e));
      }
      return Err(VisError::RenderFailed {
        circuit: request.circuit.to_string(),
        status: output.status.to_string(),
        stderr,
      });
    }
    if let Err(e) = write_result {
      warn!(circuit = request.circuit, error = %e, "layout program did not read all of its input");
    }
    Ok(out_path)
  }
}

/// Writes the DOT source as `<stem>.dot` without running a layout tool.
#[derive(Debug, Clone)]
pub struct DotSourceRenderer {
  pub output_dir: PathBuf,
}

impl DotSourceRenderer {
  pub fn new(output_dir: impl Into<PathBuf>) -> Self {
    Self {
      output_dir: output_dir.into(),
    }
  }
}

impl Renderer for DotSourceRenderer {
  #[instrument(level = "trace", skip(self, request), fields(circuit = request.circuit))]
  fn render(&self, request: &RenderRequest<'_>) -> Result<PathBuf> {
    ensure_dir(&self.output_dir)?;
    let path = self.output_dir.join(format!(
      "{}.{}",
      request.file_stem,
      OutputFormat::Dot.extension()
    ));
    write_file(&path, request.dot)?;
    Ok(path)
  }
}
