//! Report file generation
//!
//! Creates the output directory, writes the timestamp header and root line,
//! then streams the rendered tree into the report file.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Component, Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::{Error, Result};
use crate::tree::{RenderSummary, RendererConfig, TreeOutput, TreeRenderer};

use super::config::ReportConfig;
use super::text::TextOutput;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A finished report.
#[derive(Debug, Clone)]
pub struct Report {
    pub output_path: PathBuf,
    pub summary: RenderSummary,
}

pub struct ReportGenerator {
    renderer: TreeRenderer,
    config: ReportConfig,
}

impl ReportGenerator {
    pub fn new(renderer_config: &RendererConfig, config: ReportConfig) -> Self {
        Self {
            renderer: TreeRenderer::new(renderer_config),
            config,
        }
    }

    /// Write the report for `root`, stamped with the current local time.
    pub fn generate(&self, root: &Path) -> Result<Report> {
        self.generate_at(root, Local::now())
    }

    /// Write the report for `root` with an explicit generation time.
    ///
    /// The output file is truncated before traversal starts, so it shows up in
    /// its own listing. A listing failure leaves a partial report behind.
    pub fn generate_at(&self, root: &Path, generated: DateTime<Local>) -> Result<Report> {
        check_root(root)?;

        let output_dir = self.config.output_dir_in(root);
        fs::create_dir_all(&output_dir).map_err(|source| Error::CreateOutput {
            path: output_dir.clone(),
            source,
        })?;

        let output_path = self.config.output_path_in(root);
        let file = File::create(&output_path).map_err(|source| Error::CreateOutput {
            path: output_path.clone(),
            source,
        })?;

        let mut output = TextOutput::new(BufWriter::new(file), self.renderer.symbols());
        write_header(output.get_mut(), &generated)?;
        output.output_root(&root_display_name(root))?;

        let summary = self.renderer.render(root, &mut output)?;
        output.get_mut().flush()?;

        tracing::info!(
            path = %output_path.display(),
            directories = summary.directories,
            files = summary.files,
            unknown = summary.unknown,
            "report written"
        );

        Ok(Report {
            output_path,
            summary,
        })
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(&RendererConfig::default(), ReportConfig::default())
    }
}

/// Reject a missing or non-directory root before anything is created under it.
fn check_root(root: &Path) -> Result<()> {
    let list_err = |source: io::Error| Error::ListDir {
        path: root.to_path_buf(),
        source,
    };
    let meta = fs::metadata(root).map_err(list_err)?;
    if !meta.is_dir() {
        return Err(list_err(io::Error::new(
            io::ErrorKind::NotADirectory,
            "not a directory",
        )));
    }
    Ok(())
}

/// Write the `Generated: ...` line followed by a blank line.
pub fn write_header<W: Write>(writer: &mut W, generated: &DateTime<Local>) -> io::Result<()> {
    writeln!(writer, "Generated: {} (local)", generated.format(TIMESTAMP_FORMAT))?;
    writeln!(writer)
}

/// Name shown on the root line: the last component of the absolute,
/// lexically normalized root path. Empty for the filesystem root.
pub fn root_display_name(root: &Path) -> String {
    let absolute = std::path::absolute(root).unwrap_or_else(|_| root.to_path_buf());

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }

    normalized
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
