//! Report location configuration

use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT_DIR: &str = "docs";
const DEFAULT_FILE_NAME: &str = "project_tree.txt";

/// Where the report is written, relative to the traversal root.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub file_name: String,
}

impl ReportConfig {
    pub fn output_dir_in(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir)
    }

    pub fn output_path_in(&self, root: &Path) -> PathBuf {
        self.output_dir_in(root).join(&self.file_name)
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}
