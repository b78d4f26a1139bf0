//! treedump - writes an indented directory tree, with empty-file markers, to a report file

pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{Report, ReportConfig, ReportGenerator, TextOutput};
pub use tree::{EntryStatus, RenderSummary, RendererConfig, TreeOutput, TreeRenderer, TreeSymbols};
