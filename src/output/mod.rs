//! Report output
//!
//! - `config` - Report location
//! - `text` - Plain-text `TreeOutput` sink
//! - `report` - Report file generation (header, root line, tree)
//! - `console` - Confirmation line on stdout

mod config;
mod console;
mod report;
mod text;

pub use config::ReportConfig;
pub use console::{print_saved, should_use_color, write_saved};
pub use report::{Report, ReportGenerator, root_display_name, write_header};
pub use text::TextOutput;
