//! Directory tree rendering
//!
//! `TreeRenderer` lists each directory (sorted, filtered) and hands one line per
//! entry to a `TreeOutput` sink, descending into subdirectories depth-first.

mod config;
mod filter;
mod renderer;
mod status;

pub use config::{DEFAULT_EXCLUDED_NAMES, DEFAULT_EXCLUDED_PATTERNS, RendererConfig, TreeSymbols};
pub use filter::EntryFilter;
pub use renderer::{RenderSummary, TreeOutput, TreeRenderer};
pub use status::EntryStatus;
