//! Per-file status markers

use std::fmt;
use std::path::Path;

/// Size-derived marker shown after a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Ok,
    Empty,
    Unknown,
}

impl EntryStatus {
    /// Stat the file (following symlinks). Failures degrade to `Unknown`.
    pub fn probe(path: &Path) -> Self {
        match path.metadata() {
            Ok(meta) => Self::from_size(meta.len()),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "cannot read file size");
                Self::Unknown
            }
        }
    }

    pub fn from_size(size: u64) -> Self {
        if size == 0 { Self::Empty } else { Self::Ok }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Empty => "[EMPTY]",
            Self::Unknown => "[?]",
        }
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
