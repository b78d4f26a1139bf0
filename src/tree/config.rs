//! Configuration types for the tree renderer

/// Entry names skipped at every depth.
pub const DEFAULT_EXCLUDED_NAMES: &[&str] = &[".git", ".idea", "out", "build"];

/// Glob patterns skipped at every depth.
pub const DEFAULT_EXCLUDED_PATTERNS: &[&str] = &["*.class", "*.iml"];

/// Box-drawing pieces used to build tree lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeSymbols {
    /// Connector for every entry except the last at its level.
    pub branch: &'static str,
    /// Connector for the last entry at its level.
    pub last: &'static str,
    /// Prefix extension below a non-last directory.
    pub pipe: &'static str,
    /// Prefix extension below the last directory.
    pub blank: &'static str,
}

impl TreeSymbols {
    pub const UNICODE: TreeSymbols = TreeSymbols {
        branch: "├── ",
        last: "└── ",
        pipe: "│   ",
        blank: "    ",
    };

    pub fn connector(&self, is_last: bool) -> &'static str {
        if is_last { self.last } else { self.branch }
    }

    /// Calculate the prefix for the children of an entry.
    pub fn child_prefix(&self, current_prefix: &str, is_last: bool) -> String {
        let extension = if is_last { self.blank } else { self.pipe };
        format!("{}{}", current_prefix, extension)
    }
}

impl Default for TreeSymbols {
    fn default() -> Self {
        Self::UNICODE
    }
}

/// Configuration for tree rendering behavior.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Exact entry names to skip.
    pub excluded_names: Vec<String>,
    /// Glob patterns matched against entry names.
    pub excluded_patterns: Vec<String>,
    pub symbols: TreeSymbols,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            excluded_names: DEFAULT_EXCLUDED_NAMES.iter().map(|s| s.to_string()).collect(),
            excluded_patterns: DEFAULT_EXCLUDED_PATTERNS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            symbols: TreeSymbols::UNICODE,
        }
    }
}
