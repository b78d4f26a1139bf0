//! Entry exclusion for tree rendering

use glob::Pattern;

use super::config::RendererConfig;

/// Decides which directory entries are left out of the tree.
/// Patterns are compiled once; invalid ones never match.
#[derive(Debug, Clone)]
pub struct EntryFilter {
    names: Vec<String>,
    patterns: Vec<Pattern>,
}

impl EntryFilter {
    pub fn new(config: &RendererConfig) -> Self {
        let patterns = config
            .excluded_patterns
            .iter()
            .filter_map(|p| match Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    tracing::warn!(pattern = %p, error = %e, "ignoring invalid exclusion pattern");
                    None
                }
            })
            .collect();

        Self {
            names: config.excluded_names.clone(),
            patterns,
        }
    }

    /// Check if an entry with this name should be skipped.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name) || self.patterns.iter().any(|p| p.matches(name))
    }
}

impl Default for EntryFilter {
    fn default() -> Self {
        Self::new(&RendererConfig::default())
    }
}
