//! TreeRenderer - depth-first, sorted directory rendering
//!
//! Traversal uses an explicit stack of frames instead of recursion, so nesting
//! depth is bounded by heap memory rather than the call stack. Each frame holds
//! the not-yet-rendered entries of one directory and the prefix for its lines.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::config::{RendererConfig, TreeSymbols};
use super::filter::EntryFilter;
use super::status::EntryStatus;

/// Receives rendered lines in traversal order.
pub trait TreeOutput {
    /// The root line, e.g. `project/`.
    fn output_root(&mut self, name: &str) -> io::Result<()>;

    /// One entry line. `status` is `None` for directories.
    fn output_entry(
        &mut self,
        prefix: &str,
        name: &str,
        is_last: bool,
        status: Option<EntryStatus>,
    ) -> io::Result<()>;
}

/// Counts of what a render visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub directories: usize,
    pub files: usize,
    /// Files rendered as `[?]`.
    pub unknown: usize,
}

#[derive(Debug)]
struct Entry {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Entries of one directory still to be rendered, stored in reverse order
/// so the next one is at the end.
struct Frame {
    pending: Vec<Entry>,
    prefix: String,
}

pub struct TreeRenderer {
    filter: EntryFilter,
    symbols: TreeSymbols,
}

impl TreeRenderer {
    pub fn new(config: &RendererConfig) -> Self {
        Self {
            filter: EntryFilter::new(config),
            symbols: config.symbols,
        }
    }

    pub fn symbols(&self) -> TreeSymbols {
        self.symbols
    }

    /// Render the children of `root` with an empty prefix.
    pub fn render<O: TreeOutput>(&self, root: &Path, output: &mut O) -> Result<RenderSummary> {
        self.render_with_prefix(root, "", output)
    }

    /// Render the children of `root`, starting every line with `prefix`.
    ///
    /// Stops at the first directory that cannot be listed. Files whose size
    /// cannot be read are rendered as `[?]` and traversal continues.
    pub fn render_with_prefix<O: TreeOutput>(
        &self,
        root: &Path,
        prefix: &str,
        output: &mut O,
    ) -> Result<RenderSummary> {
        let mut summary = RenderSummary::default();
        let mut stack = vec![Frame {
            pending: self.read_entries(root)?,
            prefix: prefix.to_string(),
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(entry) = frame.pending.pop() else {
                stack.pop();
                continue;
            };
            let is_last = frame.pending.is_empty();

            if entry.is_dir {
                output.output_entry(&frame.prefix, &entry.name, is_last, None)?;
                summary.directories += 1;

                let child_prefix = self.symbols.child_prefix(&frame.prefix, is_last);
                let pending = self.read_entries(&entry.path)?;
                stack.push(Frame {
                    pending,
                    prefix: child_prefix,
                });
            } else {
                let status = EntryStatus::probe(&entry.path);
                output.output_entry(&frame.prefix, &entry.name, is_last, Some(status))?;
                summary.files += 1;
                if status == EntryStatus::Unknown {
                    summary.unknown += 1;
                }
            }
        }

        Ok(summary)
    }

    /// Read, sort, and filter directory entries, returned in reverse order.
    fn read_entries(&self, path: &Path) -> Result<Vec<Entry>> {
        tracing::debug!(path = %path.display(), "listing directory");

        let list_err = |source: io::Error| Error::ListDir {
            path: path.to_path_buf(),
            source,
        };

        let mut raw = Vec::new();
        for entry in fs::read_dir(path).map_err(list_err)? {
            let entry = entry.map_err(list_err)?;
            raw.push((entry.file_name(), entry.path()));
        }
        raw.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(raw
            .into_iter()
            .rev()
            .filter_map(|(file_name, path)| {
                let name = file_name.to_string_lossy().to_string();
                if self.filter.is_excluded(&name) {
                    return None;
                }
                let is_dir = path.is_dir();
                Some(Entry { name, path, is_dir })
            })
            .collect())
    }
}

impl Default for TreeRenderer {
    fn default() -> Self {
        Self::new(&RendererConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::TextOutput;
    use crate::test_utils::TestTree;

    fn render_to_string(renderer: &TreeRenderer, root: &Path) -> (String, RenderSummary) {
        let mut output = TextOutput::new(Vec::new(), renderer.symbols());
        let summary = renderer.render(root, &mut output).expect("render failed");
        let text = String::from_utf8(output.into_inner()).expect("output is not UTF-8");
        (text, summary)
    }

    #[test]
    fn test_basic_scenario() {
        let tree = TestTree::new();
        tree.add_file("a.txt", "");
        tree.add_file("b.txt", "hello");
        tree.add_file("sub/c.txt", "abc");

        let (text, summary) = render_to_string(&TreeRenderer::default(), tree.path());
        assert_eq!(
            text,
            "├── a.txt [EMPTY]\n\
             ├── b.txt [OK]\n\
             └── sub/\n    \
             └── c.txt [OK]\n"
        );
        assert_eq!(
            summary,
            RenderSummary {
                directories: 1,
                files: 3,
                unknown: 0
            }
        );
    }

    #[test]
    fn test_only_excluded_entries_renders_nothing() {
        let tree = TestTree::new();
        tree.add_file("build/classes/Main.class", "cafebabe");
        tree.add_file(".git/HEAD", "ref: refs/heads/main");

        let (text, summary) = render_to_string(&TreeRenderer::default(), tree.path());
        assert_eq!(text, "");
        assert_eq!(summary, RenderSummary::default());
    }

    #[test]
    fn test_exclusions_apply_at_every_depth() {
        let tree = TestTree::new();
        tree.add_file("src/main/App.java", "class App {}");
        tree.add_file("src/main/App.class", "x");
        tree.add_file("src/build/gen.txt", "x");
        tree.add_file("src/out/gen.txt", "x");
        tree.add_file("mod/.idea/workspace.xml", "x");
        tree.add_file("mod/mod.iml", "x");

        let (text, _) = render_to_string(&TreeRenderer::default(), tree.path());
        assert_eq!(
            text,
            "├── mod/\n\
             └── src/\n    \
             └── main/\n        \
             └── App.java [OK]\n"
        );
    }

    #[test]
    fn test_pipe_extension_for_non_last_directory() {
        let tree = TestTree::new();
        tree.add_file("a/x.txt", "1");
        tree.add_file("a/y/z.txt", "");
        tree.add_file("b.txt", "1");

        let (text, _) = render_to_string(&TreeRenderer::default(), tree.path());
        assert_eq!(
            text,
            "├── a/\n\
             │   ├── x.txt [OK]\n\
             │   └── y/\n\
             │       └── z.txt [EMPTY]\n\
             └── b.txt [OK]\n"
        );
    }

    #[test]
    fn test_entries_sorted_by_name_regardless_of_kind() {
        let tree = TestTree::new();
        tree.add_file("b.txt", "1");
        tree.add_dir("a");
        tree.add_dir("c");
        tree.add_file("B.txt", "1");

        let (text, _) = render_to_string(&TreeRenderer::default(), tree.path());
        let names: Vec<&str> = text
            .lines()
            .map(|l| l.trim_start_matches(['├', '└', '─', ' ']))
            .collect();
        assert_eq!(names, vec!["B.txt [OK]", "a/", "b.txt [OK]", "c/"]);
    }

    #[test]
    fn test_empty_directory_is_rendered() {
        let tree = TestTree::new();
        tree.add_dir("empty");

        let (text, summary) = render_to_string(&TreeRenderer::default(), tree.path());
        assert_eq!(text, "└── empty/\n");
        assert_eq!(summary.directories, 1);
    }

    #[test]
    fn test_initial_prefix_is_applied() {
        let tree = TestTree::new();
        tree.add_file("f.txt", "1");

        let renderer = TreeRenderer::default();
        let mut output = TextOutput::new(Vec::new(), renderer.symbols());
        renderer
            .render_with_prefix(tree.path(), ">> ", &mut output)
            .unwrap();
        assert_eq!(String::from_utf8(output.into_inner()).unwrap(), ">> └── f.txt [OK]\n");
    }

    #[test]
    fn test_deep_nesting_does_not_overflow() {
        let tree = TestTree::new();
        let depth = 200;
        let rel: Vec<&str> = std::iter::repeat_n("d", depth).collect();
        tree.add_file(&format!("{}/leaf.txt", rel.join("/")), "1");

        let (text, summary) = render_to_string(&TreeRenderer::default(), tree.path());
        assert_eq!(summary.directories, depth);
        let leaf = text.lines().last().unwrap();
        assert_eq!(leaf, format!("{}└── leaf.txt [OK]", " ".repeat(4 * depth)));
    }

    #[test]
    fn test_custom_exclusions_and_symbols() {
        let tree = TestTree::new();
        tree.add_file("build/a.txt", "1");
        tree.add_file("keep.log", "");
        tree.add_file("drop.tmp", "1");

        let config = RendererConfig {
            excluded_names: Vec::new(),
            excluded_patterns: vec!["*.tmp".to_string()],
            symbols: TreeSymbols {
                branch: "|-- ",
                last: "`-- ",
                pipe: "|   ",
                blank: "    ",
            },
        };
        let (text, _) = render_to_string(&TreeRenderer::new(&config), tree.path());
        assert_eq!(text, "|-- build/\n|   `-- a.txt [OK]\n`-- keep.log [EMPTY]\n");
    }

    #[test]
    fn test_missing_root_is_list_error() {
        let tree = TestTree::new();
        let missing = tree.path().join("nope");

        let renderer = TreeRenderer::default();
        let mut output = TextOutput::new(Vec::new(), renderer.symbols());
        let err = renderer.render(&missing, &mut output).unwrap_err();
        match err {
            Error::ListDir { path, .. } => assert_eq!(path, missing),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_is_unknown() {
        let tree = TestTree::new();
        tree.add_file("real.txt", "1");
        std::os::unix::fs::symlink(tree.path().join("gone.txt"), tree.path().join("link.txt"))
            .expect("Failed to create symlink");

        let (text, summary) = render_to_string(&TreeRenderer::default(), tree.path());
        assert_eq!(text, "├── link.txt [?]\n└── real.txt [OK]\n");
        assert_eq!(summary.unknown, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_to_directory_is_descended() {
        let tree = TestTree::new();
        tree.add_file("real/f.txt", "");
        std::os::unix::fs::symlink(tree.path().join("real"), tree.path().join("alias"))
            .expect("Failed to create symlink");

        let (text, _) = render_to_string(&TreeRenderer::default(), tree.path());
        assert_eq!(
            text,
            "├── alias/\n│   └── f.txt [EMPTY]\n└── real/\n    └── f.txt [EMPTY]\n"
        );
    }
}
