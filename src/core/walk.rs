use std::path::{Component, Path, PathBuf};

use regex::RegexSet;
use tracing::{debug, trace};

use crate::error::{Result, TreeError};
use crate::fs::FileSystem;
use crate::models::{EntryKind, FsEntry, Node};

/// Exclude patterns compiled once per walk.
///
/// Each pattern is anchored at the start of the entry name but need not
/// match the whole name, so `test` excludes `tests` and `test_data`.
#[derive(Debug)]
pub struct ExcludePatterns {
    set: Option<RegexSet>,
}

impl ExcludePatterns {
    /// Compile a set of regular expressions. A single pattern is a
    /// one-element slice.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        if patterns.is_empty() {
            return Ok(Self { set: None });
        }
        let anchored = patterns
            .iter()
            .map(|pattern| format!("^(?:{})", pattern.as_ref()));
        Ok(Self {
            set: Some(RegexSet::new(anchored)?),
        })
    }

    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        self.set.as_ref().is_some_and(|set| set.is_match(name))
    }
}

/// Configuration options for directory traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkOptions {
    /// Maximum depth to traverse (None means unlimited). Must be at least 1.
    pub max_depth: Option<usize>,
    /// Keep only directories below the root
    pub dirs_only: bool,
    /// Regular expressions matched against entry names from their start
    pub exclude: Vec<String>,
    /// Sort entries by name instead of keeping listing order
    pub sort_entries: bool,
}

/// Build the tree rooted at `path`.
///
/// A file root yields a single leaf regardless of the other options.
/// Symbolic links below the root are never listed.
pub async fn walk_dir<F: FileSystem>(fs: &F, path: &Path, options: &WalkOptions) -> Result<Node> {
    let kind = fs
        .stat(path)
        .await
        .map_err(|err| TreeError::from_io(path, err))?;

    if options.max_depth == Some(0) {
        return Err(TreeError::InvalidArgument(
            "max_depth must be positive".to_owned(),
        ));
    }

    let patterns = ExcludePatterns::new(options.exclude.as_slice())?;
    let name = root_display_name(path)?;

    if !kind.is_dir() {
        return Ok(Node::file(name));
    }

    walk_dir_internal(fs, path, name, options, &patterns, 0).await
}

/// Internal recursive function that tracks current depth.
async fn walk_dir_internal<F: FileSystem>(
    fs: &F,
    dir: &Path,
    name: String,
    options: &WalkOptions,
    patterns: &ExcludePatterns,
    current_depth: usize,
) -> Result<Node> {
    if options.max_depth.is_some_and(|max| current_depth >= max) {
        trace!(path = %dir.display(), "depth limit reached");
        return Ok(Node::directory(name, Vec::new()));
    }

    debug!(path = %dir.display(), depth = current_depth, "listing directory");
    let entries = fs
        .read_dir(dir)
        .await
        .map_err(|err| TreeError::from_io(dir, err))?;

    let mut kept: Vec<FsEntry> = entries
        .into_iter()
        .filter(|entry| keep_entry(entry, options, patterns))
        .collect();

    if options.sort_entries {
        kept.sort_by(|a, b| a.name.cmp(&b.name));
    }

    let mut children = Vec::with_capacity(kept.len());
    for entry in kept {
        let child = if entry.kind.is_dir() {
            Box::pin(walk_dir_internal(
                fs,
                &entry.path,
                entry.name,
                options,
                patterns,
                current_depth + 1,
            ))
            .await?
        } else {
            Node::file(entry.name)
        };
        children.push(child);
    }

    Ok(Node::directory(name, children))
}

fn keep_entry(entry: &FsEntry, options: &WalkOptions, patterns: &ExcludePatterns) -> bool {
    if entry.kind == EntryKind::Symlink {
        trace!(name = %entry.name, "skipping symlink");
        return false;
    }

    if options.dirs_only && !entry.kind.is_dir() {
        return false;
    }

    if patterns.matches(&entry.name) {
        trace!(name = %entry.name, "excluded by pattern");
        return false;
    }

    true
}

/// Name shown on the root row.
///
/// `.` and `..` are replaced by the name of the directory they resolve
/// to from the current working directory.
pub fn root_display_name(root_path: &Path) -> Result<String> {
    if let Some(Component::Normal(name)) = root_path.components().next_back() {
        return Ok(name.to_string_lossy().into_owned());
    }

    let cwd = std::env::current_dir().map_err(|err| TreeError::from_io(".", err))?;
    Ok(resolved_name(&cwd, root_path))
}

fn resolved_name(cwd: &Path, root_path: &Path) -> String {
    let mut resolved = PathBuf::new();
    for component in cwd.join(root_path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other),
        }
    }

    resolved
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| resolved.to_string_lossy().into_owned())
}
