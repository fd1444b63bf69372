//! Discovery of Python source files, gitignore-aware.

use crate::core::errors::{Error, Result};
use ignore::WalkBuilder;
use log::warn;
use std::path::{Path, PathBuf};

pub struct FileWalker {
    root: PathBuf,
    exclude: Vec<glob::Pattern>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            exclude: Vec::new(),
        }
    }

    /// Invalid patterns are caller misuse and fail fast.
    pub fn with_excludes(mut self, patterns: &[String]) -> Result<Self> {
        self.exclude = patterns
            .iter()
            .map(|p| {
                glob::Pattern::new(p)
                    .map_err(|e| Error::Config(format!("invalid exclude pattern {p:?}: {e}")))
            })
            .collect::<Result<_>>()?;
        Ok(self)
    }

    /// Walks the root (a directory or a single file), returning matching
    /// Python files in sorted order. Unreadable directory entries are
    /// logged and skipped.
    pub fn walk(&self) -> Vec<PathBuf> {
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("skipping unreadable entry: {err}");
                    continue;
                }
            };
            let path = entry.path();
            if path.is_file() && is_python(path) && !self.is_excluded(path) {
                files.push(path.to_path_buf());
            }
        }
        files.sort();
        files
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude.iter().any(|p| p.matches(&path_str))
    }
}

fn is_python(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "py")
}

pub fn find_python_files(root: &Path, excludes: &[String]) -> Result<Vec<PathBuf>> {
    Ok(FileWalker::new(root.to_path_buf())
        .with_excludes(excludes)?
        .walk())
}
