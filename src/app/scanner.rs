use crate::app::models::{CollectorConfig, FileEntry};
use ignore::{DirEntry, WalkBuilder};
use pathdiff::diff_paths;
use std::collections::BTreeSet;
use std::path::PathBuf;

pub struct Scanner {
    root: PathBuf,
    allowed_suffixes: BTreeSet<String>,
    ignored_dirs: BTreeSet<String>,
    ignored_files: BTreeSet<String>,
}

impl Scanner {
    pub fn new(config: &CollectorConfig) -> Self {
        Self {
            root: config.root.clone(),
            allowed_suffixes: config.allowed_suffixes.clone(),
            ignored_dirs: config.ignored_dirs.clone(),
            ignored_files: config.ignored_files.clone(),
        }
    }

    /// Walks the tree under the root and returns every accepted file.
    ///
    /// Ignored directories are pruned before descent, so nothing below them
    /// is ever visited. The order of the result is whatever the walk yields;
    /// call [`sort_entries`] before rendering.
    pub fn scan(&self) -> Vec<FileEntry> {
        let mut entries = Vec::new();

        let ignored_dirs = self.ignored_dirs.clone();
        // Plain walk: no gitignore, hidden-file or parent-ignore handling.
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| !is_pruned_dir(entry, &ignored_dirs))
            .build();

        for result in walker {
            match result {
                Ok(entry) => {
                    if let Some(processed) = self.process_entry(&entry) {
                        entries.push(processed);
                    }
                }
                Err(err) => log::warn!("Error walking entry: {}", err),
            }
        }

        entries
    }

    /// True when a file with this name belongs in the document.
    ///
    /// This is a suffix test on the whole name, so `.gitignore` matches a
    /// file called `.gitignore` and `.env.example` matches `.env.example`.
    pub fn accepts(&self, file_name: &str) -> bool {
        self.allowed_suffixes
            .iter()
            .any(|suffix| file_name.ends_with(suffix.as_str()))
            && !self.ignored_files.contains(file_name)
    }

    fn process_entry(&self, entry: &DirEntry) -> Option<FileEntry> {
        // The root folder itself is never an entry
        if entry.depth() == 0 || !is_file_like(entry) {
            return None;
        }

        let name = entry.file_name().to_string_lossy();
        if !self.accepts(&name) {
            log::debug!("skip {}", entry.path().display());
            return None;
        }

        let relative = diff_paths(entry.path(), &self.root)?;
        let relative_path = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");

        log::debug!("take {}", relative_path);

        Some(FileEntry {
            path: entry.path().to_path_buf(),
            relative_path,
        })
    }
}

/// Orders entries by relative path (byte order, which is code point order
/// for UTF-8). The sort is stable.
pub fn sort_entries(entries: &mut [FileEntry]) {
    entries.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
}

fn is_pruned_dir(entry: &DirEntry, ignored_dirs: &BTreeSet<String>) -> bool {
    entry.depth() > 0
        && entry.file_type().is_some_and(|ft| ft.is_dir())
        && ignored_dirs.contains(entry.file_name().to_string_lossy().as_ref())
}

/// Regular files, plus symlinks that do not lead to a directory (links are
/// never followed, but a dangling or file link is still listed).
fn is_file_like(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        _ => false,
    }
}
