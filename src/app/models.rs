use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// How bytes that are not valid UTF-8 are turned into text.
///
/// Both policies are lossy on purpose: a file with a stray invalid byte is
/// still worth including.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodePolicy {
    /// Invalid sequences are dropped from the output.
    #[default]
    Drop,
    /// Invalid sequences become U+FFFD.
    Replace,
}

/// Immutable settings handed to the collector.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub root: PathBuf,
    pub output_path: PathBuf,
    /// Matched against the end of the file name, not a parsed extension.
    pub allowed_suffixes: BTreeSet<String>,
    /// Directories with these names are never descended into.
    pub ignored_dirs: BTreeSet<String>,
    pub ignored_files: BTreeSet<String>,
    pub decode: DecodePolicy,
}

/// A single file selected during the scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub path: PathBuf,
    pub relative_path: String, // Always '/'-separated
}

/// Summary of a finished run.
#[derive(Debug)]
pub struct CollectReport {
    pub files: usize,
    pub read_failures: usize,
    pub output_path: PathBuf,
}
