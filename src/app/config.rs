use crate::app::models::{CollectorConfig, DecodePolicy};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

const DEFAULTS_TOML: &str = include_str!("defaults.toml");

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct Defaults {
    output_file: String,
    allowed_suffixes: BTreeSet<String>,
    ignored_dirs: BTreeSet<String>,
    ignored_files: BTreeSet<String>,
    #[serde(default)]
    decode: DecodePolicy,
}

fn load_defaults() -> Result<Defaults> {
    toml::from_str(DEFAULTS_TOML).context("Failed to parse built-in defaults.toml")
}

/// Builds the collector configuration for a project rooted at `root`.
pub fn resolve_config(root: PathBuf) -> Result<CollectorConfig> {
    let defaults = load_defaults()?;

    Ok(CollectorConfig {
        output_path: root.join(&defaults.output_file),
        root,
        allowed_suffixes: defaults.allowed_suffixes,
        ignored_dirs: defaults.ignored_dirs,
        ignored_files: defaults.ignored_files,
        decode: defaults.decode,
    })
}
