// Declare modules
pub mod cli;
pub mod config;
pub mod error;
pub mod formatter;
pub mod models;
pub mod scanner;
pub mod writer;

use anyhow::{Context, Result};
use log::LevelFilter;
use std::env;

use self::cli::Cli;
use self::config::resolve_config;
use self::formatter::OutputGenerator;
use self::models::{CollectReport, CollectorConfig};
use self::scanner::Scanner;
use self::writer::write_document;

/// Sets up the stdout logger. `RUST_LOG` wins over the CLI flags.
pub fn init_logging(cli: &Cli) {
    let level = if cli.quiet {
        LevelFilter::Warn
    } else if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format_timestamp(None)
        .format_target(false)
        .init();
}

/// Collects the project rooted at the current directory.
pub fn run() -> Result<()> {
    let current_dir = env::current_dir().context("Failed to get current directory")?;
    let config = resolve_config(current_dir)?;

    collect(&config)?;
    Ok(())
}

/// Runs the whole pipeline: scan, sort, render, write.
pub fn collect(config: &CollectorConfig) -> Result<CollectReport> {
    log::info!("🔍 Scanning files in: {}", config.root.display());

    let scanner = Scanner::new(config);
    let mut entries = scanner.scan();
    scanner::sort_entries(&mut entries);

    if entries.is_empty() {
        log::warn!("⚠️ No files matched the configured suffixes.");
    }

    log::info!(
        "Found {} matching files. Writing to {}...",
        entries.len(),
        config.output_path.display()
    );

    let rendered = OutputGenerator::render(&entries, config.decode);
    write_document(&rendered.document, &config.output_path)?;

    log::info!(
        "✅ Project context saved to '{}'",
        config.output_path.display()
    );

    Ok(CollectReport {
        files: entries.len(),
        read_failures: rendered.read_failures,
        output_path: config.output_path.clone(),
    })
}
