use clap::Parser;

/// Collection parameters are fixed; the flags only tune log output.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Bundle a project's source files into a single context document"
)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Also log every scanned entry
    #[arg(short, long)]
    pub verbose: bool,
}
