use clap::Parser;
use code_pilot_context::app::{self, cli::Cli};

fn main() {
    let args = Cli::parse();
    app::init_logging(&args);

    // Failures are reported, never turned into an exit status.
    if let Err(err) = app::run() {
        log::error!("FATAL error: {:#}", err);
    }
}
