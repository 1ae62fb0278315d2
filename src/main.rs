//! FileSleuth — file system analyser.
//!
//! Thin binary entry point. All logic lives in the `filesleuth-core`
//! and `filesleuth-cli` crates.

use clap::Parser;
use filesleuth_cli::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    // Structured logging on stderr so reports on stdout stay clean.
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("FileSleuth starting");

    match filesleuth_cli::run(&args, std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // One line, never a backtrace dump.
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
