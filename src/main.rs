//! tabicons - generates the app's tab-bar icon set
//!
//! Draws five simple geometric glyphs (house, game controller, trend chart,
//! book, person) over colored circular backdrops and writes each as an 81x81
//! RGBA PNG, in a normal and an active color variant.

mod canvas;
mod cli;
mod generate;
mod logging;
mod registry;
mod shapes;

use clap::Parser;
use cli::{exit_codes, Cli};
use generate::GenerateError;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
        return exit_codes::UNEXPECTED_FAILURE;
    }

    match generate::generate_all(&cli.output_dir) {
        Ok(written) => {
            println!("\nGenerated {} icons", written);
            println!("Icons saved in: {}", cli.output_dir.display());
            exit_codes::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            categorize_error(&e)
        }
    }
}

/// Categorize an error into the appropriate exit code
fn categorize_error(e: &GenerateError) -> i32 {
    match e {
        GenerateError::CreateDir { .. } | GenerateError::Write { .. } => exit_codes::WRITE_FAILURE,
    }
}
