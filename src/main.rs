//! Stockbook CLI

use std::process;

use clap::Parser;

use crate::cli::Cli;

mod cli;
mod config;
mod logging;

pub fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = logging::init(&cli.config) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialize, must use eprintln"
        )]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }

    if let Err(error) = cli.run() {
        #[expect(clippy::print_stderr, reason = "user-facing command failure")]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }
}
