#![expect(
    clippy::print_stdout,
    reason = "commands report their results on stdout"
)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stockbook::{
    context::AppContext,
    download::{DirectorySink, Download, DownloadSink, StdoutSink},
};

use crate::config::Config;

mod invoice;
mod product;
mod table;

#[derive(Debug, Parser)]
#[command(name = "stockbook", about = "Stockbook inventory and invoicing", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub(crate) config: Config,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Product(product::ProductCommand),
    Invoice(invoice::InvoiceCommand),
}

impl Cli {
    pub(crate) fn run(self) -> Result<(), String> {
        let app = AppContext::from_data_dir(self.config.data_dir);

        match self.command {
            Commands::Product(command) => product::run(command, &app),
            Commands::Invoice(command) => invoice::run(command, &app),
        }
    }
}

/// Writes an export into `out`, or to stdout when no directory is given.
fn deliver(download: &Download, out: Option<PathBuf>) -> Result<(), String> {
    match out {
        Some(dir) => {
            let path = DirectorySink::new(dir)
                .write(download)
                .map_err(|error| format!("failed to write export: {error}"))?;

            println!("exported: {}", path.display());
        }
        None => StdoutSink
            .deliver(download)
            .map_err(|error| format!("failed to write export: {error}"))?,
    }

    Ok(())
}
