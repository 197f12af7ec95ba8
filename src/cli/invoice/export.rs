use std::path::PathBuf;

use clap::Args;
use stockbook::{context::AppContext, download::Download};

use crate::cli;

#[derive(Debug, Args)]
pub(crate) struct ExportInvoicesArgs {
    /// Directory to write the file into; the JSON goes to stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,

    /// File name of the export
    #[arg(long, default_value = "invoices.json")]
    filename: String,
}

pub(crate) fn run(args: ExportInvoicesArgs, app: &AppContext) -> Result<(), String> {
    let json = app
        .invoices
        .export_json()
        .map_err(|error| format!("failed to export invoices: {error}"))?;

    cli::deliver(&Download::json(args.filename, json), args.out)
}
