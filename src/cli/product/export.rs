use std::path::PathBuf;

use clap::Args;
use stockbook::{context::AppContext, download::Download};

use crate::cli;

#[derive(Debug, Args)]
pub(crate) struct ExportProductsArgs {
    /// Directory to write the file into; the CSV goes to stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,

    /// File name of the export
    #[arg(long, default_value = "products.csv")]
    filename: String,
}

pub(crate) fn run(args: ExportProductsArgs, app: &AppContext) -> Result<(), String> {
    let csv = app
        .products
        .export_csv()
        .map_err(|error| format!("failed to export products: {error}"))?;

    cli::deliver(&Download::csv(args.filename, csv), args.out)
}
