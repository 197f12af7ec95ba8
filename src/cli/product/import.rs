use std::{fs, path::PathBuf};

use clap::Args;
use stockbook::{context::AppContext, products::models::ImportMode};

#[derive(Debug, Args)]
pub(crate) struct ImportProductsArgs {
    /// CSV file to read
    file: PathBuf,

    /// Keep the current catalog, overwriting products with matching uids
    #[arg(long)]
    merge: bool,
}

pub(crate) fn run(args: &ImportProductsArgs, app: &AppContext) -> Result<(), String> {
    let text = fs::read_to_string(&args.file)
        .map_err(|error| format!("failed to read {}: {error}", args.file.display()))?;

    let mode = if args.merge {
        ImportMode::Merge
    } else {
        ImportMode::Replace
    };

    let summary = app
        .products
        .import_csv(&text, mode)
        .map_err(|error| format!("failed to import products: {error}"))?;

    println!("added: {}", summary.added);
    println!("updated: {}", summary.updated);
    println!("reassigned: {}", summary.reassigned);

    Ok(())
}
