use clap::Args;
use stockbook::{context::AppContext, products::models::ProductUid};

#[derive(Debug, Args)]
pub(crate) struct DeleteProductArgs {
    /// Product uid
    uid: String,
}

pub(crate) fn run(args: &DeleteProductArgs, app: &AppContext) -> Result<(), String> {
    app.products
        .delete_product(&ProductUid::new(args.uid.as_str()))
        .map_err(|error| format!("failed to delete product {}: {error}", args.uid))?;

    println!("deleted: {}", args.uid);

    Ok(())
}
