use clap::Args;
use stockbook::{context::AppContext, products::models::ProductUid};

#[derive(Debug, Args)]
pub(crate) struct ChangeStockArgs {
    /// Product uid
    uid: String,

    /// Units to add, or remove when negative; stock stops at zero
    #[arg(allow_negative_numbers = true)]
    delta: i64,
}

pub(crate) fn run(args: &ChangeStockArgs, app: &AppContext) -> Result<(), String> {
    let product = app
        .products
        .change_stock(&ProductUid::new(args.uid.as_str()), args.delta)
        .map_err(|error| format!("failed to change stock of {}: {error}", args.uid))?;

    super::print_product(&product);

    Ok(())
}
