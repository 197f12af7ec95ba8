use clap::Args;
use rust_decimal::Decimal;
use stockbook::{
    context::AppContext,
    products::models::{ProductUid, ProductUpdate},
};

#[derive(Debug, Args)]
pub(crate) struct UpdateProductArgs {
    /// Product uid
    uid: String,

    /// New name
    #[arg(long)]
    name: Option<String>,

    /// New brand
    #[arg(long)]
    brand: Option<String>,

    /// New product group
    #[arg(long)]
    group: Option<String>,

    /// New cost price
    #[arg(long)]
    cost: Option<Decimal>,

    /// New selling price
    #[arg(long)]
    sell: Option<Decimal>,

    /// New stock level
    #[arg(long)]
    stock: Option<u64>,
}

pub(crate) fn run(args: UpdateProductArgs, app: &AppContext) -> Result<(), String> {
    let update = ProductUpdate {
        name: args.name,
        brand: args.brand,
        group: args.group,
        cost: args.cost,
        sell: args.sell,
        stock: args.stock,
    };

    if update.is_empty() {
        return Err("nothing to update; pass at least one field".to_string());
    }

    let product = app
        .products
        .update_product(&ProductUid::from(args.uid), update)
        .map_err(|error| format!("failed to update product: {error}"))?;

    super::print_product(&product);

    Ok(())
}
