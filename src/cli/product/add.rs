use clap::Args;
use rust_decimal::Decimal;
use stockbook::{context::AppContext, products::models::NewProduct};

#[derive(Debug, Args)]
pub(crate) struct AddProductArgs {
    /// Product name
    #[arg(long)]
    name: String,

    /// Brand
    #[arg(long, default_value = "")]
    brand: String,

    /// Product group
    #[arg(long, default_value = "")]
    group: String,

    /// Cost price
    #[arg(long, default_value_t = Decimal::ZERO)]
    cost: Decimal,

    /// Selling price
    #[arg(long, default_value_t = Decimal::ZERO)]
    sell: Decimal,

    /// Units in stock
    #[arg(long, default_value_t = 0)]
    stock: u64,
}

pub(crate) fn run(args: AddProductArgs, app: &AppContext) -> Result<(), String> {
    let product = app
        .products
        .create_product(NewProduct {
            name: args.name,
            brand: args.brand,
            group: args.group,
            cost: args.cost,
            sell: args.sell,
            stock: args.stock,
        })
        .map_err(|error| format!("failed to add product: {error}"))?;

    super::print_product(&product);

    Ok(())
}
