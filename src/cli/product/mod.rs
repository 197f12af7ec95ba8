use clap::{Args, Subcommand};
use stockbook::{context::AppContext, products::models::Product};

mod add;
mod delete;
mod export;
mod import;
mod list;
mod stock;
mod update;

#[derive(Debug, Args)]
pub(crate) struct ProductCommand {
    #[command(subcommand)]
    command: ProductSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductSubcommand {
    /// Add a product to the catalog
    Add(add::AddProductArgs),

    /// Change fields of a product
    Update(update::UpdateProductArgs),

    /// Remove a product
    Delete(delete::DeleteProductArgs),

    /// Adjust stock by a signed amount
    Stock(stock::ChangeStockArgs),

    /// Show the catalog
    List,

    /// Export the catalog as CSV
    Export(export::ExportProductsArgs),

    /// Import a CSV catalog
    Import(import::ImportProductsArgs),
}

pub(crate) fn run(command: ProductCommand, app: &AppContext) -> Result<(), String> {
    match command.command {
        ProductSubcommand::Add(args) => add::run(args, app),
        ProductSubcommand::Update(args) => update::run(args, app),
        ProductSubcommand::Delete(args) => delete::run(&args, app),
        ProductSubcommand::Stock(args) => stock::run(&args, app),
        ProductSubcommand::List => {
            list::run(app);

            Ok(())
        }
        ProductSubcommand::Export(args) => export::run(args, app),
        ProductSubcommand::Import(args) => import::run(&args, app),
    }
}

fn print_product(product: &Product) {
    println!("uid: {}", product.uid);
    println!("name: {}", product.name);
    println!("stock: {}", product.stock);
    println!("modified: {}", product.modified);
}
