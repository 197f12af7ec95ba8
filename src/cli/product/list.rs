use stockbook::context::AppContext;

use crate::cli::table;

pub(crate) fn run(app: &AppContext) {
    let products = app.products.list_products();

    if products.is_empty() {
        println!("no products");

        return;
    }

    println!("{}", table::products(&products));
}
