use stockbook::context::AppContext;

use crate::cli::table;

pub(crate) fn run(app: &AppContext) {
    let invoices = app.invoices.list_invoices();

    if invoices.is_empty() {
        println!("no invoices");

        return;
    }

    println!("{}", table::invoices(&invoices));
}
