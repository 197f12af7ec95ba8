use clap::{Args, Subcommand};

use stockbook::context::AppContext;

mod create;
mod export;
mod list;
mod show;

#[derive(Debug, Args)]
pub(crate) struct InvoiceCommand {
    #[command(subcommand)]
    command: InvoiceSubcommand,
}

#[derive(Debug, Subcommand)]
enum InvoiceSubcommand {
    /// Record a new invoice
    Create(create::CreateInvoiceArgs),

    /// Show the ledger
    List,

    /// Show one invoice with its lines
    Show(show::ShowInvoiceArgs),

    /// Export the ledger as JSON
    Export(export::ExportInvoicesArgs),
}

pub(crate) fn run(command: InvoiceCommand, app: &AppContext) -> Result<(), String> {
    match command.command {
        InvoiceSubcommand::Create(args) => create::run(args, app),
        InvoiceSubcommand::List => {
            list::run(app);

            Ok(())
        }
        InvoiceSubcommand::Show(args) => show::run(&args, app),
        InvoiceSubcommand::Export(args) => export::run(args, app),
    }
}
