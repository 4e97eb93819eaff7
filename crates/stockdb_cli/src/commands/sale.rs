//! Sale-event commands.
//!
//! Adding or updating a sale runs the notebook status cascade; a cascade
//! that cannot be applied is reported as a warning, never as a failure
//! of the sale write.

use clap::Subcommand;
use std::path::Path;

use stockdb_core::{CascadeOutcome, Inventory, RecordId, SaleEvent};

/// Operations on the sale-event store.
#[derive(Subcommand)]
pub enum SaleCommand {
    /// Record a new sale event
    Add {
        /// Sale identifier (positive integer)
        #[arg(value_parser = super::id_parser())]
        id: u32,

        /// Identifier of the notebook being sold
        #[arg(long, value_parser = super::id_parser())]
        notebook: u32,

        /// Identifier of the buying customer
        #[arg(long, value_parser = super::id_parser())]
        customer: u32,

        /// Buyer name
        #[arg(long, default_value = "")]
        buyer: String,

        /// Sale date (e.g. 2026-08-26)
        #[arg(long, default_value = "")]
        date: String,

        /// Status propagated to the notebook: 1 = in stock, 0 = sold
        #[arg(long, value_parser = super::status_parser(), default_value_t = 0)]
        status: u32,
    },

    /// Replace an existing sale event
    Update {
        /// Sale identifier
        #[arg(value_parser = super::id_parser())]
        id: u32,

        /// Identifier of the notebook being sold
        #[arg(long, value_parser = super::id_parser())]
        notebook: u32,

        /// Identifier of the buying customer
        #[arg(long, value_parser = super::id_parser())]
        customer: u32,

        /// Buyer name
        #[arg(long, default_value = "")]
        buyer: String,

        /// Sale date
        #[arg(long, default_value = "")]
        date: String,

        /// Status propagated to the notebook
        #[arg(long, value_parser = super::status_parser())]
        status: u32,
    },

    /// Delete a sale event
    Delete {
        /// Sale identifier
        #[arg(value_parser = super::id_parser())]
        id: u32,
    },

    /// Show one sale event
    Get {
        /// Sale identifier
        #[arg(value_parser = super::id_parser())]
        id: u32,
    },

    /// List active sale events
    List {
        /// Only show sales on this date
        #[arg(long)]
        date: Option<String>,

        /// Only show sales with this status
        #[arg(long, value_parser = super::status_parser())]
        status: Option<u32>,
    },
}

/// Runs a sale command against the inventory in `data_dir`.
pub fn run(data_dir: &Path, command: SaleCommand) -> Result<(), Box<dyn std::error::Error>> {
    let mut inv = Inventory::open(data_dir)?;

    match command {
        SaleCommand::Add {
            id,
            notebook,
            customer,
            buyer,
            date,
            status,
        } => {
            let sale = SaleEvent {
                id: RecordId::new(id),
                notebook_id: RecordId::new(notebook),
                customer_id: RecordId::new(customer),
                buyer,
                sold_date: date,
                status,
            };
            let (offset, outcome) = inv.add_sale(&sale)?;
            tracing::info!(id, %offset, "sale added");
            println!("added sale {id} at offset {offset}");
            report_outcome(&outcome);
        }
        SaleCommand::Update {
            id,
            notebook,
            customer,
            buyer,
            date,
            status,
        } => {
            let sale = SaleEvent {
                id: RecordId::new(id),
                notebook_id: RecordId::new(notebook),
                customer_id: RecordId::new(customer),
                buyer,
                sold_date: date,
                status,
            };
            let outcome = inv.update_sale(&sale)?;
            tracing::info!(id, "sale updated");
            println!("updated sale {id}");
            report_outcome(&outcome);
        }
        SaleCommand::Delete { id } => {
            inv.sales_mut().delete(RecordId::new(id))?;
            tracing::info!(id, "sale deleted");
            println!("deleted sale {id}");
        }
        SaleCommand::Get { id } => match inv.sales().get(RecordId::new(id))? {
            Some((_, sale)) => print_sale(&sale),
            None => println!("sale {id} not found"),
        },
        SaleCommand::List { date, status } => {
            for item in inv.sales().iter_active()? {
                let (_, sale) = item?;
                if date.as_deref().is_some_and(|d| sale.sold_date != d) {
                    continue;
                }
                if status.is_some_and(|s| sale.status != s) {
                    continue;
                }
                print_sale(&sale);
            }
        }
    }

    Ok(())
}

fn report_outcome(outcome: &CascadeOutcome) {
    match outcome {
        CascadeOutcome::Applied { notebook_id } => {
            println!("notebook {notebook_id} status updated");
        }
        CascadeOutcome::NotebookMissing { notebook_id } => {
            eprintln!("warning: notebook {notebook_id} not found; status not updated");
        }
        CascadeOutcome::Failed { notebook_id, error } => {
            eprintln!("warning: could not update notebook {notebook_id}: {error}");
        }
    }
}

fn print_sale(sale: &SaleEvent) {
    let status = if sale.status == 1 { "in stock" } else { "sold" };
    println!(
        "{:<6} nb={:<6} cus={:<6} {:<12} {:<12} {}",
        sale.id, sale.notebook_id, sale.customer_id, sale.buyer, sale.sold_date, status
    );
}
