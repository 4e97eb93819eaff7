//! Customer commands.

use clap::Subcommand;
use std::path::Path;

use stockdb_core::{Customer, Inventory, RecordId};

/// Operations on the customer store.
#[derive(Subcommand)]
pub enum CustomerCommand {
    /// Add a new customer
    Add {
        /// Customer identifier (positive integer)
        #[arg(value_parser = super::id_parser())]
        id: u32,

        /// Customer name
        #[arg(long)]
        name: String,

        /// Postal address
        #[arg(long, default_value = "")]
        address: String,

        /// Preferred notebook brand
        #[arg(long, default_value = "")]
        brand: String,

        /// Preferred notebook model
        #[arg(long, default_value = "")]
        model: String,

        /// Telephone number
        #[arg(long, default_value = "")]
        tel: String,
    },

    /// Replace an existing customer record
    Update {
        /// Customer identifier
        #[arg(value_parser = super::id_parser())]
        id: u32,

        /// Customer name
        #[arg(long)]
        name: String,

        /// Postal address
        #[arg(long, default_value = "")]
        address: String,

        /// Preferred notebook brand
        #[arg(long, default_value = "")]
        brand: String,

        /// Preferred notebook model
        #[arg(long, default_value = "")]
        model: String,

        /// Telephone number
        #[arg(long, default_value = "")]
        tel: String,
    },

    /// Delete a customer
    Delete {
        /// Customer identifier
        #[arg(value_parser = super::id_parser())]
        id: u32,
    },

    /// Show one customer
    Get {
        /// Customer identifier
        #[arg(value_parser = super::id_parser())]
        id: u32,
    },

    /// List active customers
    List {
        /// Only show customers with this preferred brand
        #[arg(long)]
        brand: Option<String>,
    },
}

/// Runs a customer command against the inventory in `data_dir`.
pub fn run(data_dir: &Path, command: CustomerCommand) -> Result<(), Box<dyn std::error::Error>> {
    let mut inv = Inventory::open(data_dir)?;

    match command {
        CustomerCommand::Add {
            id,
            name,
            address,
            brand,
            model,
            tel,
        } => {
            let customer = Customer {
                id: RecordId::new(id),
                name,
                address,
                brand,
                model,
                tel,
            };
            let offset = inv.customers_mut().add(&customer)?;
            tracing::info!(id, %offset, "customer added");
            println!("added customer {id} at offset {offset}");
        }
        CustomerCommand::Update {
            id,
            name,
            address,
            brand,
            model,
            tel,
        } => {
            let customer = Customer {
                id: RecordId::new(id),
                name,
                address,
                brand,
                model,
                tel,
            };
            inv.customers_mut().update(RecordId::new(id), &customer)?;
            tracing::info!(id, "customer updated");
            println!("updated customer {id}");
        }
        CustomerCommand::Delete { id } => {
            inv.customers_mut().delete(RecordId::new(id))?;
            tracing::info!(id, "customer deleted");
            println!("deleted customer {id}");
        }
        CustomerCommand::Get { id } => match inv.customers().get(RecordId::new(id))? {
            Some((_, customer)) => print_customer(&customer),
            None => println!("customer {id} not found"),
        },
        CustomerCommand::List { brand } => {
            for item in inv.customers().iter_active()? {
                let (_, customer) = item?;
                if let Some(ref brand) = brand {
                    if !customer.brand.eq_ignore_ascii_case(brand) {
                        continue;
                    }
                }
                print_customer(&customer);
            }
        }
    }

    Ok(())
}

fn print_customer(customer: &Customer) {
    println!(
        "{:<6} {:<12} {:<24} {:<12} {:<16} {}",
        customer.id, customer.name, customer.address, customer.brand, customer.model, customer.tel
    );
}
