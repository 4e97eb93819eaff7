//! Notebook commands.

use clap::Subcommand;
use std::path::Path;

use stockdb_core::entity::notebook::STATUS_IN_STOCK;
use stockdb_core::{Inventory, Notebook, RecordId};

/// Operations on the notebook store.
#[derive(Subcommand)]
pub enum NotebookCommand {
    /// Add a new notebook
    Add {
        /// Notebook identifier (positive integer)
        #[arg(value_parser = super::id_parser())]
        id: u32,

        /// Manufacturer brand
        #[arg(long)]
        brand: String,

        /// Serial number
        #[arg(long, default_value = "")]
        serial: String,

        /// Release year
        #[arg(long, default_value_t = 0)]
        year: i32,

        /// Sale price
        #[arg(long, value_parser = super::parse_price)]
        price: f32,

        /// Stock status: 1 = in stock, 0 = sold
        #[arg(long, value_parser = super::status_parser(), default_value_t = STATUS_IN_STOCK)]
        status: u32,
    },

    /// Replace an existing notebook record
    Update {
        /// Notebook identifier
        #[arg(value_parser = super::id_parser())]
        id: u32,

        /// Manufacturer brand
        #[arg(long)]
        brand: String,

        /// Serial number
        #[arg(long, default_value = "")]
        serial: String,

        /// Release year
        #[arg(long, default_value_t = 0)]
        year: i32,

        /// Sale price
        #[arg(long, value_parser = super::parse_price)]
        price: f32,

        /// Stock status: 1 = in stock, 0 = sold
        #[arg(long, value_parser = super::status_parser())]
        status: u32,
    },

    /// Delete a notebook
    Delete {
        /// Notebook identifier
        #[arg(value_parser = super::id_parser())]
        id: u32,
    },

    /// Show one notebook
    Get {
        /// Notebook identifier
        #[arg(value_parser = super::id_parser())]
        id: u32,
    },

    /// List active notebooks
    List {
        /// Only show notebooks of this brand
        #[arg(long)]
        brand: Option<String>,

        /// Only show notebooks with this status
        #[arg(long, value_parser = super::status_parser())]
        status: Option<u32>,

        /// Lowest price to include
        #[arg(long, value_parser = super::parse_price)]
        min_price: Option<f32>,

        /// Highest price to include
        #[arg(long, value_parser = super::parse_price)]
        max_price: Option<f32>,
    },
}

/// Runs a notebook command against the inventory in `data_dir`.
pub fn run(data_dir: &Path, command: NotebookCommand) -> Result<(), Box<dyn std::error::Error>> {
    let mut inv = Inventory::open(data_dir)?;

    match command {
        NotebookCommand::Add {
            id,
            brand,
            serial,
            year,
            price,
            status,
        } => {
            let notebook = Notebook {
                id: RecordId::new(id),
                brand,
                serial,
                release_year: year,
                price,
                status,
            };
            let offset = inv.notebooks_mut().add(&notebook)?;
            tracing::info!(id, %offset, "notebook added");
            println!("added notebook {id} at offset {offset}");
        }
        NotebookCommand::Update {
            id,
            brand,
            serial,
            year,
            price,
            status,
        } => {
            let notebook = Notebook {
                id: RecordId::new(id),
                brand,
                serial,
                release_year: year,
                price,
                status,
            };
            inv.notebooks_mut().update(RecordId::new(id), &notebook)?;
            tracing::info!(id, "notebook updated");
            println!("updated notebook {id}");
        }
        NotebookCommand::Delete { id } => {
            inv.notebooks_mut().delete(RecordId::new(id))?;
            tracing::info!(id, "notebook deleted");
            println!("deleted notebook {id}");
        }
        NotebookCommand::Get { id } => match inv.notebooks().get(RecordId::new(id))? {
            Some((_, notebook)) => print_notebook(&notebook),
            None => println!("notebook {id} not found"),
        },
        NotebookCommand::List {
            brand,
            status,
            min_price,
            max_price,
        } => {
            // Tolerate swapped bounds.
            let (lo, hi) = match (min_price, max_price) {
                (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
                bounds => bounds,
            };
            for item in inv.notebooks().iter_active()? {
                let (_, notebook) = item?;
                if let Some(ref brand) = brand {
                    if !notebook.brand.eq_ignore_ascii_case(brand) {
                        continue;
                    }
                }
                if status.is_some_and(|s| notebook.status != s) {
                    continue;
                }
                if lo.is_some_and(|lo| notebook.price < lo) {
                    continue;
                }
                if hi.is_some_and(|hi| notebook.price > hi) {
                    continue;
                }
                print_notebook(&notebook);
            }
        }
    }

    Ok(())
}

fn print_notebook(notebook: &Notebook) {
    let status = if notebook.status == STATUS_IN_STOCK {
        "in stock"
    } else {
        "sold"
    };
    println!(
        "{:<6} {:<12} {:<16} {:<6} {:>10.2} {}",
        notebook.id, notebook.brand, notebook.serial, notebook.release_year, notebook.price, status
    );
}
