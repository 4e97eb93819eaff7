//! StockDB CLI
//!
//! Command-line interface for the StockDB inventory tool.
//!
//! # Commands
//!
//! - `customer` / `notebook` / `sale` - Manage the three entity stores
//! - `inspect` - Display per-store slot statistics
//! - `report` - Write a human-readable inventory summary report

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// StockDB inventory command-line tool.
#[derive(Parser)]
#[command(name = "stockdb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the inventory data directory
    #[arg(global = true, short, long, default_value = "./stockdb_data")]
    data_dir: PathBuf,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage customer records
    Customer {
        #[command(subcommand)]
        command: commands::customer::CustomerCommand,
    },

    /// Manage notebook records
    Notebook {
        #[command(subcommand)]
        command: commands::notebook::NotebookCommand,
    },

    /// Manage sale events
    Sale {
        #[command(subcommand)]
        command: commands::sale::SaleCommand,
    },

    /// Display per-store slot statistics
    Inspect,

    /// Write the inventory summary report
    Report {
        /// Output file path
        #[arg(short, long, default_value = "report.txt")]
        output: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Customer { command } => commands::customer::run(&cli.data_dir, command)?,
        Commands::Notebook { command } => commands::notebook::run(&cli.data_dir, command)?,
        Commands::Sale { command } => commands::sale::run(&cli.data_dir, command)?,
        Commands::Inspect => commands::inspect::run(&cli.data_dir)?,
        Commands::Report { output } => commands::report::run(&cli.data_dir, &output)?,
        Commands::Version => {
            println!("StockDB CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("StockDB Core v{}", stockdb_core::VERSION);
        }
    }

    Ok(())
}
