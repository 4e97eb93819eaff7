//! Store inspection command.

use std::path::Path;

use stockdb_core::store::StoreStats;
use stockdb_core::Inventory;

/// Prints slot statistics for every store in the inventory.
pub fn run(data_dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let inv = Inventory::open(data_dir)?;

    println!("{:<12} {:>8} {:>8} {:>8}", "store", "slots", "active", "holes");
    print_row("customers", &inv.customers().stats()?);
    print_row("notebooks", &inv.notebooks().stats()?);
    print_row("sales", &inv.sales().stats()?);

    Ok(())
}

fn print_row(name: &str, stats: &StoreStats) {
    println!(
        "{:<12} {:>8} {:>8} {:>8}",
        name,
        stats.total_slots,
        stats.active,
        stats.holes()
    );
}
