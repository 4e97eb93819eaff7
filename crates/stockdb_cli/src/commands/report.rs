//! Summary report command.
//!
//! Renders the inventory into a plain-text report: a bordered table of
//! active notebooks joined with their buyer's contact details, followed
//! by slot statistics, price statistics, and per-brand counts.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::Local;

use stockdb_core::entity::notebook::STATUS_IN_STOCK;
use stockdb_core::{Inventory, RecordId};

/// One column of the report table: header text, cell width, and whether
/// cells are right-aligned.
struct Column {
    header: &'static str,
    width: usize,
    right: bool,
}

const COLUMNS: &[Column] = &[
    Column { header: "NotebookID", width: 12, right: true },
    Column { header: "CusID", width: 8, right: true },
    Column { header: "Tel", width: 12, right: false },
    Column { header: "Address", width: 24, right: false },
    Column { header: "Brand", width: 12, right: false },
    Column { header: "Serial", width: 16, right: false },
    Column { header: "Year", width: 6, right: true },
    Column { header: "Price", width: 12, right: true },
    Column { header: "Status", width: 10, right: false },
    Column { header: "Sold", width: 6, right: false },
];

/// Builds the report and writes it to `output`.
pub fn run(data_dir: &Path, output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let inv = Inventory::open(data_dir)?;
    let text = build_report(&inv)?;
    fs::write(output, &text)?;
    tracing::info!(path = %output.display(), "report written");
    println!("report written to {}", output.display());
    Ok(())
}

fn build_report(inv: &Inventory) -> Result<String, Box<dyn std::error::Error>> {
    // Customer contact details by identifier.
    let mut customers = BTreeMap::new();
    for item in inv.customers().iter_active()? {
        let (_, customer) = item?;
        customers.insert(customer.id, customer);
    }

    // Buyer of each notebook. Active slots come back in file order, so a
    // notebook sold more than once keeps its most recent sale.
    let mut buyer_of: BTreeMap<RecordId, RecordId> = BTreeMap::new();
    for item in inv.sales().iter_active()? {
        let (_, sale) = item?;
        buyer_of.insert(sale.notebook_id, sale.customer_id);
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut prices: Vec<f32> = Vec::new();
    let mut brands: BTreeMap<String, u64> = BTreeMap::new();
    let (mut in_stock, mut sold) = (0u64, 0u64);

    for item in inv.notebooks().iter_active()? {
        let (_, nb) = item?;

        if nb.status == STATUS_IN_STOCK {
            in_stock += 1;
        } else {
            sold += 1;
        }
        prices.push(nb.price);
        *brands.entry(nb.brand.clone()).or_insert(0) += 1;

        let buyer_id = buyer_of.get(&nb.id);
        let contact = buyer_id.and_then(|id| customers.get(id));
        rows.push(vec![
            nb.id.to_string(),
            buyer_id.map(ToString::to_string).unwrap_or_default(),
            contact.map(|c| c.tel.clone()).unwrap_or_default(),
            contact.map(|c| c.address.clone()).unwrap_or_default(),
            nb.brand.clone(),
            nb.serial.clone(),
            nb.release_year.to_string(),
            format!("{:.2}", nb.price),
            if nb.status == STATUS_IN_STOCK { "Active" } else { "Sold Out" }.to_string(),
            if nb.status == STATUS_IN_STOCK { "No" } else { "Yes" }.to_string(),
        ]);
    }

    let stats = inv.notebooks().stats()?;
    let now = Local::now().format("%Y-%m-%d %H:%M:%S (%:z)");

    let mut out = String::new();
    out.push_str("StockDB - Inventory Summary Report\n");
    out.push_str(&format!("Generated At: {now}\n"));
    out.push_str(&format!("App Version: {}\n", stockdb_core::VERSION));
    out.push_str("Endianness: Little-Endian\n");
    out.push_str("Encoding: UTF-8 (fixed-length)\n\n");

    out.push_str(&render_table(&rows));
    out.push('\n');

    out.push_str("\nSummary:\n");
    out.push_str(&format!("- Total Notebooks (slots): {}\n", stats.total_slots));
    out.push_str(&format!("- Active Notebooks: {}\n", stats.active));
    out.push_str(&format!("- Deleted Notebooks: {}\n", stats.holes()));
    out.push_str(&format!("- Currently Sold: {sold}\n"));
    out.push_str(&format!("- Available Now: {in_stock}\n"));

    out.push_str("\nPrice Statistics (active only):\n");
    if prices.is_empty() {
        out.push_str("- Min : N/A\n- Max : N/A\n- Avg : N/A\n");
    } else {
        let min = prices.iter().copied().fold(f32::INFINITY, f32::min);
        let max = prices.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let avg = prices.iter().sum::<f32>() / prices.len() as f32;
        out.push_str(&format!("- Min : {min:.2}\n"));
        out.push_str(&format!("- Max : {max:.2}\n"));
        out.push_str(&format!("- Avg : {avg:.2}\n"));
    }

    out.push_str("\nNotebooks by Brand (active only):\n");
    if brands.is_empty() {
        out.push_str("- (none)\n");
    } else {
        for (brand, count) in &brands {
            out.push_str(&format!("- {brand} : {count}\n"));
        }
    }

    Ok(out)
}

/// Renders `rows` as a bordered fixed-width table. Cells longer than
/// their column are clipped.
fn render_table(rows: &[Vec<String>]) -> String {
    if rows.is_empty() {
        return "(No active records)".to_string();
    }

    let border: String = {
        let mut line = String::from("+");
        for col in COLUMNS {
            line.push_str(&"-".repeat(col.width));
            line.push('+');
        }
        line
    };

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(border.clone());
    lines.push(format_row(
        &COLUMNS.iter().map(|c| c.header.to_string()).collect::<Vec<_>>(),
        false,
    ));
    lines.push(border.clone());
    for row in rows {
        lines.push(format_row(row, true));
    }
    lines.push(border);
    lines.join("\n")
}

fn format_row(cells: &[String], aligned: bool) -> String {
    let mut line = String::from("|");
    for (cell, col) in cells.iter().zip(COLUMNS) {
        let mut text = cell.clone();
        if text.chars().count() > col.width {
            text = text.chars().take(col.width).collect();
        }
        let padded = if aligned && col.right {
            format!("{text:>width$}", width = col.width)
        } else {
            format!("{text:<width$}", width = col.width)
        };
        line.push_str(&padded);
        line.push('|');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdb_core::entity::notebook::STATUS_SOLD;
    use stockdb_core::{Customer, Notebook, SaleEvent};
    use tempfile::tempdir;

    fn seed(inv: &mut Inventory) {
        inv.customers_mut()
            .add(&Customer {
                id: RecordId::new(7),
                name: "Alice".into(),
                address: "12 High St".into(),
                brand: "Dell".into(),
                model: "XPS 13".into(),
                tel: "0812345678".into(),
            })
            .unwrap();
        inv.notebooks_mut()
            .add(&Notebook {
                id: RecordId::new(1),
                brand: "Dell".into(),
                serial: "SN-0001".into(),
                release_year: 2023,
                price: 500.0,
                status: STATUS_IN_STOCK,
            })
            .unwrap();
        inv.add_sale(&SaleEvent {
            id: RecordId::new(1),
            notebook_id: RecordId::new(1),
            customer_id: RecordId::new(7),
            buyer: "Alice".into(),
            sold_date: "2026-08-26".into(),
            status: STATUS_SOLD,
        })
        .unwrap();
    }

    #[test]
    fn report_joins_notebook_to_buyer_contact() {
        let dir = tempdir().unwrap();
        let mut inv = Inventory::open(dir.path()).unwrap();
        seed(&mut inv);

        let text = build_report(&inv).unwrap();
        assert!(text.contains("0812345678"));
        assert!(text.contains("12 High St"));
        assert!(text.contains("Sold Out"));
        assert!(text.contains("- Min : 500.00"));
        assert!(text.contains("- Dell : 1"));
    }

    #[test]
    fn report_on_empty_inventory_has_placeholders() {
        let dir = tempdir().unwrap();
        let inv = Inventory::open(dir.path()).unwrap();

        let text = build_report(&inv).unwrap();
        assert!(text.contains("(No active records)"));
        assert!(text.contains("- Min : N/A"));
        assert!(text.contains("- (none)"));
    }

    #[test]
    fn table_clips_cells_to_column_width() {
        let rows = vec![vec![
            "1".to_string(),
            "7".to_string(),
            "0812345678".to_string(),
            "an address far longer than its column".to_string(),
            "Dell".to_string(),
            "SN-0001".to_string(),
            "2023".to_string(),
            "500.00".to_string(),
            "Active".to_string(),
            "No".to_string(),
        ]];
        let table = render_table(&rows);
        for line in table.lines() {
            assert_eq!(line.chars().count(), table.lines().next().unwrap().chars().count());
        }
        assert!(table.contains("an address far longer th"));
    }
}
