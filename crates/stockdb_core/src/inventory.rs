//! Inventory facade.

use std::fs;
use std::path::Path;

use crate::cascade::{self, CascadeOutcome};
use crate::config::Config;
use crate::entity::{Customer, Notebook, SaleEvent};
use crate::error::StoreResult;
use crate::record::Record;
use crate::store::RecordStore;
use crate::types::SlotOffset;

/// The three entity stores of one inventory, opened from one data
/// directory.
///
/// Each store is an independent, explicitly owned resource; `Inventory`
/// adds the one piece of cross-store behavior the system has, the
/// sale-status cascade. Sale events written through [`Inventory::add_sale`]
/// and [`Inventory::update_sale`] propagate their status to the referenced
/// notebook; a cascade that cannot be applied is surfaced in the returned
/// outcome and logged, never turned into a failure of the sale write.
///
/// # Example
///
/// ```rust,ignore
/// use stockdb_core::{Inventory, Notebook, RecordId};
///
/// let mut inv = Inventory::open(Path::new("data"))?;
/// inv.notebooks_mut().add(&notebook)?;
/// let (offset, outcome) = inv.add_sale(&sale)?;
/// ```
pub struct Inventory {
    customers: RecordStore<Customer>,
    notebooks: RecordStore<Notebook>,
    sales: RecordStore<SaleEvent>,
}

impl Inventory {
    /// Opens the inventory in `dir` with default file names, creating the
    /// directory and any missing store files.
    pub fn open(dir: &Path) -> StoreResult<Self> {
        Self::open_with_config(dir, Config::default())
    }

    /// Opens the inventory in `dir` with the given configuration.
    pub fn open_with_config(dir: &Path, config: Config) -> StoreResult<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            customers: RecordStore::open(dir.join(&config.customer_file))?,
            notebooks: RecordStore::open(dir.join(&config.notebook_file))?,
            sales: RecordStore::open(dir.join(&config.sale_file))?,
        })
    }

    /// The customer store.
    pub fn customers(&self) -> &RecordStore<Customer> {
        &self.customers
    }

    /// The customer store, mutably.
    pub fn customers_mut(&mut self) -> &mut RecordStore<Customer> {
        &mut self.customers
    }

    /// The notebook store.
    pub fn notebooks(&self) -> &RecordStore<Notebook> {
        &self.notebooks
    }

    /// The notebook store, mutably.
    pub fn notebooks_mut(&mut self) -> &mut RecordStore<Notebook> {
        &mut self.notebooks
    }

    /// The sale-event store.
    pub fn sales(&self) -> &RecordStore<SaleEvent> {
        &self.sales
    }

    /// The sale-event store, mutably.
    pub fn sales_mut(&mut self) -> &mut RecordStore<SaleEvent> {
        &mut self.sales
    }

    /// Adds a sale event and cascades its status to the referenced
    /// notebook.
    ///
    /// The two writes are not atomic: the sale is durable even when the
    /// cascade is not applied.
    ///
    /// # Errors
    ///
    /// Fails only if the sale write itself fails; cascade problems are
    /// reported through the returned outcome.
    pub fn add_sale(&mut self, sale: &SaleEvent) -> StoreResult<(SlotOffset, CascadeOutcome)> {
        let offset = self.sales.add(sale)?;
        let outcome = cascade::propagate_sale_status(&mut self.notebooks, sale);
        warn_if_not_applied(&outcome);
        Ok((offset, outcome))
    }

    /// Updates a sale event and cascades its status to the referenced
    /// notebook.
    ///
    /// # Errors
    ///
    /// Fails only if the sale write itself fails; cascade problems are
    /// reported through the returned outcome.
    pub fn update_sale(&mut self, sale: &SaleEvent) -> StoreResult<CascadeOutcome> {
        self.sales.update(sale.id(), sale)?;
        let outcome = cascade::propagate_sale_status(&mut self.notebooks, sale);
        warn_if_not_applied(&outcome);
        Ok(outcome)
    }
}

fn warn_if_not_applied(outcome: &CascadeOutcome) {
    match outcome {
        CascadeOutcome::Applied { .. } => {}
        CascadeOutcome::NotebookMissing { notebook_id } => {
            tracing::warn!(%notebook_id, "sale references a missing notebook; status not propagated");
        }
        CascadeOutcome::Failed { notebook_id, error } => {
            tracing::warn!(%notebook_id, %error, "notebook status cascade failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::notebook::{STATUS_IN_STOCK, STATUS_SOLD};
    use crate::types::RecordId;
    use tempfile::tempdir;

    fn dell_notebook() -> Notebook {
        Notebook {
            id: RecordId::new(1),
            brand: "Dell".into(),
            serial: "SN-0001".into(),
            release_year: 2023,
            price: 500.0,
            status: STATUS_IN_STOCK,
        }
    }

    fn sale(id: u32, notebook_id: u32, status: u32) -> SaleEvent {
        SaleEvent {
            id: RecordId::new(id),
            notebook_id: RecordId::new(notebook_id),
            customer_id: RecordId::new(3),
            buyer: "Alice".into(),
            sold_date: "2026-08-26".into(),
            status,
        }
    }

    #[test]
    fn sale_cascades_then_delete_frees_the_slot_for_reuse() {
        let dir = tempdir().unwrap();
        let mut inv = Inventory::open(dir.path()).unwrap();

        // Add notebook 1 (Dell, 500.00, in stock) and sell it.
        inv.notebooks_mut().add(&dell_notebook()).unwrap();
        let (_, outcome) = inv.add_sale(&sale(1, 1, STATUS_SOLD)).unwrap();
        assert!(outcome.is_applied());

        let (_, nb) = inv.notebooks().get(RecordId::new(1)).unwrap().unwrap();
        assert_eq!(nb.status, STATUS_SOLD);
        assert_eq!(nb.brand, "Dell");
        assert_eq!(nb.price, 500.0);

        // Delete notebook 1: get misses, stats shows one hole.
        inv.notebooks_mut().delete(RecordId::new(1)).unwrap();
        assert!(inv.notebooks().get(RecordId::new(1)).unwrap().is_none());
        assert_eq!(inv.notebooks().stats().unwrap().tombstoned, 1);

        // Notebook 2 occupies notebook 1's former slot.
        let reused = inv
            .notebooks_mut()
            .add(&Notebook {
                id: RecordId::new(2),
                ..dell_notebook()
            })
            .unwrap();
        assert_eq!(reused, SlotOffset::new(0));
    }

    #[test]
    fn sale_for_unknown_notebook_still_persists() {
        let dir = tempdir().unwrap();
        let mut inv = Inventory::open(dir.path()).unwrap();

        let (offset, outcome) = inv.add_sale(&sale(1, 42, STATUS_SOLD)).unwrap();
        assert_eq!(offset, SlotOffset::new(0));
        assert!(matches!(outcome, CascadeOutcome::NotebookMissing { .. }));
        assert!(inv.sales().contains(RecordId::new(1)));
    }

    #[test]
    fn updated_sale_recascades_to_its_notebook() {
        let dir = tempdir().unwrap();
        let mut inv = Inventory::open(dir.path()).unwrap();
        inv.notebooks_mut().add(&dell_notebook()).unwrap();
        inv.add_sale(&sale(1, 1, STATUS_SOLD)).unwrap();

        // A correction puts the notebook back in stock.
        let outcome = inv.update_sale(&sale(1, 1, STATUS_IN_STOCK)).unwrap();
        assert!(outcome.is_applied());
        let (_, nb) = inv.notebooks().get(RecordId::new(1)).unwrap().unwrap();
        assert_eq!(nb.status, STATUS_IN_STOCK);
    }

    #[test]
    fn stores_survive_reopen() {
        let dir = tempdir().unwrap();
        {
            let mut inv = Inventory::open(dir.path()).unwrap();
            inv.notebooks_mut().add(&dell_notebook()).unwrap();
            inv.add_sale(&sale(1, 1, STATUS_SOLD)).unwrap();
        }

        let inv = Inventory::open(dir.path()).unwrap();
        assert_eq!(inv.notebooks().len(), 1);
        assert_eq!(inv.sales().len(), 1);
        let (_, nb) = inv.notebooks().get(RecordId::new(1)).unwrap().unwrap();
        assert_eq!(nb.status, STATUS_SOLD);
    }
}
