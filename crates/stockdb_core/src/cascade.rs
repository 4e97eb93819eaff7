//! Sale-status cascade.
//!
//! Whenever a sale event is created or modified, the status of the
//! notebook it references must follow the sale's status. The cascade is
//! a read-modify-write through the notebook store's public API, keyed by
//! the notebook's own identifier — never by the slot offset a lookup
//! returns. It never creates a notebook and never fails the sale-event
//! write that triggered it.

use crate::entity::{Notebook, SaleEvent};
use crate::error::StoreError;
use crate::store::RecordStore;
use crate::types::RecordId;

/// Outcome of one cascade attempt.
///
/// Only `Applied` means the notebook now carries the sale's status; the
/// other outcomes are non-fatal and leave both stores exactly as they
/// were before the attempt.
#[derive(Debug)]
pub enum CascadeOutcome {
    /// The referenced notebook's status now matches the sale's status.
    Applied {
        /// The notebook that was rewritten.
        notebook_id: RecordId,
    },
    /// The sale references a notebook that does not currently exist.
    NotebookMissing {
        /// The identifier that was not found.
        notebook_id: RecordId,
    },
    /// Reading or rewriting the notebook failed.
    Failed {
        /// The notebook the cascade targeted.
        notebook_id: RecordId,
        /// The store error that stopped the cascade.
        error: StoreError,
    },
}

impl CascadeOutcome {
    /// Returns `true` if the notebook status was rewritten.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Propagates `sale`'s status to the notebook it references.
///
/// If the notebook is found, a new notebook record identical in every
/// field except the status is written back through `update` under the
/// notebook's identifier. A missing notebook or a failed store operation
/// is reported in the outcome rather than returned as an error.
pub fn propagate_sale_status(
    notebooks: &mut RecordStore<Notebook>,
    sale: &SaleEvent,
) -> CascadeOutcome {
    let notebook_id = sale.notebook_id;

    let found = match notebooks.get(notebook_id) {
        Ok(found) => found,
        Err(error) => return CascadeOutcome::Failed { notebook_id, error },
    };
    let Some((_, notebook)) = found else {
        return CascadeOutcome::NotebookMissing { notebook_id };
    };

    let updated = Notebook {
        status: sale.status,
        ..notebook
    };
    match notebooks.update(notebook_id, &updated) {
        Ok(()) => CascadeOutcome::Applied { notebook_id },
        Err(error) => CascadeOutcome::Failed { notebook_id, error },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::notebook::{STATUS_IN_STOCK, STATUS_SOLD};
    use tempfile::tempdir;

    fn sale_for(notebook_id: u32, status: u32) -> SaleEvent {
        SaleEvent {
            id: RecordId::new(1),
            notebook_id: RecordId::new(notebook_id),
            customer_id: RecordId::new(3),
            buyer: "Alice".into(),
            sold_date: "2026-08-26".into(),
            status,
        }
    }

    #[test]
    fn cascade_rewrites_only_the_status_field() {
        let dir = tempdir().unwrap();
        let mut notebooks = RecordStore::open(dir.path().join("nb.dat")).unwrap();
        notebooks
            .add(&Notebook {
                id: RecordId::new(1),
                brand: "Dell".into(),
                serial: "SN-0001".into(),
                release_year: 2023,
                price: 500.0,
                status: STATUS_IN_STOCK,
            })
            .unwrap();

        let outcome = propagate_sale_status(&mut notebooks, &sale_for(1, STATUS_SOLD));
        assert!(outcome.is_applied());

        let (_, notebook) = notebooks.get(RecordId::new(1)).unwrap().unwrap();
        assert_eq!(notebook.status, STATUS_SOLD);
        assert_eq!(notebook.brand, "Dell");
        assert_eq!(notebook.serial, "SN-0001");
        assert_eq!(notebook.price, 500.0);
        assert_eq!(notebook.release_year, 2023);
    }

    #[test]
    fn cascade_to_missing_notebook_is_a_noop() {
        let dir = tempdir().unwrap();
        let mut notebooks: RecordStore<Notebook> =
            RecordStore::open(dir.path().join("nb.dat")).unwrap();

        let outcome = propagate_sale_status(&mut notebooks, &sale_for(42, STATUS_SOLD));
        assert!(matches!(
            outcome,
            CascadeOutcome::NotebookMissing { notebook_id } if notebook_id == RecordId::new(42)
        ));
        assert!(notebooks.is_empty());
        assert_eq!(notebooks.stats().unwrap().total_slots, 0);
    }
}
