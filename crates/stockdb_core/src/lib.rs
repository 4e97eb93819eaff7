//! # StockDB Core
//!
//! Fixed-length-record storage engine and inventory model.
//!
//! This crate provides:
//! - `RecordStore<R>` — a generic fixed-slot binary file manager with an
//!   in-memory identifier index and a FIFO free list of tombstoned slots
//! - The three inventory entities (customer, notebook, sale event) and
//!   their slot schemas
//! - The sale-status cascade that keeps notebook records consistent with
//!   sale events
//! - `Inventory` — a facade owning the three stores

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod cascade;
pub mod config;
pub mod entity;
pub mod error;
pub mod inventory;
pub mod record;
pub mod store;
pub mod types;

pub use cascade::CascadeOutcome;
pub use config::Config;
pub use entity::{Customer, Notebook, SaleEvent};
pub use error::{StoreError, StoreResult};
pub use inventory::Inventory;
pub use record::Record;
pub use store::{RecordStore, StoreStats};
pub use types::{RecordId, SlotOffset};

/// Current version of StockDB core.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
