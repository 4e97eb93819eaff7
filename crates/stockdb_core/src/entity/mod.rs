//! Inventory entity definitions.
//!
//! Each entity pairs a plain struct with a slot schema. Field widths are
//! part of the persisted file format and must not change.

pub mod customer;
pub mod notebook;
pub mod sale;

pub use customer::Customer;
pub use notebook::Notebook;
pub use sale::SaleEvent;
