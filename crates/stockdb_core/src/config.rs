//! Inventory configuration.

/// Configuration for opening an inventory.
///
/// Each entity is stored in a file with a fixed, well-known name inside
/// the data directory; file identity is established by name, not by file
/// content.
#[derive(Debug, Clone)]
pub struct Config {
    /// File name for the customer store.
    pub customer_file: String,

    /// File name for the notebook store.
    pub notebook_file: String,

    /// File name for the sale-event store.
    pub sale_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            customer_file: "customers.dat".to_string(),
            notebook_file: "notebooks.dat".to_string(),
            sale_file: "sales.dat".to_string(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the customer store file name.
    #[must_use]
    pub fn customer_file(mut self, name: impl Into<String>) -> Self {
        self.customer_file = name.into();
        self
    }

    /// Sets the notebook store file name.
    #[must_use]
    pub fn notebook_file(mut self, name: impl Into<String>) -> Self {
        self.notebook_file = name.into();
        self
    }

    /// Sets the sale-event store file name.
    #[must_use]
    pub fn sale_file(mut self, name: impl Into<String>) -> Self {
        self.sale_file = name.into();
        self
    }
}
