pub mod json_backend;

use crate::{errors::Result, portfolio::Portfolio};

/// Abstraction over persistence backends capable of storing portfolios and snapshots.
pub trait PortfolioStore: Send + Sync {
    /// One-time bootstrap: creates the layout and upgrades the store marker. Must run
    /// before any other call.
    fn initialize(&self) -> Result<()>;
    fn save(&self, portfolio: &Portfolio, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<Portfolio>;
    fn list(&self) -> Result<Vec<String>>;
    fn list_backups(&self, name: &str) -> Result<Vec<String>>;
    fn backup(&self, portfolio: &Portfolio, name: &str, note: Option<&str>) -> Result<String>;
    fn restore(&self, name: &str, backup_name: &str) -> Result<Portfolio>;
}

pub use json_backend::{JsonStorage, STORE_SCHEMA_VERSION};
