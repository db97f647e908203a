use std::path::Path;

use crate::{errors::Result, portfolio::Portfolio, storage::json_backend};

/// Writes the provided portfolio to an arbitrary path, staging through a temporary file.
pub fn save_portfolio_to_file(portfolio: &Portfolio, path: &Path) -> Result<()> {
    json_backend::save_portfolio_to_path(portfolio, path)
}

/// Loads a portfolio snapshot from disk, returning structured errors on failure.
pub fn load_portfolio_from_file(path: &Path) -> Result<Portfolio> {
    json_backend::load_portfolio_from_path(path)
}
