mod persistence;
mod store;
pub mod taco;
pub mod tags;

use std::path::Path;

pub use persistence::{load_catalog_json, save_catalog_json};
pub use store::Catalog;
pub use taco::{load_taco_csv, parse_taco};
pub use tags::{derive_tags, is_unsafe_raw};

use crate::error::{NutriError, Result};

/// Load a catalog, picking the reader from the file extension
/// (`.csv` for a TACO table, `.json` for a saved catalog).
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => load_taco_csv(path),
        Some("json") => load_catalog_json(path),
        _ => Err(NutriError::InvalidInput(format!(
            "unsupported catalog format: {} (expected .csv or .json)",
            path.display()
        ))),
    }
}
