//! Field catalog persistence.

use std::path::Path;

use tracing::warn;

use harvestplan_core::{FieldBook, FieldSpec};

use crate::StoreError;

/// Load a field catalog from a YAML list. A missing file yields an empty
/// catalog, like [`crate::load_workforce`].
pub fn load_field_book(path: &Path) -> Result<FieldBook, StoreError> {
    if !path.exists() {
        warn!(path = %path.display(), "field file not found, starting with empty catalog");
        return Ok(FieldBook::new());
    }

    let contents = std::fs::read_to_string(path)?;
    if contents.trim().is_empty() {
        return Ok(FieldBook::new());
    }
    let specs: Vec<FieldSpec> = serde_yaml::from_str(&contents)?;

    let mut book = FieldBook::new();
    for spec in specs {
        book.add_field(spec)?;
    }
    Ok(book)
}

/// Save a field catalog as a YAML list
pub fn save_field_book(path: &Path, book: &FieldBook) -> Result<(), StoreError> {
    std::fs::write(path, serde_yaml::to_string(book.specs())?)?;
    Ok(())
}
