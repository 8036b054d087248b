use std::collections::HashSet;

use super::types::Catalog;
use crate::error::GridKeyError;

/// Validate a catalog.
///
/// Checks that every id is non-empty and unique. Ids are the rendering key
/// of each card, so a duplicate would make two cards indistinguishable.
pub fn validate(catalog: &Catalog) -> Result<(), GridKeyError> {
    let mut seen = HashSet::new();
    for (i, entry) in catalog.iter().enumerate() {
        if entry.id.is_empty() {
            return Err(GridKeyError::CatalogError {
                position: i + 1,
                message: "Motif id must not be empty".to_string(),
            });
        }
        if !seen.insert(entry.id.as_str()) {
            return Err(GridKeyError::CatalogError {
                position: i + 1,
                message: format!("Duplicate motif id '{}'", entry.id),
            });
        }
    }
    Ok(())
}
