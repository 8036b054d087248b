//! # Error Types
//!
//! This module defines all error types for the GridKey gallery.
//!
//! ## Error Types
//! - `MetadataError` - Catalog YAML that cannot be read or contains unsupported values
//! - `CatalogError` - Validation failures with the 1-indexed entry position
//! - `ResourceLoadFailure` - The audio player could not start a resource
//! - `UnknownMotif` - A requested motif id is not in the catalog
//! - `Serialization` - Card views could not be written as JSON
//! - `Io` - File access failures in the command-line shell
//!
//! A missing asset filename is not an error: it resolves to `None` and the
//! corresponding card control is disabled. A broken preview image is card-local
//! state (see [`crate::gallery::CardView::mark_image_failed`]).
//!
//! ## Usage
//! ```rust
//! use gridkey::{load_catalog, GridKeyError};
//!
//! let source = "motifs:\n  - id: A\n    key-signature: C Major\n    type: Free\n  - id: A\n    key-signature: C Minor\n    type: Step\n";
//! match load_catalog(source) {
//!     Ok(catalog) => println!("{} motifs", catalog.len()),
//!     Err(GridKeyError::CatalogError { position, message }) => {
//!         eprintln!("Motif {}: {}", position, message);
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridKeyError {
    /// Invalid catalog document.
    ///
    /// # Example
    /// ```
    /// # use gridkey::GridKeyError;
    /// let err = GridKeyError::MetadataError("Unknown motif type: Arpeggio".to_string());
    /// assert_eq!(err.to_string(), "Invalid catalog metadata: Unknown motif type: Arpeggio");
    /// ```
    #[error("Invalid catalog metadata: {0}")]
    MetadataError(String),

    /// Catalog validation error with the position of the offending entry.
    ///
    /// # Example
    /// ```
    /// # use gridkey::GridKeyError;
    /// let err = GridKeyError::CatalogError {
    ///     position: 4,
    ///     message: "Duplicate motif id 'GK-CM-FREE'".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Catalog error at motif 4: Duplicate motif id 'GK-CM-FREE'");
    /// ```
    #[error("Catalog error at motif {position}: {message}")]
    CatalogError { position: usize, message: String },

    /// The playback subsystem could not start a resource (network, codec, or
    /// autoplay policy). Recovered locally; the controller returns to idle.
    #[error("Failed to start '{asset}': {reason}")]
    ResourceLoadFailure { asset: String, reason: String },

    /// No motif in the catalog has the requested id.
    ///
    /// # Example
    /// ```
    /// # use gridkey::GridKeyError;
    /// let err = GridKeyError::UnknownMotif("nope".to_string());
    /// assert_eq!(err.to_string(), "No motif with id 'nope'");
    /// ```
    #[error("No motif with id '{0}'")]
    UnknownMotif(String),

    /// Card views could not be written as JSON.
    ///
    /// # Example
    /// ```
    /// # use gridkey::GridKeyError;
    /// let err = GridKeyError::Serialization("key must be a string".to_string());
    /// assert_eq!(err.to_string(), "Failed to serialize gallery: key must be a string");
    /// ```
    #[error("Failed to serialize gallery: {0}")]
    Serialization(String),

    #[error("I/O error on '{path}': {message}")]
    Io { path: String, message: String },
}
