//! # Catalog Module
//!
//! The ordered list of motif cards and the static resources they point at.
//!
//! ## Sub-modules
//! - `types` - MotifEntry, MotifType, MotifMeta, AssetRef, Catalog
//! - `assets` - Filename to URL-path resolution with percent-encoding
//! - `builtin` - The bundled GridKey motifs
//! - `loader` - Catalog files in YAML
//! - `validate` - Id uniqueness checks
//!
//! ## Asset Resolution
//! Each entry names an image file and an audio file. Both are resolved to a
//! locator under a fixed base directory (`/images/...`, `/audio/...`). A
//! missing filename resolves to `None`, which is distinct from a locator that
//! later fails to load: `None` disables the card's control up front, a broken
//! locator is only discovered when the resource is used.
//!
//! No bytes are ever fetched here; the catalog only holds references.
//!
//! ## Example
//! ```rust
//! use gridkey::catalog::{Catalog, MotifType};
//!
//! let catalog = Catalog::builtin();
//! let entry = catalog.get("GK-Cm-LEAP").unwrap();
//!
//! assert_eq!(entry.key_signature, "C Minor");
//! assert_eq!(entry.motif_type, MotifType::Leap);
//! assert_eq!(entry.image.as_ref().unwrap().locator, "/images/c%20minor%20LEAP.png");
//! ```

mod assets;
mod builtin;
mod loader;
mod types;
mod validate;

pub use assets::{encode_uri_component, resolve_asset};
pub use types::{AssetBases, AssetRef, Catalog, MotifEntry, MotifMeta, MotifType};
pub use validate::validate;
