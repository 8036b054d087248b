pub mod catalog;
pub mod cli;
pub mod error;
pub mod gallery;
pub mod html;
pub mod playback;

pub use catalog::{AssetRef, Catalog, MotifEntry, MotifMeta, MotifType};
pub use error::*;
pub use gallery::{gallery_cards, CardView, PlayControl, Preview};
pub use html::to_html;
pub use playback::{AudioPlayer, PlaybackController, PlaybackEvent, PlaybackState};

/// The bundled motif catalog.
pub fn builtin_catalog() -> Catalog {
    Catalog::builtin()
}

/// Load and validate a catalog from YAML.
pub fn load_catalog(source: &str) -> Result<Catalog, GridKeyError> {
    Catalog::from_yaml(source)
}

/// Render the gallery page for `catalog` with `playing` marked as playing.
///
/// ```rust
/// let catalog = gridkey::builtin_catalog();
/// let html = gridkey::render_gallery(&catalog, None);
/// assert!(html.contains("GK-CM-FREE"));
/// ```
pub fn render_gallery(catalog: &Catalog, playing: Option<&AssetRef>) -> String {
    to_html(&gallery_cards(catalog, playing))
}
