//! Catalog loading from YAML.
//!
//! A catalog file replaces the bundled motifs:
//!
//! ```yaml
//! image-base: images
//! audio-base: audio
//! motifs:
//!   - id: GK-CM-FREE
//!     key-signature: C Major
//!     type: Free
//!     image-file: CM FREE.png
//!     audio-file: CM FREE.mp3
//!     character: Open, exploratory
//!     suggestion: Re-orchestrate as texture
//!     constraint: Keep pulse steady
//! ```
//!
//! `try` is accepted as an alias for `suggestion`.

use serde::Deserialize;
use tracing::debug;

use super::assets::resolve_asset;
use super::types::{AssetBases, Catalog, MotifEntry, MotifMeta, MotifType};
use super::validate::validate;
use crate::error::GridKeyError;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
struct RawCatalog {
    image_base: Option<String>,
    audio_base: Option<String>,
    #[serde(default)]
    motifs: Vec<RawMotif>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case")]
struct RawMotif {
    #[serde(default)]
    id: String,
    #[serde(default)]
    key_signature: String,
    #[serde(rename = "type")]
    motif_type: String,
    image_file: Option<String>,
    audio_file: Option<String>,
    character: Option<String>,
    #[serde(alias = "try")]
    suggestion: Option<String>,
    constraint: Option<String>,
}

impl Catalog {
    /// Load and validate a catalog from a YAML document.
    ///
    /// ```rust
    /// use gridkey::Catalog;
    ///
    /// let catalog = Catalog::from_yaml(r#"
    /// motifs:
    ///   - id: GK-CM-FREE
    ///     key-signature: C Major
    ///     type: Free
    ///     audio-file: CM FREE.mp3
    /// "#).unwrap();
    ///
    /// assert_eq!(catalog.len(), 1);
    /// assert!(catalog.entries()[0].image.is_none());
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, GridKeyError> {
        let raw: RawCatalog = if source.trim().is_empty() {
            RawCatalog::default()
        } else {
            serde_yaml::from_str(source)
                .map_err(|e| GridKeyError::MetadataError(e.to_string()))?
        };

        let defaults = AssetBases::default();
        let bases = AssetBases {
            images: raw.image_base.unwrap_or(defaults.images),
            audio: raw.audio_base.unwrap_or(defaults.audio),
        };

        let entries = raw
            .motifs
            .into_iter()
            .enumerate()
            .map(|(i, m)| convert_motif(m, i + 1, &bases))
            .collect::<Result<Vec<_>, _>>()?;

        let catalog = Catalog::new(entries);
        validate(&catalog)?;
        debug!(motifs = catalog.len(), "loaded catalog");
        Ok(catalog)
    }
}

fn convert_motif(
    raw: RawMotif,
    position: usize,
    bases: &AssetBases,
) -> Result<MotifEntry, GridKeyError> {
    let motif_type = MotifType::from_str(&raw.motif_type).ok_or_else(|| {
        GridKeyError::MetadataError(format!(
            "Unknown motif type '{}' at motif {}",
            raw.motif_type, position
        ))
    })?;

    Ok(MotifEntry {
        id: raw.id.trim().to_string(),
        key_signature: raw.key_signature.trim().to_string(),
        motif_type,
        meta: MotifMeta {
            character: non_empty(raw.character),
            suggestion: non_empty(raw.suggestion),
            constraint: non_empty(raw.constraint),
        },
        image: resolve_asset(&bases.images, raw.image_file.as_deref()),
        audio: resolve_asset(&bases.audio, raw.audio_file.as_deref()),
    })
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}
