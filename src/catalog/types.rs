//! Catalog type definitions

use serde::Serialize;

/// Melodic type of a motif.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum MotifType {
    /// Unconstrained contour
    Free,
    /// Mostly stepwise motion
    Step,
    /// Built around wide intervals
    Leap,
    /// Worked example in a key rather than a motif type
    Example,
}

impl MotifType {
    /// Parse a display label ("Free", "STEP", "leap", ...).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "free" => Some(MotifType::Free),
            "step" => Some(MotifType::Step),
            "leap" => Some(MotifType::Leap),
            "example" => Some(MotifType::Example),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MotifType::Free => "Free",
            MotifType::Step => "Step",
            MotifType::Leap => "Leap",
            MotifType::Example => "Example",
        }
    }
}

/// Descriptive text shown on a card. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct MotifMeta {
    pub character: Option<String>,
    pub suggestion: Option<String>,
    pub constraint: Option<String>,
}

/// A resolved reference to a static resource (score image or audio file).
///
/// # Fields
/// - `locator`: URL path under the base directory, filename percent-encoded
/// - `file_name`: the filename as written in the catalog
///
/// Two references are the same resource when their locators match.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AssetRef {
    pub locator: String,
    pub file_name: String,
}

impl std::fmt::Display for AssetRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.locator)
    }
}

/// Base directories that image and audio filenames are resolved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBases {
    pub images: String,
    pub audio: String,
}

impl Default for AssetBases {
    fn default() -> Self {
        Self {
            images: "images".to_string(),
            audio: "audio".to_string(),
        }
    }
}

/// One card in the gallery.
///
/// `image` is `None` when the motif has no score preview; `audio` is `None`
/// when it has no recording, which disables the play control.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MotifEntry {
    pub id: String,
    pub key_signature: String,
    pub motif_type: MotifType,
    pub meta: MotifMeta,
    pub image: Option<AssetRef>,
    pub audio: Option<AssetRef>,
}

/// Ordered motif collection. Order is display order.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<MotifEntry>,
}

impl Catalog {
    /// Wrap entries without validation. See [`super::validate`].
    pub fn new(entries: Vec<MotifEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[MotifEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MotifEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&MotifEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Find the entry whose recording is `audio`.
    pub fn find_by_audio(&self, audio: &AssetRef) -> Option<&MotifEntry> {
        self.entries.iter().find(|e| e.audio.as_ref() == Some(audio))
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.id.as_str()).collect()
    }
}
