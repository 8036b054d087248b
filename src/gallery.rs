//! # Gallery View Model
//!
//! Derives what each card shows from a catalog entry and the controller's
//! answer to "what is playing". Nothing here owns playback state; cards are
//! rebuilt whenever that answer changes.
//!
//! A broken preview image is the one piece of per-card state: it is recorded
//! on the card itself with [`CardView::mark_image_failed`] and never shared.

use serde::Serialize;

use crate::catalog::{AssetRef, Catalog, MotifEntry};

/// Text shown when a card has no character or suggestion.
pub const EMPTY_FIELD: &str = "-";

/// What the preview area of a card shows.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "src", rename_all = "lowercase")]
pub enum Preview {
    Image(String),
    Placeholder,
}

/// State of a card's play button.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlayControl {
    /// The motif has no recording
    Hidden,
    Play,
    Pause,
}

/// Everything needed to draw one card.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
    pub id: String,
    pub key_signature: String,
    pub motif_type: &'static str,
    pub character: String,
    pub suggestion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,
    pub preview: Preview,
    pub play: PlayControl,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

impl CardView {
    pub fn new(entry: &MotifEntry, playing: Option<&AssetRef>) -> Self {
        let preview = match &entry.image {
            Some(image) => Preview::Image(image.locator.clone()),
            None => Preview::Placeholder,
        };
        let play = match &entry.audio {
            None => PlayControl::Hidden,
            Some(audio) if Some(audio) == playing => PlayControl::Pause,
            Some(_) => PlayControl::Play,
        };

        Self {
            id: entry.id.clone(),
            key_signature: entry.key_signature.clone(),
            motif_type: entry.motif_type.label(),
            character: entry
                .meta
                .character
                .clone()
                .unwrap_or_else(|| EMPTY_FIELD.to_string()),
            suggestion: entry
                .meta
                .suggestion
                .clone()
                .unwrap_or_else(|| EMPTY_FIELD.to_string()),
            constraint: entry.meta.constraint.clone(),
            preview,
            play,
            audio: entry.audio.as_ref().map(|a| a.locator.clone()),
        }
    }

    /// The preview image could not be loaded; show the placeholder instead.
    pub fn mark_image_failed(&mut self) {
        self.preview = Preview::Placeholder;
    }

    pub fn is_playing(&self) -> bool {
        self.play == PlayControl::Pause
    }

    pub fn can_play(&self) -> bool {
        self.play != PlayControl::Hidden
    }
}

/// Build one card per catalog entry, in catalog order.
pub fn gallery_cards(catalog: &Catalog, playing: Option<&AssetRef>) -> Vec<CardView> {
    catalog.iter().map(|e| CardView::new(e, playing)).collect()
}
