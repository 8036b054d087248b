//! The bundled GridKey catalog.

use super::assets::resolve_asset;
use super::types::{AssetBases, Catalog, MotifEntry, MotifMeta, MotifType};

struct MotifDef {
    id: &'static str,
    key_signature: &'static str,
    motif_type: MotifType,
    image_file: Option<&'static str>,
    audio_file: Option<&'static str>,
    character: &'static str,
    suggestion: &'static str,
    constraint: Option<&'static str>,
}

const DEFS: &[MotifDef] = &[
    MotifDef {
        id: "GK-CM-FREE",
        key_signature: "C Major",
        motif_type: MotifType::Free,
        image_file: Some("CM FREE.png"),
        audio_file: Some("CM FREE.mp3"),
        character: "Open, exploratory",
        suggestion: "Re-orchestrate as texture",
        constraint: Some("Keep pulse steady"),
    },
    MotifDef {
        id: "GK-CM-STEP",
        key_signature: "C Major",
        motif_type: MotifType::Step,
        image_file: Some("CM STEP.png"),
        audio_file: Some("CM STEP.mp3"),
        character: "Stepwise, lyric",
        suggestion: "Sequence + register shift",
        constraint: Some("No leaps > 3rd"),
    },
    MotifDef {
        id: "GK-CM-LEAP",
        key_signature: "C Major",
        motif_type: MotifType::Leap,
        image_file: Some("CM Leap.png"),
        audio_file: Some("CM LEAP.mp3"),
        character: "Bright, wide",
        suggestion: "Octave displacement",
        constraint: Some("Land on chord tones"),
    },
    MotifDef {
        id: "GK-Cm-FREE",
        key_signature: "C Minor",
        motif_type: MotifType::Free,
        image_file: Some("c minor FREE.png"),
        audio_file: Some("c minor FREE.mp3"),
        character: "Dark, flexible",
        suggestion: "Change articulation",
        constraint: Some("Keep final tone stable"),
    },
    MotifDef {
        id: "GK-Cm-STEP",
        key_signature: "C Minor",
        motif_type: MotifType::Step,
        image_file: Some("c minor STEP.png"),
        audio_file: Some("c minor STEP.mp3"),
        character: "Melancholic, stepwise",
        suggestion: "Retrograde + reharmonize",
        constraint: Some("Avoid large leaps"),
    },
    MotifDef {
        id: "GK-Cm-LEAP",
        key_signature: "C Minor",
        motif_type: MotifType::Leap,
        image_file: Some("c minor LEAP.png"),
        audio_file: Some("c minor LEAP.mp3"),
        character: "Tense, angular",
        suggestion: "Fragment + repeat",
        constraint: Some("Return to tonic"),
    },
    MotifDef {
        id: "GK-FM-FREE",
        key_signature: "F Major",
        motif_type: MotifType::Free,
        image_file: Some("FM FREE.png"),
        audio_file: Some("FM FREE.mp3"),
        character: "Warm, open",
        suggestion: "Thin to a single line",
        constraint: Some("Keep dynamics flat"),
    },
    MotifDef {
        id: "GK-Fm-FREE",
        key_signature: "F Minor",
        motif_type: MotifType::Free,
        image_file: Some("f minor FREE.png"),
        audio_file: Some("f minor FREE.mp3"),
        character: "Dense, shadowed",
        suggestion: "Add pedal tone",
        constraint: Some("No ornament layer"),
    },
    MotifDef {
        id: "GK-AM-FREE",
        key_signature: "A Major",
        motif_type: MotifType::Free,
        image_file: Some("AM FREE.png"),
        audio_file: Some("AM FREE.mp3"),
        character: "Clear, bright",
        suggestion: "Swap register roles",
        constraint: Some("Avoid chromaticism"),
    },
    MotifDef {
        id: "GK-Am-FREE",
        key_signature: "A Minor",
        motif_type: MotifType::Free,
        image_file: Some("a minor FREE.png"),
        audio_file: Some("a minor FREE.mp3"),
        character: "Plainchant-like",
        suggestion: "Add rhythmic lattice",
        constraint: Some("No leading tone"),
    },
    // Recording only, no engraved score yet
    MotifDef {
        id: "C Minor Example",
        key_signature: "C Minor",
        motif_type: MotifType::Example,
        image_file: None,
        audio_file: Some("c minor EXAMPLE.mp3"),
        character: "Full phrase in context",
        suggestion: "Compare against the motifs",
        constraint: None,
    },
];

impl Catalog {
    /// The bundled catalog, resolved under the default asset directories.
    ///
    /// ```rust
    /// use gridkey::Catalog;
    ///
    /// let catalog = Catalog::builtin();
    /// assert_eq!(catalog.entries()[0].id, "GK-CM-FREE");
    /// assert_eq!(
    ///     catalog.entries()[0].audio.as_ref().unwrap().locator,
    ///     "/audio/CM%20FREE.mp3"
    /// );
    /// ```
    pub fn builtin() -> Self {
        Self::builtin_with_bases(&AssetBases::default())
    }

    /// The bundled catalog, resolved under custom asset directories.
    pub fn builtin_with_bases(bases: &AssetBases) -> Self {
        let entries = DEFS
            .iter()
            .map(|d| MotifEntry {
                id: d.id.to_string(),
                key_signature: d.key_signature.to_string(),
                motif_type: d.motif_type,
                meta: MotifMeta {
                    character: Some(d.character.to_string()),
                    suggestion: Some(d.suggestion.to_string()),
                    constraint: d.constraint.map(str::to_string),
                },
                image: resolve_asset(&bases.images, d.image_file),
                audio: resolve_asset(&bases.audio, d.audio_file),
            })
            .collect();
        Catalog::new(entries)
    }
}
