//! Integration tests for the GridKey gallery
//!
//! Drives the catalog, controller, and card views together the way a
//! presentation layer does.

use std::collections::HashSet;

use gridkey::catalog::resolve_asset;
use gridkey::playback::{EventOutcome, StartTicket};
use gridkey::{
    builtin_catalog, gallery_cards, load_catalog, render_gallery, AssetRef, AudioPlayer,
    GridKeyError, PlayControl, PlaybackController, PlaybackEvent, Preview,
};

/// Player that accepts every start and remembers nothing.
struct SilentPlayer;

impl AudioPlayer for SilentPlayer {
    fn start(&mut self, _asset: &AssetRef, _ticket: StartTicket) -> Result<(), GridKeyError> {
        Ok(())
    }

    fn stop(&mut self, _ticket: StartTicket) {}
}

fn playing_ids(controller: &PlaybackController<SilentPlayer>) -> Vec<String> {
    gallery_cards(&builtin_catalog(), controller.currently_playing())
        .into_iter()
        .filter(|c| c.play == PlayControl::Pause)
        .map(|c| c.id)
        .collect()
}

#[test]
fn test_builtin_ids_are_unique() {
    let catalog = builtin_catalog();
    let ids: HashSet<&str> = catalog.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), catalog.len());
}

#[test]
fn test_scenario_play_then_toggle_off() {
    let catalog = builtin_catalog();
    let entry = catalog.get("GK-CM-FREE").unwrap();
    assert_eq!(entry.audio, resolve_asset("audio", Some("CM FREE.mp3")));

    let mut controller = PlaybackController::new(SilentPlayer);
    controller.request_play(entry.audio.as_ref());
    assert_eq!(controller.currently_playing(), entry.audio.as_ref());
    assert_eq!(playing_ids(&controller), vec!["GK-CM-FREE"]);

    controller.request_play(entry.audio.as_ref());
    assert!(controller.state().is_idle());
    assert!(playing_ids(&controller).is_empty());
}

#[test]
fn test_scenario_example_card_without_image() {
    let catalog = builtin_catalog();
    let cards = gallery_cards(&catalog, None);
    let card = cards.iter().find(|c| c.id == "C Minor Example").unwrap();

    assert_eq!(card.preview, Preview::Placeholder);
    assert_eq!(card.play, PlayControl::Play);

    let mut controller = PlaybackController::new(SilentPlayer);
    let entry = catalog.get("C Minor Example").unwrap();
    controller.request_play(entry.audio.as_ref());
    assert_eq!(playing_ids(&controller), vec!["C Minor Example"]);
}

#[test]
fn test_scenario_stale_confirmation() {
    let catalog = builtin_catalog();
    let r1 = catalog.get("GK-Cm-FREE").unwrap().audio.clone();
    let r2 = catalog.get("GK-Am-FREE").unwrap().audio.clone();

    let mut controller = PlaybackController::new(SilentPlayer);
    let t1 = controller.request_play(r1.as_ref()).unwrap();
    let t2 = controller.request_play(r2.as_ref()).unwrap();

    assert_eq!(controller.handle(PlaybackEvent::Started(t1)), EventOutcome::Stale);
    assert_eq!(controller.currently_playing(), r2.as_ref());
    assert_eq!(playing_ids(&controller), vec!["GK-Am-FREE"]);

    assert_eq!(controller.handle(PlaybackEvent::Started(t2)), EventOutcome::Applied);
    assert_eq!(controller.handle(PlaybackEvent::Ended(t2)), EventOutcome::Applied);
    assert!(playing_ids(&controller).is_empty());
}

#[test]
fn test_at_most_one_card_playing_across_clicks() {
    let catalog = builtin_catalog();
    let mut controller = PlaybackController::new(SilentPlayer);

    for entry in catalog.iter().chain(catalog.iter().rev()) {
        controller.request_play(entry.audio.as_ref());
        assert!(playing_ids(&controller).len() <= 1);
    }
}

#[test]
fn test_card_without_audio_never_changes_playback() {
    let catalog = load_catalog(
        r#"
motifs:
  - { id: Sounding, key-signature: C Major, type: Free, audio-file: a.mp3 }
  - { id: Mute, key-signature: C Major, type: Free }
"#,
    )
    .unwrap();
    let sounding = catalog.get("Sounding").unwrap();
    let mute = catalog.get("Mute").unwrap();

    let mut controller = PlaybackController::new(SilentPlayer);
    controller.request_play(sounding.audio.as_ref());
    controller.request_play(mute.audio.as_ref());

    assert_eq!(controller.currently_playing(), sounding.audio.as_ref());
    let cards = gallery_cards(&catalog, controller.currently_playing());
    assert_eq!(cards[0].play, PlayControl::Pause);
    assert_eq!(cards[1].play, PlayControl::Hidden);
}

#[test]
fn test_failure_leaves_other_cards_untouched() {
    let catalog = builtin_catalog();
    let audio = catalog.get("GK-FM-FREE").unwrap().audio.clone();

    let mut controller = PlaybackController::new(SilentPlayer);
    let ticket = controller.request_play(audio.as_ref()).unwrap();
    let outcome = controller.handle(PlaybackEvent::StartFailed {
        ticket,
        reason: "404".to_string(),
    });

    assert!(matches!(
        outcome,
        EventOutcome::Failed(GridKeyError::ResourceLoadFailure { .. })
    ));
    let cards = gallery_cards(&catalog, controller.currently_playing());
    assert!(cards.iter().all(|c| c.play != PlayControl::Pause));
    assert_eq!(cards.iter().filter(|c| c.play == PlayControl::Play).count(), catalog.len());
}

#[test]
fn test_render_marks_playing_card() {
    let catalog = builtin_catalog();
    let audio = catalog.get("GK-Fm-FREE").unwrap().audio.clone();
    let html = render_gallery(&catalog, audio.as_ref());

    assert!(html.contains("data-audio=\"/audio/f%20minor%20FREE.mp3\" aria-pressed=\"true\""));
    assert_eq!(html.matches("aria-pressed=\"false\"").count(), catalog.len() - 1);
}

#[test]
fn test_duplicate_ids_rejected_from_file() {
    let result = load_catalog(
        r#"
motifs:
  - { id: GK-CM-FREE, key-signature: C Major, type: Free }
  - { id: GK-CM-FREE, key-signature: C Major, type: Step }
"#,
    );
    assert_eq!(
        result.unwrap_err().to_string(),
        "Catalog error at motif 2: Duplicate motif id 'GK-CM-FREE'"
    );
}
