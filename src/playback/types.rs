//! Playback state and event type definitions

use serde::Serialize;

use crate::catalog::AssetRef;
use crate::error::GridKeyError;

/// Identifies one start attempt.
///
/// The controller issues a fresh ticket every time it asks the player to
/// start a resource. Asynchronous outcomes reported by the player carry the
/// ticket of the attempt they belong to, so an outcome for a superseded
/// attempt can be recognized and dropped.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StartTicket(pub u64);

/// Something the audio player reports back after a start was initiated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// Playback of the ticket's resource is actually progressing
    Started(StartTicket),
    /// The resource played to its natural end
    Ended(StartTicket),
    /// The resource could not be started (missing file, codec, autoplay policy)
    StartFailed { ticket: StartTicket, reason: String },
}

impl PlaybackEvent {
    pub fn ticket(&self) -> StartTicket {
        match self {
            PlaybackEvent::Started(t) | PlaybackEvent::Ended(t) => *t,
            PlaybackEvent::StartFailed { ticket, .. } => *ticket,
        }
    }
}

/// The track the controller currently considers active.
///
/// # Fields
/// - `asset`: the audio resource
/// - `ticket`: the start attempt that produced it
/// - `confirmed`: whether the player has reported `Started` for the ticket yet
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveTrack {
    pub asset: AssetRef,
    pub ticket: StartTicket,
    pub confirmed: bool,
}

/// Controller state: nothing playing, or exactly one active track.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing(ActiveTrack),
}

impl PlaybackState {
    pub fn active(&self) -> Option<&ActiveTrack> {
        match self {
            PlaybackState::Idle => None,
            PlaybackState::Playing(track) => Some(track),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, PlaybackState::Idle)
    }
}

/// Result of feeding a [`PlaybackEvent`] to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum EventOutcome {
    /// The event belonged to the active ticket and was applied
    Applied,
    /// The event belonged to a superseded or stopped attempt; nothing changed
    Stale,
    /// The active start failed; the controller is idle again
    Failed(GridKeyError),
}
