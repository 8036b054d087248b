//! Single-track playback controller
//!
//! Owns the one audio handle of the session and enforces that at most one
//! resource is active at any instant.

use tracing::{debug, error, info, warn};

use super::player::AudioPlayer;
use super::types::{ActiveTrack, EventOutcome, PlaybackEvent, PlaybackState, StartTicket};
use crate::catalog::AssetRef;
use crate::error::GridKeyError;

/// Play/pause controller shared by every card in the gallery.
///
/// # State Machine
/// - Idle, `request_play(r)` → Playing(r)
/// - Playing(r), `request_play(r)` → Idle (toggle off)
/// - Playing(r), `request_play(r2)` → Playing(r2), after stopping r
/// - Playing(r), `Ended` for r's ticket → Idle
/// - Playing(r), `StartFailed` for r's ticket → Idle
/// - any state, `request_play(None)` → unchanged
///
/// The previous resource is stopped when the new request arrives, not when
/// the new start is confirmed, so two resources are never active together
/// even while a start is in flight. Outcomes for any ticket other than the
/// active one are ignored.
///
/// # Example
/// ```rust
/// use gridkey::catalog::resolve_asset;
/// use gridkey::playback::{LogPlayer, PlaybackController, PlaybackEvent};
///
/// let free = resolve_asset("audio", Some("CM FREE.mp3"));
/// let mut controller = PlaybackController::new(LogPlayer::new());
///
/// let ticket = controller.request_play(free.as_ref()).unwrap();
/// assert_eq!(controller.currently_playing(), free.as_ref());
///
/// controller.handle(PlaybackEvent::Ended(ticket));
/// assert_eq!(controller.currently_playing(), None);
/// ```
#[derive(Debug)]
pub struct PlaybackController<P: AudioPlayer> {
    player: P,
    state: PlaybackState,
    next_ticket: u64,
}

impl<P: AudioPlayer> PlaybackController<P> {
    pub fn new(player: P) -> Self {
        Self {
            player,
            state: PlaybackState::Idle,
            next_ticket: 1,
        }
    }

    /// Play `asset`, or pause it if it is the active track.
    ///
    /// `None` (a card without audio) is a no-op. Returns the ticket of the
    /// start attempt when one was initiated.
    pub fn request_play(&mut self, asset: Option<&AssetRef>) -> Option<StartTicket> {
        let Some(asset) = asset else {
            debug!("play requested without audio, ignoring");
            return None;
        };

        if let PlaybackState::Playing(track) = std::mem::take(&mut self.state) {
            self.player.stop(track.ticket);
            if track.asset == *asset {
                info!(asset = %asset, "paused");
                return None;
            }
            debug!(from = %track.asset, to = %asset, "switching track");
        }

        let ticket = self.issue_ticket();
        match self.player.start(asset, ticket) {
            Ok(()) => {
                info!(asset = %asset, ticket = ticket.0, "playing");
                self.state = PlaybackState::Playing(ActiveTrack {
                    asset: asset.clone(),
                    ticket,
                    confirmed: false,
                });
                Some(ticket)
            }
            Err(e) => {
                error!(asset = %asset, "audio init failed: {}", e);
                None
            }
        }
    }

    /// Apply an outcome reported by the player.
    pub fn handle(&mut self, event: PlaybackEvent) -> EventOutcome {
        let active_ticket = self.state.active().map(|t| t.ticket);
        if active_ticket != Some(event.ticket()) {
            debug!(ticket = event.ticket().0, "dropping stale playback event");
            return EventOutcome::Stale;
        }

        match event {
            PlaybackEvent::Started(_) => {
                if let PlaybackState::Playing(track) = &mut self.state {
                    track.confirmed = true;
                }
                EventOutcome::Applied
            }
            PlaybackEvent::Ended(_) => {
                if let PlaybackState::Playing(track) = std::mem::take(&mut self.state) {
                    info!(asset = %track.asset, "ended");
                }
                EventOutcome::Applied
            }
            PlaybackEvent::StartFailed { reason, .. } => {
                let asset = match std::mem::take(&mut self.state) {
                    PlaybackState::Playing(track) => track.asset.to_string(),
                    PlaybackState::Idle => String::new(),
                };
                warn!(asset = %asset, "audio play failed: {}", reason);
                EventOutcome::Failed(GridKeyError::ResourceLoadFailure { asset, reason })
            }
        }
    }

    /// The resource currently playing, if any.
    pub fn currently_playing(&self) -> Option<&AssetRef> {
        self.state.active().map(|t| &t.asset)
    }

    pub fn is_playing(&self, asset: &AssetRef) -> bool {
        self.currently_playing() == Some(asset)
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Stop whatever is active and return to idle.
    pub fn stop(&mut self) {
        if let PlaybackState::Playing(track) = std::mem::take(&mut self.state) {
            self.player.stop(track.ticket);
            info!(asset = %track.asset, "stopped");
        }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    fn issue_ticket(&mut self) -> StartTicket {
        let ticket = StartTicket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }
}
