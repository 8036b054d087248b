//! # Playback Module
//!
//! Single-track audio playback for the gallery's play/pause buttons.
//!
//! ## Purpose
//! Every card has its own play button but the gallery shares one audio
//! handle. This module decides which recording (if any) is playing and
//! keeps that answer consistent while the audio subsystem reports back
//! asynchronously.
//!
//! ## Sub-modules
//! - `types` - PlaybackState, PlaybackEvent, StartTicket, EventOutcome
//! - `player` - The AudioPlayer trait and a logging player
//! - `controller` - The PlaybackController state machine
//!
//! ## Event Flow
//!
//! 1. A card calls [`PlaybackController::request_play`] with its audio ref
//! 2. The controller stops any active track and calls [`AudioPlayer::start`]
//!    with a fresh [`StartTicket`]
//! 3. The player later reports `Started`, `Ended`, or `StartFailed` for that
//!    ticket through [`PlaybackController::handle`]
//! 4. Cards ask [`PlaybackController::currently_playing`] to pick their icon
//!
//! Tickets make late outcomes harmless: a success for a track that was
//! already replaced is reported as [`EventOutcome::Stale`] and never brings
//! the old track back.
//!
//! ## Failures
//! Start failures are logged, leave the controller idle, and are never
//! retried. The user presses play again to retry.

mod controller;
mod player;
mod types;


pub use controller::PlaybackController;
pub use player::{AudioPlayer, LogPlayer};
pub use types::{ActiveTrack, EventOutcome, PlaybackEvent, PlaybackState, StartTicket};
