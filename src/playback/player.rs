//! The audio subsystem seam.

use tracing::info;

use super::types::StartTicket;
use crate::catalog::AssetRef;
use crate::error::GridKeyError;

/// A single-resource audio player driven by [`super::PlaybackController`].
///
/// Calls never block. `start` only initiates playback; whether it actually
/// started, failed, or later reached its end is reported back to the
/// controller as a [`super::PlaybackEvent`] carrying the same ticket.
///
/// Implementations back onto whatever really produces sound (a browser audio
/// element, an output stream); tests use a recording fake.
pub trait AudioPlayer {
    /// Begin loading and playing `asset` from its start.
    ///
    /// An `Err` means playback could not even be initiated and no event will
    /// follow for `ticket`.
    fn start(&mut self, asset: &AssetRef, ticket: StartTicket) -> Result<(), GridKeyError>;

    /// Pause the resource started under `ticket` and rewind it to the start.
    ///
    /// Any outcome still in flight for `ticket` is discarded by the controller.
    fn stop(&mut self, ticket: StartTicket);
}

impl<P: AudioPlayer + ?Sized> AudioPlayer for Box<P> {
    fn start(&mut self, asset: &AssetRef, ticket: StartTicket) -> Result<(), GridKeyError> {
        (**self).start(asset, ticket)
    }

    fn stop(&mut self, ticket: StartTicket) {
        (**self).stop(ticket)
    }
}

/// Player without an audio device: records requests in the log only.
///
/// Used by the command-line shell, which renders a static snapshot and has
/// nothing to play through.
#[derive(Debug, Default)]
pub struct LogPlayer {
    started: Vec<(StartTicket, AssetRef)>,
}

impl LogPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every start request seen so far, oldest first.
    pub fn started(&self) -> &[(StartTicket, AssetRef)] {
        &self.started
    }
}

impl AudioPlayer for LogPlayer {
    fn start(&mut self, asset: &AssetRef, ticket: StartTicket) -> Result<(), GridKeyError> {
        info!(ticket = ticket.0, asset = %asset, "start");
        self.started.push((ticket, asset.clone()));
        Ok(())
    }

    fn stop(&mut self, ticket: StartTicket) {
        info!(ticket = ticket.0, "stop");
    }
}
