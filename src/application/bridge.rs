// SPDX-License-Identifier: MPL-2.0
//! Playback bridge.
//!
//! Translates play/pause/seek intents into calls on a [`PlaybackHandle`] and
//! keeps the local `is_playing` flag that drives the play/pause icon. The flag
//! is only written by a successful user action or by a status notification
//! from the handle.
//!
//! Media control is best effort: every handle error is passed to
//! [`discard_playback_error`] and dropped. Nothing is retried or shown to the
//! user.

use super::port::{PlaybackError, PlaybackHandle};
use crate::domain::playback::PlaybackStatus;

/// Foreground/background signal from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Active,
    Background,
}

/// Target position for a relative seek, clamped at zero.
///
/// There is no upper clamp: the engine stops or loops at the end.
#[must_use]
pub fn seek_target(position_millis: u64, delta_millis: i64) -> u64 {
    let position = i64::try_from(position_millis).unwrap_or(i64::MAX);
    position.saturating_add(delta_millis).max(0).unsigned_abs()
}

/// The one place where playback failures go.
pub fn discard_playback_error(action: &str, error: &PlaybackError) {
    log::debug!("ignoring playback failure during {}: {}", action, error);
}

/// Read model for playback state plus the handle it is reconciled with.
#[derive(Default)]
pub struct PlaybackBridge {
    handle: Option<Box<dyn PlaybackHandle>>,
    is_playing: bool,
    position_millis: u64,
    resume_on_active: bool,
}

impl std::fmt::Debug for PlaybackBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackBridge")
            .field("attached", &self.handle.is_some())
            .field("is_playing", &self.is_playing)
            .field("position_millis", &self.position_millis)
            .field("resume_on_active", &self.resume_on_active)
            .finish()
    }
}

impl PlaybackBridge {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Connects a handle, replacing any previous one.
    pub fn attach(&mut self, handle: Box<dyn PlaybackHandle>) {
        match handle.status() {
            Ok(status) => self.on_status(status),
            Err(err) => discard_playback_error("attach", &err),
        }
        self.handle = Some(handle);
    }

    /// Drops the handle. Later requests fail with [`PlaybackError::Unavailable`].
    pub fn detach(&mut self) {
        self.handle = None;
        self.is_playing = false;
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// Local flag used by the play/pause icon.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Last position reported by the handle.
    #[must_use]
    pub fn position_millis(&self) -> u64 {
        self.position_millis
    }

    fn handle_mut(&mut self) -> Result<&mut Box<dyn PlaybackHandle>, PlaybackError> {
        self.handle.as_mut().ok_or(PlaybackError::Unavailable)
    }

    /// Pauses when the handle reports playing, plays otherwise.
    ///
    /// The local flag only changes when the whole request succeeds.
    pub fn toggle_play(&mut self) {
        let result = self.handle_mut().and_then(|handle| {
            if handle.status()?.is_playing {
                handle.pause()?;
                Ok(false)
            } else {
                handle.play()?;
                Ok(true)
            }
        });

        match result {
            Ok(playing) => self.is_playing = playing,
            Err(err) => discard_playback_error("toggle", &err),
        }
    }

    /// Moves by `delta_millis` from the handle's current position.
    pub fn seek(&mut self, delta_millis: i64) {
        let result = self.handle_mut().and_then(|handle| {
            let target = seek_target(handle.status()?.position_millis, delta_millis);
            handle.set_position(target)?;
            Ok(target)
        });

        match result {
            Ok(target) => self.position_millis = target,
            Err(err) => discard_playback_error("seek", &err),
        }
    }

    /// Reconciles the read model with a status notification.
    pub fn on_status(&mut self, status: PlaybackStatus) {
        self.is_playing = status.is_playing;
        self.position_millis = status.position_millis;
    }

    /// Pauses on background; resumes on return if playback was running.
    pub fn on_lifecycle(&mut self, lifecycle: Lifecycle) {
        match lifecycle {
            Lifecycle::Background => {
                // Captured now so the pause notification cannot erase it.
                self.resume_on_active = self.is_playing;
                if let Err(err) = self.handle_mut().and_then(|handle| handle.pause()) {
                    discard_playback_error("background pause", &err);
                }
            }
            Lifecycle::Active => {
                if !std::mem::take(&mut self.resume_on_active) {
                    return;
                }
                match self.handle_mut().and_then(|handle| handle.play()) {
                    Ok(()) => self.is_playing = true,
                    Err(err) => discard_playback_error("foreground resume", &err),
                }
            }
        }
    }
}
