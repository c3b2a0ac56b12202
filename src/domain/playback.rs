// SPDX-License-Identifier: MPL-2.0
//! Playback status reported by the background video.

/// Snapshot of the media handle's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlaybackStatus {
    pub is_playing: bool,
    /// Current position in milliseconds.
    pub position_millis: u64,
}

impl PlaybackStatus {
    #[must_use]
    pub fn new(is_playing: bool, position_millis: u64) -> Self {
        Self {
            is_playing,
            position_millis,
        }
    }
}
