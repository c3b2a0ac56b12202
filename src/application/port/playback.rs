// SPDX-License-Identifier: MPL-2.0
//! Media playback port definition.
//!
//! This module defines the [`PlaybackHandle`] trait the playback bridge drives.
//! The background video engine implements it; tests use an in-memory mock.
//!
//! # Design Notes
//!
//! - Calls are requests: the handle may apply them asynchronously
//! - Methods are not `async` - status changes come back as messages
//! - Uses domain types only ([`PlaybackStatus`])

use crate::domain::playback::PlaybackStatus;
use std::fmt;

/// Errors reported by a playback handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// No media is loaded yet.
    Unavailable,
    /// The media engine has shut down.
    Disconnected,
    /// The engine refused the request.
    Rejected(String),
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::Unavailable => write!(f, "playback handle not available"),
            PlaybackError::Disconnected => write!(f, "playback engine disconnected"),
            PlaybackError::Rejected(reason) => write!(f, "playback request rejected: {}", reason),
        }
    }
}

impl std::error::Error for PlaybackError {}

/// Port for controlling a playing media source.
///
/// Implementations must be `Send` so the handle can be moved out of the
/// subscription that created it.
pub trait PlaybackHandle: Send {
    /// Requests playback to start or resume.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackError`] if the request cannot be delivered.
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Requests playback to pause.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackError`] if the request cannot be delivered.
    fn pause(&mut self) -> Result<(), PlaybackError>;

    /// Returns the most recent status known to the handle.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackError`] if no status is available.
    fn status(&self) -> Result<PlaybackStatus, PlaybackError>;

    /// Requests a jump to an absolute position.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackError`] if the request cannot be delivered.
    fn set_position(&mut self, position_millis: u64) -> Result<(), PlaybackError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn PlaybackHandle) {}

    struct Stub {
        status: PlaybackStatus,
    }

    impl PlaybackHandle for Stub {
        fn play(&mut self) -> Result<(), PlaybackError> {
            self.status.is_playing = true;
            Ok(())
        }

        fn pause(&mut self) -> Result<(), PlaybackError> {
            self.status.is_playing = false;
            Ok(())
        }

        fn status(&self) -> Result<PlaybackStatus, PlaybackError> {
            Ok(self.status)
        }

        fn set_position(&mut self, position_millis: u64) -> Result<(), PlaybackError> {
            self.status.position_millis = position_millis;
            Ok(())
        }
    }

    #[test]
    fn stub_handle_through_trait_object() {
        let mut handle: Box<dyn PlaybackHandle> = Box::new(Stub {
            status: PlaybackStatus::default(),
        });
        handle.play().unwrap();
        handle.set_position(1_500).unwrap();

        assert_eq!(handle.status().unwrap(), PlaybackStatus::new(true, 1_500));
    }

    #[test]
    fn error_display() {
        assert_eq!(
            PlaybackError::Rejected("closed".into()).to_string(),
            "playback request rejected: closed"
        );
    }
}
