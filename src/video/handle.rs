// SPDX-License-Identifier: MPL-2.0
//! Playback handle backed by the decoder task.

use super::decoder::{DecoderCommand, StatusCell};
use crate::application::port::{PlaybackError, PlaybackHandle};
use crate::domain::playback::PlaybackStatus;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Cloneable control surface for a running [`AsyncDecoder`](super::AsyncDecoder).
#[derive(Clone)]
pub struct VideoHandle {
    commands: mpsc::UnboundedSender<DecoderCommand>,
    status: Arc<StatusCell>,
}

impl VideoHandle {
    #[must_use]
    pub fn new(commands: mpsc::UnboundedSender<DecoderCommand>, status: Arc<StatusCell>) -> Self {
        Self { commands, status }
    }

    fn send(&self, command: DecoderCommand) -> Result<(), PlaybackError> {
        if !self.status.is_running() {
            return Err(PlaybackError::Disconnected);
        }
        self.commands
            .send(command)
            .map_err(|_| PlaybackError::Disconnected)
    }

    /// Asks the decoder task to release its resources.
    pub fn stop(&self) {
        let _ = self.commands.send(DecoderCommand::Stop);
    }
}

impl std::fmt::Debug for VideoHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoHandle")
            .field("running", &self.status.is_running())
            .finish()
    }
}

impl PlaybackHandle for VideoHandle {
    fn play(&mut self) -> Result<(), PlaybackError> {
        self.send(DecoderCommand::Play)
    }

    fn pause(&mut self) -> Result<(), PlaybackError> {
        self.send(DecoderCommand::Pause)
    }

    fn status(&self) -> Result<PlaybackStatus, PlaybackError> {
        if self.status.is_running() {
            Ok(self.status.load())
        } else {
            Err(PlaybackError::Disconnected)
        }
    }

    fn set_position(&mut self, position_millis: u64) -> Result<(), PlaybackError> {
        self.send(DecoderCommand::Seek { position_millis })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle() -> (VideoHandle, mpsc::UnboundedReceiver<DecoderCommand>, Arc<StatusCell>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let status = Arc::new(StatusCell::default());
        (VideoHandle::new(tx, Arc::clone(&status)), rx, status)
    }

    #[test]
    fn commands_reach_the_decoder_channel() {
        let (mut handle, mut rx, _status) = handle();
        handle.play().unwrap();
        handle.set_position(2_500).unwrap();
        handle.pause().unwrap();

        assert_eq!(rx.try_recv().unwrap(), DecoderCommand::Play);
        assert_eq!(
            rx.try_recv().unwrap(),
            DecoderCommand::Seek {
                position_millis: 2_500
            }
        );
        assert_eq!(rx.try_recv().unwrap(), DecoderCommand::Pause);
    }

    #[test]
    fn status_mirrors_the_cell() {
        let (handle, _rx, status) = handle();
        status.store(PlaybackStatus::new(true, 900));
        assert_eq!(handle.status().unwrap(), PlaybackStatus::new(true, 900));
    }

    #[test]
    fn stopped_decoder_reports_disconnected() {
        let (mut handle, _rx, status) = handle();
        status.mark_stopped();
        assert_eq!(handle.status(), Err(PlaybackError::Disconnected));
        assert_eq!(handle.play(), Err(PlaybackError::Disconnected));
    }

    #[test]
    fn dropped_receiver_reports_disconnected() {
        let (mut handle, rx, _status) = handle();
        drop(rx);
        assert_eq!(handle.pause(), Err(PlaybackError::Disconnected));
    }
}
