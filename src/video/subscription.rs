// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for the background video.
//!
//! The subscription owns the [`AsyncDecoder`], hands a [`VideoHandle`] to the
//! app once the decoder is spawned, then forwards frames and status.

use super::decoder::{AsyncDecoder, DecoderEvent, DecoderSettings};
use super::handle::VideoHandle;
use crate::domain::playback::PlaybackStatus;
use crate::error::{Error, VideoError};
use iced::futures::SinkExt;
use iced::stream;
use std::path::PathBuf;
use std::sync::Arc;

/// Subscription identity: one decoder per video path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BackgroundVideoId(PathBuf);

/// Messages emitted by the background video subscription.
#[derive(Debug, Clone)]
pub enum VideoMessage {
    /// Decoder spawned; the handle controls it.
    Started(VideoHandle),

    Frame {
        rgba_data: Arc<Vec<u8>>,
        width: u32,
        height: u32,
    },

    Status(PlaybackStatus),

    Error(VideoError),
}

impl From<DecoderEvent> for VideoMessage {
    fn from(event: DecoderEvent) -> Self {
        match event {
            DecoderEvent::FrameReady(frame) => VideoMessage::Frame {
                rgba_data: frame.rgba_data,
                width: frame.width,
                height: frame.height,
            },
            DecoderEvent::Status(status) => VideoMessage::Status(status),
            DecoderEvent::Error(error) => VideoMessage::Error(error),
        }
    }
}

/// Plays `video_path` behind the overlays for as long as the subscription lives.
pub fn background_video(
    video_path: PathBuf,
    settings: DecoderSettings,
) -> iced::Subscription<VideoMessage> {
    iced::Subscription::run_with((BackgroundVideoId(video_path), settings), |data: &(BackgroundVideoId, DecoderSettings)| {
        let (BackgroundVideoId(video_path), settings) = data.clone();
        stream::channel(100, move |mut output: iced::futures::channel::mpsc::Sender<VideoMessage>| async move {
            match AsyncDecoder::new(&video_path, settings) {
                Ok(mut decoder) => {
                    let handle = VideoHandle::new(decoder.command_sender(), decoder.status_cell());
                    let _ = output.send(VideoMessage::Started(handle)).await;

                    while let Some(event) = decoder.recv_event().await {
                        if output.send(VideoMessage::from(event)).await.is_err() {
                            break;
                        }
                    }
                    log::debug!("background video subscription ended");
                }
                Err(err) => {
                    log::warn!("cannot play {}: {}", video_path.display(), err);
                    let video_error = match err {
                        Error::Video(video_error) => video_error,
                        other => VideoError::Other(other.to_string()),
                    };
                    let _ = output.send(VideoMessage::Error(video_error)).await;
                }
            }

            // Keep subscription alive but idle
            std::future::pending::<()>().await;
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video::DecodedFrame;

    #[test]
    fn subscription_id_follows_path() {
        let a = BackgroundVideoId(PathBuf::from("rain.mp4"));
        assert_eq!(a, BackgroundVideoId(PathBuf::from("rain.mp4")));
        assert_ne!(a, BackgroundVideoId(PathBuf::from("waves.mp4")));
    }

    #[test]
    fn frame_event_maps_to_frame_message() {
        let event = DecoderEvent::FrameReady(DecodedFrame {
            rgba_data: Arc::new(vec![0u8; 16]),
            width: 2,
            height: 2,
            pts_secs: 0.5,
        });
        assert!(matches!(
            VideoMessage::from(event),
            VideoMessage::Frame { width: 2, height: 2, .. }
        ));
    }

    #[test]
    fn status_and_error_events_pass_through() {
        let status = PlaybackStatus::new(true, 10);
        assert!(matches!(
            VideoMessage::from(DecoderEvent::Status(status)),
            VideoMessage::Status(s) if s == status
        ));
        assert!(matches!(
            VideoMessage::from(DecoderEvent::Error(VideoError::NoVideoStream)),
            VideoMessage::Error(VideoError::NoVideoStream)
        ));
    }
}
