// SPDX-License-Identifier: MPL-2.0
//! Background video engine.
//!
//! Decodes a muted, looping video with FFmpeg on a blocking Tokio task and
//! delivers frames and status to the UI through an Iced subscription. The
//! [`VideoHandle`] handed out by the subscription implements the playback
//! port used by the bridge.

mod decoder;
mod handle;
pub mod subscription;

pub use decoder::{
    AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent, DecoderSettings, StatusCell,
    StatusTracker,
};
pub use handle::VideoHandle;
pub use subscription::{background_video, BackgroundVideoId, VideoMessage};

use crate::error::{Error, Result, VideoError};
use std::sync::Once;

static FFMPEG_INIT: Once = Once::new();

/// Initializes FFmpeg once per process and silences its warnings.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Video(VideoError::Other(format!(
                "FFmpeg initialization failed: {e}"
            ))));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}
