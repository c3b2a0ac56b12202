// SPDX-License-Identifier: MPL-2.0
//! Async background video decoder using FFmpeg.
//!
//! Decoding runs on a blocking Tokio task and talks to the UI through two
//! channels: unbounded commands in, a small bounded queue of events out.
//! Playback status is also mirrored into a [`StatusCell`] so a handle can
//! answer status queries synchronously.

use crate::config::STATUS_UPDATE_INTERVAL_MS;
use crate::domain::playback::PlaybackStatus;
use crate::error::{Error, Result, VideoError};
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// A decoded video frame ready for display.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba_data: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
    /// Presentation timestamp in seconds.
    pub pts_secs: f64,
}

/// Commands sent to the decoder task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecoderCommand {
    Play,
    Pause,
    /// Jump to an absolute position; playback state is kept.
    Seek { position_millis: u64 },
    /// Stop decoding and release FFmpeg resources.
    Stop,
}

/// Events sent from the decoder to the UI.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    FrameReady(DecodedFrame),
    Status(PlaybackStatus),
    Error(VideoError),
}

/// How the decoder behaves once opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecoderSettings {
    pub autoplay: bool,
    /// Restart at zero instead of stopping at the end of the stream.
    pub loop_enabled: bool,
    pub status_interval: Duration,
}

impl Default for DecoderSettings {
    fn default() -> Self {
        Self {
            autoplay: true,
            loop_enabled: true,
            status_interval: Duration::from_millis(STATUS_UPDATE_INTERVAL_MS),
        }
    }
}

/// Latest status written by the decoder thread.
#[derive(Debug)]
pub struct StatusCell {
    is_playing: AtomicBool,
    position_millis: AtomicU64,
    running: AtomicBool,
}

impl Default for StatusCell {
    fn default() -> Self {
        Self {
            is_playing: AtomicBool::new(false),
            position_millis: AtomicU64::new(0),
            running: AtomicBool::new(true),
        }
    }
}

impl StatusCell {
    pub fn store(&self, status: PlaybackStatus) {
        self.position_millis
            .store(status.position_millis, Ordering::Relaxed);
        self.is_playing.store(status.is_playing, Ordering::Release);
    }

    #[must_use]
    pub fn load(&self) -> PlaybackStatus {
        let is_playing = self.is_playing.load(Ordering::Acquire);
        PlaybackStatus::new(is_playing, self.position_millis.load(Ordering::Relaxed))
    }

    /// Marks the decoder thread as gone.
    pub fn mark_stopped(&self) {
        self.is_playing.store(false, Ordering::Release);
        self.running.store(false, Ordering::Release);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }
}

/// Decides when a status notification is due: on every change of the
/// playing flag or seek, and at a fixed interval while playing.
#[derive(Debug, Clone)]
pub struct StatusTracker {
    interval: Duration,
    last_sent: Option<(PlaybackStatus, Instant)>,
}

impl StatusTracker {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_sent: None,
        }
    }

    /// Returns `true` and records `status` when it should be published.
    pub fn should_publish(&mut self, status: PlaybackStatus, now: Instant) -> bool {
        let due = match self.last_sent {
            None => true,
            Some((previous, _)) if previous.is_playing != status.is_playing => true,
            Some((_, sent_at)) => now.saturating_duration_since(sent_at) >= self.interval,
        };
        if due {
            self.last_sent = Some((status, now));
        }
        due
    }

    /// Forces the next status to be published, e.g. after a seek.
    pub fn invalidate(&mut self) {
        self.last_sent = None;
    }
}

fn secs_to_millis(secs: f64) -> u64 {
    if secs.is_finite() && secs > 0.0 {
        (secs * 1000.0).round() as u64
    } else {
        0
    }
}

/// Async video decoder that runs in a Tokio blocking task.
pub struct AsyncDecoder {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,
    /// Bounded to keep memory flat when the UI falls behind.
    event_rx: mpsc::Receiver<DecoderEvent>,
    status: Arc<StatusCell>,
}

impl AsyncDecoder {
    /// Opens `video_path` and starts the decoder task.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist. Failures while opening
    /// the stream are reported later as [`DecoderEvent::Error`].
    pub fn new<P: AsRef<Path>>(video_path: P, settings: DecoderSettings) -> Result<Self> {
        let path = video_path.as_ref().to_path_buf();

        if !path.exists() {
            return Err(Error::Video(VideoError::IoError(format!(
                "Video file not found: {}",
                path.display()
            ))));
        }

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(2);
        let status = Arc::new(StatusCell::default());
        let task_status = Arc::clone(&status);

        // FFmpeg contexts are not Send, so everything lives on one blocking thread
        tokio::task::spawn_blocking(move || {
            let error_tx = event_tx.clone();
            let result =
                Self::decoder_loop_blocking(&path, command_rx, event_tx, settings, &task_status);
            task_status.mark_stopped();
            match result {
                Ok(()) => log::debug!("decoder for {} stopped", path.display()),
                Err(err) => {
                    log::error!("decoder for {} failed: {}", path.display(), err);
                    let video_error = match err {
                        Error::Video(video_error) => video_error,
                        other => VideoError::Other(other.to_string()),
                    };
                    let _ = error_tx.blocking_send(DecoderEvent::Error(video_error));
                }
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
            status,
        })
    }

    /// A sender that can be handed to other owners.
    #[must_use]
    pub fn command_sender(&self) -> mpsc::UnboundedSender<DecoderCommand> {
        self.command_tx.clone()
    }

    #[must_use]
    pub fn status_cell(&self) -> Arc<StatusCell> {
        Arc::clone(&self.status)
    }

    /// Receives the next event. Returns `None` once the task has ended.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }


    fn decoder_loop_blocking(
        video_path: &Path,
        mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
        event_tx: mpsc::Sender<DecoderEvent>,
        settings: DecoderSettings,
        status_cell: &StatusCell,
    ) -> Result<()> {
        super::init_ffmpeg()?;

        let mut ictx = ffmpeg_next::format::input(video_path)
            .map_err(|e| classify(Stage::Open, e))?;

        let input = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or(Error::Video(VideoError::NoVideoStream))?;
        let video_stream_index = input.index();
        let codec = input.parameters().id();

        let context_decoder =
            ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
                .map_err(|e| classify(Stage::Decoder(codec), e))?;
        let mut decoder = context_decoder
            .decoder()
            .video()
            .map_err(|e| classify(Stage::Decoder(codec), e))?;

        let width = decoder.width();
        let height = decoder.height();

        let mut scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGBA,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| classify(Stage::Scaler, e))?;

        let time_base = input.time_base();
        let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

        log::info!(
            "playing {} ({}x{}, loop: {})",
            video_path.display(),
            width,
            height,
            settings.loop_enabled
        );

        let mut is_playing = settings.autoplay;
        let mut playback_start_time: Option<Instant> = is_playing.then(Instant::now);
        let mut first_pts: Option<f64> = None;
        let mut current_pts_secs: f64 = 0.0;
        // Decode one frame after a seek while paused so the picture follows
        let mut decode_single_frame = !is_playing;
        // Guards against looping forever over a stream with no frames
        let mut decoded_since_restart = false;
        let mut tracker = StatusTracker::new(settings.status_interval);

        let publish = |tracker: &mut StatusTracker, is_playing: bool, pts_secs: f64| {
            let status = PlaybackStatus::new(is_playing, secs_to_millis(pts_secs));
            status_cell.store(status);
            if tracker.should_publish(status, Instant::now()) {
                let _ = event_tx.blocking_send(DecoderEvent::Status(status));
            }
        };
        publish(&mut tracker, is_playing, current_pts_secs);

        loop {
            match command_rx.try_recv() {
                Ok(DecoderCommand::Play) => {
                    if !is_playing && current_pts_secs > 0.0 {
                        // AV_TIME_BASE is microseconds
                        let timestamp = (current_pts_secs * 1_000_000.0) as i64;
                        if let Err(e) = ictx.seek(timestamp, ..timestamp) {
                            log::warn!("resume seek failed: {}", e);
                        } else {
                            decoder.flush();
                        }
                    }
                    is_playing = true;
                    playback_start_time = Some(Instant::now());
                    first_pts = None;
                    publish(&mut tracker, is_playing, current_pts_secs);
                }
                Ok(DecoderCommand::Pause) => {
                    is_playing = false;
                    playback_start_time = None;
                    first_pts = None;
                    publish(&mut tracker, is_playing, current_pts_secs);
                }
                Ok(DecoderCommand::Seek { position_millis }) => {
                    let target_secs = position_millis as f64 / 1000.0;
                    let timestamp = (target_secs * 1_000_000.0) as i64;
                    if let Err(e) = ictx.seek(timestamp, ..timestamp) {
                        log::warn!("seek to {} ms failed: {}", position_millis, e);
                    } else {
                        decoder.flush();
                        current_pts_secs = target_secs;
                        playback_start_time = Some(Instant::now());
                        first_pts = None;
                        decoded_since_restart = false;
                        if !is_playing {
                            decode_single_frame = true;
                        }
                        tracker.invalidate();
                        publish(&mut tracker, is_playing, current_pts_secs);
                    }
                }
                Ok(DecoderCommand::Stop) | Err(mpsc::error::TryRecvError::Disconnected) => {
                    break;
                }
                Err(mpsc::error::TryRecvError::Empty) => {}
            }

            if !is_playing && !decode_single_frame {
                std::thread::sleep(Duration::from_millis(10));
                continue;
            }

            let mut frame_decoded = false;
            for (stream, packet) in ictx.packets() {
                if stream.index() != video_stream_index {
                    continue;
                }

                if let Err(e) = decoder.send_packet(&packet) {
                    log::debug!("packet send failed: {}", e);
                    continue;
                }

                let mut decoded_frame = ffmpeg_next::frame::Video::empty();
                if decoder.receive_frame(&mut decoded_frame).is_ok() {
                    let mut rgb_frame = ffmpeg_next::frame::Video::empty();
                    if let Err(e) = scaler.run(&decoded_frame, &mut rgb_frame) {
                        log::debug!("scaling failed: {}", e);
                        continue;
                    }

                    let rgba_data = Self::extract_rgba_data(&rgb_frame);

                    let pts_secs = decoded_frame
                        .timestamp()
                        .map_or(0.0, |pts| pts as f64 * time_base_f64);

                    // Frame pacing relative to the first frame after (re)start
                    if let Some(start_time) = playback_start_time.filter(|_| is_playing) {
                        let first = *first_pts.get_or_insert(pts_secs);
                        let frame_delay = (pts_secs - first).max(0.0);
                        let target_time = start_time + Duration::from_secs_f64(frame_delay);
                        let now = Instant::now();
                        if target_time > now {
                            std::thread::sleep(target_time - now);
                        }
                    }

                    current_pts_secs = pts_secs;

                    let decoded = DecodedFrame {
                        rgba_data: Arc::new(rgba_data),
                        width,
                        height,
                        pts_secs,
                    };

                    if event_tx
                        .blocking_send(DecoderEvent::FrameReady(decoded))
                        .is_err()
                    {
                        return Ok(());
                    }

                    frame_decoded = true;
                    decoded_since_restart = true;
                    decode_single_frame = false;
                    break;
                }
            }

            if frame_decoded {
                publish(&mut tracker, is_playing, current_pts_secs);
                continue;
            }

            // End of stream
            decode_single_frame = false;
            if is_playing && settings.loop_enabled && decoded_since_restart {
                if let Err(e) = ictx.seek(0, ..0) {
                    log::warn!("loop restart failed: {}", e);
                    is_playing = false;
                } else {
                    decoder.flush();
                    log::trace!("looping {}", video_path.display());
                    current_pts_secs = 0.0;
                    playback_start_time = Some(Instant::now());
                    first_pts = None;
                    decoded_since_restart = false;
                    tracker.invalidate();
                }
            } else {
                is_playing = false;
                playback_start_time = None;
                first_pts = None;
            }
            publish(&mut tracker, is_playing, current_pts_secs);
        }

        Ok(())
    }

    /// Extracts RGBA data from a decoded frame, handling stride correctly.
    fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
        let width = frame.width();
        let height = frame.height();
        let data = frame.data(0);
        let stride = frame.stride(0);

        let mut rgba_bytes = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            let row_start = (y * stride as u32) as usize;
            let row_end = row_start + (width * 4) as usize;
            rgba_bytes.extend_from_slice(&data[row_start..row_end]);
        }

        rgba_bytes
    }
}

/// Pipeline step an FFmpeg failure came from.
#[derive(Debug, Clone, Copy)]
enum Stage {
    Open,
    Decoder(ffmpeg_next::codec::Id),
    Scaler,
}

fn classify(stage: Stage, err: ffmpeg_next::Error) -> Error {
    use ffmpeg_next::Error as AvError;

    let video_error = match (stage, err) {
        (_, AvError::InvalidData) => VideoError::CorruptedFile,
        (_, AvError::StreamNotFound) => VideoError::NoVideoStream,
        (Stage::Decoder(codec), AvError::DecoderNotFound) => {
            VideoError::UnsupportedCodec(codec.name().to_uppercase())
        }
        (Stage::Open, AvError::Other { errno }) => {
            VideoError::IoError(std::io::Error::from_raw_os_error(errno).to_string())
        }
        (Stage::Open, other) => VideoError::IoError(other.to_string()),
        (Stage::Decoder(_) | Stage::Scaler, other) => VideoError::DecodingFailed(other.to_string()),
    };
    Error::Video(video_error)
}
