// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::bridge::Lifecycle;
use crate::ui::{controls, mixer, timer};
use crate::video::VideoMessage;
use iced::Size;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level overlay messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Video(VideoMessage),
    Controls(controls::Message),
    Mixer(mixer::Message),
    Timer(timer::Message),
    Pointer(PointerEvent),
    Key(KeyAction),
    /// Window focus changes, mapped to the mobile foreground/background states.
    Lifecycle(Lifecycle),
    WindowResized(Size),
    Tick(Instant), // Animation frame while an overlay transition runs
}

/// Vertical pointer samples reduced from mouse and touch events.
///
/// Mouse button events carry no position; `None` means "at the last
/// known cursor position".
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// `on_widget` is set when a widget captured the press. Such a press can
    /// still start a swipe but never counts as a tap.
    Pressed { y: Option<f32>, on_widget: bool },
    Moved { y: f32 },
    Released { y: Option<f32> },
    /// The platform cancelled the touch.
    Lost,
}

/// Keyboard shortcuts, mirroring the on-screen buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    TogglePlayback,
    SeekBackward,
    SeekForward,
    Dismiss,
    OpenMixer,
    OpenTimer,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `ja`, `en-US`).
    pub lang: Option<String>,
    /// Optional background video; takes precedence over `playback.video_path`.
    pub video_path: Option<PathBuf>,
}
