// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Every overlay transition goes through [`OverlayState`]; handlers only
//! decide which transition to request and flag that frame ticks are needed.

use super::{KeyAction, Message, PointerEvent};
use crate::application::bridge::{Lifecycle, PlaybackBridge};
use crate::domain::overlay::gesture::SwipeGesture;
use crate::domain::overlay::{OverlayLayer, OverlayState, Transition};
use crate::domain::sound::{Category, SoundMixer};
use crate::error::VideoError;
use crate::ui::timer::TimerMode;
use crate::ui::widgets::VideoCanvas;
use crate::ui::{controls, mixer, timer};
use crate::video::{VideoHandle, VideoMessage};
use iced::Task;
use std::time::Instant;

/// Mutable view of the application state used by the handlers.
pub struct UpdateContext<'a> {
    pub overlay: &'a mut OverlayState,
    pub gesture: &'a mut SwipeGesture,
    pub cursor_y: &'a mut Option<f32>,
    pub press_on_widget: &'a mut bool,
    pub animating: &'a mut bool,
    pub mixer: &'a mut SoundMixer,
    pub category: &'a mut Category,
    pub timer_mode: &'a mut TimerMode,
    pub bridge: &'a mut PlaybackBridge,
    pub video_handle: &'a mut Option<VideoHandle>,
    pub video_error: &'a mut Option<VideoError>,
    pub canvas: &'a mut VideoCanvas,
    pub seek_step_ms: i64,
    pub pause_in_background: bool,
}

impl UpdateContext<'_> {
    /// Starts frame ticks when a transition actually began.
    fn track(&mut self, transition: Transition) {
        if transition.is_started() {
            *self.animating = true;
        }
    }
}

pub fn handle_video_message(ctx: &mut UpdateContext<'_>, message: VideoMessage) -> Task<Message> {
    match message {
        VideoMessage::Started(handle) => {
            ctx.bridge.attach(Box::new(handle.clone()));
            *ctx.video_handle = Some(handle);
            *ctx.video_error = None;
        }
        VideoMessage::Frame {
            rgba_data,
            width,
            height,
        } => ctx.canvas.set_frame(rgba_data, width, height),
        VideoMessage::Status(status) => ctx.bridge.on_status(status),
        VideoMessage::Error(error) => {
            log::warn!("background video stopped: {}", error);
            ctx.bridge.detach();
            if let Some(handle) = ctx.video_handle.take() {
                handle.stop();
            }
            *ctx.video_error = Some(error);
        }
    }
    Task::none()
}

pub fn handle_controls_message(
    ctx: &mut UpdateContext<'_>,
    message: controls::Message,
    now: Instant,
) -> Task<Message> {
    match message {
        controls::Message::TogglePlayback => ctx.bridge.toggle_play(),
        controls::Message::SeekBackward => ctx.bridge.seek(-ctx.seek_step_ms),
        controls::Message::SeekForward => ctx.bridge.seek(ctx.seek_step_ms),
        controls::Message::OpenTimer => {
            let transition = ctx.overlay.show_timer(now);
            ctx.track(transition);
        }
    }
    Task::none()
}

pub fn handle_mixer_message(
    ctx: &mut UpdateContext<'_>,
    message: mixer::Message,
    now: Instant,
) -> Task<Message> {
    match message {
        mixer::Message::SelectCategory(category) => *ctx.category = category,
        mixer::Message::VolumeChanged { id, volume } => {
            if let Err(err) = ctx.mixer.set_volume(id, volume) {
                log::warn!("{}", err);
            }
        }
        mixer::Message::Close => {
            let transition = ctx.overlay.hide_mixer(now);
            ctx.track(transition);
        }
    }
    Task::none()
}

pub fn handle_timer_message(
    ctx: &mut UpdateContext<'_>,
    message: timer::Message,
    now: Instant,
) -> Task<Message> {
    match message {
        timer::Message::SelectMode(mode) => *ctx.timer_mode = mode,
        timer::Message::Close => {
            let transition = ctx.overlay.hide_timer(now);
            ctx.track(transition);
        }
    }
    Task::none()
}

/// Feeds pointer samples to the swipe tracker.
///
/// A press and release that never leaves the dead zone counts as a tap; a tap
/// on the video hides the controls. Taps on widgets belong to the widget.
pub fn handle_pointer(
    ctx: &mut UpdateContext<'_>,
    event: PointerEvent,
    now: Instant,
) -> Task<Message> {
    match event {
        PointerEvent::Pressed { y, on_widget } => {
            if let Some(y) = y.or(*ctx.cursor_y) {
                *ctx.cursor_y = Some(y);
                *ctx.press_on_widget = on_widget;
                ctx.gesture.begin(y);
            }
        }
        PointerEvent::Moved { y } => {
            *ctx.cursor_y = Some(y);
            if let Some(intent) = ctx.gesture.moved(y, ctx.overlay.is_mixer_open()) {
                let transition = ctx.overlay.apply_swipe(intent, now);
                ctx.track(transition);
            }
        }
        PointerEvent::Released { y } => {
            let Some(y) = y.or(*ctx.cursor_y) else {
                ctx.gesture.cancel();
                return Task::none();
            };
            if !ctx.gesture.is_tracking() {
                return Task::none();
            }

            let was_tap = !ctx.gesture.is_claimed() && !*ctx.press_on_widget;
            match ctx.gesture.released(y, ctx.overlay.is_mixer_open()) {
                Some(intent) => {
                    let transition = ctx.overlay.apply_swipe(intent, now);
                    ctx.track(transition);
                }
                None if was_tap && ctx.overlay.active() == OverlayLayer::Controls => {
                    let transition = ctx.overlay.hide_controls(now);
                    ctx.track(transition);
                }
                None => {}
            }
        }
        PointerEvent::Lost => ctx.gesture.cancel(),
    }
    Task::none()
}

pub fn handle_key(ctx: &mut UpdateContext<'_>, action: KeyAction, now: Instant) -> Task<Message> {
    let transition = match action {
        KeyAction::TogglePlayback => {
            ctx.bridge.toggle_play();
            return Task::none();
        }
        KeyAction::SeekBackward => {
            ctx.bridge.seek(-ctx.seek_step_ms);
            return Task::none();
        }
        KeyAction::SeekForward => {
            ctx.bridge.seek(ctx.seek_step_ms);
            return Task::none();
        }
        KeyAction::Dismiss => ctx.overlay.dismiss(now),
        KeyAction::OpenMixer => ctx.overlay.show_mixer(now),
        KeyAction::OpenTimer => ctx.overlay.show_timer(now),
    };
    ctx.track(transition);
    Task::none()
}

/// Window focus changes pause and resume the video, unless disabled.
pub fn handle_lifecycle(ctx: &mut UpdateContext<'_>, lifecycle: Lifecycle) -> Task<Message> {
    if ctx.pause_in_background {
        ctx.bridge.on_lifecycle(lifecycle);
    } else {
        log::debug!("ignoring {:?}: background pause disabled", lifecycle);
    }
    Task::none()
}
