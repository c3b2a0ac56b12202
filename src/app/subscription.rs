// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native events are reduced to pointer samples, key actions, lifecycle
//! changes and resizes. Mouse and keyboard events captured by a widget (a
//! button press, a slider drag) never reach the swipe tracker. Touch events
//! always do: scrollables capture every finger event, and a swipe over the
//! mixer panel must still close it.

use super::{KeyAction, Message, PointerEvent, VideoSource};
use crate::application::bridge::Lifecycle;
use crate::video::background_video;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, time, touch, window, Subscription};
use std::time::Duration;

/// Frame interval while an overlay animation runs.
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Routes native events to application messages.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        // Window events matter whatever the widgets did with them
        if let event::Event::Window(window_event) = &event {
            return match window_event {
                window::Event::Focused => Some(Message::Lifecycle(Lifecycle::Active)),
                window::Event::Unfocused => Some(Message::Lifecycle(Lifecycle::Background)),
                window::Event::Resized(size) => Some(Message::WindowResized(*size)),
                _ => None,
            };
        }

        map_input_event(&event, status)
    })
}

/// Maps an input event given what the widgets did with it.
fn map_input_event(event: &event::Event, status: event::Status) -> Option<Message> {
    let captured = matches!(status, event::Status::Captured);
    match event {
        event::Event::Touch(touch_event) => {
            map_touch_event(touch_event, captured).map(Message::Pointer)
        }
        _ if captured => None,
        event::Event::Mouse(mouse_event) => map_mouse_event(mouse_event).map(Message::Pointer),
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            map_key(key).map(Message::Key)
        }
        _ => None,
    }
}

fn map_touch_event(event: &touch::Event, captured: bool) -> Option<PointerEvent> {
    match event {
        touch::Event::FingerPressed { position, .. } => Some(PointerEvent::Pressed {
            y: Some(position.y),
            on_widget: captured,
        }),
        touch::Event::FingerMoved { position, .. } => Some(PointerEvent::Moved { y: position.y }),
        touch::Event::FingerLifted { position, .. } => {
            Some(PointerEvent::Released { y: Some(position.y) })
        }
        touch::Event::FingerLost { .. } => Some(PointerEvent::Lost),
    }
}

fn map_mouse_event(event: &mouse::Event) -> Option<PointerEvent> {
    match event {
        mouse::Event::ButtonPressed(mouse::Button::Left) => Some(PointerEvent::Pressed {
            y: None,
            on_widget: false,
        }),
        mouse::Event::CursorMoved { position } => Some(PointerEvent::Moved { y: position.y }),
        mouse::Event::ButtonReleased(mouse::Button::Left) => {
            Some(PointerEvent::Released { y: None })
        }
        mouse::Event::CursorLeft => Some(PointerEvent::Lost),
        _ => None,
    }
}

fn map_key(key: &Key) -> Option<KeyAction> {
    match key.as_ref() {
        Key::Named(Named::Space) => Some(KeyAction::TogglePlayback),
        Key::Named(Named::ArrowLeft) => Some(KeyAction::SeekBackward),
        Key::Named(Named::ArrowRight) => Some(KeyAction::SeekForward),
        Key::Named(Named::Escape) => Some(KeyAction::Dismiss),
        Key::Character(c) if c.eq_ignore_ascii_case("m") => Some(KeyAction::OpenMixer),
        Key::Character(c) if c.eq_ignore_ascii_case("t") => Some(KeyAction::OpenTimer),
        _ => None,
    }
}

/// Ticks at display rate while an overlay is animating.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_FRAME).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Plays the background video when one is configured.
pub fn create_video_subscription(video: Option<&VideoSource>) -> Subscription<Message> {
    match video {
        Some(source) => {
            background_video(source.path.clone(), source.settings).map(Message::Video)
        }
        None => Subscription::none(),
    }
}
