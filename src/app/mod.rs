// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the video and overlays.
//!
//! The `App` struct wires together the overlay state machine, the swipe
//! tracker, the sound mixer and the playback bridge, and translates messages
//! into transitions and media commands. Policy decisions (window size,
//! background pause, swipe routing) stay close to the update loop so
//! user-facing behavior is easy to audit.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, KeyAction, Message, PointerEvent};

use crate::application::bridge::PlaybackBridge;
use crate::config::{self, Config};
use crate::domain::overlay::gesture::SwipeGesture;
use crate::domain::overlay::OverlayState;
use crate::domain::sound::{Category, SoundMixer};
use crate::error::VideoError;
use crate::i18n::fluent::I18n;
use crate::ui::timer::TimerMode;
use crate::ui::widgets::VideoCanvas;
use crate::video::{DecoderSettings, VideoHandle};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Background video to play and how to play it.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoSource {
    pub path: PathBuf,
    pub settings: DecoderSettings,
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    overlay: OverlayState,
    gesture: SwipeGesture,
    /// Last cursor position, for mouse button events that carry none.
    cursor_y: Option<f32>,
    /// Whether a widget captured the press of the current gesture.
    press_on_widget: bool,
    /// Whether an overlay animation needs frame ticks.
    animating: bool,
    mixer: SoundMixer,
    category: Category,
    timer_mode: TimerMode,
    bridge: PlaybackBridge,
    video: Option<VideoSource>,
    video_handle: Option<VideoHandle>,
    video_error: Option<VideoError>,
    canvas: VideoCanvas,
    seek_step_ms: i64,
    timer_minutes: u32,
    pause_in_background: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("overlay", &self.overlay.active())
            .field("bridge", &self.bridge)
            .field("has_frame", &self.canvas.has_frame())
            .finish()
    }
}

/// Builds the window settings: a portrait phone-sized window.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(config::WINDOW_DEFAULT_WIDTH, config::WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH,
            config::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(&Config::default(), I18n::default(), None)
    }
}

impl App {
    fn from_config(config: &Config, i18n: I18n, video_path: Option<PathBuf>) -> Self {
        let settings = DecoderSettings {
            autoplay: config.playback.autoplay.unwrap_or(config::DEFAULT_AUTOPLAY),
            loop_enabled: config
                .playback
                .loop_enabled
                .unwrap_or(config::DEFAULT_LOOP_ENABLED),
            status_interval: Duration::from_millis(config::STATUS_UPDATE_INTERVAL_MS),
        };

        Self {
            i18n,
            overlay: OverlayState::new(config::WINDOW_DEFAULT_HEIGHT),
            gesture: SwipeGesture::new(),
            cursor_y: None,
            press_on_widget: false,
            animating: false,
            mixer: SoundMixer::new(),
            category: Category::default(),
            timer_mode: TimerMode::default(),
            bridge: PlaybackBridge::new(),
            video: video_path.map(|path| VideoSource { path, settings }),
            video_handle: None,
            video_error: None,
            canvas: VideoCanvas::new(),
            seek_step_ms: config.playback.seek_step_ms(),
            timer_minutes: config.timer.minutes(),
            pause_in_background: config
                .playback
                .pause_in_background
                .unwrap_or(config::DEFAULT_PAUSE_IN_BACKGROUND),
        }
    }

    /// Loads the configuration and resolves the video to play.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        if let Some(key) = config_warning {
            log::warn!("{}", i18n.tr(&key));
        }

        let video_path = flags.video_path.or_else(|| config.playback.video_path.clone());
        match &video_path {
            Some(path) => log::info!("background video: {}", path.display()),
            None => log::info!("no background video configured"),
        }

        (Self::from_config(&config, i18n, video_path), Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.animating);
        let video_sub = subscription::create_video_subscription(self.video.as_ref());

        Subscription::batch([event_sub, tick_sub, video_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        let mut ctx = update::UpdateContext {
            overlay: &mut self.overlay,
            gesture: &mut self.gesture,
            cursor_y: &mut self.cursor_y,
            press_on_widget: &mut self.press_on_widget,
            animating: &mut self.animating,
            mixer: &mut self.mixer,
            category: &mut self.category,
            timer_mode: &mut self.timer_mode,
            bridge: &mut self.bridge,
            video_handle: &mut self.video_handle,
            video_error: &mut self.video_error,
            canvas: &mut self.canvas,
            seek_step_ms: self.seek_step_ms,
            pause_in_background: self.pause_in_background,
        };

        match message {
            Message::Video(video_message) => update::handle_video_message(&mut ctx, video_message),
            Message::Controls(controls_message) => {
                update::handle_controls_message(&mut ctx, controls_message, now)
            }
            Message::Mixer(mixer_message) => {
                update::handle_mixer_message(&mut ctx, mixer_message, now)
            }
            Message::Timer(timer_message) => {
                update::handle_timer_message(&mut ctx, timer_message, now)
            }
            Message::Pointer(event) => update::handle_pointer(&mut ctx, event, now),
            Message::Key(action) => update::handle_key(&mut ctx, action, now),
            Message::Lifecycle(lifecycle) => update::handle_lifecycle(&mut ctx, lifecycle),
            Message::WindowResized(size) => {
                ctx.overlay.set_screen_height(size.height);
                Task::none()
            }
            Message::Tick(tick) => {
                *ctx.animating = ctx.overlay.tick(tick);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            now: Instant::now(),
            overlay: &self.overlay,
            mixer: &self.mixer,
            category: self.category,
            timer_mode: self.timer_mode,
            timer_minutes: self.timer_minutes,
            is_playing: self.bridge.is_playing(),
            seek_step_ms: self.seek_step_ms,
            canvas: &self.canvas,
            video_error: self.video_error.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::overlay::OverlayLayer;
    use crate::domain::playback::PlaybackStatus;
    use crate::ui::{controls, mixer, timer};
    use crate::test_utils::with_temp_config_dir;
    use crate::video::VideoMessage;
    use std::sync::Arc;

    fn press(app: &mut App, y: f32) {
        let _ = app.update(Message::Pointer(PointerEvent::Pressed {
            y: Some(y),
            on_widget: false,
        }));
    }

    fn press_on_widget(app: &mut App, y: f32) {
        let _ = app.update(Message::Pointer(PointerEvent::Pressed {
            y: Some(y),
            on_widget: true,
        }));
    }

    fn drag(app: &mut App, y: f32) {
        let _ = app.update(Message::Pointer(PointerEvent::Moved { y }));
    }

    fn release(app: &mut App, y: f32) {
        let _ = app.update(Message::Pointer(PointerEvent::Released { y: Some(y) }));
    }

    fn settle(app: &mut App) {
        let later = Instant::now() + Duration::from_secs(2);
        let _ = app.update(Message::Tick(later));
    }

    #[test]
    fn new_starts_idle_without_video() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert_eq!(app.overlay.active(), OverlayLayer::None);
            assert!(app.video.is_none());
            assert!(!app.bridge.is_attached());
        });
    }

    #[test]
    fn cli_video_path_wins_over_config() {
        with_temp_config_dir(|dir| {
            let mut config = Config::default();
            config.playback.video_path = Some(PathBuf::from("/from/config.mp4"));
            config::save_to_path(&config, &dir.join("settings.toml")).expect("save config");

            let (app, _task) = App::new(Flags {
                video_path: Some(PathBuf::from("/from/cli.mp4")),
                ..Flags::default()
            });
            let source = app.video.expect("video source");
            assert_eq!(source.path, PathBuf::from("/from/cli.mp4"));
        });
    }

    #[test]
    fn config_video_path_is_used_without_cli_argument() {
        with_temp_config_dir(|dir| {
            let mut config = Config::default();
            config.playback.video_path = Some(PathBuf::from("/from/config.mp4"));
            config.playback.loop_enabled = Some(false);
            config::save_to_path(&config, &dir.join("settings.toml")).expect("save config");

            let (app, _task) = App::new(Flags::default());
            let source = app.video.expect("video source");
            assert_eq!(source.path, PathBuf::from("/from/config.mp4"));
            assert!(!source.settings.loop_enabled);
        });
    }

    #[test]
    fn title_is_localized_app_name() {
        let app = App::default();
        assert_eq!(app.title(), "Yohaku");
    }

    #[test]
    fn swipe_up_shows_controls() {
        let mut app = App::default();
        press(&mut app, 500.0);
        drag(&mut app, 485.0);
        assert_eq!(app.overlay.active(), OverlayLayer::Controls);
        assert!(app.animating);
        release(&mut app, 480.0);
        assert_eq!(app.overlay.active(), OverlayLayer::Controls);
    }

    #[test]
    fn swipe_down_opens_mixer_and_swipe_up_closes_it() {
        let mut app = App::default();
        press(&mut app, 100.0);
        drag(&mut app, 130.0);
        release(&mut app, 130.0);
        assert_eq!(app.overlay.active(), OverlayLayer::Mixer);

        press(&mut app, 400.0);
        drag(&mut app, 370.0);
        release(&mut app, 370.0);
        assert_eq!(app.overlay.active(), OverlayLayer::None);
    }

    #[test]
    fn short_drag_does_nothing() {
        let mut app = App::default();
        press(&mut app, 100.0);
        drag(&mut app, 120.0);
        release(&mut app, 120.0);
        assert_eq!(app.overlay.active(), OverlayLayer::None);
    }

    #[test]
    fn mouse_release_uses_last_cursor_position() {
        let mut app = App::default();
        drag(&mut app, 300.0);
        let _ = app.update(Message::Pointer(PointerEvent::Pressed {
            y: None,
            on_widget: false,
        }));
        drag(&mut app, 290.0);
        let _ = app.update(Message::Pointer(PointerEvent::Released { y: None }));
        assert_eq!(app.overlay.active(), OverlayLayer::None);

        let _ = app.update(Message::Pointer(PointerEvent::Pressed {
            y: None,
            on_widget: false,
        }));
        drag(&mut app, 250.0);
        let _ = app.update(Message::Pointer(PointerEvent::Released { y: None }));
        assert_eq!(app.overlay.active(), OverlayLayer::Controls);
    }

    #[test]
    fn tap_hides_visible_controls() {
        let mut app = App::default();
        press(&mut app, 500.0);
        drag(&mut app, 470.0);
        release(&mut app, 470.0);
        assert_eq!(app.overlay.active(), OverlayLayer::Controls);

        press(&mut app, 200.0);
        release(&mut app, 202.0);
        assert_eq!(app.overlay.active(), OverlayLayer::None);
    }

    #[test]
    fn swipe_over_mixer_cards_closes_mixer() {
        let mut app = App::default();
        let _ = app.update(Message::Key(KeyAction::OpenMixer));
        settle(&mut app);
        assert_eq!(app.overlay.active(), OverlayLayer::Mixer);

        press_on_widget(&mut app, 420.0);
        drag(&mut app, 400.0);
        drag(&mut app, 360.0);
        release(&mut app, 360.0);
        assert_eq!(app.overlay.active(), OverlayLayer::None);
    }

    #[test]
    fn tap_on_a_control_keeps_controls_visible() {
        let mut app = App::default();
        press(&mut app, 500.0);
        drag(&mut app, 470.0);
        release(&mut app, 470.0);
        assert_eq!(app.overlay.active(), OverlayLayer::Controls);

        press_on_widget(&mut app, 300.0);
        release(&mut app, 301.0);
        assert_eq!(app.overlay.active(), OverlayLayer::Controls);

        press(&mut app, 200.0);
        release(&mut app, 200.0);
        assert_eq!(app.overlay.active(), OverlayLayer::None);
    }

    #[test]
    fn swipes_are_ignored_while_timer_is_open() {
        let mut app = App::default();
        let _ = app.update(Message::Controls(controls::Message::OpenTimer));
        assert_eq!(app.overlay.active(), OverlayLayer::Timer);

        press(&mut app, 100.0);
        drag(&mut app, 160.0);
        release(&mut app, 160.0);
        assert_eq!(app.overlay.active(), OverlayLayer::Timer);

        let _ = app.update(Message::Timer(timer::Message::Close));
        assert_eq!(app.overlay.active(), OverlayLayer::None);
    }

    #[test]
    fn lost_touch_cancels_the_gesture() {
        let mut app = App::default();
        press(&mut app, 100.0);
        let _ = app.update(Message::Pointer(PointerEvent::Lost));
        drag(&mut app, 160.0);
        assert_eq!(app.overlay.active(), OverlayLayer::None);
    }

    #[test]
    fn keyboard_shortcuts_drive_overlays() {
        let mut app = App::default();
        let _ = app.update(Message::Key(KeyAction::OpenMixer));
        assert_eq!(app.overlay.active(), OverlayLayer::Mixer);

        let _ = app.update(Message::Key(KeyAction::OpenTimer));
        assert_eq!(app.overlay.active(), OverlayLayer::Timer);

        let _ = app.update(Message::Key(KeyAction::OpenMixer));
        assert_eq!(app.overlay.active(), OverlayLayer::Timer);

        let _ = app.update(Message::Key(KeyAction::Dismiss));
        assert_eq!(app.overlay.active(), OverlayLayer::None);
    }

    #[test]
    fn tick_stops_once_animations_settle() {
        let mut app = App::default();
        let _ = app.update(Message::Key(KeyAction::OpenMixer));
        assert!(app.animating);
        settle(&mut app);
        assert!(!app.animating);
        assert!(app.overlay.is_mounted(OverlayLayer::Mixer));

        let _ = app.update(Message::Mixer(mixer::Message::Close));
        settle(&mut app);
        assert!(!app.overlay.is_mounted(OverlayLayer::Mixer));
    }

    #[test]
    fn mixer_messages_update_state() {
        let mut app = App::default();
        let _ = app.update(Message::Mixer(mixer::Message::SelectCategory(
            Category::Focus,
        )));
        assert_eq!(app.category, Category::Focus);

        let _ = app.update(Message::Mixer(mixer::Message::VolumeChanged {
            id: 9,
            volume: crate::domain::sound::Volume::new(55),
        }));
        let channel = app.mixer.channel(9).expect("catalog sound");
        assert_eq!(channel.volume.value(), 55);
        assert_eq!(app.mixer.active_count(), 1);
    }

    #[test]
    fn timer_mode_selection_is_kept() {
        let mut app = App::default();
        let _ = app.update(Message::Timer(timer::Message::SelectMode(TimerMode::Sleep)));
        assert_eq!(app.timer_mode, TimerMode::Sleep);
    }

    #[test]
    fn resize_keeps_hidden_mixer_parked() {
        let mut app = App::default();
        let _ = app.update(Message::WindowResized(iced::Size::new(500.0, 1000.0)));
        assert_eq!(app.overlay.screen_height(), 1000.0);
        assert_eq!(app.overlay.mixer_offset(Instant::now()), -1000.0);
    }

    #[test]
    fn status_updates_drive_play_icon() {
        let mut app = App::default();
        let _ = app.update(Message::Video(VideoMessage::Status(PlaybackStatus {
            is_playing: true,
            position_millis: 1_000,
        })));
        assert!(app.bridge.is_playing());
    }

    #[test]
    fn frames_reach_the_canvas() {
        let mut app = App::default();
        let _ = app.update(Message::Video(VideoMessage::Frame {
            rgba_data: Arc::new(vec![0; 2 * 2 * 4]),
            width: 2,
            height: 2,
        }));
        assert_eq!(app.canvas.frame_size(), (2, 2));
    }

    #[test]
    fn video_error_is_kept_for_display() {
        let mut app = App::default();
        let _ = app.update(Message::Video(VideoMessage::Error(VideoError::NoVideoStream)));
        assert_eq!(app.video_error, Some(VideoError::NoVideoStream));
        assert!(!app.bridge.is_attached());
    }

    #[test]
    fn playback_controls_without_video_are_harmless() {
        let mut app = App::default();
        let _ = app.update(Message::Controls(controls::Message::TogglePlayback));
        let _ = app.update(Message::Controls(controls::Message::SeekForward));
        assert!(!app.bridge.is_playing());
        assert_eq!(app.bridge.position_millis(), 0);
    }
}
