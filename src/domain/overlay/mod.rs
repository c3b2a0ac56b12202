// SPDX-License-Identifier: MPL-2.0
//! Overlay state machine.
//!
//! Three layers sit above the background video: the playback controls, the
//! sound mixer and the timer. At most one of them is *active*; the active
//! layer is a single enum so exclusivity holds by construction. Each layer
//! also carries a fade record so it can stay mounted while animating out
//! after it stopped being active.
//!
//! # Transitions
//!
//! | From      | Request        | To       | Notes                            |
//! |-----------|----------------|----------|----------------------------------|
//! | None      | show controls  | Controls | spring fade in                   |
//! | Controls  | hide controls  | None     | eased fade out                   |
//! | None/Ctrl | show mixer     | Mixer    | controls cut instantly           |
//! | Mixer     | hide mixer     | None     | fade out and slide up            |
//! | None/Ctrl | show timer     | Timer    | controls cut instantly           |
//! | Mixer     | show timer     | Timer    | mixer fades and slides out       |
//! | Timer     | hide timer     | None     | eased fade out                   |
//!
//! Any other request is [`Transition::Ignored`].

pub mod animation;
pub mod gesture;

use animation::{AnimatedValue, CubicBezier, Motion};
use gesture::SwipeIntent;
use std::time::Instant;

/// Spring used when controls or timer fade in.
pub const FADE_IN_SPRING: Motion = Motion::spring(8.0, 40.0);

/// Fade out for controls and timer.
pub const FADE_OUT: Motion = Motion::timing(250, CubicBezier::new(0.4, 0.0, 0.6, 1.0));

/// Mixer opacity when opening.
pub const MIXER_FADE_IN: Motion = Motion::timing(350, CubicBezier::new(0.25, 0.1, 0.25, 1.0));

/// Mixer slide when opening.
pub const MIXER_SLIDE_IN: Motion = Motion::spring(9.0, 50.0);

/// Mixer opacity when closing.
pub const MIXER_FADE_OUT: Motion = Motion::timing(280, CubicBezier::new(0.4, 0.0, 0.6, 1.0));

/// Mixer slide when closing.
pub const MIXER_SLIDE_OUT: Motion = Motion::timing(320, CubicBezier::new(0.4, 0.0, 0.2, 1.0));

/// The layer currently owning the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayLayer {
    #[default]
    None,
    Controls,
    Mixer,
    Timer,
}

impl OverlayLayer {
    /// Mixer and timer cover the screen and suppress the controls.
    #[must_use]
    pub fn is_expanded(self) -> bool {
        matches!(self, Self::Mixer | Self::Timer)
    }
}

/// Outcome of a transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Started,
    Ignored,
}

impl Transition {
    #[must_use]
    pub fn is_started(self) -> bool {
        self == Self::Started
    }
}

/// Mount flag plus opacity for one layer.
#[derive(Debug, Clone)]
struct LayerFade {
    mounted: bool,
    opacity: AnimatedValue,
}

impl LayerFade {
    const fn hidden() -> Self {
        Self {
            mounted: false,
            opacity: AnimatedValue::new(0.0),
        }
    }

    fn fade_in(&mut self, now: Instant, motion: Motion) {
        self.mounted = true;
        self.opacity.go(1.0, now, motion);
    }

    /// Starts fading out; the layer stays mounted until [`Self::settle`].
    fn fade_out(&mut self, now: Instant, motion: Motion) {
        self.opacity.go(0.0, now, motion);
    }

    fn cut(&mut self) {
        self.mounted = false;
        self.opacity.snap(0.0);
    }

    /// Unmounts once a fade out finished, unless the target moved since.
    fn settle(&mut self, now: Instant) {
        if self.mounted && self.opacity.target() == 0.0 && !self.opacity.is_animating(now) {
            self.mounted = false;
        }
    }
}

/// Visibility and animation state for every overlay layer.
#[derive(Debug, Clone)]
pub struct OverlayState {
    active: OverlayLayer,
    controls: LayerFade,
    mixer: LayerFade,
    mixer_offset: AnimatedValue,
    timer: LayerFade,
    screen_height: f32,
}

impl OverlayState {
    /// Everything hidden; the mixer is parked one screen above the top edge.
    #[must_use]
    pub fn new(screen_height: f32) -> Self {
        Self {
            active: OverlayLayer::None,
            controls: LayerFade::hidden(),
            mixer: LayerFade::hidden(),
            mixer_offset: AnimatedValue::new(-screen_height),
            timer: LayerFade::hidden(),
            screen_height,
        }
    }

    #[must_use]
    pub fn active(&self) -> OverlayLayer {
        self.active
    }

    #[must_use]
    pub fn is_mixer_open(&self) -> bool {
        self.active == OverlayLayer::Mixer
    }

    #[must_use]
    pub fn is_timer_open(&self) -> bool {
        self.active == OverlayLayer::Timer
    }

    /// Whether swipes should be interpreted at all.
    #[must_use]
    pub fn accepts_swipes(&self) -> bool {
        self.active != OverlayLayer::Timer
    }

    pub fn show_controls(&mut self, now: Instant) -> Transition {
        if self.active != OverlayLayer::None {
            return Transition::Ignored;
        }
        self.active = OverlayLayer::Controls;
        self.controls.fade_in(now, FADE_IN_SPRING);
        Transition::Started
    }

    pub fn hide_controls(&mut self, now: Instant) -> Transition {
        if self.active != OverlayLayer::Controls {
            return Transition::Ignored;
        }
        self.active = OverlayLayer::None;
        self.controls.fade_out(now, FADE_OUT);
        Transition::Started
    }

    pub fn show_mixer(&mut self, now: Instant) -> Transition {
        if self.active.is_expanded() {
            return Transition::Ignored;
        }
        self.controls.cut();
        self.active = OverlayLayer::Mixer;
        self.mixer.fade_in(now, MIXER_FADE_IN);
        self.mixer_offset.go(0.0, now, MIXER_SLIDE_IN);
        Transition::Started
    }

    pub fn hide_mixer(&mut self, now: Instant) -> Transition {
        if self.active != OverlayLayer::Mixer {
            return Transition::Ignored;
        }
        self.active = OverlayLayer::None;
        self.mixer.fade_out(now, MIXER_FADE_OUT);
        self.mixer_offset
            .go(-self.screen_height, now, MIXER_SLIDE_OUT);
        Transition::Started
    }

    /// Opens the timer. An open mixer hands over: it animates out while the
    /// timer fades in.
    pub fn show_timer(&mut self, now: Instant) -> Transition {
        match self.active {
            OverlayLayer::Timer => return Transition::Ignored,
            OverlayLayer::Mixer => {
                self.hide_mixer(now);
            }
            OverlayLayer::None | OverlayLayer::Controls => {}
        }
        self.controls.cut();
        self.active = OverlayLayer::Timer;
        self.timer.fade_in(now, FADE_IN_SPRING);
        Transition::Started
    }

    pub fn hide_timer(&mut self, now: Instant) -> Transition {
        if self.active != OverlayLayer::Timer {
            return Transition::Ignored;
        }
        self.active = OverlayLayer::None;
        self.timer.fade_out(now, FADE_OUT);
        Transition::Started
    }

    /// Hides whichever layer is active.
    pub fn dismiss(&mut self, now: Instant) -> Transition {
        match self.active {
            OverlayLayer::None => Transition::Ignored,
            OverlayLayer::Controls => self.hide_controls(now),
            OverlayLayer::Mixer => self.hide_mixer(now),
            OverlayLayer::Timer => self.hide_timer(now),
        }
    }

    /// Applies an interpreted swipe. Swipes never act while the timer is open.
    pub fn apply_swipe(&mut self, intent: SwipeIntent, now: Instant) -> Transition {
        if !self.accepts_swipes() {
            return Transition::Ignored;
        }
        match intent {
            SwipeIntent::OpenMixer => self.show_mixer(now),
            SwipeIntent::CloseMixer => self.hide_mixer(now),
            SwipeIntent::ShowControls => self.show_controls(now),
        }
    }

    /// Unmounts layers whose fade out has completed. Returns whether any
    /// animation is still running.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.controls.settle(now);
        // The mixer stays mounted until both its fade and its slide are done.
        if !self.mixer_offset.is_animating(now) {
            self.mixer.settle(now);
        }
        self.timer.settle(now);
        self.is_animating(now)
    }

    /// Keeps the parked mixer exactly one screen above the viewport.
    pub fn set_screen_height(&mut self, height: f32) {
        self.screen_height = height;
        if self.mixer_offset.target() != 0.0 && !self.mixer.mounted {
            self.mixer_offset.snap(-height);
        }
    }

    #[must_use]
    pub fn screen_height(&self) -> f32 {
        self.screen_height
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.controls.opacity.is_animating(now)
            || self.mixer.opacity.is_animating(now)
            || self.mixer_offset.is_animating(now)
            || self.timer.opacity.is_animating(now)
    }

    /// Whether a layer still needs to be drawn.
    #[must_use]
    pub fn is_mounted(&self, layer: OverlayLayer) -> bool {
        match layer {
            OverlayLayer::None => false,
            OverlayLayer::Controls => self.controls.mounted,
            OverlayLayer::Mixer => self.mixer.mounted,
            OverlayLayer::Timer => self.timer.mounted,
        }
    }

    #[must_use]
    pub fn controls_opacity(&self, now: Instant) -> f32 {
        self.controls.opacity.value(now)
    }

    #[must_use]
    pub fn mixer_opacity(&self, now: Instant) -> f32 {
        self.mixer.opacity.value(now)
    }

    /// Vertical translation of the mixer panel; `0` when fully open.
    #[must_use]
    pub fn mixer_offset(&self, now: Instant) -> f32 {
        self.mixer_offset.value(now)
    }

    #[must_use]
    pub fn timer_opacity(&self, now: Instant) -> f32 {
        self.timer.opacity.value(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const HEIGHT: f32 = 800.0;

    fn settled(start: Instant) -> Instant {
        start + Duration::from_secs(2)
    }

    #[test]
    fn starts_hidden_with_mixer_parked() {
        let now = Instant::now();
        let overlay = OverlayState::new(HEIGHT);
        assert_eq!(overlay.active(), OverlayLayer::None);
        assert_eq!(overlay.mixer_offset(now), -HEIGHT);
        assert!(!overlay.is_mounted(OverlayLayer::Controls));
        assert!(!overlay.is_animating(now));
    }

    #[test]
    fn show_controls_is_idempotent() {
        let start = Instant::now();
        let mut overlay = OverlayState::new(HEIGHT);

        assert_eq!(overlay.show_controls(start), Transition::Started);
        let later = start + Duration::from_millis(100);
        let opacity = overlay.controls_opacity(later);
        assert_eq!(overlay.show_controls(later), Transition::Ignored);
        assert_eq!(overlay.controls_opacity(later), opacity);
    }

    #[test]
    fn hide_unmounts_after_fade_completes() {
        let start = Instant::now();
        let mut overlay = OverlayState::new(HEIGHT);
        overlay.show_controls(start);
        overlay.tick(settled(start));

        let hide_at = settled(start);
        assert_eq!(overlay.hide_controls(hide_at), Transition::Started);
        assert!(overlay.tick(hide_at + Duration::from_millis(100)));
        assert!(overlay.is_mounted(OverlayLayer::Controls));

        assert!(!overlay.tick(hide_at + Duration::from_millis(250)));
        assert!(!overlay.is_mounted(OverlayLayer::Controls));
        assert_eq!(overlay.controls_opacity(hide_at + Duration::from_millis(250)), 0.0);
    }

    #[test]
    fn reshow_during_fade_out_keeps_layer_mounted() {
        let start = Instant::now();
        let mut overlay = OverlayState::new(HEIGHT);
        overlay.show_controls(start);
        let hide_at = settled(start);
        overlay.hide_controls(hide_at);

        let reshow_at = hide_at + Duration::from_millis(100);
        assert_eq!(overlay.show_controls(reshow_at), Transition::Started);
        overlay.tick(reshow_at + Duration::from_millis(300));
        assert!(overlay.is_mounted(OverlayLayer::Controls));
    }

    #[test]
    fn opening_mixer_cuts_controls_instantly() {
        let start = Instant::now();
        let mut overlay = OverlayState::new(HEIGHT);
        overlay.show_controls(start);

        let open_at = start + Duration::from_millis(50);
        assert_eq!(overlay.show_mixer(open_at), Transition::Started);
        assert_eq!(overlay.active(), OverlayLayer::Mixer);
        assert!(!overlay.is_mounted(OverlayLayer::Controls));
        assert_eq!(overlay.controls_opacity(open_at), 0.0);
        assert!(overlay.is_mounted(OverlayLayer::Mixer));
    }

    #[test]
    fn mixer_slides_into_place_and_back() {
        let start = Instant::now();
        let mut overlay = OverlayState::new(HEIGHT);
        overlay.show_mixer(start);

        let mid = overlay.mixer_offset(start + Duration::from_millis(100));
        assert!(mid > -HEIGHT && mid < 0.0);
        let open = settled(start);
        assert_eq!(overlay.mixer_offset(open), 0.0);
        assert_eq!(overlay.mixer_opacity(open), 1.0);

        overlay.hide_mixer(open);
        let closed = open + Duration::from_millis(320);
        assert_eq!(overlay.mixer_offset(closed), -HEIGHT);
        assert!(!overlay.tick(closed));
        assert!(!overlay.is_mounted(OverlayLayer::Mixer));
    }

    #[test]
    fn mixer_stays_mounted_while_sliding_out() {
        let start = Instant::now();
        let mut overlay = OverlayState::new(HEIGHT);
        overlay.show_mixer(start);
        let open = settled(start);
        assert!(!overlay.tick(open));

        overlay.hide_mixer(open);
        // Opacity has finished (280 ms) but the slide (320 ms) has not.
        let faded = open + Duration::from_millis(300);
        assert_eq!(overlay.mixer_opacity(faded), 0.0);
        assert!(overlay.mixer_offset(faded) > -HEIGHT);
        assert!(overlay.tick(faded));
        assert!(overlay.is_mounted(OverlayLayer::Mixer));

        let slid = open + Duration::from_millis(320);
        assert!(!overlay.tick(slid));
        assert!(!overlay.is_mounted(OverlayLayer::Mixer));
    }

    #[test]
    fn timer_takes_over_from_open_mixer() {
        let start = Instant::now();
        let mut overlay = OverlayState::new(HEIGHT);
        overlay.show_mixer(start);
        let open = settled(start);

        assert_eq!(overlay.show_timer(open), Transition::Started);
        assert_eq!(overlay.active(), OverlayLayer::Timer);
        assert!(overlay.is_mounted(OverlayLayer::Mixer));

        let done = settled(open);
        assert!(!overlay.tick(done));
        assert!(!overlay.is_mounted(OverlayLayer::Mixer));
        assert!(overlay.is_mounted(OverlayLayer::Timer));
        assert_eq!(overlay.mixer_offset(done), -HEIGHT);
        assert_eq!(overlay.show_timer(done), Transition::Ignored);
    }

    #[test]
    fn controls_cannot_show_over_expanded_layer() {
        let now = Instant::now();
        let mut overlay = OverlayState::new(HEIGHT);
        overlay.show_timer(now);
        assert_eq!(overlay.show_controls(now), Transition::Ignored);
        assert_eq!(overlay.show_mixer(now), Transition::Ignored);
        assert_eq!(overlay.active(), OverlayLayer::Timer);
    }

    #[test]
    fn swipes_are_ignored_while_timer_is_open() {
        let now = Instant::now();
        let mut overlay = OverlayState::new(HEIGHT);
        overlay.show_timer(now);
        assert_eq!(
            overlay.apply_swipe(SwipeIntent::OpenMixer, now),
            Transition::Ignored
        );
        assert!(!overlay.is_mounted(OverlayLayer::Mixer));
    }

    #[test]
    fn closing_mixer_leaves_controls_hidden() {
        let now = Instant::now();
        let mut overlay = OverlayState::new(HEIGHT);
        overlay.show_controls(now);
        overlay.apply_swipe(SwipeIntent::OpenMixer, now);
        overlay.apply_swipe(SwipeIntent::CloseMixer, now);
        assert_eq!(overlay.active(), OverlayLayer::None);
        assert!(!overlay.is_mounted(OverlayLayer::Controls));
    }

    #[test]
    fn dismiss_hides_active_layer() {
        let now = Instant::now();
        let mut overlay = OverlayState::new(HEIGHT);
        assert_eq!(overlay.dismiss(now), Transition::Ignored);
        overlay.show_timer(now);
        assert_eq!(overlay.dismiss(now), Transition::Started);
        assert_eq!(overlay.active(), OverlayLayer::None);
    }

    #[test]
    fn resize_moves_parked_mixer() {
        let now = Instant::now();
        let mut overlay = OverlayState::new(HEIGHT);
        overlay.set_screen_height(600.0);
        assert_eq!(overlay.mixer_offset(now), -600.0);

        overlay.show_mixer(now);
        overlay.set_screen_height(900.0);
        assert_eq!(overlay.mixer_offset(settled(now)), 0.0);
    }
}
