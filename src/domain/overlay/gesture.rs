// SPDX-License-Identifier: MPL-2.0
//! Vertical swipe interpretation.
//!
//! Pointer samples are reduced to a vertical displacement `dy` measured from
//! the press position (positive is downward). A gesture only counts once it
//! leaves the dead zone; after that each move or release may produce one
//! [`SwipeIntent`].

/// Displacement a pointer must travel before the gesture is claimed.
pub const DEAD_ZONE: f32 = 12.0;

/// Downward drag that opens the mixer during a move.
pub const MIXER_OPEN_DRAG: f32 = 28.0;

/// Upward drag that closes the mixer during a move.
pub const MIXER_CLOSE_DRAG: f32 = 28.0;

/// Upward drag that reveals the controls during a move.
pub const CONTROLS_SHOW_DRAG: f32 = 12.0;

/// Upward drag that reveals the controls on release.
pub const CONTROLS_SHOW_RELEASE: f32 = 20.0;

/// Upward drag that closes the mixer on release.
pub const MIXER_CLOSE_RELEASE: f32 = 26.0;

/// What a swipe asks the overlay to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeIntent {
    OpenMixer,
    CloseMixer,
    ShowControls,
}

/// Rules applied while the pointer is still down.
///
/// Opening the mixer is checked before revealing the controls.
#[must_use]
pub fn interpret_move(mixer_open: bool, dy: f32) -> Option<SwipeIntent> {
    if !mixer_open && dy > MIXER_OPEN_DRAG {
        Some(SwipeIntent::OpenMixer)
    } else if mixer_open && dy < -MIXER_CLOSE_DRAG {
        Some(SwipeIntent::CloseMixer)
    } else if !mixer_open && dy < -CONTROLS_SHOW_DRAG {
        Some(SwipeIntent::ShowControls)
    } else {
        None
    }
}

/// Rules applied when the pointer is lifted.
#[must_use]
pub fn interpret_release(mixer_open: bool, dy: f32) -> Option<SwipeIntent> {
    if !mixer_open && dy < -CONTROLS_SHOW_RELEASE {
        Some(SwipeIntent::ShowControls)
    } else if mixer_open && dy < -MIXER_CLOSE_RELEASE {
        Some(SwipeIntent::CloseMixer)
    } else {
        None
    }
}

/// Tracks one pointer from press to release.
#[derive(Debug, Clone, Default)]
pub struct SwipeGesture {
    origin: Option<f32>,
    claimed: bool,
    mixer_toggled: bool,
}

impl SwipeGesture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking at `y`, dropping any gesture in progress.
    pub fn begin(&mut self, y: f32) {
        *self = Self {
            origin: Some(y),
            ..Self::default()
        };
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// Whether the pointer has left the dead zone.
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Feeds a move sample.
    pub fn moved(&mut self, y: f32, mixer_open: bool) -> Option<SwipeIntent> {
        let dy = self.claim(y)?;
        self.filter(interpret_move(mixer_open, dy))
    }

    /// Feeds the release sample and ends the gesture.
    pub fn released(&mut self, y: f32, mixer_open: bool) -> Option<SwipeIntent> {
        let intent = self
            .claim(y)
            .and_then(|dy| self.filter(interpret_release(mixer_open, dy)));
        self.cancel();
        intent
    }

    /// Abandons the gesture without producing an intent.
    pub fn cancel(&mut self) {
        *self = Self::default();
    }

    fn claim(&mut self, y: f32) -> Option<f32> {
        let dy = y - self.origin?;
        if !self.claimed && dy.abs() > DEAD_ZONE {
            self.claimed = true;
        }
        self.claimed.then_some(dy)
    }

    /// Lets at most one mixer toggle through per gesture.
    fn filter(&mut self, intent: Option<SwipeIntent>) -> Option<SwipeIntent> {
        if self.mixer_toggled {
            return None;
        }
        if matches!(
            intent,
            Some(SwipeIntent::OpenMixer | SwipeIntent::CloseMixer)
        ) {
            self.mixer_toggled = true;
        }
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downward_move_past_threshold_opens_mixer() {
        assert_eq!(interpret_move(false, 30.0), Some(SwipeIntent::OpenMixer));
        assert_eq!(interpret_move(false, 20.0), None);
        assert_eq!(interpret_move(false, 28.0), None);
    }

    #[test]
    fn upward_move_past_threshold_closes_mixer() {
        assert_eq!(interpret_move(true, -30.0), Some(SwipeIntent::CloseMixer));
        assert_eq!(interpret_move(true, -15.0), None);
    }

    #[test]
    fn upward_move_reveals_controls_when_mixer_closed() {
        assert_eq!(interpret_move(false, -13.0), Some(SwipeIntent::ShowControls));
        assert_eq!(interpret_move(false, -12.0), None);
    }

    #[test]
    fn release_rules() {
        assert_eq!(
            interpret_release(false, -21.0),
            Some(SwipeIntent::ShowControls)
        );
        assert_eq!(interpret_release(false, -20.0), None);
        assert_eq!(interpret_release(true, -27.0), Some(SwipeIntent::CloseMixer));
        assert_eq!(interpret_release(true, -26.0), None);
        assert_eq!(interpret_release(false, 40.0), None);
    }

    #[test]
    fn moves_inside_dead_zone_are_ignored() {
        let mut gesture = SwipeGesture::new();
        gesture.begin(100.0);
        assert_eq!(gesture.moved(110.0, false), None);
        assert!(!gesture.is_claimed());
        assert_eq!(gesture.released(92.0, false), None);
    }

    #[test]
    fn claimed_gesture_opens_mixer_once() {
        let mut gesture = SwipeGesture::new();
        gesture.begin(100.0);
        assert_eq!(gesture.moved(115.0, false), None);
        assert!(gesture.is_claimed());
        assert_eq!(gesture.moved(131.0, false), Some(SwipeIntent::OpenMixer));
        assert_eq!(gesture.moved(160.0, false), None);
        assert_eq!(gesture.released(60.0, true), None);
        assert!(!gesture.is_tracking());
    }

    #[test]
    fn closing_the_mixer_does_not_also_show_controls() {
        let mut gesture = SwipeGesture::new();
        gesture.begin(300.0);
        assert_eq!(gesture.moved(260.0, true), Some(SwipeIntent::CloseMixer));
        // The overlay now reports the mixer closed, but the gesture is spent.
        assert_eq!(gesture.moved(250.0, false), None);
        assert_eq!(gesture.released(240.0, false), None);
    }

    #[test]
    fn release_without_move_can_show_controls() {
        let mut gesture = SwipeGesture::new();
        gesture.begin(500.0);
        assert_eq!(
            gesture.released(470.0, false),
            Some(SwipeIntent::ShowControls)
        );
    }

    #[test]
    fn samples_without_begin_are_ignored() {
        let mut gesture = SwipeGesture::new();
        assert_eq!(gesture.moved(500.0, false), None);
        assert_eq!(gesture.released(500.0, false), None);
    }

    #[test]
    fn begin_resets_previous_gesture() {
        let mut gesture = SwipeGesture::new();
        gesture.begin(0.0);
        assert_eq!(gesture.moved(40.0, false), Some(SwipeIntent::OpenMixer));
        gesture.begin(0.0);
        assert!(!gesture.is_claimed());
        assert_eq!(gesture.moved(-40.0, true), Some(SwipeIntent::CloseMixer));
    }
}
