// SPDX-License-Identifier: MPL-2.0
//! Value types for the sound mixer.

/// Volume bounds as integer percentages.
pub mod volume_bounds {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;
    pub const DEFAULT: u8 = 0;
}

/// Channel volume guaranteed to be within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Volume(u8);

impl Volume {
    /// Creates a new volume, clamping to the valid range.
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self(value.min(volume_bounds::MAX))
    }

    /// Creates a volume from a slider position, rounding and clamping.
    #[must_use]
    pub fn from_slider(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        let clamped = value.round().clamp(
            f32::from(volume_bounds::MIN),
            f32::from(volume_bounds::MAX),
        );
        // In range after the clamp.
        Self(clamped as u8)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_muted(self) -> bool {
        self.0 == volume_bounds::MIN
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

/// RGB accent color of a sound card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccentColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl AccentColor {
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_clamps_to_max() {
        assert_eq!(Volume::new(150).value(), 100);
        assert_eq!(Volume::new(42).value(), 42);
    }

    #[test]
    fn volume_from_slider_rounds_and_clamps() {
        assert_eq!(Volume::from_slider(41.6).value(), 42);
        assert_eq!(Volume::from_slider(-3.0).value(), 0);
        assert_eq!(Volume::from_slider(180.0).value(), 100);
        assert_eq!(Volume::from_slider(f32::NAN), Volume::default());
    }

    #[test]
    fn default_volume_is_muted() {
        assert!(Volume::default().is_muted());
        assert!(!Volume::new(1).is_muted());
    }
}
