// SPDX-License-Identifier: MPL-2.0
//! Styles centralisés pour tous les composants UI.

pub mod button;
pub mod container;
pub mod slider;
pub mod text;

use crate::domain::sound::AccentColor;
use iced::Color;

/// Converts a catalog accent into an Iced color with the given alpha.
#[must_use]
pub fn accent(color: AccentColor, alpha: f32) -> Color {
    Color::from_rgba8(color.r, color.g, color.b, alpha)
}

/// White with the given alpha, the base of every glass surface.
#[must_use]
pub fn glass(alpha: f32) -> Color {
    Color {
        a: alpha,
        ..Color::WHITE
    }
}

/// Black with the given alpha, used by scrims.
#[must_use]
pub fn shade(alpha: f32) -> Color {
    Color {
        a: alpha,
        ..Color::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_converts_bytes() {
        let color = accent(AccentColor::rgb(255, 0, 0), 0.5);
        assert_eq!(color.r, 1.0);
        assert_eq!(color.g, 0.0);
        assert_eq!(color.a, 0.5);
    }
}
