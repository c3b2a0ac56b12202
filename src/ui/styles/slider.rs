// SPDX-License-Identifier: MPL-2.0
//! Slider-specific style definitions.

use super::{accent, glass};
use crate::domain::sound::AccentColor;
use crate::ui::design_tokens::{border, opacity, radius, sizing};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Volume slider: accent-colored fill over a faint white track.
pub fn volume(color: AccentColor, fade: f32) -> impl Fn(&Theme, slider::Status) -> slider::Style {
    move |_theme: &Theme, status: slider::Status| {
        let handle_alpha = match status {
            slider::Status::Hovered | slider::Status::Dragged => opacity::OPAQUE,
            slider::Status::Active => 0.9,
        };

        slider::Style {
            rail: slider::Rail {
                backgrounds: (
                    Background::Color(accent(color, fade)),
                    Background::Color(glass(opacity::GLASS_STRONG * fade)),
                ),
                width: sizing::SLIDER_RAIL,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: radius::SM.into(),
                },
            },
            handle: slider::Handle {
                shape: slider::HandleShape::Circle {
                    radius: sizing::SLIDER_HANDLE_RADIUS,
                },
                background: Background::Color(glass(handle_alpha * fade)),
                border_width: border::WIDTH_LG,
                border_color: accent(color, fade),
            },
        }
    }
}
