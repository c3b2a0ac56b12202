// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Every style takes a `fade` factor in `[0, 1]` that scales all alphas, so a
//! layer can be drawn at its current animated opacity.

use super::glass;
use crate::ui::design_tokens::{border, opacity, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

fn faded_shadow(fade: f32) -> Shadow {
    Shadow {
        color: Color {
            a: shadow::SOFT.color.a * fade,
            ..shadow::SOFT.color
        },
        ..shadow::SOFT
    }
}

/// Circular glass button drawn over the video.
pub fn round(
    background_alpha: f32,
    border_width: f32,
    border_alpha: f32,
    fade: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let lift = match status {
            button::Status::Hovered => 0.06,
            button::Status::Pressed => 0.12,
            _ => 0.0,
        };

        button::Style {
            background: Some(Background::Color(glass((background_alpha + lift) * fade))),
            text_color: glass(opacity::OPAQUE * fade),
            border: Border {
                color: glass(border_alpha * fade),
                width: border_width,
                radius: radius::FULL.into(),
            },
            shadow: faded_shadow(fade),
            snap: true,
        }
    }
}

/// The large play/pause button.
pub fn play(fade: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    round(
        opacity::GLASS_EMPHASIS,
        border::WIDTH_LG,
        opacity::GLASS_OUTLINE,
        fade,
    )
}

/// Skip back/forward buttons.
pub fn skip(fade: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    round(
        opacity::GLASS_MEDIUM,
        border::WIDTH_MD,
        opacity::GLASS_EMPHASIS,
        fade,
    )
}

/// Small circles of the bottom row and the timer row.
pub fn small(fade: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    round(
        opacity::GLASS_LIGHT,
        border::WIDTH_MD,
        opacity::GLASS_STRONG,
        fade,
    )
}

/// Category filter chip.
pub fn chip(selected: bool, fade: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, outline, text) = if selected {
            (
                opacity::GLASS_STRONG,
                opacity::GLASS_OUTLINE,
                opacity::OPAQUE,
            )
        } else {
            (
                opacity::GLASS_SUBTLE,
                opacity::GLASS_BORDER,
                opacity::TEXT_MUTED,
            )
        };
        let hover = if matches!(status, button::Status::Hovered) && !selected {
            0.04
        } else {
            0.0
        };

        button::Style {
            background: Some(Background::Color(glass((background + hover) * fade))),
            text_color: glass(text * fade),
            border: Border {
                color: glass(outline * fade),
                width: border::WIDTH_SM,
                radius: radius::CHIP.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
