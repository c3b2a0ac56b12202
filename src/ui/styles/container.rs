// SPDX-License-Identifier: MPL-2.0
//! Container styles: scrims, panels and sound cards.

use super::{accent, glass, shade};
use crate::domain::sound::AccentColor;
use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::gradient::Linear;
use iced::widget::container;
use iced::{Background, Border, Color, Radians, Theme};
use std::f32::consts::PI;

/// Gradient running from the top edge down.
const TOP_TO_BOTTOM: Radians = Radians(PI);
/// Gradient running from the bottom edge up.
const BOTTOM_TO_TOP: Radians = Radians(0.0);

fn with_alpha(color: Color, fade: f32) -> Color {
    Color {
        a: color.a * fade,
        ..color
    }
}

fn linear(angle: Radians, stops: &[(f32, Color)], fade: f32) -> Background {
    let gradient = stops
        .iter()
        .fold(Linear::new(angle), |gradient, &(offset, color)| {
            gradient.add_stop(offset, with_alpha(color, fade))
        });
    Background::Gradient(gradient.into())
}

/// Flat backdrop shown before the first video frame.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::VIDEO_PLACEHOLDER)),
        ..Default::default()
    }
}

/// Darkening behind the playback controls.
pub fn controls_scrim(fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(linear(
            TOP_TO_BOTTOM,
            &[
                (0.0, shade(opacity::TRANSPARENT)),
                (0.5, shade(opacity::GLASS_OUTLINE)),
                (0.75, shade(opacity::SCRIM_CONTROLS)),
                (1.0, shade(opacity::TRANSPARENT)),
            ],
            fade,
        )),
        text_color: Some(glass(fade)),
        ..Default::default()
    }
}

/// Shadow along the bottom edge while the controls are shown.
pub fn bottom_shadow(fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(linear(
            BOTTOM_TO_TOP,
            &[
                (0.0, shade(opacity::SCRIM_SHADOW)),
                (1.0, shade(opacity::TRANSPARENT)),
            ],
            fade,
        )),
        ..Default::default()
    }
}

/// Darkening behind the timer row and clock.
pub fn timer_scrim(fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(linear(
            BOTTOM_TO_TOP,
            &[
                (0.0, shade(opacity::SCRIM_TIMER)),
                (0.45, shade(opacity::SCRIM_SHADOW)),
                (0.88, shade(opacity::GLASS_BORDER)),
                (1.0, shade(opacity::TRANSPARENT)),
            ],
            fade,
        )),
        text_color: Some(glass(fade)),
        ..Default::default()
    }
}

/// Full-screen mixer panel.
pub fn mixer_panel(fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(linear(
            TOP_TO_BOTTOM,
            &[
                (0.0, palette::NIGHT_900),
                (0.5, palette::NIGHT_800),
                (1.0, palette::NIGHT_950),
            ],
            fade,
        )),
        text_color: Some(glass(fade)),
        ..Default::default()
    }
}

/// One sound card; tinted by its accent once the channel is audible.
pub fn sound_card(
    color: AccentColor,
    active: bool,
    fade: f32,
) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let background = if active {
            linear(
                TOP_TO_BOTTOM,
                &[
                    (0.0, accent(color, opacity::ACCENT_STRONG)),
                    (1.0, accent(color, opacity::ACCENT_SOFT)),
                ],
                fade,
            )
        } else {
            linear(
                TOP_TO_BOTTOM,
                &[
                    (0.0, glass(opacity::GLASS_SUBTLE)),
                    (1.0, glass(opacity::GLASS_FAINT)),
                ],
                fade,
            )
        };
        let outline = if active {
            accent(color, opacity::GLASS_OUTLINE)
        } else {
            glass(opacity::GLASS_BORDER)
        };

        container::Style {
            background: Some(background),
            text_color: Some(glass(fade)),
            border: Border {
                color: with_alpha(outline, fade),
                width: border::WIDTH_SM,
                radius: radius::CARD.into(),
            },
            ..Default::default()
        }
    }
}

/// Hairline separating the timer header from its mode row.
pub fn divider(fade: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(glass(opacity::GLASS_MEDIUM * fade))),
        ..Default::default()
    }
}
