// SPDX-License-Identifier: MPL-2.0
//! Text styles for content drawn over the video.

use super::glass;
use crate::ui::design_tokens::opacity;
use iced::widget::{svg, text};
use iced::Theme;

/// White text at the layer's current opacity.
pub fn primary(fade: f32) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style {
        color: Some(glass(opacity::OPAQUE * fade)),
    }
}

/// Secondary labels such as volume percentages.
pub fn muted(fade: f32) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style {
        color: Some(glass(opacity::TEXT_MUTED * fade)),
    }
}

/// Tints an SVG icon white at the layer's current opacity.
pub fn icon(fade: f32) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(glass(opacity::OPAQUE * fade)),
    }
}
