// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All visual constants of the overlays, grouped the way the W3C Design Tokens
format groups them.

## Organization

- **Palette**: Base colors and gradient stops
- **Opacity**: Glass surfaces drawn over the video
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Round buttons and icons
- **Layout**: Overlay heights as fractions of the window
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use yohaku::ui::design_tokens::{opacity, palette};
use iced::Color;

let chip = Color {
    a: opacity::GLASS_SUBTLE,
    ..palette::WHITE
};
assert!(chip.a < 0.1);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Mixer background gradient (#0f1419 → #1a2332 → #0d1520)
    pub const NIGHT_900: Color = Color::from_rgb(0.059, 0.078, 0.098);
    pub const NIGHT_800: Color = Color::from_rgb(0.102, 0.137, 0.196);
    pub const NIGHT_950: Color = Color::from_rgb(0.051, 0.082, 0.125);

    /// Shown while no video frame has been decoded yet.
    pub const VIDEO_PLACEHOLDER: Color = Color::from_rgb(0.04, 0.05, 0.07);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;

    /// Inactive cards, second gradient stop.
    pub const GLASS_FAINT: f32 = 0.04;
    /// Inactive chips and cards.
    pub const GLASS_SUBTLE: f32 = 0.08;
    /// Chip borders.
    pub const GLASS_BORDER: f32 = 0.1;
    /// Small round buttons.
    pub const GLASS_LIGHT: f32 = 0.15;
    /// Skip buttons.
    pub const GLASS_MEDIUM: f32 = 0.18;
    /// Selected chip, slider track, small button borders.
    pub const GLASS_STRONG: f32 = 0.2;
    /// Play button and skip button borders.
    pub const GLASS_EMPHASIS: f32 = 0.25;
    /// Selected chip border, play button border.
    pub const GLASS_OUTLINE: f32 = 0.3;

    /// Secondary text on dark backgrounds.
    pub const TEXT_MUTED: f32 = 0.7;

    /// Bottom shadow behind the controls.
    pub const SCRIM_SHADOW: f32 = 0.35;
    /// Strongest stop of the controls scrim.
    pub const SCRIM_CONTROLS: f32 = 0.4;
    /// Strongest stop of the timer scrim.
    pub const SCRIM_TIMER: f32 = 0.6;

    /// Accent alpha for the first stop of an active card (`40` hex).
    pub const ACCENT_STRONG: f32 = 0.25;
    /// Accent alpha for the second stop of an active card (`20` hex).
    pub const ACCENT_SOFT: f32 = 0.125;

    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;

    /// Distance of the brand label from the top edge.
    pub const BRAND_TOP: f32 = 50.0;
    /// Distance of the bottom icon row from the bottom edge.
    pub const BOTTOM_ROW: f32 = 56.0;
    /// Inner padding of sound cards.
    pub const CARD_PADDING: f32 = 20.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 20.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 28.0;
    pub const ICON_XL: f32 = 36.0;

    /// Central play/pause button.
    pub const PLAY_BUTTON: f32 = 84.0;
    /// Skip back/forward buttons.
    pub const SKIP_BUTTON: f32 = 60.0;
    /// Bottom row and timer row buttons.
    pub const ROUND_BUTTON: f32 = 48.0;

    /// Emoji glyph on sound cards.
    pub const CARD_GLYPH: f32 = 32.0;
    /// Width of a volume slider rail.
    pub const SLIDER_RAIL: f32 = 4.0;
    pub const SLIDER_HANDLE_RADIUS: f32 = 8.0;
}

// ============================================================================
// Layout Fractions
// ============================================================================

pub mod layout {
    /// Height of the controls scrim relative to the window height.
    pub const CONTROLS_OVERLAY_FRACTION: f32 = 0.54;
    /// Offset of the transport row from the bottom, relative to the scrim.
    pub const TRANSPORT_ROW_FRACTION: f32 = 0.30;
    /// Height of the timer scrim relative to the window height.
    pub const TIMER_OVERLAY_FRACTION: f32 = 0.48;
    /// Height of the bottom shadow relative to the window height.
    pub const SHADOW_FRACTION: f32 = 0.25;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Timer clock.
    pub const DISPLAY: f32 = 64.0;
    /// Brand label.
    pub const BRAND: f32 = 24.0;
    /// Panel titles.
    pub const TITLE: f32 = 22.0;
    /// Card labels.
    pub const BODY_LG: f32 = 16.0;
    /// Chips and captions.
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 1.5;
    pub const WIDTH_LG: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 2.0;
    pub const CARD: f32 = 16.0;
    pub const CHIP: f32 = 20.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Text-like glow under round buttons.
    pub const SOFT: Shadow = Shadow {
        color: Color {
            a: 0.3,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::GLASS_SUBTLE < opacity::GLASS_STRONG);
    assert!(opacity::GLASS_STRONG < opacity::GLASS_OUTLINE);
    assert!(opacity::ACCENT_SOFT < opacity::ACCENT_STRONG);

    assert!(sizing::PLAY_BUTTON > sizing::SKIP_BUTTON);
    assert!(sizing::SKIP_BUTTON > sizing::ROUND_BUTTON);

    assert!(layout::CONTROLS_OVERLAY_FRACTION > 0.0 && layout::CONTROLS_OVERLAY_FRACTION < 1.0);
    assert!(layout::TIMER_OVERLAY_FRACTION > 0.0 && layout::TIMER_OVERLAY_FRACTION < 1.0);

    assert!(typography::DISPLAY > typography::BRAND);
    assert!(typography::BODY_LG > typography::BODY);

    assert!(border::WIDTH_LG > border::WIDTH_MD);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn accent_alphas_match_hex_suffixes() {
        assert!((opacity::ACCENT_STRONG - f32::from(0x40_u8) / 256.0).abs() < 1e-6);
        assert!((opacity::ACCENT_SOFT - f32::from(0x20_u8) / 256.0).abs() < 1e-6);
    }
}
