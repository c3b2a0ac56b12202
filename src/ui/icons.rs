// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module.
//!
//! Icons are small SVG documents embedded in the binary. Handles are cached
//! with `OnceLock` so each icon is parsed once and shared afterwards. All
//! glyphs are drawn white and tinted at render time through
//! [`styles::text::icon`](super::styles::text::icon).
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `moon` not `sleep_mode`).

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $body:literal, $doc:literal) => {
        #[doc = $doc]
        #[must_use]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(
                    concat!(
                        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24">"#,
                        $body,
                        "</svg>"
                    )
                    .as_bytes(),
                )
            });
            Svg::new(handle.clone())
        }
    };
}

// =============================================================================
// Playback Icons
// =============================================================================

define_icon!(
    play,
    r#"<path fill="white" d="M8 5.5v13a1 1 0 0 0 1.5.86l10.4-6.5a1 1 0 0 0 0-1.72L9.5 4.64A1 1 0 0 0 8 5.5z"/>"#,
    "Play icon: triangle pointing right."
);
define_icon!(
    pause,
    r#"<rect fill="white" x="6" y="4.5" width="4" height="15" rx="1.2"/><rect fill="white" x="14" y="4.5" width="4" height="15" rx="1.2"/>"#,
    "Pause icon: two vertical bars."
);
define_icon!(
    rewind,
    r#"<path fill="white" d="M11 6.5v11L3 12zM20 6.5v11L12 12z"/>"#,
    "Rewind icon: two triangles pointing left."
);
define_icon!(
    fast_forward,
    r#"<path fill="white" d="M13 6.5v11L21 12zM4 6.5v11L12 12z"/>"#,
    "Fast-forward icon: two triangles pointing right."
);

// =============================================================================
// Bottom Row Icons
// =============================================================================

define_icon!(
    search,
    r#"<circle cx="10.5" cy="10.5" r="6.5" fill="none" stroke="white" stroke-width="2"/><path d="M15.5 15.5L20.5 20.5" stroke="white" stroke-width="2" stroke-linecap="round"/>"#,
    "Search icon: magnifying glass."
);
define_icon!(
    clock,
    r#"<circle cx="12" cy="12" r="8.5" fill="none" stroke="white" stroke-width="2"/><path d="M12 7v5l3.5 2" fill="none" stroke="white" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>"#,
    "Clock outline icon: circle with two hands."
);
define_icon!(
    list,
    r#"<g stroke="white" stroke-width="2" stroke-linecap="round"><path d="M9 6.5h11M9 12h11M9 17.5h11"/><path d="M4.5 6.5h.01M4.5 12h.01M4.5 17.5h.01"/></g>"#,
    "List icon: three bullet rows."
);
define_icon!(
    heart,
    r#"<path fill="none" stroke="white" stroke-width="2" stroke-linejoin="round" d="M12 20s-7.5-4.6-7.5-10A4.25 4.25 0 0 1 12 7.4 4.25 4.25 0 0 1 19.5 10c0 5.4-7.5 10-7.5 10z"/>"#,
    "Heart outline icon."
);

// =============================================================================
// Timer Row Icons
// =============================================================================

define_icon!(
    hourglass,
    r#"<path fill="none" stroke="white" stroke-width="2" stroke-linejoin="round" d="M7 3.5h10M7 20.5h10M8 3.5c0 4.5 4 5.5 4 8.5s-4 4-4 8.5M16 3.5c0 4.5-4 5.5-4 8.5s4 4 4 8.5"/>"#,
    "Hourglass icon."
);
define_icon!(
    book,
    r#"<path fill="none" stroke="white" stroke-width="2" stroke-linejoin="round" d="M12 6.5C10 5 7 4.5 3.5 5v13.5C7 18 10 18.5 12 20c2-1.5 5-2 8.5-1.5V5C17 4.5 14 5 12 6.5zM12 6.5V20"/>"#,
    "Open book icon."
);
define_icon!(
    moon,
    r#"<path fill="none" stroke="white" stroke-width="2" stroke-linejoin="round" d="M20 14.5A8 8 0 0 1 9.5 4a8 8 0 1 0 10.5 10.5z"/>"#,
    "Crescent moon icon."
);
define_icon!(
    alarm,
    r#"<circle cx="12" cy="13" r="7" fill="none" stroke="white" stroke-width="2"/><path d="M12 9.5V13l2.5 1.5M4.5 5.5l3-2.5M19.5 5.5l-3-2.5" fill="none" stroke="white" stroke-width="2" stroke-linecap="round"/>"#,
    "Alarm clock icon."
);

// =============================================================================
// Panel Icons
// =============================================================================

define_icon!(
    close,
    r#"<path d="M6 6l12 12M18 6L6 18" stroke="white" stroke-width="2" stroke-linecap="round"/>"#,
    "Close icon: diagonal cross."
);

/// Sets a square size on an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_icons_load() {
        // These calls verify that every icon builds a handle
        let _ = play();
        let _ = pause();
        let _ = rewind();
        let _ = fast_forward();
        let _ = search();
        let _ = clock();
        let _ = list();
        let _ = heart();
        let _ = hourglass();
        let _ = book();
        let _ = moon();
        let _ = alarm();
        let _ = close();
    }
}
