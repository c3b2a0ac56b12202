// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each overlay
//! receives a `ViewContext` and emits its own `Message`, mapped by the app.
//!
//! # Overlays
//!
//! - [`controls`] - Transport buttons and bottom icon row
//! - [`mixer`] - Sound mixer panel with category filter and volume sliders
//! - [`timer`] - Timer modes and clock
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Video canvas
//! - [`styles`] - Centralized styling (buttons, containers, sliders, text)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded SVG icons

pub mod controls;
pub mod design_tokens;
pub mod icons;
pub mod mixer;
pub mod styles;
pub mod timer;
pub mod widgets;
