// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`overlay`]: Overlay layers ([`OverlayState`](overlay::OverlayState),
//!   [`SwipeGesture`](overlay::gesture::SwipeGesture),
//!   [`AnimatedValue`](overlay::animation::AnimatedValue))
//! - [`playback`]: Media status ([`PlaybackStatus`](playback::PlaybackStatus))
//! - [`sound`]: Ambient sound mixer ([`SoundMixer`](sound::SoundMixer),
//!   [`Category`](sound::Category), [`Volume`](sound::Volume))

pub mod overlay;
pub mod playback;
pub mod sound;
