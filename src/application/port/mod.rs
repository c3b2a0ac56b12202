// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`playback`]: Control of the background media source
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no `FFmpeg` types)
//! - Traits are `Send` so handles can cross from subscriptions into the app
//! - Methods return `Result` with port error types
//! - No `async fn` - results arrive through Iced messages

pub mod playback;

pub use playback::{PlaybackError, PlaybackHandle};
