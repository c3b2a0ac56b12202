// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`bridge`]: Playback bridge between user intent and the media handle
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure (the video engine) implements application layer ports
//! - Presentation layer drives the bridge from its update loop

pub mod bridge;
pub mod port;
