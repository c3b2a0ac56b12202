// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Playback**: Background video behavior and seek step
//! - **Timer**: Default duration shown on the alarm overlay
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Start the background video as soon as it is opened.
pub const DEFAULT_AUTOPLAY: bool = true;

/// Restart the background video from the beginning when it ends.
pub const DEFAULT_LOOP_ENABLED: bool = true;

/// Pause the video when the window goes to the background.
pub const DEFAULT_PAUSE_IN_BACKGROUND: bool = true;

/// Default seek step for the skip back/forward buttons (10 seconds).
pub const DEFAULT_SEEK_STEP_MS: i64 = 10_000;

/// Minimum seek step in milliseconds.
pub const MIN_SEEK_STEP_MS: i64 = 1_000;

/// Maximum seek step in milliseconds.
pub const MAX_SEEK_STEP_MS: i64 = 60_000;

/// Interval between status notifications while the video plays.
pub const STATUS_UPDATE_INTERVAL_MS: u64 = 250;

// ==========================================================================
// Timer Defaults
// ==========================================================================

/// Default timer duration in minutes (rendered as `00:30`).
pub const DEFAULT_TIMER_MINUTES: u32 = 30;

/// Minimum timer duration in minutes.
pub const MIN_TIMER_MINUTES: u32 = 1;

/// Maximum timer duration in minutes (12 hours).
pub const MAX_TIMER_MINUTES: u32 = 720;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width (portrait phone-like aspect).
pub const WINDOW_DEFAULT_WIDTH: f32 = 430.0;

/// Default window height.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 860.0;

/// Minimum window width.
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_SEEK_STEP_MS <= DEFAULT_SEEK_STEP_MS);
    assert!(DEFAULT_SEEK_STEP_MS <= MAX_SEEK_STEP_MS);
    assert!(MIN_TIMER_MINUTES <= DEFAULT_TIMER_MINUTES);
    assert!(DEFAULT_TIMER_MINUTES <= MAX_TIMER_MINUTES);
    assert!(MIN_WINDOW_WIDTH <= WINDOW_DEFAULT_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= WINDOW_DEFAULT_HEIGHT);
};
