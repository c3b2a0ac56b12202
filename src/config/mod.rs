// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[playback]` - Background video source and playback behavior
//! - `[timer]` - Alarm overlay defaults
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `YOHAKU_CONFIG_DIR` environment variable or pass `--config-dir`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use yohaku::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("ja".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ja").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Background video settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaybackConfig {
    /// Video file looped behind the overlays.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_path: Option<PathBuf>,

    /// Start playing as soon as the video is opened.
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    /// Restart from the beginning at the end of the stream.
    #[serde(
        default = "default_loop_enabled",
        skip_serializing_if = "Option::is_none"
    )]
    pub loop_enabled: Option<bool>,

    /// Step used by the skip back/forward controls, in milliseconds.
    #[serde(default = "default_seek_step_ms", skip_serializing_if = "Option::is_none")]
    pub seek_step_ms: Option<i64>,

    /// Pause when the window loses focus and resume when it regains it.
    #[serde(
        default = "default_pause_in_background",
        skip_serializing_if = "Option::is_none"
    )]
    pub pause_in_background: Option<bool>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            video_path: None,
            autoplay: default_autoplay(),
            loop_enabled: default_loop_enabled(),
            seek_step_ms: default_seek_step_ms(),
            pause_in_background: default_pause_in_background(),
        }
    }
}

impl PlaybackConfig {
    /// Seek step clamped to the supported range.
    #[must_use]
    pub fn seek_step_ms(&self) -> i64 {
        self.seek_step_ms
            .unwrap_or(DEFAULT_SEEK_STEP_MS)
            .clamp(MIN_SEEK_STEP_MS, MAX_SEEK_STEP_MS)
    }
}

/// Alarm overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimerConfig {
    /// Duration shown on the timer clock, in minutes.
    #[serde(
        default = "default_timer_minutes",
        skip_serializing_if = "Option::is_none"
    )]
    pub default_minutes: Option<u32>,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_minutes: default_timer_minutes(),
        }
    }
}

impl TimerConfig {
    /// Timer duration clamped to the supported range.
    #[must_use]
    pub fn minutes(&self) -> u32 {
        self.default_minutes
            .unwrap_or(DEFAULT_TIMER_MINUTES)
            .clamp(MIN_TIMER_MINUTES, MAX_TIMER_MINUTES)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub timer: TimerConfig,
}

fn default_autoplay() -> Option<bool> {
    Some(DEFAULT_AUTOPLAY)
}

fn default_loop_enabled() -> Option<bool> {
    Some(DEFAULT_LOOP_ENABLED)
}

fn default_seek_step_ms() -> Option<i64> {
    Some(DEFAULT_SEEK_STEP_MS)
}

fn default_pause_in_background() -> Option<bool> {
    Some(DEFAULT_PAUSE_IN_BACKGROUND)
}

fn default_timer_minutes() -> Option<u32> {
    Some(DEFAULT_TIMER_MINUTES)
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with an i18n key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring unreadable config {}: {}", path.display(), err);
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
