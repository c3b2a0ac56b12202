// SPDX-License-Identifier: MPL-2.0
//! `yohaku` is an ambient relaxation player built with the Iced GUI framework.
//!
//! It loops a muted background video and layers three mutually exclusive
//! overlays over it: playback controls revealed by an upward swipe, a sound
//! mixer pulled down from the top, and a timer panel.

#![doc(html_root_url = "https://docs.rs/yohaku/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
pub mod video;

#[cfg(test)]
mod test_utils;
