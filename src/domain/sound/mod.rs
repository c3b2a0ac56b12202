// SPDX-License-Identifier: MPL-2.0
//! Ambient sound mixer state.
//!
//! The mixer holds one channel per catalog entry. Volumes are pure state;
//! nothing here produces audio.

pub mod catalog;
pub mod newtypes;

pub use catalog::{Category, SoundDescriptor, CATALOG};
pub use newtypes::{AccentColor, Volume};

use std::fmt;

/// Errors raised by mixer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoundError {
    /// No channel has the requested id.
    UnknownChannel(u32),
}

impl fmt::Display for SoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoundError::UnknownChannel(id) => write!(f, "unknown sound channel: {}", id),
        }
    }
}

impl std::error::Error for SoundError {}

/// A catalog sound with its current volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundChannel {
    pub descriptor: &'static SoundDescriptor,
    pub volume: Volume,
}

impl SoundChannel {
    #[must_use]
    pub fn id(&self) -> u32 {
        self.descriptor.id
    }

    /// A channel is active when it is audible.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.volume.is_muted()
    }
}

/// Volume state for every catalog sound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundMixer {
    channels: Vec<SoundChannel>,
}

impl Default for SoundMixer {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundMixer {
    /// All catalog sounds at volume zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            channels: CATALOG
                .iter()
                .map(|descriptor| SoundChannel {
                    descriptor,
                    volume: Volume::default(),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn channels(&self) -> &[SoundChannel] {
        &self.channels
    }

    /// Channels visible under `category`, in catalog order.
    pub fn filtered_channels(&self, category: Category) -> impl Iterator<Item = &SoundChannel> {
        self.channels
            .iter()
            .filter(move |channel| category.includes(channel.descriptor.category))
    }

    #[must_use]
    pub fn channel(&self, id: u32) -> Option<&SoundChannel> {
        self.channels.iter().find(|channel| channel.id() == id)
    }

    /// Sets one channel's volume, leaving every other channel untouched.
    pub fn set_volume(&mut self, id: u32, volume: Volume) -> Result<(), SoundError> {
        let channel = self
            .channels
            .iter_mut()
            .find(|channel| channel.id() == id)
            .ok_or(SoundError::UnknownChannel(id))?;
        channel.volume = volume;
        Ok(())
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.channels.iter().filter(|c| c.is_active()).count()
    }
}
