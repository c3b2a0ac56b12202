// SPDX-License-Identifier: MPL-2.0
//! Built-in ambient sound catalog.

use super::newtypes::AccentColor;

/// Category used to filter the mixer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Pseudo-category matching every sound.
    #[default]
    All,
    Nature,
    Relax,
    Focus,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::All,
        Category::Nature,
        Category::Relax,
        Category::Focus,
    ];

    /// Fluent key of the chip label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Category::All => "category-all",
            Category::Nature => "category-nature",
            Category::Relax => "category-relax",
            Category::Focus => "category-focus",
        }
    }

    /// Whether a sound of `category` is visible under this filter.
    #[must_use]
    pub fn includes(self, category: Category) -> bool {
        self == Category::All || self == category
    }
}

/// Static description of one ambient sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundDescriptor {
    pub id: u32,
    pub label_key: &'static str,
    /// Glyph shown on the card.
    pub icon: &'static str,
    pub category: Category,
    pub accent: AccentColor,
}

const fn sound(
    id: u32,
    label_key: &'static str,
    icon: &'static str,
    category: Category,
    accent: AccentColor,
) -> SoundDescriptor {
    SoundDescriptor {
        id,
        label_key,
        icon,
        category,
        accent,
    }
}

/// Every sound offered by the mixer, in display order.
pub const CATALOG: [SoundDescriptor; 12] = [
    sound(1, "sound-rain", "🌧️", Category::Nature, AccentColor::rgb(0x4A, 0x90, 0xE2)),
    sound(2, "sound-campfire", "🔥", Category::Nature, AccentColor::rgb(0xE2, 0x77, 0x55)),
    sound(3, "sound-waves", "🌊", Category::Nature, AccentColor::rgb(0x5A, 0xB9, 0xEA)),
    sound(4, "sound-forest", "🌲", Category::Nature, AccentColor::rgb(0x50, 0xC8, 0x78)),
    sound(5, "sound-wind", "💨", Category::Nature, AccentColor::rgb(0x87, 0xCE, 0xEB)),
    sound(6, "sound-birds", "🐦", Category::Nature, AccentColor::rgb(0xFF, 0xD7, 0x00)),
    sound(7, "sound-thunder", "⚡", Category::Nature, AccentColor::rgb(0x9B, 0x59, 0xB6)),
    sound(8, "sound-wind-chime", "🔔", Category::Relax, AccentColor::rgb(0xE8, 0xB4, 0xB8)),
    sound(9, "sound-cafe", "☕", Category::Focus, AccentColor::rgb(0x8B, 0x45, 0x13)),
    sound(10, "sound-piano", "🎹", Category::Relax, AccentColor::rgb(0xF0, 0xE6, 0x8C)),
    sound(11, "sound-white-noise", "📻", Category::Focus, AccentColor::rgb(0xCC, 0xCC, 0xCC)),
    sound(12, "sound-stream", "💧", Category::Nature, AccentColor::rgb(0x00, 0xCE, 0xD1)),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_ids_are_unique() {
        let ids: HashSet<_> = CATALOG.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn catalog_never_uses_the_all_pseudo_category() {
        assert!(CATALOG.iter().all(|d| d.category != Category::All));
    }

    #[test]
    fn all_includes_every_category() {
        for category in Category::ALL {
            assert!(Category::All.includes(category));
        }
        assert!(!Category::Relax.includes(Category::Nature));
    }

    #[test]
    fn catalog_ids_count_up_from_one() {
        let ids: Vec<u32> = CATALOG.iter().map(|d| d.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
    }
}
