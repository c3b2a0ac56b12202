// SPDX-License-Identifier: MPL-2.0
//! Widget for rendering the background video.
//!
//! Frames are drawn with Iced's Image widget, scaled to cover the whole
//! window so the video always fills the screen behind the overlays.

use crate::ui::styles;
use iced::widget::{container, image};
use iced::{ContentFit, Element, Length};
use std::sync::Arc;

/// Holds the most recent frame and renders it full-bleed.
#[derive(Debug, Default)]
pub struct VideoCanvas {
    frame_handle: Option<image::Handle>,
    width: u32,
    height: u32,
}

impl VideoCanvas {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the displayed frame.
    pub fn set_frame(&mut self, rgba_data: Arc<Vec<u8>>, width: u32, height: u32) {
        // Take ownership when we hold the only reference
        let data = Arc::try_unwrap(rgba_data).unwrap_or_else(|arc| (*arc).clone());
        self.frame_handle = Some(image::Handle::from_rgba(width, height, data));
        self.width = width;
        self.height = height;
    }

    /// Clears the current frame and releases memory.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn has_frame(&self) -> bool {
        self.frame_handle.is_some()
    }

    /// Frame size in pixels, `(0, 0)` when empty.
    #[must_use]
    pub fn frame_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn view<'a, Message: 'a>(&self) -> Element<'a, Message> {
        match &self.frame_handle {
            Some(handle) => image::Image::new(handle.clone())
                .content_fit(ContentFit::Cover)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => container(iced::widget::text(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::backdrop)
                .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_starts_empty() {
        let canvas = VideoCanvas::new();
        assert!(!canvas.has_frame());
        assert_eq!(canvas.frame_size(), (0, 0));
    }

    #[test]
    fn set_frame_updates_dimensions() {
        let mut canvas = VideoCanvas::new();
        canvas.set_frame(Arc::new(vec![0u8; 16 * 9 * 4]), 16, 9);

        assert!(canvas.has_frame());
        assert_eq!(canvas.frame_size(), (16, 9));
    }

    #[test]
    fn shared_frame_data_is_copied() {
        let mut canvas = VideoCanvas::new();
        let data = Arc::new(vec![255u8; 4]);
        canvas.set_frame(Arc::clone(&data), 1, 1);
        assert_eq!(Arc::strong_count(&data), 1);
        assert!(canvas.has_frame());
    }

    #[test]
    fn clear_releases_frame() {
        let mut canvas = VideoCanvas::new();
        canvas.set_frame(Arc::new(vec![0u8; 4]), 1, 1);
        canvas.clear();
        assert!(!canvas.has_frame());
    }
}
