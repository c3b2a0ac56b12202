// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers are stacked bottom to top: video, controls, brand label, timer and
//! mixer. A layer is only built while it is mounted, so hidden overlays cost
//! nothing and never intercept input.

use super::Message;
use crate::domain::overlay::{OverlayLayer, OverlayState};
use crate::domain::sound::{Category, SoundMixer};
use crate::error::VideoError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::timer::TimerMode;
use crate::ui::widgets::VideoCanvas;
use crate::ui::{controls, mixer, styles, timer};
use iced::widget::{column, container, text, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Instant at which animated values are sampled.
    pub now: Instant,
    pub overlay: &'a OverlayState,
    pub mixer: &'a SoundMixer,
    pub category: Category,
    pub timer_mode: TimerMode,
    pub timer_minutes: u32,
    pub is_playing: bool,
    pub seek_step_ms: i64,
    pub canvas: &'a VideoCanvas,
    pub video_error: Option<&'a VideoError>,
}

/// Renders the video with every mounted overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let overlay = ctx.overlay;
    let screen_height = overlay.screen_height();
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(ctx.canvas.view());

    if overlay.is_mounted(OverlayLayer::Controls) {
        let opacity = overlay.controls_opacity(ctx.now);
        layers = layers
            .push(controls::bottom_shadow(screen_height, opacity))
            .push(
                controls::view(controls::ViewContext {
                    i18n: ctx.i18n,
                    is_playing: ctx.is_playing,
                    opacity,
                    screen_height,
                    seek_step_ms: ctx.seek_step_ms,
                })
                .map(Message::Controls),
            );
    }

    layers = layers.push(view_brand(ctx.i18n, ctx.video_error));

    if overlay.is_mounted(OverlayLayer::Timer) {
        layers = layers.push(
            timer::view(timer::ViewContext {
                i18n: ctx.i18n,
                mode: ctx.timer_mode,
                minutes: ctx.timer_minutes,
                opacity: overlay.timer_opacity(ctx.now),
                screen_height,
            })
            .map(Message::Timer),
        );
    }

    if overlay.is_mounted(OverlayLayer::Mixer) {
        layers = layers.push(
            mixer::view(mixer::ViewContext {
                i18n: ctx.i18n,
                mixer: ctx.mixer,
                category: ctx.category,
                opacity: overlay.mixer_opacity(ctx.now),
                offset: overlay.mixer_offset(ctx.now),
            })
            .map(Message::Mixer),
        );
    }

    layers.into()
}

/// Brand label in the top-left corner, with the video error below it.
fn view_brand<'a>(i18n: &I18n, video_error: Option<&VideoError>) -> Element<'a, Message> {
    let brand = text(i18n.tr("brand-label"))
        .size(typography::BRAND)
        .style(styles::text::primary(1.0));

    let content = match video_error {
        Some(error) => column![
            brand,
            text(i18n.tr(error.i18n_key()))
                .size(typography::CAPTION)
                .style(styles::text::muted(1.0)),
        ]
        .spacing(spacing::XXS),
        None => column![brand],
    };

    container(content)
        .padding(iced::Padding {
            top: spacing::BRAND_TOP,
            right: 0.0,
            bottom: 0.0,
            left: spacing::LG,
        })
        .into()
}
