// SPDX-License-Identifier: MPL-2.0
//! Playback controls overlay.
//!
//! A scrim over the lower half of the screen holding the transport row
//! (skip back, play/pause, skip forward) and a bottom row of round buttons.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{layout, sizing, spacing};
use crate::ui::{icons, styles};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, row, tooltip, Space, Svg, Text};
use iced::{Element, Length};

/// Messages emitted by the controls overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    TogglePlayback,
    SeekBackward,
    SeekForward,
    OpenTimer,
}

/// View context for rendering the controls.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub is_playing: bool,
    /// Current animated opacity of the layer.
    pub opacity: f32,
    pub screen_height: f32,
    pub seek_step_ms: i64,
}

/// Height of the scrim for a given window height.
#[must_use]
pub fn overlay_height(screen_height: f32) -> f32 {
    screen_height * layout::CONTROLS_OVERLAY_FRACTION
}

/// Gap between the transport row and the bottom row.
#[must_use]
pub fn transport_gap(screen_height: f32) -> f32 {
    let transport_bottom = overlay_height(screen_height) * layout::TRANSPORT_ROW_FRACTION;
    (transport_bottom - spacing::BOTTOM_ROW - sizing::ROUND_BUTTON).max(spacing::LG)
}

fn with_tooltip<'a>(content: Element<'a, Message>, label: String) -> Element<'a, Message> {
    tooltip(content, Text::new(label), tooltip::Position::Top)
        .gap(spacing::XXS)
        .into()
}

fn round_button<'a>(
    icon: Svg<'static>,
    icon_size: f32,
    size: f32,
    message: Option<Message>,
    style: impl Fn(&iced::Theme, button::Status) -> button::Style + 'static,
    fade: f32,
) -> Element<'a, Message> {
    let glyph = icons::sized(icon, icon_size).style(styles::text::icon(fade));
    button(
        container(glyph)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(Length::Fixed(size))
    .height(Length::Fixed(size))
    .padding(0)
    .on_press_maybe(message)
    .style(style)
    .into()
}

/// Renders the controls overlay, anchored to the bottom of the screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let fade = ctx.opacity;
    let seconds = (ctx.seek_step_ms / 1000).to_string();

    let (play_icon, play_label) = if ctx.is_playing {
        (icons::pause(), ctx.i18n.tr("controls-pause"))
    } else {
        (icons::play(), ctx.i18n.tr("controls-play"))
    };

    let transport = row![
        with_tooltip(
            round_button(
                icons::rewind(),
                sizing::ICON_LG,
                sizing::SKIP_BUTTON,
                Some(Message::SeekBackward),
                styles::button::skip(fade),
                fade,
            ),
            ctx.i18n
                .tr_with_args("controls-seek-back", &[("seconds", seconds.as_str())]),
        ),
        with_tooltip(
            round_button(
                play_icon,
                sizing::ICON_XL,
                sizing::PLAY_BUTTON,
                Some(Message::TogglePlayback),
                styles::button::play(fade),
                fade,
            ),
            play_label,
        ),
        with_tooltip(
            round_button(
                icons::fast_forward(),
                sizing::ICON_LG,
                sizing::SKIP_BUTTON,
                Some(Message::SeekForward),
                styles::button::skip(fade),
                fade,
            ),
            ctx.i18n
                .tr_with_args("controls-seek-forward", &[("seconds", seconds.as_str())]),
        ),
    ]
    .spacing(spacing::XL)
    .align_y(Vertical::Center);

    // Only the timer entry is wired; the other buttons mirror the mobile layout.
    let bottom_row = row![
        with_tooltip(
            round_button(
                icons::search(),
                sizing::ICON_SM,
                sizing::ROUND_BUTTON,
                None,
                styles::button::small(fade),
                fade,
            ),
            ctx.i18n.tr("controls-search"),
        ),
        Space::new().width(Length::Fill),
        with_tooltip(
            round_button(
                icons::clock(),
                sizing::ICON_SM,
                sizing::ROUND_BUTTON,
                Some(Message::OpenTimer),
                styles::button::small(fade),
                fade,
            ),
            ctx.i18n.tr("controls-timer"),
        ),
        Space::new().width(Length::Fill),
        with_tooltip(
            round_button(
                icons::list(),
                sizing::ICON_SM,
                sizing::ROUND_BUTTON,
                None,
                styles::button::small(fade),
                fade,
            ),
            ctx.i18n.tr("controls-list"),
        ),
        Space::new().width(Length::Fill),
        with_tooltip(
            round_button(
                icons::heart(),
                sizing::ICON_SM,
                sizing::ROUND_BUTTON,
                None,
                styles::button::small(fade),
                fade,
            ),
            ctx.i18n.tr("controls-favorite"),
        ),
    ]
    .padding([0.0, spacing::LG])
    .align_y(Vertical::Center);

    let content = column![
        Space::new().height(Length::Fill),
        container(transport).center_x(Length::Fill),
        Space::new().height(Length::Fixed(transport_gap(ctx.screen_height))),
        bottom_row,
        Space::new().height(Length::Fixed(spacing::BOTTOM_ROW)),
    ]
    .width(Length::Fill);

    let scrim = container(content)
        .width(Length::Fill)
        .height(Length::Fixed(overlay_height(ctx.screen_height)))
        .style(styles::container::controls_scrim(fade));

    container(scrim)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .into()
}

/// Shadow strip along the bottom edge, shown with the controls.
pub fn bottom_shadow<'a, M: 'a>(screen_height: f32, opacity: f32) -> Element<'a, M> {
    let strip = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(screen_height * layout::SHADOW_FRACTION))
        .style(styles::container::bottom_shadow(opacity));

    container(strip)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .into()
}
