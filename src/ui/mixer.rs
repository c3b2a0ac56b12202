// SPDX-License-Identifier: MPL-2.0
//! Sound mixer panel.
//!
//! A full-screen panel that slides down from above the viewport. It lists the
//! catalog sounds for the selected category, each with a volume slider.

use crate::domain::sound::newtypes::volume_bounds;
use crate::domain::sound::{Category, SoundChannel, SoundMixer, Volume};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, opacity, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::alignment::Vertical;
use iced::widget::{
    button, column, container, pin, row, scrollable, slider, text, Column, Row, Space,
};
use iced::{Element, Length};

/// Top padding of the panel header (status bar area on phones).
const HEADER_TOP: f32 = 60.0;
/// Side of the square close button.
const CLOSE_BUTTON: f32 = 40.0;
/// Reserved width for the `NN%` label so sliders line up.
const VOLUME_LABEL_WIDTH: f32 = 45.0;

/// Messages emitted by the mixer panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SelectCategory(Category),
    VolumeChanged { id: u32, volume: Volume },
    Close,
}

/// View context for rendering the mixer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub mixer: &'a SoundMixer,
    pub category: Category,
    /// Current animated opacity of the panel.
    pub opacity: f32,
    /// Vertical translation, from `-screen_height` (parked) to `0` (open).
    pub offset: f32,
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let fade = ctx.opacity;

    let title = text(ctx.i18n.tr("mixer-title"))
        .size(typography::TITLE)
        .style(styles::text::primary(fade));

    let close = button(
        container(icons::sized(icons::close(), sizing::ICON_MD).style(styles::text::icon(fade)))
            .center(Length::Fill),
    )
    .width(Length::Fixed(CLOSE_BUTTON))
    .height(Length::Fixed(CLOSE_BUTTON))
    .padding(0)
    .on_press(Message::Close)
    .style(styles::button::round(
        opacity::GLASS_BORDER,
        border::WIDTH_SM,
        opacity::GLASS_LIGHT,
        fade,
    ));

    let chips = Category::ALL
        .iter()
        .fold(Row::new().spacing(spacing::SM), |chips, &category| {
            chips.push(
                button(
                    text(ctx.i18n.tr(category.label_key()))
                        .size(typography::BODY),
                )
                .padding([10.0, 20.0])
                .on_press(Message::SelectCategory(category))
                .style(styles::button::chip(category == ctx.category, fade)),
            )
        });

    column![
        row![title, Space::new().width(Length::Fill), close].align_y(Vertical::Center),
        scrollable(chips).direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(0).scroller_width(0),
        )),
    ]
    .spacing(spacing::LG)
    .padding(iced::Padding {
        top: HEADER_TOP,
        right: spacing::LG,
        bottom: spacing::MD,
        left: spacing::LG,
    })
    .into()
}

fn sound_card<'a>(i18n: &I18n, channel: &SoundChannel, fade: f32) -> Element<'a, Message> {
    let descriptor = channel.descriptor;
    let id = descriptor.id;
    let volume = channel.volume;

    let title = row![
        text(descriptor.icon).size(sizing::CARD_GLYPH),
        text(i18n.tr(descriptor.label_key))
            .size(typography::BODY_LG)
            .style(styles::text::primary(fade)),
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center);

    let percent = volume.value().to_string();
    let control = row![
        slider(
            f32::from(volume_bounds::MIN)..=f32::from(volume_bounds::MAX),
            f32::from(volume.value()),
            move |value| Message::VolumeChanged {
                id,
                volume: Volume::from_slider(value),
            },
        )
        .step(1.0)
        .width(Length::Fill)
        .style(styles::slider::volume(descriptor.accent, fade)),
        container(
            text(i18n.tr_with_args("volume-percent", &[("value", percent.as_str())]))
                .size(typography::BODY)
                .style(styles::text::muted(fade)),
        )
        .width(Length::Fixed(VOLUME_LABEL_WIDTH))
        .align_right(Length::Fixed(VOLUME_LABEL_WIDTH)),
    ]
    .spacing(spacing::SM)
    .align_y(Vertical::Center);

    container(column![title, control].spacing(spacing::MD))
        .width(Length::Fill)
        .padding(spacing::CARD_PADDING)
        .style(styles::container::sound_card(
            descriptor.accent,
            channel.is_active(),
            fade,
        ))
        .into()
}

/// Renders the mixer panel at its current translation.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let fade = ctx.opacity;

    let cards = ctx
        .mixer
        .filtered_channels(ctx.category)
        .fold(Column::new().spacing(spacing::MD), |cards, channel| {
            cards.push(sound_card(ctx.i18n, channel, fade))
        })
        .padding(iced::Padding {
            top: 0.0,
            right: spacing::CARD_PADDING,
            bottom: spacing::XL,
            left: spacing::CARD_PADDING,
        });

    let panel = container(
        column![
            header(&ctx),
            scrollable(cards)
                .direction(scrollable::Direction::Vertical(
                    scrollable::Scrollbar::new().width(0).scroller_width(0),
                ))
                .height(Length::Fill),
        ]
        .spacing(spacing::XS),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(styles::container::mixer_panel(fade));

    pin(panel)
        .y(ctx.offset)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_message_carries_catalog_id() {
        let message = Message::VolumeChanged {
            id: 1,
            volume: Volume::from_slider(42.4),
        };
        match message {
            Message::VolumeChanged { id, volume } => {
                assert_eq!(id, 1);
                assert_eq!(volume.value(), 42);
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn slider_extremes_map_to_volume_bounds() {
        let low = Volume::from_slider(f32::from(volume_bounds::MIN));
        let high = Volume::from_slider(f32::from(volume_bounds::MAX));
        assert!(low.is_muted());
        assert_eq!(high.value(), 100);
    }
}
