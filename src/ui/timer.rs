// SPDX-License-Identifier: MPL-2.0
//! Timer overlay.
//!
//! Shows the alarm header, a row of timer modes and a large clock over a
//! bottom scrim. The overlay is opened from the controls' clock button and
//! closed through its own close button.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, layout, opacity, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::alignment::Vertical;
use iced::widget::{button, column, container, row, text, Row, Space, Svg};
use iced::{Element, Length};

/// Side of a mode button.
const MODE_BUTTON: f32 = 44.0;
/// Side of the close button.
const CLOSE_BUTTON: f32 = 36.0;
/// Clock baseline above the bottom edge, relative to the window height.
const CLOCK_BOTTOM_FRACTION: f32 = 0.14;

/// Timer modes offered in the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerMode {
    #[default]
    Timer,
    Reading,
    Sleep,
    Alarm,
}

impl TimerMode {
    pub const ALL: [TimerMode; 4] = [
        TimerMode::Timer,
        TimerMode::Reading,
        TimerMode::Sleep,
        TimerMode::Alarm,
    ];

    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            TimerMode::Timer => "timer-mode-timer",
            TimerMode::Reading => "timer-mode-reading",
            TimerMode::Sleep => "timer-mode-sleep",
            TimerMode::Alarm => "timer-mode-alarm",
        }
    }

    fn icon(self) -> Svg<'static> {
        match self {
            TimerMode::Timer => icons::hourglass(),
            TimerMode::Reading => icons::book(),
            TimerMode::Sleep => icons::moon(),
            TimerMode::Alarm => icons::alarm(),
        }
    }
}

/// Messages emitted by the timer overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    SelectMode(TimerMode),
    Close,
}

/// View context for rendering the timer overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub mode: TimerMode,
    /// Duration shown on the clock.
    pub minutes: u32,
    pub opacity: f32,
    pub screen_height: f32,
}

/// Formats a duration in minutes as `HH:MM`.
#[must_use]
pub fn format_clock(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn mode_button<'a>(i18n: &I18n, mode: TimerMode, selected: bool, fade: f32) -> Element<'a, Message> {
    let outline = if selected {
        opacity::GLASS_OUTLINE
    } else {
        opacity::GLASS_STRONG
    };
    let glyph = icons::sized(mode.icon(), sizing::ICON_SM + 2.0).style(styles::text::icon(fade));

    let circle = button(container(glyph).center(Length::Fill))
        .width(Length::Fixed(MODE_BUTTON))
        .height(Length::Fixed(MODE_BUTTON))
        .padding(0)
        .on_press(Message::SelectMode(mode))
        .style(styles::button::round(
            opacity::GLASS_LIGHT,
            border::WIDTH_MD,
            outline,
            fade,
        ));

    let label_alpha = if selected {
        opacity::OPAQUE
    } else {
        opacity::TEXT_MUTED
    };

    column![
        circle,
        text(i18n.tr(mode.label_key()))
            .size(typography::CAPTION)
            .style(styles::text::primary(label_alpha * fade)),
    ]
    .spacing(spacing::XS)
    .align_x(iced::alignment::Horizontal::Center)
    .into()
}

/// Renders the timer overlay, anchored to the bottom of the screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let fade = ctx.opacity;

    let title = text(ctx.i18n.tr("timer-title"))
        .size(typography::TITLE)
        .style(styles::text::primary(fade));

    let close = button(
        container(icons::sized(icons::close(), sizing::ICON_SM).style(styles::text::icon(fade)))
            .center(Length::Fill),
    )
    .width(Length::Fixed(CLOSE_BUTTON))
    .height(Length::Fixed(CLOSE_BUTTON))
    .padding(0)
    .on_press(Message::Close)
    .style(styles::button::small(fade));

    let header = row![title, Space::new().width(Length::Fill), close]
        .align_y(Vertical::Center)
        .padding([0.0, spacing::LG]);

    let divider = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(border::WIDTH_SM))
        .style(styles::container::divider(fade));

    let modes = TimerMode::ALL.iter().fold(Row::new(), |modes, &mode| {
        modes
            .push(Space::new().width(Length::Fill))
            .push(mode_button(ctx.i18n, mode, mode == ctx.mode, fade))
    });
    let modes = modes
        .push(Space::new().width(Length::Fill))
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center);

    let clock = container(
        text(format_clock(ctx.minutes))
            .size(typography::DISPLAY)
            .style(styles::text::primary(fade)),
    )
    .center_x(Length::Fill);

    let content = column![
        Space::new().height(Length::Fill),
        header,
        divider,
        modes,
        Space::new().height(Length::Fixed(spacing::LG)),
        clock,
        Space::new().height(Length::Fixed(ctx.screen_height * CLOCK_BOTTOM_FRACTION)),
    ]
    .spacing(spacing::SM)
    .width(Length::Fill);

    let scrim = container(content)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.screen_height * layout::TIMER_OVERLAY_FRACTION))
        .style(styles::container::timer_scrim(fade));

    container(scrim)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(Vertical::Bottom)
        .into()
}
