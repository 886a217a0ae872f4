//! Header bar with the queue count and startup notices.

use iced::widget::{Space, column, container, row, text};
use iced::{Element, Length};

use ratify_core::QueueStatus;

use crate::message::Message;
use crate::style::widgets::{badge_style, header_style, palette};

/// Renders the page header.
pub fn view_header(status: QueueStatus, notice: Option<&str>) -> Element<'_, Message> {
    let p = palette::current();

    let title = text("Unverified Messages")
        .size(22)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .color(p.text_primary);

    let count: Element<'_, Message> = match status {
        QueueStatus::Populated(n) => container(text(format!("{n} pending")).size(12))
            .padding([4, 10])
            .style(badge_style)
            .into(),
        QueueStatus::Loading | QueueStatus::Empty => Space::new().into(),
    };

    let bar = row![title, Space::new().width(Length::Fill), count]
        .spacing(12)
        .align_y(iced::Alignment::Center);

    let mut content = column![bar].spacing(6);
    if let Some(notice) = notice {
        content = content.push(text(notice).size(12).color(p.accent_red));
    }

    container(content)
        .width(Length::Fill)
        .padding([16, 24])
        .style(header_style)
        .into()
}
