//! Queue list: loading, empty and populated states.

use std::borrow::Cow;

use iced::widget::{Column, Space, button, column, container, row, scrollable, text};
use iced::{Element, Length};

use ratify_core::{EXPAND_THRESHOLD, QueueStatus, QueueStore, ResolutionController, UnverifiedItem};

use crate::message::Message;
use crate::style::widgets::{
    accept_button_style, badge_style, card_removing_style, card_style, link_button_style,
    palette, reject_button_style, scrollable_style,
};

/// Renders the queue in whichever state the store is in.
pub fn view_queue<'a>(
    store: &'a QueueStore,
    controller: &'a ResolutionController,
) -> Element<'a, Message> {
    match store.status() {
        QueueStatus::Loading => view_loading(),
        QueueStatus::Empty => view_empty(),
        QueueStatus::Populated(_) => view_list(store, controller),
    }
}

fn view_loading() -> Element<'static, Message> {
    let p = palette::current();

    container(text("Loading messages...").size(16).color(p.text_secondary))
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn view_empty() -> Element<'static, Message> {
    let p = palette::current();

    container(
        column![
            text("\u{2714}").size(48).color(p.accent_green),
            text("No unverified messages at the moment.")
                .size(16)
                .color(p.text_primary),
            text("Great job clearing the queue!")
                .size(14)
                .color(p.text_secondary),
        ]
        .spacing(12)
        .align_x(iced::Alignment::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

fn view_list<'a>(
    store: &'a QueueStore,
    controller: &'a ResolutionController,
) -> Element<'a, Message> {
    let rows = store.items().iter().map(|item| {
        let actionable = controller.is_actionable(store, &item.id);
        let removing = store.removing() == Some(&item.id);
        view_row(item, store.is_expanded(&item.id), actionable, removing)
    });

    scrollable(
        Column::with_children(rows)
            .spacing(12)
            .padding([16, 24])
            .width(Length::Fill),
    )
    .height(Length::Fill)
    .style(scrollable_style)
    .into()
}

fn view_row(
    item: &UnverifiedItem,
    expanded: bool,
    actionable: bool,
    removing: bool,
) -> Element<'_, Message> {
    let p = palette::current();

    let timestamp = text(item.display_timestamp.as_str())
        .size(12)
        .color(p.text_muted);

    let badge = container(
        text(format!("Inferred: {}", item.inferred_label.display()))
            .size(12),
    )
    .padding([2, 10])
    .style(badge_style);

    let meta = row![timestamp, badge]
        .spacing(10)
        .align_y(iced::Alignment::Center);

    let mut body = column![
        meta,
        text(preview(&item.text, expanded)).size(14).color(p.text_primary)
    ]
    .spacing(8)
    .width(Length::Fill);

    if item.is_expandable() {
        let label = if expanded { "Show less" } else { "Show more" };
        body = body.push(
            button(text(label).size(12))
                .padding(0)
                .style(link_button_style)
                .on_press(Message::ToggleExpand(item.id.clone())),
        );
    }

    let accept = button(text("\u{2713}").size(16))
        .padding([6, 12])
        .style(accept_button_style)
        .on_press_maybe(actionable.then(|| Message::Accept(item.id.clone())));
    let reject = button(text("\u{2715}").size(16))
        .padding([6, 12])
        .style(reject_button_style)
        .on_press_maybe(actionable.then(|| Message::RequestCorrection(item.id.clone())));

    let actions = column![accept, reject, Space::new().height(Length::Fill)].spacing(8);

    container(row![body, actions].spacing(16))
        .width(Length::Fill)
        .padding(16)
        .style(if removing {
            card_removing_style
        } else {
            card_style
        })
        .into()
}

/// Text shown for an item: everything when expanded or short, otherwise
/// the first `EXPAND_THRESHOLD` characters followed by an ellipsis.
fn preview(text: &str, expanded: bool) -> Cow<'_, str> {
    if expanded || text.chars().count() <= EXPAND_THRESHOLD {
        return Cow::Borrowed(text);
    }
    let head: String = text.chars().take(EXPAND_THRESHOLD).collect();
    Cow::Owned(format!("{}\u{2026}", head.trim_end()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_shown_whole() {
        assert_eq!(preview("short", false), "short");
    }

    #[test]
    fn test_long_text_is_clamped_until_expanded() {
        let long = "x".repeat(150);

        let clamped = preview(&long, false);
        assert_eq!(clamped.chars().count(), EXPAND_THRESHOLD + 1);
        assert!(clamped.ends_with('\u{2026}'));

        assert_eq!(preview(&long, true), long);
    }

    #[test]
    fn test_threshold_counts_characters() {
        let text = "é".repeat(EXPAND_THRESHOLD);
        assert_eq!(preview(&text, false), text);
    }
}
