//! Correction dialog, drawn as a modal over the queue.

use iced::widget::{button, center, column, container, mouse_area, opaque, row, stack, text, text_input};
use iced::{Element, Length};

use ratify_core::Selection;

use crate::message::{CorrectionMessage, Message};
use crate::model::CorrectionState;
use crate::style::widgets::{
    backdrop_style, dialog_style, label_input_style, palette, primary_button_style,
    secondary_button_style,
};

/// Renders `base` with the correction dialog on top.
///
/// Clicking the backdrop cancels, like the Cancel button.
pub fn view_correction_dialog<'a>(
    base: Element<'a, Message>,
    selection: &'a Selection,
    state: &'a CorrectionState,
) -> Element<'a, Message> {
    let p = palette::current();

    let title = text("Correct Classification")
        .size(20)
        .font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
        })
        .color(p.text_primary);

    let current = text(format!(
        "Current inference: {}",
        selection.current_inference.display()
    ))
    .size(14)
    .color(p.text_secondary);

    let input = text_input("Enter the correct merchant", &state.input)
        .on_input(|s| Message::Correction(CorrectionMessage::LabelChanged(s)))
        .on_submit(Message::Correction(CorrectionMessage::Confirm))
        .padding([10, 14])
        .size(14)
        .style(label_input_style);

    let mut content = column![title, current, input].spacing(14);
    if let Some(error) = &state.error {
        content = content.push(text(error.as_str()).size(12).color(p.accent_red));
    }

    let cancel = button(text("Cancel").size(14))
        .padding([8, 18])
        .style(secondary_button_style)
        .on_press(Message::Correction(CorrectionMessage::Cancel));
    let confirm = button(text("Confirm").size(14))
        .padding([8, 18])
        .style(primary_button_style)
        .on_press_maybe(
            (!state.input.trim().is_empty())
                .then_some(Message::Correction(CorrectionMessage::Confirm)),
        );

    content = content.push(
        container(row![cancel, confirm].spacing(10))
            .width(Length::Fill)
            .align_right(Length::Fill),
    );

    let dialog = container(content)
        .width(Length::Fixed(420.0))
        .padding(24)
        .style(dialog_style);

    stack![
        base,
        opaque(
            mouse_area(center(opaque(dialog)).style(backdrop_style))
                .on_press(Message::Correction(CorrectionMessage::Cancel))
        )
    ]
    .into()
}
