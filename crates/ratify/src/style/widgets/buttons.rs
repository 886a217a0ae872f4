//! Button style functions with theme support.

use iced::widget::button;
use iced::{Background, Border, Color};

use super::palette;
use super::shadows;
use super::shadows::radius;

/// Primary button style - confirm in the correction dialog.
pub fn primary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(p.primary)),
        text_color: p.text_on_primary,
        border: Border {
            color: p.primary_light,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::glow(p.primary),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.primary_light)),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.primary_dark)),
            shadow: shadows::subtle(),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(p.text_muted)),
            text_color: p.surface,
            shadow: shadows::none(),
            ..base
        },
    }
}

/// Secondary button style - cancel in the correction dialog.
pub fn secondary_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: p.text_primary,
        border: Border {
            color: p.border_subtle,
            width: 1.0,
            radius: radius::MEDIUM.into(),
        },
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(p.hover)),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(p.selected)),
            ..base
        },
    }
}

/// Square decision button tinted with `accent`.
fn decision_button(accent: Color, solid: bool, status: button::Status) -> button::Style {
    let p = palette::current();

    let (fill, text_color) = if solid {
        (accent, p.text_on_primary)
    } else {
        (Color::TRANSPARENT, accent)
    };

    let base = button::Style {
        background: Some(Background::Color(fill)),
        text_color,
        border: Border {
            color: accent.scale_alpha(0.6),
            width: 1.0,
            radius: radius::SMALL.into(),
        },
        shadow: shadows::subtle(),
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(accent.scale_alpha(if solid { 0.85 } else { 0.15 }))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(accent.scale_alpha(if solid { 0.7 } else { 0.25 }))),
            shadow: shadows::none(),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color: p.text_muted,
            border: Border {
                color: p.border_subtle,
                ..base.border
            },
            shadow: shadows::none(),
            ..base
        },
    }
}

/// Ratify button - solid green.
pub fn accept_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    decision_button(palette::current().accent_green, true, status)
}

/// Reject button - red outline.
pub fn reject_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    decision_button(palette::current().accent_red, false, status)
}

/// Inline text link - "Show more" / "Show less".
pub fn link_button_style(_theme: &iced::Theme, status: button::Status) -> button::Style {
    let p = palette::current();

    let base = button::Style {
        background: None,
        text_color: p.primary,
        border: Border::default(),
        shadow: shadows::none(),
        snap: false,
    };

    match status {
        button::Status::Hovered => button::Style {
            text_color: p.primary_light,
            ..base
        },
        button::Status::Pressed => button::Style {
            text_color: p.primary_dark,
            ..base
        },
        button::Status::Active | button::Status::Disabled => base,
    }
}
