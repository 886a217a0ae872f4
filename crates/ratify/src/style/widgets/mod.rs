//! Widget styles for the review queue.

#![allow(clippy::needless_update)] // Explicit struct updates for clarity

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

pub use containers::{
    backdrop_style, badge_style, card_removing_style, card_style, dialog_style, header_style,
    page_style,
};

pub use buttons::{
    accept_button_style, link_button_style, primary_button_style, reject_button_style,
    secondary_button_style,
};

pub use inputs::{label_input_style, scrollable_style};
