//! Color palette with light and dark theme support.

use iced::Color;
use ratify_core::ThemePreference;

/// Complete color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Primary brand colors
    pub primary: Color,
    pub primary_light: Color,
    pub primary_dark: Color,

    // Surfaces
    pub surface: Color,
    pub surface_elevated: Color,
    pub background: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_on_primary: Color,

    // Decision accents
    pub accent_green: Color,
    pub accent_red: Color,

    // States
    pub selected: Color,
    pub hover: Color,

    // Borders
    pub border_subtle: Color,
    pub border_medium: Color,

    // Overlay behind the correction dialog
    pub backdrop: Color,
    pub shadow: Color,
}

impl Palette {
    /// Creates the light theme palette.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::from_rgb(0.11, 0.42, 0.86),
            primary_light: Color::from_rgb(0.32, 0.58, 0.96),
            primary_dark: Color::from_rgb(0.06, 0.32, 0.70),

            surface: Color::WHITE,
            surface_elevated: Color::from_rgb(0.995, 0.995, 1.0),
            background: Color::from_rgb(0.965, 0.97, 0.975),

            text_primary: Color::from_rgb(0.09, 0.10, 0.13),
            text_secondary: Color::from_rgb(0.40, 0.44, 0.51),
            text_muted: Color::from_rgb(0.60, 0.63, 0.68),
            text_on_primary: Color::WHITE,

            accent_green: Color::from_rgb(0.13, 0.62, 0.33), // Ratify
            accent_red: Color::from_rgb(0.86, 0.22, 0.26),   // Reject

            selected: Color::from_rgb(0.92, 0.95, 1.0),
            hover: Color::from_rgb(0.955, 0.965, 0.98),

            border_subtle: Color::from_rgb(0.90, 0.91, 0.93),
            border_medium: Color::from_rgb(0.82, 0.84, 0.88),

            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.45),
            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.08),
        }
    }

    /// Creates the dark theme palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::from_rgb(0.36, 0.62, 1.0),
            primary_light: Color::from_rgb(0.50, 0.72, 1.0),
            primary_dark: Color::from_rgb(0.24, 0.50, 0.90),

            surface: Color::from_rgb(0.12, 0.13, 0.15),
            surface_elevated: Color::from_rgb(0.15, 0.16, 0.19),
            background: Color::from_rgb(0.08, 0.09, 0.11),

            text_primary: Color::from_rgb(0.92, 0.93, 0.95),
            text_secondary: Color::from_rgb(0.64, 0.67, 0.72),
            text_muted: Color::from_rgb(0.48, 0.51, 0.56),
            text_on_primary: Color::from_rgb(0.06, 0.07, 0.09),

            accent_green: Color::from_rgb(0.25, 0.82, 0.48),
            accent_red: Color::from_rgb(1.0, 0.38, 0.42),

            selected: Color::from_rgb(0.14, 0.19, 0.27),
            hover: Color::from_rgb(0.17, 0.18, 0.21),

            border_subtle: Color::from_rgb(0.21, 0.22, 0.25),
            border_medium: Color::from_rgb(0.30, 0.31, 0.35),

            backdrop: Color::from_rgba(0.0, 0.0, 0.0, 0.65),
            shadow: Color::from_rgba(0.0, 0.0, 0.0, 0.25),
        }
    }

    /// Gets the palette for a theme preference.
    #[must_use]
    pub const fn for_preference(theme: ThemePreference) -> Self {
        match theme {
            ThemePreference::Light => Self::light(),
            ThemePreference::Dark => Self::dark(),
        }
    }
}

/// Current active palette - defaults to dark mode.
pub static CURRENT: std::sync::LazyLock<std::sync::RwLock<Palette>> =
    std::sync::LazyLock::new(|| std::sync::RwLock::new(Palette::dark()));

/// Sets the current global palette.
pub fn set_theme(theme: ThemePreference) {
    if let Ok(mut palette) = CURRENT.write() {
        *palette = Palette::for_preference(theme);
    }
}

/// Gets a copy of the current palette.
#[must_use]
pub fn current() -> Palette {
    CURRENT.read().map_or_else(|_| Palette::dark(), |p| *p)
}
