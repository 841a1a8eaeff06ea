//! Color scheme and widget style catalog.
//!
//! One built-in palette with dark and light variants; the configured
//! mode (or the OS, for `System`) picks the variant at startup. Style
//! functions return closures for Iced's `.style()` method, capturing
//! the tokens they need from a `ColorScheme`.

use iced::widget::{button, container, text_input};
use iced::{Background, Border, Color, Theme};

use dituria_core::config::ThemeMode;

use crate::style;

/// Semantic color tokens, MD3-style tonal surfaces.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub surface: Color,
    pub surface_container_low: Color,
    pub surface_container: Color,
    pub surface_container_high: Color,
    pub surface_bright: Color,

    pub on_surface: Color,
    pub on_surface_variant: Color,
    pub outline: Color,
    pub outline_variant: Color,

    pub primary: Color,
    pub primary_hover: Color,
    pub on_primary: Color,
    pub primary_container: Color,
    pub on_primary_container: Color,

    pub secondary_container: Color,
    pub on_secondary_container: Color,

    pub error: Color,
    pub success: Color,
    pub warning: Color,
}

impl ColorScheme {
    pub fn dark() -> Self {
        Self {
            surface: Color::from_rgb8(0x14, 0x13, 0x18),
            surface_container_low: Color::from_rgb8(0x1B, 0x1A, 0x20),
            surface_container: Color::from_rgb8(0x1F, 0x1E, 0x25),
            surface_container_high: Color::from_rgb8(0x2A, 0x29, 0x30),
            surface_bright: Color::from_rgb8(0x3A, 0x39, 0x41),

            on_surface: Color::from_rgb8(0xE5, 0xE1, 0xE9),
            on_surface_variant: Color::from_rgb8(0xC8, 0xC4, 0xCF),
            outline: Color::from_rgb8(0x91, 0x8F, 0x9A),
            outline_variant: Color::from_rgb8(0x47, 0x46, 0x4F),

            primary: Color::from_rgb8(0xAD, 0xC6, 0xFF),
            primary_hover: Color::from_rgb8(0xBD, 0xD1, 0xFF),
            on_primary: Color::from_rgb8(0x10, 0x2F, 0x60),
            primary_container: Color::from_rgb8(0x2B, 0x46, 0x78),
            on_primary_container: Color::from_rgb8(0xD8, 0xE2, 0xFF),

            secondary_container: Color::from_rgb8(0x3E, 0x47, 0x59),
            on_secondary_container: Color::from_rgb8(0xDA, 0xE2, 0xF9),

            error: Color::from_rgb8(0xFF, 0xB4, 0xAB),
            success: Color::from_rgb8(0xA6, 0xD3, 0x88),
            warning: Color::from_rgb8(0xE5, 0xC3, 0x6C),
        }
    }

    pub fn light() -> Self {
        Self {
            surface: Color::from_rgb8(0xFA, 0xF8, 0xFF),
            surface_container_low: Color::from_rgb8(0xF4, 0xF3, 0xFA),
            surface_container: Color::from_rgb8(0xEE, 0xED, 0xF4),
            surface_container_high: Color::from_rgb8(0xE8, 0xE7, 0xEF),
            surface_bright: Color::from_rgb8(0xE2, 0xE2, 0xE9),

            on_surface: Color::from_rgb8(0x1A, 0x1B, 0x20),
            on_surface_variant: Color::from_rgb8(0x44, 0x46, 0x4F),
            outline: Color::from_rgb8(0x75, 0x77, 0x80),
            outline_variant: Color::from_rgb8(0xC5, 0xC6, 0xD0),

            primary: Color::from_rgb8(0x44, 0x5E, 0x91),
            primary_hover: Color::from_rgb8(0x2B, 0x46, 0x78),
            on_primary: Color::WHITE,
            primary_container: Color::from_rgb8(0xD8, 0xE2, 0xFF),
            on_primary_container: Color::from_rgb8(0x00, 0x1A, 0x41),

            secondary_container: Color::from_rgb8(0xDA, 0xE2, 0xF9),
            on_secondary_container: Color::from_rgb8(0x13, 0x1C, 0x2B),

            error: Color::from_rgb8(0xBA, 0x1A, 0x1A),
            success: Color::from_rgb8(0x3E, 0x68, 0x37),
            warning: Color::from_rgb8(0x7A, 0x59, 0x00),
        }
    }
}

/// Resolve the configured mode to a concrete scheme.
pub fn resolve(mode: ThemeMode) -> ColorScheme {
    match mode {
        ThemeMode::Light => ColorScheme::light(),
        ThemeMode::Dark => ColorScheme::dark(),
        ThemeMode::System => match dark_light::detect() {
            Ok(dark_light::Mode::Light) => ColorScheme::light(),
            _ => ColorScheme::dark(),
        },
    }
}

/// Build the iced Theme from a ColorScheme.
pub fn build_theme(cs: &ColorScheme) -> Theme {
    use iced::theme::Palette;

    Theme::custom(
        "Dituria",
        Palette {
            background: cs.surface,
            text: cs.on_surface,
            primary: cs.primary,
            success: cs.success,
            warning: cs.warning,
            danger: cs.error,
        },
    )
}

// ── Containers ───────────────────────────────────────────────────

/// A card container: surface background, rounded corners, subtle border.
pub fn card(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_LG.into(),
        },
        ..Default::default()
    }
}

/// Navigation rail background.
pub fn nav_rail_bg(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_low;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        ..Default::default()
    }
}

/// Composite search bar container — pill-shaped with subtle border.
pub fn search_bar(cs: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_low;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        text_color: None,
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: style::RADIUS_FULL.into(),
        },
        ..Default::default()
    }
}

/// Cover art placeholder container.
pub fn cover_placeholder(cs: &ColorScheme, radius: f32) -> impl Fn(&Theme) -> container::Style {
    let bg = cs.surface_container_high;
    let border_color = cs.outline_variant;
    move |_theme| container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius.into(),
        },
        ..Default::default()
    }
}

// ── Buttons ──────────────────────────────────────────────────────

/// Navigation rail item — icon+label with pill indicator when active.
pub fn nav_rail_item(
    active: bool,
    cs: &ColorScheme,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary_container = cs.primary_container;
    let on_primary_container = cs.on_primary_container;
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;

    move |_theme, status| {
        let (bg, text_color) = if active {
            (Some(Background::Color(primary_container)), on_primary_container)
        } else {
            match status {
                button::Status::Hovered => (Some(Background::Color(surface_bright)), on_surface),
                _ => (None, on_surface_variant),
            }
        };
        button::Style {
            background: bg,
            text_color,
            border: Border {
                radius: style::RADIUS_LG.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Filter chip — outlined when unselected, tonal fill when selected.
pub fn filter_chip(
    selected: bool,
    cs: &ColorScheme,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let secondary_container = cs.secondary_container;
    let on_secondary_container = cs.on_secondary_container;
    let outline_variant = cs.outline_variant;
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;

    move |_theme, status| {
        if selected {
            button::Style {
                background: Some(Background::Color(secondary_container)),
                text_color: on_secondary_container,
                border: Border {
                    radius: style::CHIP_RADIUS.into(),
                    ..Border::default()
                },
                ..Default::default()
            }
        } else {
            let (bg, tc) = match status {
                button::Status::Hovered => (Some(Background::Color(surface_bright)), on_surface),
                _ => (None, on_surface_variant),
            };
            button::Style {
                background: bg,
                text_color: tc,
                border: Border {
                    color: outline_variant,
                    width: 1.0,
                    radius: style::CHIP_RADIUS.into(),
                },
                ..Default::default()
            }
        }
    }
}

/// List row button — card-like with hover highlight.
pub fn list_item(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_container = cs.surface_container;
    let outline_variant = cs.outline_variant;
    let on_surface = cs.on_surface;

    move |_theme, status| {
        let (bg, border_color) = match status {
            button::Status::Hovered => {
                (Some(Background::Color(surface_container)), outline_variant)
            }
            _ => (None, Color::TRANSPARENT),
        };
        button::Style {
            background: bg,
            text_color: on_surface,
            border: Border {
                color: border_color,
                width: 0.0,
                radius: style::RADIUS_MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Primary action button.
pub fn primary_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let primary = cs.primary;
    let primary_hover = cs.primary_hover;
    let on_primary = cs.on_primary;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered | button::Status::Pressed => primary_hover,
            _ => primary,
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color: on_primary,
            border: Border {
                radius: style::RADIUS_MD.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Ghost / outlined button — transparent bg, border outline.
pub fn ghost_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_bright = cs.surface_bright;
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;
    let outline_variant = cs.outline_variant;

    move |_theme, status| {
        let (bg, text_color) = match status {
            button::Status::Hovered => (Some(Background::Color(surface_bright)), on_surface),
            _ => (None, on_surface_variant),
        };
        button::Style {
            background: bg,
            text_color,
            border: Border {
                color: outline_variant,
                width: 1.0,
                radius: style::RADIUS_MD.into(),
            },
            ..Default::default()
        }
    }
}

/// Transparent icon button — no border, subtle hover.
pub fn icon_button(cs: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_bright = cs.surface_bright;

    move |_theme, status| {
        let bg = match status {
            button::Status::Hovered => Some(Background::Color(surface_bright)),
            _ => None,
        };
        button::Style {
            background: bg,
            text_color: Color::TRANSPARENT,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: style::RADIUS_FULL.into(),
            },
            ..Default::default()
        }
    }
}

/// Flashcard face — front is a plain card, the flipped back fills with
/// the secondary container tone.
pub fn flashcard(
    flipped: bool,
    cs: &ColorScheme,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface_container = cs.surface_container;
    let surface_container_high = cs.surface_container_high;
    let secondary_container = cs.secondary_container;
    let on_secondary_container = cs.on_secondary_container;
    let outline_variant = cs.outline_variant;
    let on_surface = cs.on_surface;

    move |_theme, status| {
        let (bg, text_color) = if flipped {
            (secondary_container, on_secondary_container)
        } else {
            match status {
                button::Status::Hovered => (surface_container_high, on_surface),
                _ => (surface_container, on_surface),
            }
        };
        button::Style {
            background: Some(Background::Color(bg)),
            text_color,
            border: Border {
                color: outline_variant,
                width: 1.0,
                radius: style::RADIUS_LG.into(),
            },
            ..Default::default()
        }
    }
}

// ── Inputs ───────────────────────────────────────────────────────

/// Borderless text input for use inside a composite search bar.
pub fn text_input_borderless(
    cs: &ColorScheme,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    let on_surface = cs.on_surface;
    let on_surface_variant = cs.on_surface_variant;
    let outline = cs.outline;
    let primary = cs.primary;

    move |_theme, _status| text_input::Style {
        background: Background::Color(Color::TRANSPARENT),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 0.0.into(),
        },
        icon: on_surface_variant,
        placeholder: outline,
        value: on_surface,
        selection: primary,
    }
}
