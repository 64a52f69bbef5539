//! Theme system for the kennel showcase
//! Supports both dark and light modes with a warm, earthy palette

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Heading weight (semibold on macOS)
#[cfg(target_os = "macos")]
pub const BOLD_WEIGHT: Weight = Weight::Semibold;
#[cfg(not(target_os = "macos"))]
pub const BOLD_WEIGHT: Weight = Weight::Bold;

/// Label weight for navigation and tabs
#[cfg(target_os = "macos")]
pub const MEDIUM_WEIGHT: Weight = Weight::Medium;
#[cfg(not(target_os = "macos"))]
pub const MEDIUM_WEIGHT: Weight = Weight::Normal;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x14110f);
    pub const HEADER: Color = color!(0x1c1815);
    pub const SURFACE: Color = color!(0x241f1b);
    pub const SURFACE_RAISED: Color = color!(0x2e2823);
    pub const BORDER: Color = color!(0x3a322b);
    pub const TEXT_MUTED: Color = color!(0x8c8178);
    pub const TEXT_SECONDARY: Color = color!(0xc2b8ae);
    pub const TEXT_PRIMARY: Color = color!(0xfaf6f1);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xfdfaf6);
    pub const HEADER: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xf4eee6);
    pub const SURFACE_RAISED: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0xe3d9cc);
    pub const TEXT_MUTED: Color = color!(0x8a7f74);
    pub const TEXT_SECONDARY: Color = color!(0x5c5148);
    pub const TEXT_PRIMARY: Color = color!(0x2b231d);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Warm amber accent (same for both modes)
pub const ACCENT: Color = color!(0xe8833a);

/// Hover state for accent
pub const ACCENT_HOVER: Color = color!(0xf29a57);

/// WhatsApp green for outbound messaging actions
pub const WHATSAPP: Color = color!(0x25d366);

/// Hover state for WhatsApp actions
pub const WHATSAPP_HOVER: Color = color!(0x1ebe5b);

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Page header; `raised` once the page is scrolled
pub fn header(theme: &Theme, raised: bool) -> container::Style {
    let bg = if is_dark(theme) {
        dark::HEADER
    } else {
        light::HEADER
    };
    let (alpha, blur) = if raised { (0.2, 10.0) } else { (0.1, 5.0) };
    container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(text_primary(theme)),
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, alpha),
            offset: Vector::new(0.0, 2.0),
            blur_radius: blur,
        },
        ..Default::default()
    }
}

/// Hero banner container
pub fn hero_banner(theme: &Theme) -> container::Style {
    let bg = if is_dark(theme) {
        color!(0x2a2119)
    } else {
        color!(0xefe3d3)
    };
    container::Style {
        background: Some(Background::Color(bg)),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Service card
pub fn card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Clipped viewport behind a film strip or marquee
pub fn strip_viewport(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Floating popup panel (contact panel, dialogs)
pub fn popup_panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface_elevated(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 12.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 8.0),
            blur_radius: 24.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Primary button style
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        _ => base,
    }
}

/// Secondary button - transparent with border
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 24.0.into(),
            width: 1.0,
            color: text_secondary(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg(theme))),
            border: Border {
                color: text_primary(theme),
                ..base.border
            },
            ..base
        },
        _ => base,
    }
}

/// WhatsApp send button
pub fn whatsapp_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered | button::Status::Pressed => WHATSAPP_HOVER,
        _ => WHATSAPP,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: Color::WHITE,
        border: Border {
            radius: 24.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Round floating action button
pub fn floating_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => ACCENT_HOVER,
        _ => ACCENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: Color::WHITE,
        border: Border {
            radius: 28.0.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

/// Navigation link; `active` marks the section in view
pub fn nav_link(theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let text_color = match (active, status) {
        (true, _) => ACCENT,
        (false, button::Status::Hovered) => text_primary(theme),
        _ => text_secondary(theme),
    };
    button::Style {
        background: None,
        text_color,
        ..Default::default()
    }
}

/// Tab header in the booking dialog
pub fn tab_button(theme: &Theme, status: button::Status, active: bool) -> button::Style {
    let (text_color, border_color) = if active {
        (text_primary(theme), ACCENT)
    } else if status == button::Status::Hovered {
        (text_primary(theme), divider(theme))
    } else {
        (text_muted(theme), Color::TRANSPARENT)
    };
    button::Style {
        background: None,
        text_color,
        border: Border {
            color: border_color,
            width: 0.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Single-select option chip
pub fn chip(theme: &Theme, status: button::Status, selected: bool) -> button::Style {
    let (bg, fg, border) = if selected {
        (ACCENT, Color::WHITE, ACCENT)
    } else if status == button::Status::Hovered {
        (hover_bg(theme), text_primary(theme), ACCENT)
    } else {
        (Color::TRANSPARENT, text_secondary(theme), border_color(theme))
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: fg,
        border: Border {
            color: border,
            width: 1.0,
            radius: 16.0.into(),
        },
        ..Default::default()
    }
}

/// Borderless icon button (close, hamburger)
pub fn icon_button(theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => hover_bg(theme),
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: text_primary(theme),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Input Styles
// ============================================================================

/// Form text input
pub fn form_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border = match status {
        text_input::Status::Focused { .. } => ACCENT,
        text_input::Status::Hovered => text_muted(theme),
        _ => divider(theme),
    };
    text_input::Style {
        background: Background::Color(surface_container(theme)),
        border: Border {
            color: border,
            width: 1.0,
            radius: 6.0.into(),
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: ACCENT_HOVER,
    }
}

// ============================================================================
// Colors used by widgets
// ============================================================================

/// Hover background
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.08)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.05)
    }
}

/// Elevated surface (toasts, dialogs)
pub fn surface_elevated(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE_RAISED
    } else {
        light::SURFACE_RAISED
    }
}

/// Input and inset background
pub fn surface_container(theme: &Theme) -> Color {
    if is_dark(theme) {
        color!(0x1a1613)
    } else {
        color!(0xfaf6f1)
    }
}

pub fn danger(theme: &Theme) -> Color {
    if is_dark(theme) {
        color!(0xef5350)
    } else {
        color!(0xd32f2f)
    }
}

pub fn success(_theme: &Theme) -> Color {
    color!(0x4caf50)
}

/// Divider lines
pub fn divider(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.1)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.1)
    }
}

/// Dialog backdrop
pub fn overlay_backdrop(_theme: &Theme, opacity: f32) -> Color {
    Color::from_rgba(0.0, 0.0, 0.0, opacity)
}

/// Shadow color for panels
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.15)
    }
}

/// Placeholder fill for media that could not be drawn
pub fn placeholder_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.2, 0.17, 0.15)
    } else {
        Color::from_rgb(0.9, 0.86, 0.8)
    }
}

/// Bottom stop of the hero caption gradient
pub fn banner_gradient_bottom() -> Color {
    Color::from_rgba(0.0, 0.0, 0.0, 0.65)
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Scrollbar style for the page
pub fn page_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}
