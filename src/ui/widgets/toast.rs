//! Toast notification widget
//!
//! Short-lived status line shown at the bottom of the window.

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Element, Padding};

use crate::ui::theme;

/// Toast notification style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Success,
    Error,
}

impl ToastStyle {
    fn accent_color(&self, theme: &iced::Theme) -> iced::Color {
        match self {
            ToastStyle::Success => theme::success(theme),
            ToastStyle::Error => theme::danger(theme),
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastStyle::Success => "✓",
            ToastStyle::Error => "✗",
        }
    }
}

/// Toast notification data
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub style: ToastStyle,
}

impl Toast {
    pub fn new(message: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            message: message.into(),
            style,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Error)
    }
}

/// Build a toast notification widget
pub fn view_toast<'a, Message: 'a>(toast: &Toast) -> Element<'a, Message> {
    let style = toast.style;

    let accent_bar = container(Space::new().width(3).height(20)).style(move |theme| {
        container::Style {
            background: Some(iced::Background::Color(style.accent_color(theme))),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let icon = text(style.icon()).size(14).style(move |theme| text::Style {
        color: Some(style.accent_color(theme)),
    });

    let message = text(toast.message.clone()).size(13).style(|theme| text::Style {
        color: Some(theme::text_primary(theme)),
    });

    let content = row![
        accent_bar,
        Space::new().width(12),
        icon,
        Space::new().width(10),
        message,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(14.0).left(12.0).right(20.0));

    container(content)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::surface_elevated(theme))),
            border: iced::Border {
                radius: 8.0.into(),
                width: 1.0,
                color: theme::border_color(theme),
            },
            shadow: iced::Shadow {
                color: theme::shadow_color(theme),
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..Default::default()
        })
        .into()
}
