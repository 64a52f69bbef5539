//! Blocking notice dialog component

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, Color, Element, Fill};

use crate::app::Message;
use crate::ui::theme::{self, BOLD_WEIGHT};

/// Build the notice dialog
pub fn view(notice: &str, animation_progress: f32) -> Element<'_, Message> {
    if animation_progress < 0.01 {
        return Space::new().height(0).into();
    }

    let opacity = animation_progress;

    let title = text("Almost there")
        .size(18)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let message = text(notice).size(14).style(|theme| text::Style {
        color: Some(theme::text_secondary(theme)),
    });

    let ok_btn = button(text("OK").size(14).color(Color::WHITE))
        .padding([10, 28])
        .style(theme::primary_button)
        .on_press(Message::DismissNotice);

    let dialog_content = column![
        title,
        Space::new().height(12),
        message,
        Space::new().height(24),
        row![Space::new().width(Fill), ok_btn].align_y(Alignment::Center),
    ]
    .width(360)
    .padding(24);

    let dialog_box = container(dialog_content).style(move |theme| {
        let mut background = theme::surface_elevated(theme);
        background.a = opacity;
        let mut border = theme::divider(theme);
        border.a *= opacity;
        container::Style {
            background: Some(iced::Background::Color(background)),
            border: iced::Border {
                radius: 12.0.into(),
                width: 1.0,
                color: border,
            },
            ..Default::default()
        }
    });

    let backdrop_content = container(dialog_box)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(move |theme| container::Style {
            background: Some(iced::Background::Color(theme::overlay_backdrop(
                theme,
                0.5 * opacity,
            ))),
            ..Default::default()
        });

    // Clicking outside also dismisses
    let event_blocker = mouse_area(backdrop_content)
        .interaction(Interaction::Idle)
        .on_press(Message::DismissNotice);

    opaque(event_blocker).into()
}
