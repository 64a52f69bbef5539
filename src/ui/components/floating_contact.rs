//! Floating contact button and its panel

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Color, Element, Fill, Padding};

use crate::app::Message;
use crate::features::Settings;
use crate::ui::theme::{self, BOLD_WEIGHT};

const BUTTON_SIZE: f32 = 56.0;

/// Click-to-chat link without a prefilled message
pub fn whatsapp_url(number: &str) -> String {
    format!("https://wa.me/{}", number)
}

/// Bottom-right toggle, with the panel above it while open
pub fn view(settings: &Settings, open: bool) -> Element<'_, Message> {
    let glyph = if open { "✕" } else { "💬" };
    let toggle = button(
        container(text(glyph).size(22).color(Color::WHITE))
            .center_x(BUTTON_SIZE)
            .center_y(BUTTON_SIZE),
    )
    .width(BUTTON_SIZE)
    .height(BUTTON_SIZE)
    .padding(0)
    .style(theme::floating_button)
    .on_press(Message::ToggleContact);

    let content: Element<'_, Message> = if open {
        column![panel(settings), Space::new().height(12), toggle]
            .align_x(Alignment::End)
            .into()
    } else {
        toggle.into()
    };

    container(content)
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::End)
        .align_y(Alignment::End)
        .padding(24)
        .into()
}

fn panel(settings: &Settings) -> Element<'_, Message> {
    let booking = &settings.booking;

    let whatsapp_btn = button(text("Chat on WhatsApp").size(14).color(Color::WHITE))
        .width(Fill)
        .padding([10, 16])
        .style(theme::whatsapp_button)
        .on_press(Message::OpenLink(whatsapp_url(&booking.whatsapp_number)));

    let book_btn = button(text("Book a Session").size(14))
        .width(Fill)
        .padding([10, 16])
        .style(theme::secondary_button)
        .on_press(Message::OpenBooking(None));

    container(
        column![
            text("Get in touch").size(16).font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
            row![
                text("📞").size(14),
                text(booking.phone_display.as_str())
                    .size(14)
                    .style(|theme| text::Style {
                        color: Some(theme::text_secondary(theme)),
                    }),
            ]
            .spacing(8),
            Space::new().height(4),
            whatsapp_btn,
            book_btn,
        ]
        .spacing(8)
        .padding(Padding::new(16.0)),
    )
    .width(260)
    .style(theme::popup_panel)
    .into()
}
