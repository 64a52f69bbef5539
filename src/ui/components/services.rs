//! Service cards

use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::ui::theme::{self, BOLD_WEIGHT};

pub const CARD_HEIGHT: f32 = 220.0;

/// Short description for a known service
fn blurb(service: &str) -> &'static str {
    match service.to_ascii_lowercase().as_str() {
        "boarding" => "Comfortable overnight stays with daily walks and play.",
        "daycare" => "Supervised play and socialising while you are at work.",
        "grooming" => "Baths, trims and nail care by experienced groomers.",
        "training" => "Obedience and behaviour sessions for every age.",
        _ => "Ask us for details and availability.",
    }
}

fn card(service: &str) -> Element<'_, Message> {
    let book_btn = button(text("Book").size(14))
        .padding(Padding::new(8.0).left(20.0).right(20.0))
        .style(theme::secondary_button)
        .on_press(Message::OpenBooking(Some(service.to_string())));

    container(
        column![
            text(service).size(18).font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
            Space::new().height(8),
            text(blurb(service)).size(14).style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
            Space::new().height(Fill),
            book_btn,
        ]
        .padding(20),
    )
    .width(Fill)
    .height(CARD_HEIGHT)
    .style(theme::card)
    .into()
}

/// Row of service cards; compact windows stack them two per row
pub fn view(services: &[String], compact: bool) -> Element<'_, Message> {
    let per_row = if compact { 2 } else { 4 };

    column(services.chunks(per_row).map(|chunk| {
        row(chunk.iter().map(|service| card(service)))
            .spacing(16)
            .into()
    }))
    .spacing(16)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_services_have_their_own_blurb() {
        assert_ne!(blurb("Grooming"), blurb("Unknown"));
        assert_eq!(blurb("boarding"), blurb("Boarding"));
    }
}
