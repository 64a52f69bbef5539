//! Page header with section navigation
//!
//! Wide windows show every section link inline. Compact windows collapse the
//! links behind a menu button that toggles a dropdown.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::{Message, Section};
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};

pub const HEADER_HEIGHT: f32 = 64.0;

/// Build the header bar
pub fn view<'a>(
    business_name: &'a str,
    active: Section,
    compact: bool,
    menu_open: bool,
    raised: bool,
) -> Element<'a, Message> {
    let logo = button(
        text(format!("🐾 {}", business_name))
            .size(20)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
    )
    .padding(0)
    .style(|theme, status| theme::nav_link(theme, status, false))
    .on_press(Message::ScrollToSection(Section::Home));

    let book_btn = button(text("Book Now").size(14))
        .padding(Padding::new(8.0).left(18.0).right(18.0))
        .style(theme::primary_button)
        .on_press(Message::OpenBooking(None));

    let trailing: Element<'a, Message> = if compact {
        let glyph = if menu_open { "✕" } else { "☰" };
        row![
            book_btn,
            button(text(glyph).size(20))
                .padding([4, 10])
                .style(theme::icon_button)
                .on_press(Message::ToggleNavMenu),
        ]
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
    } else {
        row(Section::all()
            .iter()
            .map(|section| nav_link(*section, active))
            .chain(std::iter::once(book_btn.into())))
        .spacing(4)
        .align_y(Alignment::Center)
        .into()
    };

    container(
        row![logo, Space::new().width(Fill), trailing]
            .align_y(Alignment::Center)
            .padding(Padding::new(0.0).left(24.0).right(24.0)),
    )
    .width(Fill)
    .height(HEADER_HEIGHT)
    .center_y(HEADER_HEIGHT)
    .style(move |theme| theme::header(theme, raised))
    .into()
}

fn nav_link<'a>(section: Section, active: Section) -> Element<'a, Message> {
    let is_active = section == active;
    button(text(section.label()).size(14).font(iced::Font {
        weight: MEDIUM_WEIGHT,
        ..Default::default()
    }))
    .padding([6, 12])
    .style(move |theme, status| theme::nav_link(theme, status, is_active))
    .on_press(Message::ScrollToSection(section))
    .into()
}

/// Dropdown listing the sections, shown under the header in compact mode
pub fn view_menu<'a>(active: Section) -> Element<'a, Message> {
    let links = column(Section::all().iter().map(|section| {
        container(nav_link(*section, active)).width(Fill).into()
    }))
    .spacing(2)
    .padding(12);

    column![
        Space::new().height(HEADER_HEIGHT),
        container(links).width(Fill).style(theme::popup_panel),
    ]
    .width(Fill)
    .into()
}
