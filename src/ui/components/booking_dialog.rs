//! Booking dialog component

use iced::mouse::Interaction;
use iced::widget::{
    Space, button, column, container, mouse_area, opaque, row, stack, text, text_input,
};
use iced::{Alignment, Color, Element, Fill, Padding};

use crate::app::Message;
use crate::features::booking::{BookingModal, BookingTab, FormField};
use crate::ui::theme::{self, BOLD_WEIGHT, MEDIUM_WEIGHT};

const DIALOG_WIDTH: f32 = 520.0;

/// Whether the dialog is drawn: while open and for the rest of its fade-out
fn is_drawn(open: bool, animation_progress: f32) -> bool {
    open || animation_progress > 0.0
}

/// Build the booking dialog with animation
pub fn view(
    modal: &BookingModal,
    animation_progress: f32,
    close_hint: String,
) -> Element<'_, Message> {
    if !is_drawn(modal.is_open(), animation_progress) {
        return Space::new().height(0).into();
    }

    let opacity = animation_progress;

    let backdrop_opacity = 0.7 * animation_progress;
    let backdrop = mouse_area(container(Space::new()).width(Fill).height(Fill).style(
        move |theme| container::Style {
            background: Some(iced::Background::Color(theme::overlay_backdrop(
                theme,
                backdrop_opacity,
            ))),
            ..Default::default()
        },
    ))
    .on_press(Message::CloseBooking);

    let title = text(format!("Book with {}", modal.business().name))
        .size(22)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let close_btn = button(text("×").size(22))
        .padding([2, 10])
        .style(theme::icon_button)
        .on_press(Message::CloseBooking);

    let hint = text(format!("{} to close", close_hint))
        .size(12)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let header = row![title, Space::new().width(Fill), hint, close_btn]
        .spacing(8)
        .align_y(Alignment::Center);

    let active_tab = modal.intent().active_tab();
    let tabs = row(BookingTab::all().iter().map(|tab| {
        let tab = *tab;
        let active = tab == active_tab;
        button(text(tab.label()).size(14).font(iced::Font {
            weight: MEDIUM_WEIGHT,
            ..Default::default()
        }))
        .padding(Padding::new(8.0).left(18.0).right(18.0))
        .style(move |theme, status| theme::tab_button(theme, status, active))
        .on_press(Message::SelectTab(tab))
        .into()
    }))
    .spacing(8);

    let pane = match active_tab {
        BookingTab::QuickBook => quick_book_pane(modal),
        BookingTab::CustomMessage => custom_message_pane(modal),
    };

    let send_btn = button(
        text("Send via WhatsApp")
            .size(15)
            .color(Color::WHITE)
            .font(iced::Font {
                weight: BOLD_WEIGHT,
                ..Default::default()
            }),
    )
    .padding(Padding::new(12.0).left(28.0).right(28.0))
    .style(theme::whatsapp_button)
    .on_press(Message::SendBooking);

    let dialog_content = column![
        header,
        Space::new().height(16),
        tabs,
        Space::new().height(20),
        identity_fields(modal),
        Space::new().height(16),
        pane,
        Space::new().height(24),
        container(send_btn).width(Fill).align_x(Alignment::End),
    ]
    .width(DIALOG_WIDTH)
    .padding(28);

    let dialog_box = container(dialog_content).style(move |theme| {
        let mut background = theme::surface_elevated(theme);
        background.a = opacity;
        container::Style {
            background: Some(iced::Background::Color(background)),
            border: iced::Border {
                color: theme::divider(theme),
                width: 1.0,
                radius: 12.0.into(),
            },
            ..Default::default()
        }
    });

    let dialog_centered = container(opaque(dialog_box))
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill);

    opaque(
        mouse_area(stack![backdrop, dialog_centered])
            .interaction(Interaction::Idle),
    )
    .into()
}

/// Name and phone, shared by both tabs
fn identity_fields(modal: &BookingModal) -> Element<'_, Message> {
    row![
        labelled_input(modal, "Your name", "Jane Doe", FormField::Name),
        labelled_input(modal, "Phone number", "+254 700 000 000", FormField::Phone),
    ]
    .spacing(12)
    .into()
}

fn quick_book_pane(modal: &BookingModal) -> Element<'_, Message> {
    let intent = modal.intent();

    let chips = row(intent.services().iter().map(|service| {
        let selected = intent.is_chip_selected(service);
        button(text(service.as_str()).size(13))
            .padding([6, 14])
            .style(move |theme, status| theme::chip(theme, status, selected))
            .on_press(Message::SelectChip(service.clone()))
            .into()
    }))
    .spacing(8)
    .wrap();

    column![
        field_label("Service of interest"),
        Space::new().height(8),
        chips,
        Space::new().height(16),
        row![
            labelled_input(modal, "Preferred date", "e.g. 24 Dec", FormField::Date),
            labelled_input(modal, "Preferred time", "e.g. 10:00", FormField::Time),
        ]
        .spacing(12),
        Space::new().height(12),
        labelled_input(modal, "Additional notes", "Anything we should know", FormField::Notes),
    ]
    .into()
}

fn custom_message_pane(modal: &BookingModal) -> Element<'_, Message> {
    labelled_input(
        modal,
        "Your message",
        "Ask us anything about our services",
        FormField::Message,
    )
}

fn field_label(label: &str) -> Element<'_, Message> {
    text(label)
        .size(13)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        })
        .into()
}

fn labelled_input<'a>(
    modal: &'a BookingModal,
    label: &'a str,
    placeholder: &'a str,
    field: FormField,
) -> Element<'a, Message> {
    let input = text_input(placeholder, modal.form().get(field))
        .on_input(move |value| Message::FieldChanged(field, value))
        .on_submit(Message::SendBooking)
        .padding(12)
        .size(15)
        .style(theme::form_input);

    column![field_label(label), Space::new().height(6), input]
        .width(Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_dialog_is_drawn_until_faded_out() {
        assert!(is_drawn(true, 0.0));
        assert!(is_drawn(false, 0.4));
        assert!(!is_drawn(false, 0.0));
    }
}
