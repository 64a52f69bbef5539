// src/app/update/booking.rs
//! Booking dialog message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::platform::links;

/// Shown when the booking form is sent without contact details
pub const MISSING_DETAILS_NOTICE: &str = "Please enter your name and phone number.";

impl App {
    /// Handle booking dialog messages
    pub fn handle_booking(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenBooking(service) => {
                self.ui.booking.open(service.as_deref());
                self.ui.booking_animation.show();
                self.ui.nav_menu_open = false;
                self.ui.contact_open = false;
                Some(Task::none())
            }

            Message::CloseBooking => {
                self.close_booking();
                Some(Task::none())
            }

            Message::SelectTab(tab) => {
                self.ui.booking.select_tab(*tab);
                Some(Task::none())
            }

            Message::SelectChip(value) => {
                self.ui.booking.select_chip(value);
                Some(Task::none())
            }

            Message::FieldChanged(field, value) => {
                self.ui.booking.set_field(*field, value.clone());
                Some(Task::none())
            }

            // Presses that land on the dialog while it fades out
            Message::SendBooking if !self.ui.booking.is_open() => Some(Task::none()),

            Message::SendBooking => match self.ui.booking.send() {
                Ok(dispatch) => {
                    self.ui.booking_animation.hide();
                    tracing::info!(
                        "Booking message composed ({} chars), opening WhatsApp",
                        dispatch.message.len()
                    );
                    Some(Self::open_link(dispatch.url))
                }
                Err(e) => {
                    tracing::debug!("Booking not sent: {}", e);
                    self.show_notice(MISSING_DETAILS_NOTICE);
                    Some(Task::none())
                }
            },

            Message::DismissNotice => {
                self.dismiss_notice();
                Some(Task::none())
            }

            Message::OpenLink(url) => {
                self.ui.contact_open = false;
                Some(Self::open_link(url.clone()))
            }

            Message::LinkOpened => {
                tracing::debug!("Browser launched");
                Some(Task::done(Message::ShowToast("Opened in your browser".to_string())))
            }

            Message::LinkFailed(e) => {
                tracing::error!("{}", e);
                Some(Task::done(Message::ShowErrorToast(
                    "Could not open WhatsApp in your browser".to_string(),
                )))
            }

            _ => None,
        }
    }

    /// Launch the browser for `url` in the background
    fn open_link(url: String) -> Task<Message> {
        Task::perform(links::open_in_browser(url), |result| match result {
            Ok(()) => Message::LinkOpened,
            Err(e) => Message::LinkFailed(e.to_string()),
        })
    }

    pub(super) fn close_booking(&mut self) {
        self.ui.booking.close();
        self.ui.booking_animation.hide();
    }

    fn show_notice(&mut self, text: &str) {
        self.ui.notice = Some(text.to_string());
        self.ui.notice_animation.show();
    }

    pub(super) fn dismiss_notice(&mut self) -> bool {
        if self.ui.notice.take().is_some() {
            self.ui.notice_animation.hide();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;
    use crate::features::booking::{BookingTab, FormField};

    fn app() -> App {
        App::with_settings(Settings::default())
    }

    #[test]
    fn service_card_opens_with_chip_selected() {
        let mut app = app();
        let _ = app.update(Message::OpenBooking(Some("Grooming".into())));

        assert!(app.ui.booking.is_open());
        assert_eq!(app.ui.booking.intent().highlighted_chip(), Some("Grooming"));
    }

    #[test]
    fn send_after_close_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::OpenBooking(None));
        let _ = app.update(Message::FieldChanged(FormField::Name, "Jane".into()));
        let _ = app.update(Message::CloseBooking);
        let _ = app.update(Message::SendBooking);

        assert!(app.ui.notice.is_none());
        assert!(!app.ui.booking.is_open());
        assert_eq!(app.ui.booking.form().name, "Jane");
    }

    #[test]
    fn missing_details_shows_blocking_notice() {
        let mut app = app();
        let _ = app.update(Message::OpenBooking(None));
        let _ = app.update(Message::FieldChanged(FormField::Name, "Jane".into()));
        let _ = app.update(Message::SendBooking);

        assert_eq!(app.ui.notice.as_deref(), Some(MISSING_DETAILS_NOTICE));
        assert!(app.ui.booking.is_open());
        assert_eq!(app.ui.booking.form().name, "Jane");

        let _ = app.update(Message::DismissNotice);
        assert!(app.ui.notice.is_none());
        assert!(app.ui.booking.is_open());
    }

    #[test]
    fn successful_send_closes_and_resets() {
        let mut app = app();
        let _ = app.update(Message::OpenBooking(Some("Boarding".into())));
        let _ = app.update(Message::SelectTab(BookingTab::CustomMessage));
        let _ = app.update(Message::FieldChanged(FormField::Name, "Jane".into()));
        let _ = app.update(Message::FieldChanged(FormField::Phone, "0712".into()));
        let _ = app.update(Message::SendBooking);

        assert!(app.ui.notice.is_none());
        assert!(!app.ui.booking.is_open());
        assert_eq!(app.ui.booking.form().name, "");
        assert_eq!(app.ui.booking.intent().active_tab(), BookingTab::QuickBook);
        assert_eq!(app.ui.booking.intent().selected_service(), "");
    }

    #[test]
    fn opening_booking_collapses_menus() {
        let mut app = app();
        app.ui.nav_menu_open = true;
        app.ui.contact_open = true;

        let _ = app.update(Message::OpenBooking(None));

        assert!(!app.ui.nav_menu_open);
        assert!(!app.ui.contact_open);
    }
}
