//! Booking dialog controller
//!
//! Owns the dialog visibility, the booking intent and the form. Every user
//! action maps to one method here so the flow can be exercised without a UI.

use super::composer::{self, BookingForm, ComposeError, FormField};
use super::intent::{BookingIntent, BookingTab};

/// Business identity used for the outbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessContact {
    pub name: String,
    pub whatsapp_number: String,
}

/// A composed message ready to hand to the messaging deep link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub message: String,
    pub url: String,
}

/// Controller for the booking dialog
#[derive(Debug, Clone)]
pub struct BookingModal {
    open: bool,
    intent: BookingIntent,
    form: BookingForm,
    business: BusinessContact,
}

impl BookingModal {
    pub fn new(business: BusinessContact, services: Vec<String>) -> Self {
        Self {
            open: false,
            intent: BookingIntent::new(services),
            form: BookingForm::default(),
            business,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn intent(&self) -> &BookingIntent {
        &self.intent
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn business(&self) -> &BusinessContact {
        &self.business
    }

    /// Open the dialog, pre-selecting `service` when the caller carries one
    pub fn open(&mut self, service: Option<&str>) {
        self.open = true;
        if let Some(service) = service.filter(|s| !s.is_empty()) {
            self.intent.preselect(service);
            if self.intent.highlighted_chip().is_none() {
                tracing::debug!("No chip matches service '{}'", service);
            }
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Close on Escape; returns whether the dialog was open
    pub fn escape(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    pub fn select_tab(&mut self, tab: BookingTab) {
        self.intent.select_tab(tab);
    }

    pub fn select_chip(&mut self, value: &str) {
        self.intent.select_chip(value);
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        self.form.set(field, value);
    }

    /// Compose the message and reset the dialog
    ///
    /// On a validation failure nothing is changed and nothing is dispatched.
    pub fn send(&mut self) -> Result<Dispatch, ComposeError> {
        let message = composer::compose(&self.intent, &self.form, &self.business.name)?;
        let url = composer::deep_link(&self.business.whatsapp_number, &message);

        self.open = false;
        self.form.clear();
        self.intent.reset();

        Ok(Dispatch { message, url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modal() -> BookingModal {
        BookingModal::new(
            BusinessContact {
                name: "Dog Tales Kennels".into(),
                whatsapp_number: "254797296255".into(),
            },
            vec!["Boarding".into(), "Grooming".into()],
        )
    }

    fn fill_contact(modal: &mut BookingModal) {
        modal.set_field(FormField::Name, "Jane".into());
        modal.set_field(FormField::Phone, "0712345678".into());
    }

    #[test]
    fn open_from_service_card_preselects() {
        let mut modal = modal();
        modal.open(Some("Grooming"));
        assert!(modal.is_open());
        assert_eq!(modal.intent().highlighted_chip(), Some("Grooming"));
    }

    #[test]
    fn open_without_service_keeps_selection_empty() {
        let mut modal = modal();
        modal.open(None);
        assert!(modal.is_open());
        assert_eq!(modal.intent().selected_service(), "");
    }

    #[test]
    fn escape_closes_only_when_open() {
        let mut modal = modal();
        assert!(!modal.escape());
        modal.open(None);
        assert!(modal.escape());
        assert!(!modal.is_open());
    }

    #[test]
    fn failed_send_changes_nothing() {
        let mut modal = modal();
        modal.open(Some("Boarding"));
        modal.set_field(FormField::Name, "Jane".into());
        modal.select_tab(BookingTab::CustomMessage);

        assert_eq!(modal.send(), Err(ComposeError::MissingPhone));
        assert!(modal.is_open());
        assert_eq!(modal.form().name, "Jane");
        assert_eq!(modal.intent().active_tab(), BookingTab::CustomMessage);
        assert_eq!(modal.intent().selected_service(), "Boarding");
    }

    #[test]
    fn successful_send_dispatches_and_resets() {
        let mut modal = modal();
        modal.open(None);
        modal.select_chip("Grooming");
        fill_contact(&mut modal);
        modal.set_field(FormField::Date, "2024-05-01".into());

        let dispatch = modal.send().unwrap();

        assert!(dispatch.message.contains("*Service of Interest:* Grooming"));
        assert!(dispatch.url.starts_with("https://wa.me/254797296255?text="));
        assert!(!modal.is_open());
        assert_eq!(modal.form(), &BookingForm::default());
        assert_eq!(modal.intent().selected_service(), "");
        assert_eq!(modal.intent().active_tab(), BookingTab::QuickBook);
    }

    #[test]
    fn dispatch_url_decodes_to_message() {
        let mut modal = modal();
        modal.open(None);
        modal.select_tab(BookingTab::CustomMessage);
        fill_contact(&mut modal);
        modal.set_field(FormField::Message, "Two dogs & a cat?\nThanks".into());

        let dispatch = modal.send().unwrap();
        let (_, query) = dispatch.url.split_once("?text=").unwrap();

        assert_eq!(urlencoding::decode(query).unwrap(), dispatch.message);
    }
}
