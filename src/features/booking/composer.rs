//! Outbound booking message composition
//!
//! Turns the booking intent and form input into the WhatsApp message text and
//! the `wa.me` deep link that carries it.

use super::intent::{BookingIntent, BookingTab};

/// Base of the WhatsApp click-to-chat link
const WHATSAPP_BASE: &str = "https://wa.me";

/// Snapshot of the booking form fields at send time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub notes: String,
    pub message: String,
}

/// Form fields that can be edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    Date,
    Time,
    Notes,
    Message,
}

impl BookingForm {
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Name => self.name = value,
            FormField::Phone => self.phone = value,
            FormField::Date => self.date = value,
            FormField::Time => self.time = value,
            FormField::Notes => self.notes = value,
            FormField::Message => self.message = value,
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::Date => &self.date,
            FormField::Time => &self.time,
            FormField::Notes => &self.notes,
            FormField::Message => &self.message,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Reasons a message cannot be composed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeError {
    MissingName,
    MissingPhone,
}

impl std::fmt::Display for ComposeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComposeError::MissingName => write!(f, "name is required"),
            ComposeError::MissingPhone => write!(f, "phone number is required"),
        }
    }
}

impl std::error::Error for ComposeError {}

/// Compose the outbound message for the active tab
///
/// Name and phone are trimmed and must be non-empty.
pub fn compose(
    intent: &BookingIntent,
    form: &BookingForm,
    business_name: &str,
) -> Result<String, ComposeError> {
    let name = form.name.trim();
    let phone = form.phone.trim();

    if name.is_empty() {
        return Err(ComposeError::MissingName);
    }
    if phone.is_empty() {
        return Err(ComposeError::MissingPhone);
    }

    let message = match intent.active_tab() {
        BookingTab::QuickBook => {
            let mut lines = format!(
                "Hello {}! I would like to book a session.\n\n\
                 *Name:* {}\n\
                 *Phone:* {}\n\
                 *Service of Interest:* {}\n",
                business_name,
                name,
                phone,
                intent.selected_service()
            );
            if !form.date.is_empty() {
                lines.push_str(&format!("*Preferred Date:* {}\n", form.date));
            }
            if !form.time.is_empty() {
                lines.push_str(&format!("*Preferred Time:* {}\n", form.time));
            }
            if !form.notes.is_empty() {
                lines.push_str(&format!("*Additional Notes:* {}", form.notes));
            }
            lines
        }
        BookingTab::CustomMessage => format!(
            "Hello {}! This is {} ({}).\n\n{}",
            business_name, name, phone, form.message
        ),
    };

    Ok(message)
}

/// WhatsApp deep link carrying `message` as a percent-encoded query value
pub fn deep_link(number: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        WHATSAPP_BASE,
        number,
        urlencoding::encode(message)
    )
}
