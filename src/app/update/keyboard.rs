// src/app/update/keyboard.rs
//! Keyboard and action message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Action;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                if let Some(action) = self.core.settings.keybindings.find_action(key, modifiers) {
                    return Some(self.update(Message::ExecuteAction(action)));
                }
                Some(Task::none())
            }

            Message::ExecuteAction(action) => Some(self.execute_action(*action)),

            _ => None,
        }
    }

    /// Execute a keybinding action
    fn execute_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::CloseDialog => {
                // The notice sits on top of the booking dialog
                if self.dismiss_notice() {
                    return Task::none();
                }
                if self.ui.booking.escape() {
                    self.ui.booking_animation.hide();
                } else if self.ui.contact_open {
                    self.ui.contact_open = false;
                } else {
                    self.ui.nav_menu_open = false;
                }
            }
            Action::OpenBooking => {
                if !self.ui.booking.is_open() {
                    return self.update(Message::OpenBooking(None));
                }
            }
            Action::ToggleNavMenu => {
                return self.update(Message::ToggleNavMenu);
            }
            Action::ToggleContact => {
                return self.update(Message::ToggleContact);
            }
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use iced::keyboard::key::Named;
    use iced::keyboard::{Key, Modifiers};

    use super::*;
    use crate::features::Settings;
    use crate::features::booking::FormField;

    fn escape() -> Message {
        Message::KeyPressed(Key::Named(Named::Escape), Modifiers::empty())
    }

    #[test]
    fn escape_closes_booking_dialog() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::OpenBooking(None));

        let _ = app.update(escape());

        assert!(!app.ui.booking.is_open());
    }

    #[test]
    fn escape_dismisses_notice_before_dialog() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::OpenBooking(None));
        let _ = app.update(Message::FieldChanged(FormField::Phone, "0712".into()));
        let _ = app.update(Message::SendBooking);
        assert!(app.ui.notice.is_some());

        let _ = app.update(escape());
        assert!(app.ui.notice.is_none());
        assert!(app.ui.booking.is_open());

        let _ = app.update(escape());
        assert!(!app.ui.booking.is_open());
    }

    #[test]
    fn escape_without_dialog_is_harmless() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(escape());
        assert!(!app.ui.booking.is_open());
        assert!(app.ui.notice.is_none());
    }

    #[test]
    fn ctrl_b_opens_booking() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::KeyPressed(
            Key::Character("b".into()),
            Modifiers::CTRL,
        ));
        assert!(app.ui.booking.is_open());
        assert_eq!(app.ui.booking.intent().selected_service(), "");
    }
}
