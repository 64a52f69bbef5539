// src/app/update/toast.rs
//! Toast notification handlers

use std::time::Duration;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::widgets::Toast;

const SUCCESS_TOAST_DURATION: Duration = Duration::from_secs(3);
const ERROR_TOAST_DURATION: Duration = Duration::from_secs(4);

impl App {
    /// Handle toast messages
    pub fn handle_toast(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ShowToast(text) => {
                Some(self.show_toast(Toast::success(text.clone()), SUCCESS_TOAST_DURATION))
            }

            Message::ShowErrorToast(text) => {
                Some(self.show_toast(Toast::error(text.clone()), ERROR_TOAST_DURATION))
            }

            Message::HideToast(generation) => {
                // A newer toast replaced this one and owns its own timer
                if *generation == self.ui.toast_generation {
                    self.ui.toast_visible = false;
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Show `toast` and schedule its dismissal
    fn show_toast(&mut self, toast: Toast, visible_for: Duration) -> Task<Message> {
        self.ui.toast = Some(toast);
        self.ui.toast_visible = true;
        self.ui.toast_generation += 1;

        let generation = self.ui.toast_generation;
        Task::perform(
            async move { tokio::time::sleep(visible_for).await },
            move |_| Message::HideToast(generation),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;
    use crate::ui::widgets::toast::ToastStyle;

    #[test]
    fn error_toast_is_shown_then_hidden() {
        let mut app = App::with_settings(Settings::default());

        let _ = app.update(Message::ShowErrorToast("Could not open WhatsApp".into()));
        assert!(app.ui.toast_visible);
        assert_eq!(app.ui.toast.as_ref().map(|t| t.style), Some(ToastStyle::Error));

        let _ = app.update(Message::HideToast(app.ui.toast_generation));
        assert!(!app.ui.toast_visible);
    }

    #[test]
    fn earlier_timer_leaves_newer_toast_visible() {
        let mut app = App::with_settings(Settings::default());

        let _ = app.update(Message::ShowToast("Opened in your browser".into()));
        let first = app.ui.toast_generation;
        let _ = app.update(Message::ShowErrorToast("Could not open WhatsApp".into()));

        let _ = app.update(Message::HideToast(first));
        assert!(app.ui.toast_visible);
        assert_eq!(app.ui.toast.as_ref().map(|t| t.style), Some(ToastStyle::Error));

        let _ = app.update(Message::HideToast(app.ui.toast_generation));
        assert!(!app.ui.toast_visible);
    }
}
