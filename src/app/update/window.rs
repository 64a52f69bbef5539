// src/app/update/window.rs
//! Window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::{App, COMPACT_BREAKPOINT};

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                self.core.window_size = *size;
                self.ui.compact = size.width < COMPACT_BREAKPOINT;
                if !self.ui.compact {
                    self.ui.nav_menu_open = false;
                }
                Some(Task::none())
            }

            Message::RequestClose => {
                tracing::info!("Close requested, exiting");
                Some(iced::exit())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;

    #[test]
    fn narrow_window_is_compact() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::WindowResized(iced::Size::new(600.0, 800.0)));
        assert!(app.ui.compact);

        let _ = app.update(Message::ToggleNavMenu);
        assert!(app.ui.nav_menu_open);

        let _ = app.update(Message::WindowResized(iced::Size::new(1200.0, 800.0)));
        assert!(!app.ui.compact);
        assert!(!app.ui.nav_menu_open);
    }
}
