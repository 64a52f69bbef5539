// src/app/update/navigation.rs
//! Navigation message handlers

use iced::Task;

use crate::app::message::{Message, Section};
use crate::app::state::App;
use crate::ui::pages::home;

/// Get section from scroll position
fn section_from_scroll_position(y_offset: f32, strip_count: usize) -> Section {
    // Switch slightly before the section reaches the top
    let search_offset = y_offset + 50.0;

    let mut current = Section::Home;
    for (section, pos) in home::section_offsets(strip_count) {
        if search_offset >= pos {
            current = section;
        } else {
            break;
        }
    }
    current
}

impl App {
    /// Handle navigation-related messages
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ScrollToSection(section) => {
                self.ui.nav_menu_open = false;
                self.ui.active_section = *section;

                let target_y = home::section_offsets(self.showcase.strips.len())
                    .into_iter()
                    .find(|(s, _)| s == section)
                    .map(|(_, pos)| pos)
                    .unwrap_or(0.0);

                Some(iced::widget::operation::scroll_to(
                    iced::widget::Id::new(home::SCROLL_ID),
                    iced::widget::scrollable::AbsoluteOffset {
                        x: Some(0.0),
                        y: Some(target_y),
                    },
                ))
            }

            Message::PageScrolled(y_offset) => {
                self.ui.scroll_y = *y_offset;
                self.ui.active_section =
                    section_from_scroll_position(*y_offset, self.showcase.strips.len());
                Some(Task::none())
            }

            Message::ToggleNavMenu => {
                self.ui.nav_menu_open = self.ui.compact && !self.ui.nav_menu_open;
                Some(Task::none())
            }

            Message::ToggleContact => {
                self.ui.contact_open = !self.ui.contact_open;
                Some(Task::none())
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
    fn scroll_position_maps_to_sections_in_order() {
        let offsets = home::section_offsets(2);
        assert_eq!(section_from_scroll_position(0.0, 2), Section::Home);
        for (section, pos) in offsets {
            assert_eq!(section_from_scroll_position(pos, 2), section);
        }
    }

    #[test]
    fn header_raises_past_threshold() {
        let mut app = App::with_settings(Settings::default());

        let _ = app.update(Message::PageScrolled(50.0));
        assert!(!app.ui.header_raised());

        let _ = app.update(Message::PageScrolled(51.0));
        assert!(app.ui.header_raised());

        let _ = app.update(Message::PageScrolled(0.0));
        assert!(!app.ui.header_raised());
    }

    #[test]
    fn nav_link_closes_menu() {
        let mut app = App::with_settings(Settings::default());
        app.ui.compact = true;

        let _ = app.update(Message::ToggleNavMenu);
        assert!(app.ui.nav_menu_open);

        let _ = app.update(Message::ScrollToSection(Section::Services));
        assert!(!app.ui.nav_menu_open);
        assert_eq!(app.ui.active_section, Section::Services);
    }

    #[test]
    fn menu_stays_closed_in_wide_window() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::ToggleNavMenu);
        assert!(!app.ui.nav_menu_open);
    }

    #[test]
    fn contact_toggle_flips() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::ToggleContact);
        assert!(app.ui.contact_open);
        let _ = app.update(Message::ToggleContact);
        assert!(!app.ui.contact_open);
    }
}
