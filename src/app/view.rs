// src/app/view.rs
//! Application view rendering

use iced::widget::{Space, column, container, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{components, pages, theme, widgets};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let settings = &self.core.settings;

        let page = container(pages::home::view(
            settings,
            &self.showcase,
            self.ui.compact,
            self.core.catalog_ready,
        ))
        .width(Fill)
        .height(Fill)
        .style(theme::main_content);

        let header = column![
            components::header::view(
                &settings.booking.business_name,
                self.ui.active_section,
                self.ui.compact,
                self.ui.nav_menu_open,
                self.ui.header_raised(),
            ),
            Space::new().height(Fill),
        ];

        let nav_menu: Element<'_, Message> = if self.ui.compact && self.ui.nav_menu_open {
            components::header::view_menu(self.ui.active_section)
        } else {
            Space::new().width(0).height(0).into()
        };

        let floating_contact = components::floating_contact::view(settings, self.ui.contact_open);

        // Toast overlay (empty space if not visible)
        let toast_overlay: Element<'_, Message> = match (&self.ui.toast, self.ui.toast_visible) {
            (Some(toast), true) => container(widgets::view_toast(toast))
                .width(Fill)
                .height(Fill)
                .padding(20)
                .align_x(Alignment::Center)
                .align_y(Alignment::End)
                .into(),
            _ => Space::new().width(0).height(0).into(),
        };

        let booking_overlay = components::booking_dialog::view(
            &self.ui.booking,
            self.ui.booking_animation.progress(),
            settings
                .keybindings
                .display_for_action(&crate::features::Action::CloseDialog),
        );

        let notice_overlay: Element<'_, Message> = match &self.ui.notice {
            Some(notice) => {
                components::notice_dialog::view(notice, self.ui.notice_animation.progress())
            }
            None => Space::new().width(0).height(0).into(),
        };

        // Always use consistent stack structure to preserve scroll position
        stack![
            page,
            header,
            nav_menu,
            floating_contact,
            toast_overlay,
            booking_overlay,
            notice_overlay,
        ]
        .width(Fill)
        .height(Fill)
        .into()
    }
}
