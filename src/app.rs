//! Main application module

mod message;
mod state;
mod update;
mod view;

use std::sync::Arc;

use iced::{Task, Theme};

pub use message::{Message, Section};
pub use state::{App, ShowcaseState, StripState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = crate::features::Settings::load();
        let media_root = settings.carousel.media_root();

        let app = Self::with_settings(settings);

        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: app.core.window_size,
            min_size: Some(iced::Size::new(360.0, 480.0)),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "dogtales".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        let init_task = Task::batch([
            open_window.discard(),
            Task::perform(crate::features::catalog::load(media_root), |result| {
                match result {
                    Ok(catalog) => Message::CatalogLoaded(Arc::new(catalog)),
                    Err(e) => Message::CatalogFailed(format!("{:#}", e)),
                }
            }),
        ]);

        (app, init_task)
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn title(&self, _window_id: iced::window::Id) -> String {
        if self.ui.booking.is_open() {
            format!("{} - Book a Session", self.core.settings.booking.business_name)
        } else {
            self.core.settings.booking.business_name.clone()
        }
    }

    /// Subscriptions for carousel timers, animations, keyboard and window events
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;
        use iced::time::Instant;

        let now = Instant::now();

        // 1. Hero rotation, never paused while the app runs
        let hero_sub = match &self.showcase.hero {
            Some(hero) => iced::time::every(hero.interval()).map(|_| Message::HeroTick),
            None => iced::Subscription::none(),
        };

        // 2. One timer per film strip, keyed by name
        let strip_interval = self.core.settings.carousel.strip_interval();
        let strip_subs = self.showcase.strips.iter().map(|state| {
            iced::time::every(strip_interval)
                .with(state.strip.name().to_string())
                .map(|(name, _)| Message::FilmStripTick(name))
        });

        // 3. Animation frames
        let needs_frames = subscription_logic::needs_frames(
            self.showcase.marquee.is_some(),
            self.showcase.is_animating(now),
            self.ui.has_active_animations(),
        );
        let animation_sub = if needs_frames {
            iced::window::frames().map(|_| Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 4. Keyboard events
        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // 5. Window events
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        iced::Subscription::batch(
            [
                hero_sub,
                animation_sub,
                keyboard_sub,
                close_request_sub,
                resize_sub,
            ]
            .into_iter()
            .chain(strip_subs),
        )
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    /// Frames are needed while anything on screen moves
    pub fn needs_frames(
        marquee_running: bool,
        carousel_animating: bool,
        ui_animating: bool,
    ) -> bool {
        marquee_running || carousel_animating || ui_animating
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;
    use super::*;
    use crate::features::Settings;

    #[test]
    fn idle_page_needs_no_frames() {
        assert!(!needs_frames(false, false, false));
    }

    #[test]
    fn any_motion_needs_frames() {
        assert!(needs_frames(true, false, false));
        assert!(needs_frames(false, true, false));
        assert!(needs_frames(false, false, true));
    }

    #[test]
    fn title_follows_booking_dialog() {
        let mut app = App::with_settings(Settings::default());
        let window = iced::window::Id::unique();
        assert_eq!(app.title(window), "Dog Tales Kennels");

        let _ = app.update(Message::OpenBooking(None));
        assert_eq!(app.title(window), "Dog Tales Kennels - Book a Session");
    }
}
