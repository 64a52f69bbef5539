// src/app/update/carousel.rs
//! Carousel message handlers

use iced::Task;
use iced::animation::Animation;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::{App, StripState};
use crate::features::carousel::{FilmStrip, HeroRotator, Marquee, Playback};
use crate::features::catalog::MediaCatalog;

impl App {
    /// Handle media catalog and carousel messages
    pub fn handle_carousel(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::CatalogLoaded(catalog) => {
                self.install_catalog(catalog);
                Some(Task::none())
            }

            Message::CatalogFailed(e) => {
                tracing::warn!("Media scan failed: {}", e);
                self.core.catalog_ready = true;
                Some(Task::done(Message::ShowErrorToast(
                    "Could not load the gallery media".to_string(),
                )))
            }

            Message::HeroTick => {
                if let Some(hero) = self.showcase.hero.as_mut() {
                    let previous = hero.index();
                    let current = hero.advance(&mut self.showcase.playback);

                    if current != previous {
                        let now = Instant::now();
                        self.showcase.last_hero = hero.previous_index(current);
                        self.showcase.hero_animation = Animation::new(false).slow();
                        self.showcase.hero_animation.go_mut(true, now);
                    }
                }
                Some(Task::none())
            }

            Message::FilmStripTick(name) => {
                match self.showcase.strip_mut(name) {
                    Some(state) => {
                        let now = Instant::now();
                        state.from_offset = state.offset_at(now);
                        let offset = state.strip.advance();
                        state.animation = Animation::new(false).slow();
                        state.animation.go_mut(true, now);
                        tracing::trace!("Film strip '{}' moved to {}", name, offset);
                    }
                    None => tracing::debug!("Tick for unknown film strip '{}'", name),
                }
                Some(Task::none())
            }

            Message::AnimationTick => {
                let now = Instant::now();
                self.showcase.now = now;
                self.ui.tick_animations(now);
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Build every rotator from a freshly scanned catalog
    fn install_catalog(&mut self, catalog: &MediaCatalog) {
        let carousel = &self.core.settings.carousel;

        self.showcase.hero = match HeroRotator::new(catalog.hero.clone(), carousel.hero_interval())
        {
            Ok(hero) => Some(hero),
            Err(e) => {
                tracing::info!("Hero carousel hidden: {}", e);
                None
            }
        };
        self.showcase.last_hero = 0;
        self.showcase.hero_animation = Animation::new(true);

        // The first slide is shown without a tick, so start its clip here
        if let Some(hero) = &self.showcase.hero {
            let first = hero.current();
            if first.is_video() {
                if let Err(e) = self.showcase.playback.play(first) {
                    tracing::debug!("Auto-play prevented for {:?}: {}", first.path, e);
                }
            }
        }

        self.showcase.strips = catalog
            .strips
            .iter()
            .filter_map(|(name, items)| {
                FilmStrip::new(name.clone(), items.clone(), carousel.strip_item_width)
                    .map_err(|e| tracing::debug!("Film strip '{}' skipped: {}", name, e))
                    .ok()
            })
            .map(StripState::new)
            .collect();

        self.showcase.marquee = Marquee::new(
            catalog.breeds.clone(),
            carousel.strip_item_width,
            carousel.marquee_speed,
        )
        .map_err(|e| tracing::info!("Breeds marquee hidden: {}", e))
        .ok();
        let now = Instant::now();
        self.showcase.marquee_started = now;
        self.showcase.now = now;

        self.core.catalog_ready = true;
        tracing::info!(
            "Media catalog loaded: {} hero, {} strips, {} breeds",
            catalog.hero.len(),
            self.showcase.strips.len(),
            catalog.breeds.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::features::Settings;
    use crate::features::carousel::{MediaItem, MediaKind};

    fn items(prefix: &str, names: &[&str]) -> Vec<MediaItem> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let path = format!("{prefix}/{name}");
                let kind = MediaKind::from_path(std::path::Path::new(&path))
                    .unwrap_or(MediaKind::Image);
                MediaItem::new(path, kind, i)
            })
            .collect()
    }

    fn catalog() -> MediaCatalog {
        MediaCatalog {
            hero: items("hero", &["a.jpg", "b.mp4", "c.png"]),
            strips: vec![
                ("grooming".into(), items("strips/grooming", &["1.jpg", "2.jpg"])),
                ("yard".into(), items("strips/yard", &["1.jpg", "2.jpg", "3.jpg"])),
            ],
            breeds: items("breeds", &["collie.jpg", "pug.jpg"]),
        }
    }

    fn loaded_app(settings: Settings) -> App {
        let mut app = App::with_settings(settings);
        let _ = app.update(Message::CatalogLoaded(Arc::new(catalog())));
        app
    }

    #[test]
    fn catalog_builds_all_rotators() {
        let app = loaded_app(Settings::default());

        assert!(app.core.catalog_ready);
        assert_eq!(app.showcase.hero.as_ref().map(|h| h.len()), Some(3));
        assert_eq!(app.showcase.strips.len(), 2);
        assert_eq!(app.showcase.strips[1].strip.items().len(), 6);
        assert_eq!(app.showcase.marquee.as_ref().map(|m| m.items().len()), Some(4));
    }

    #[test]
    fn empty_catalog_hides_components() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::CatalogLoaded(Arc::new(MediaCatalog::default())));

        assert!(app.showcase.hero.is_none());
        assert!(app.showcase.strips.is_empty());
        assert!(app.showcase.marquee.is_none());
        // Ticks without rotators are harmless
        let _ = app.update(Message::HeroTick);
        let _ = app.update(Message::FilmStripTick("yard".into()));
    }

    #[test]
    fn hero_tick_starts_video_when_autoplay_allowed() {
        let mut app = loaded_app(Settings::default());

        let _ = app.update(Message::HeroTick);

        assert_eq!(app.showcase.hero.as_ref().map(|h| h.index()), Some(1));
        assert_eq!(app.showcase.last_hero, 0);
        assert_eq!(
            app.showcase.playback.playing().map(|p| p.to_string_lossy().into_owned()),
            Some("hero/b.mp4".to_string())
        );
    }

    #[test]
    fn blocked_autoplay_still_advances() {
        let mut settings = Settings::default();
        settings.carousel.autoplay_videos = false;
        let mut app = loaded_app(settings);

        let _ = app.update(Message::HeroTick);

        let hero = app.showcase.hero.as_ref().unwrap();
        assert_eq!(hero.index(), 1);
        assert_eq!(hero.active_count(), 1);
        assert!(app.showcase.playback.playing().is_none());
    }

    #[test]
    fn playing_badge_follows_current_hero_item() {
        let mut app = loaded_app(Settings::default());
        assert!(!app.showcase.hero_clip_playing());

        let _ = app.update(Message::HeroTick);
        assert!(app.showcase.hero_clip_playing());

        // Moving on to an image leaves the old clip recorded
        let _ = app.update(Message::HeroTick);
        assert!(app.showcase.playback.playing().is_some());
        assert!(!app.showcase.hero_clip_playing());
    }

    #[test]
    fn playing_badge_ignores_clip_of_another_item() {
        let mut settings = Settings::default();
        settings.carousel.autoplay_videos = false;
        let mut app = App::with_settings(settings);
        let _ = app.update(Message::CatalogLoaded(Arc::new(MediaCatalog {
            hero: items("hero", &["b.mp4", "d.mp4"]),
            ..MediaCatalog::default()
        })));

        let mut other = crate::app::state::VideoPlayback::new(true);
        other
            .play(&items("hero", &["old.mp4"])[0])
            .expect("autoplay allowed");
        app.showcase.playback = other;

        assert!(app.showcase.hero.as_ref().is_some_and(|h| h.current().is_video()));
        assert!(!app.showcase.hero_clip_playing());
    }

    #[test]
    fn strip_ticks_are_independent() {
        let mut app = loaded_app(Settings::default());

        let _ = app.update(Message::FilmStripTick("yard".into()));
        let _ = app.update(Message::FilmStripTick("yard".into()));

        let grooming = &app.showcase.strips[0].strip;
        let yard = &app.showcase.strips[1].strip;
        assert_eq!(grooming.index(), 0);
        assert_eq!(grooming.offset(), 0.0);
        assert_eq!(yard.index(), 2);
        assert_eq!(yard.offset(), -250.0);
    }
}
