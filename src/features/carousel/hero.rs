//! Hero carousel rotator
//!
//! Cycles through the hero media by toggling the active flag. Exactly one
//! item is active at any time.

use std::time::Duration;

use super::media::{MediaItem, Playback};
use super::CarouselError;

/// Default period between hero advances
pub const HERO_INTERVAL: Duration = Duration::from_millis(5000);

/// Rotator for the hero region (visibility toggling)
#[derive(Debug, Clone)]
pub struct HeroRotator {
    items: Vec<MediaItem>,
    index: usize,
    interval: Duration,
}

impl HeroRotator {
    /// Build a rotator over the given items; the first item starts active
    pub fn new(mut items: Vec<MediaItem>, interval: Duration) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }

        for (position, item) in items.iter_mut().enumerate() {
            item.position = position;
            item.set_active(position == 0);
        }

        Ok(Self {
            items,
            index: 0,
            interval,
        })
    }

    /// Move to the next item and return the new index
    ///
    /// A video that becomes active is handed to `playback`; a refusal is
    /// logged and otherwise ignored.
    pub fn advance(&mut self, playback: &mut impl Playback) -> usize {
        // A lone item stays active; toggling it would flash the slide.
        if self.items.len() > 1 {
            self.items[self.index].set_active(false);
            self.index = (self.index + 1) % self.items.len();
            self.items[self.index].set_active(true);
        }

        let current = &self.items[self.index];
        if current.is_video() {
            if let Err(e) = playback.play(current) {
                tracing::debug!("Auto-play prevented for {:?}: {}", current.path, e);
            }
        }

        self.index
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn current(&self) -> &MediaItem {
        &self.items[self.index]
    }

    /// Index of the item shown before the given one, wrapping around
    pub fn previous_index(&self, index: usize) -> usize {
        (index + self.items.len() - 1) % self.items.len()
    }

    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_active()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::carousel::media::{MediaKind, PlaybackError};

    /// Playback sink that accepts every request
    struct NoPlayback;

    impl Playback for NoPlayback {
        fn play(&mut self, _item: &MediaItem) -> Result<(), PlaybackError> {
            Ok(())
        }
    }

    fn images(n: usize) -> Vec<MediaItem> {
        (0..n)
            .map(|i| MediaItem::new(format!("hero/{i}.jpg"), MediaKind::Image, i))
            .collect()
    }

    #[derive(Default)]
    struct RecordingPlayback {
        requested: Vec<usize>,
        refuse: bool,
    }

    impl Playback for RecordingPlayback {
        fn play(&mut self, item: &MediaItem) -> Result<(), PlaybackError> {
            self.requested.push(item.position);
            if self.refuse {
                Err(PlaybackError::AutoplayBlocked)
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn empty_group_is_refused() {
        assert!(matches!(
            HeroRotator::new(Vec::new(), HERO_INTERVAL),
            Err(CarouselError::Empty)
        ));
    }

    #[test]
    fn first_item_starts_active() {
        let rotator = HeroRotator::new(images(3), HERO_INTERVAL).unwrap();
        assert_eq!(rotator.index(), 0);
        assert!(rotator.items()[0].is_active());
        assert_eq!(rotator.active_count(), 1);
    }

    #[test]
    fn advance_wraps_to_first() {
        let mut rotator = HeroRotator::new(images(3), HERO_INTERVAL).unwrap();
        assert_eq!(rotator.advance(&mut NoPlayback), 1);
        assert_eq!(rotator.advance(&mut NoPlayback), 2);
        assert_eq!(rotator.advance(&mut NoPlayback), 0);
        assert!(rotator.current().is_active());
    }

    #[test]
    fn previous_index_wraps() {
        let rotator = HeroRotator::new(images(4), HERO_INTERVAL).unwrap();
        assert_eq!(rotator.previous_index(0), 3);
        assert_eq!(rotator.previous_index(2), 1);
    }

    #[test]
    fn single_item_stays_active() {
        let mut rotator = HeroRotator::new(images(1), HERO_INTERVAL).unwrap();
        for _ in 0..3 {
            assert_eq!(rotator.advance(&mut NoPlayback), 0);
            assert!(rotator.items()[0].is_active());
        }
    }

    #[test]
    fn video_activation_requests_playback() {
        let items = vec![
            MediaItem::new("hero/a.jpg", MediaKind::Image, 0),
            MediaItem::new("hero/b.mp4", MediaKind::Video, 1),
            MediaItem::new("hero/c.jpg", MediaKind::Image, 2),
        ];
        let mut rotator = HeroRotator::new(items, HERO_INTERVAL).unwrap();
        let mut playback = RecordingPlayback::default();

        rotator.advance(&mut playback);
        rotator.advance(&mut playback);

        assert_eq!(playback.requested, vec![1]);
    }

    #[test]
    fn refused_playback_is_swallowed() {
        let items = vec![
            MediaItem::new("hero/a.jpg", MediaKind::Image, 0),
            MediaItem::new("hero/b.webm", MediaKind::Video, 1),
        ];
        let mut rotator = HeroRotator::new(items, HERO_INTERVAL).unwrap();
        let mut playback = RecordingPlayback {
            refuse: true,
            ..Default::default()
        };

        assert_eq!(rotator.advance(&mut playback), 1);
        assert!(rotator.current().is_active());
        assert_eq!(rotator.active_count(), 1);
    }

    mod property_cycle {
        use super::*;

        #[test]
        fn n_advances_return_to_start() {
            for n in 1..=8 {
                let mut rotator = HeroRotator::new(images(n), HERO_INTERVAL).unwrap();
                let start = rotator.index();
                for _ in 0..n {
                    rotator.advance(&mut NoPlayback);
                }
                assert_eq!(rotator.index(), start, "group of {} items", n);
            }
        }

        #[test]
        fn exactly_one_active_after_every_advance() {
            for n in 1..=8 {
                let mut rotator = HeroRotator::new(images(n), HERO_INTERVAL).unwrap();
                for step in 0..(n * 2 + 1) {
                    rotator.advance(&mut NoPlayback);
                    assert_eq!(
                        rotator.active_count(),
                        1,
                        "group of {} items, step {}",
                        n,
                        step
                    );
                    assert!(rotator.current().is_active());
                }
            }
        }
    }
}
