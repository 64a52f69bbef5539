//! Continuously scrolling breeds track

use std::time::Duration;

use super::media::MediaItem;
use super::CarouselError;

/// Breeds track that scrolls at a constant speed
///
/// Items are doubled at setup; the offset wraps after one original span so
/// the second copy takes the place of the first without a visible gap.
#[derive(Debug, Clone)]
pub struct Marquee {
    items: Vec<MediaItem>,
    original_len: usize,
    item_width: f32,
    /// Pixels per second
    speed: f32,
}

impl Marquee {
    pub fn new(items: Vec<MediaItem>, item_width: f32, speed: f32) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }

        let original_len = items.len();
        let mut doubled = items.clone();
        doubled.extend(items);

        Ok(Self {
            items: doubled,
            original_len,
            item_width,
            speed,
        })
    }

    /// Track translation after `elapsed` time, in `(-span, 0]`
    pub fn offset_at(&self, elapsed: Duration) -> f32 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        let travelled = (elapsed.as_secs_f32() * self.speed) % span;
        if travelled == 0.0 { 0.0 } else { -travelled }
    }

    /// Width of one copy of the sequence
    pub fn span(&self) -> f32 {
        self.original_len as f32 * self.item_width
    }

    /// Width of the track holding both copies
    pub fn track_width(&self) -> f32 {
        self.items.len() as f32 * self.item_width
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    pub fn original_len(&self) -> usize {
        self.original_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::carousel::media::MediaKind;

    fn marquee(n: usize) -> Marquee {
        let items = (0..n)
            .map(|i| MediaItem::new(format!("breeds/{i}.png"), MediaKind::Image, i))
            .collect();
        Marquee::new(items, 200.0, 50.0).unwrap()
    }

    #[test]
    fn items_are_doubled() {
        let m = marquee(5);
        assert_eq!(m.items().len(), 10);
        assert_eq!(m.span(), 1000.0);
        assert_eq!(m.track_width(), 2000.0);
    }

    #[test]
    fn offset_wraps_after_one_span() {
        let m = marquee(2);
        assert_eq!(m.offset_at(Duration::ZERO), 0.0);
        assert_eq!(m.offset_at(Duration::from_secs(2)), -100.0);
        // 8s * 50px/s = 400px = exactly one span
        assert_eq!(m.offset_at(Duration::from_secs(8)), 0.0);
        assert_eq!(m.offset_at(Duration::from_secs(9)), -50.0);
    }

    #[test]
    fn offset_stays_within_span() {
        let m = marquee(3);
        for secs in 0..120 {
            let offset = m.offset_at(Duration::from_millis(secs * 370));
            assert!(offset <= 0.0 && offset > -m.span());
        }
    }
}
