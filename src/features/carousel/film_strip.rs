//! Film strip rotator
//!
//! A strip advances by translating its whole track one item width at a time.
//! The item sequence is duplicated once at setup so the wrap from the last
//! item back to the first lands on an identical copy.
//!
//! The duplicate tail hides the jump for typical strip lengths but is not a
//! guaranteed seamless loop for every length and viewport width.

use std::time::Duration;

use super::media::MediaItem;
use super::CarouselError;

/// Default period between film strip advances
pub const STRIP_INTERVAL: Duration = Duration::from_millis(4000);

/// Default width of a single strip item in logical pixels
pub const STRIP_ITEM_WIDTH: f32 = 250.0;

/// Rotator for a film strip region (positional translation)
#[derive(Debug, Clone)]
pub struct FilmStrip {
    name: String,
    items: Vec<MediaItem>,
    original_len: usize,
    index: usize,
    item_width: f32,
    /// Laid-out track width, fixed at setup
    track_width: f32,
    offset: f32,
    looped: bool,
}

impl FilmStrip {
    /// Build a strip and run its one-time setup
    pub fn new(
        name: impl Into<String>,
        items: Vec<MediaItem>,
        item_width: f32,
    ) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }

        let mut strip = Self {
            name: name.into(),
            original_len: items.len(),
            items,
            index: 0,
            item_width,
            track_width: 0.0,
            offset: 0.0,
            looped: false,
        };
        strip.setup();
        Ok(strip)
    }

    /// Duplicate the item sequence for looping
    ///
    /// Runs at most once; returns `false` when the strip was already set up.
    pub fn setup(&mut self) -> bool {
        if self.looped {
            return false;
        }

        let copies: Vec<MediaItem> = self.items[..self.original_len].to_vec();
        self.items.extend(copies);
        self.track_width = self.items.len() as f32 * self.item_width;
        self.looped = true;
        true
    }

    /// Translate the track to the current index, then step the index
    ///
    /// Returns the offset that was applied.
    pub fn advance(&mut self) -> f32 {
        self.offset = -(self.index as f32 * self.item_width);
        self.index = (self.index + 1) % self.original_len;
        self.offset
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    /// Number of distinct items before duplication
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// Full laid-out sequence, including the duplicated tail
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Width of the track holding the doubled sequence
    pub fn track_width(&self) -> f32 {
        self.track_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::carousel::media::MediaKind;

    fn strip(n: usize) -> FilmStrip {
        let items = (0..n)
            .map(|i| MediaItem::new(format!("strips/yard/{i}.jpg"), MediaKind::Image, i))
            .collect();
        FilmStrip::new("yard", items, STRIP_ITEM_WIDTH).unwrap()
    }

    #[test]
    fn empty_strip_is_refused() {
        assert!(matches!(
            FilmStrip::new("empty", Vec::new(), STRIP_ITEM_WIDTH),
            Err(CarouselError::Empty)
        ));
    }

    #[test]
    fn setup_duplicates_once() {
        let s = strip(3);
        assert_eq!(s.original_len(), 3);
        assert_eq!(s.items().len(), 6);
        assert_eq!(s.items()[3].path, s.items()[0].path);
        assert_eq!(s.track_width(), 6.0 * STRIP_ITEM_WIDTH);
    }

    #[test]
    fn repeated_setup_does_not_quadruple() {
        let mut s = strip(4);
        assert!(!s.setup());
        assert!(!s.setup());
        assert_eq!(s.items().len(), 8);
        assert_eq!(s.track_width(), 8.0 * STRIP_ITEM_WIDTH);
    }

    #[test]
    fn advance_translates_before_stepping() {
        let mut s = strip(3);
        assert_eq!(s.advance(), 0.0);
        assert_eq!(s.advance(), -250.0);
        assert_eq!(s.advance(), -500.0);
        // Back to the start of the strip
        assert_eq!(s.advance(), 0.0);
        assert_eq!(s.offset(), 0.0);
    }

    #[test]
    fn n_advances_cycle_index() {
        for n in 1..=8 {
            let mut s = strip(n);
            let start = s.index();
            for _ in 0..n {
                s.advance();
            }
            assert_eq!(s.index(), start, "strip of {} items", n);
        }
    }

    #[test]
    fn single_item_strip_never_moves() {
        let mut s = strip(1);
        for _ in 0..3 {
            assert_eq!(s.advance(), 0.0);
        }
    }
}
