//! Media items shown by the carousels
//!
//! Items are enumerated once at startup and keep their position for the
//! lifetime of the application.

use std::path::{Path, PathBuf};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp", "gif", "bmp"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "mkv"];

/// Kind of a displayable media element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Detect the kind from a file extension (case-insensitive)
    ///
    /// Returns `None` for files that are neither images nor videos.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Image)
        } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    pub fn is_image_extension(ext: &str) -> bool {
        IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
    }
}

/// A displayable element in a rotator group
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub path: PathBuf,
    pub kind: MediaKind,
    /// Still frame drawn in place of a video (sibling image with the same stem)
    pub poster: Option<PathBuf>,
    /// Pixel size of the still image, when it could be read
    pub size: Option<(u32, u32)>,
    /// 0-based position, fixed at setup
    pub position: usize,
    active: bool,
}

impl MediaItem {
    pub fn new(path: impl Into<PathBuf>, kind: MediaKind, position: usize) -> Self {
        Self {
            path: path.into(),
            kind,
            poster: None,
            size: None,
            position,
            active: false,
        }
    }

    pub fn with_poster(mut self, poster: Option<PathBuf>) -> Self {
        self.poster = poster;
        self
    }

    pub fn with_size(mut self, size: Option<(u32, u32)>) -> Self {
        self.size = size;
        self
    }

    pub fn is_video(&self) -> bool {
        self.kind == MediaKind::Video
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(super) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Image to draw for this item: the file itself, or the poster for videos
    pub fn still_image(&self) -> Option<&Path> {
        match self.kind {
            MediaKind::Image => Some(&self.path),
            MediaKind::Video => self.poster.as_deref(),
        }
    }
}

/// Playback sink for video items
///
/// Rotators request playback when a video becomes current; the request is
/// best-effort and a refusal is never surfaced to the user.
pub trait Playback {
    fn play(&mut self, item: &MediaItem) -> Result<(), PlaybackError>;
}

/// Reasons a playback request can be refused
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// Autoplay is disabled by policy
    AutoplayBlocked,
}

impl std::fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackError::AutoplayBlocked => write!(f, "Auto-play prevented"),
        }
    }
}

impl std::error::Error for PlaybackError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_kind_from_extension() {
        assert_eq!(
            MediaKind::from_path(Path::new("hero/dog.JPG")),
            Some(MediaKind::Image)
        );
        assert_eq!(
            MediaKind::from_path(Path::new("hero/run.mp4")),
            Some(MediaKind::Video)
        );
        assert_eq!(MediaKind::from_path(Path::new("hero/readme.txt")), None);
        assert_eq!(MediaKind::from_path(Path::new("hero/noext")), None);
    }

    #[test]
    fn video_still_uses_poster() {
        let video = MediaItem::new("a/run.mp4", MediaKind::Video, 0);
        assert_eq!(video.still_image(), None);

        let video = video.with_poster(Some(PathBuf::from("a/run.jpg")));
        assert_eq!(video.still_image(), Some(Path::new("a/run.jpg")));

        let image = MediaItem::new("a/dog.png", MediaKind::Image, 1);
        assert_eq!(image.still_image(), Some(Path::new("a/dog.png")));
    }
}
