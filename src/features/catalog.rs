//! Media catalog discovery
//!
//! The media root is scanned once at startup:
//!
//! ```text
//! <media root>/
//!   hero/            hero carousel items
//!   strips/<name>/   one film strip per sub-directory
//!   breeds/          breeds marquee items
//! ```
//!
//! Files are ordered by file name. An image sharing its stem with a video
//! (`run.mp4` + `run.jpg`) is used as that video's poster instead of being
//! listed as its own item.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use super::carousel::{MediaItem, MediaKind};

/// Media enumerated from the media root
#[derive(Debug, Clone, Default)]
pub struct MediaCatalog {
    pub hero: Vec<MediaItem>,
    /// Film strips as (name, items), ordered by name
    pub strips: Vec<(String, Vec<MediaItem>)>,
    pub breeds: Vec<MediaItem>,
}

impl MediaCatalog {
    /// Scan the media root
    ///
    /// A missing root or sub-directory yields empty groups; only I/O errors on
    /// directories that do exist are reported.
    pub fn scan(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            tracing::info!("Media directory {:?} not found, carousels disabled", root);
            return Ok(Self::default());
        }

        let hero = scan_group(&root.join("hero"))?;
        let breeds = scan_group(&root.join("breeds"))?;

        let mut strips = Vec::new();
        let strips_root = root.join("strips");
        if strips_root.is_dir() {
            let mut dirs: Vec<PathBuf> = std::fs::read_dir(&strips_root)
                .with_context(|| format!("Failed to read {:?}", strips_root))?
                .filter_map(|entry| entry.ok())
                .map(|entry| entry.path())
                .filter(|path| path.is_dir())
                .collect();
            dirs.sort();

            for dir in dirs {
                let name = dir
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or_default()
                    .to_string();
                let items = scan_group(&dir)?;
                if items.is_empty() {
                    tracing::debug!("Film strip '{}' has no media, skipped", name);
                    continue;
                }
                strips.push((name, items));
            }
        }

        Ok(Self {
            hero,
            strips,
            breeds,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.hero.is_empty() && self.strips.is_empty() && self.breeds.is_empty()
    }
}

/// Enumerate the media files directly inside `dir`
fn scan_group(dir: &Path) -> Result<Vec<MediaItem>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut files: Vec<(PathBuf, MediaKind)> = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to scan {:?}", dir))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if let Some(kind) = MediaKind::from_path(&path) {
            files.push((path, kind));
        }
    }

    let video_stems: HashSet<PathBuf> = files
        .iter()
        .filter(|(_, kind)| *kind == MediaKind::Video)
        .map(|(path, _)| path.with_extension(""))
        .collect();

    let mut items = Vec::new();
    let mut posters: Vec<PathBuf> = Vec::new();
    for (path, kind) in &files {
        if *kind == MediaKind::Image && video_stems.contains(&path.with_extension("")) {
            posters.push(path.clone());
        }
    }

    for (path, kind) in files {
        if posters.contains(&path) {
            continue;
        }
        let poster = match kind {
            MediaKind::Video => find_poster(&path, &posters),
            MediaKind::Image => None,
        };
        let position = items.len();
        let item = MediaItem::new(path, kind, position).with_poster(poster);
        let size = item.still_image().and_then(read_image_size);
        items.push(item.with_size(size));
    }

    Ok(items)
}

fn find_poster(video: &Path, posters: &[PathBuf]) -> Option<PathBuf> {
    let stem = video.with_extension("");
    posters
        .iter()
        .find(|poster| {
            poster.with_extension("") == stem
                && poster
                    .extension()
                    .and_then(|e| e.to_str())
                    .is_some_and(MediaKind::is_image_extension)
        })
        .cloned()
}

/// Read the pixel size of an image without decoding it
fn read_image_size(path: &Path) -> Option<(u32, u32)> {
    match image::ImageReader::open(path).and_then(|r| r.with_guessed_format()) {
        Ok(reader) => match reader.into_dimensions() {
            Ok(size) => Some(size),
            Err(e) => {
                tracing::debug!("Could not read dimensions of {:?}: {}", path, e);
                None
            }
        },
        Err(e) => {
            tracing::debug!("Could not open {:?}: {}", path, e);
            None
        }
    }
}

/// Scan the media root off the UI thread
pub async fn load(root: Option<PathBuf>) -> Result<MediaCatalog> {
    let Some(root) = root else {
        return Ok(MediaCatalog::default());
    };

    tokio::task::spawn_blocking(move || MediaCatalog::scan(&root))
        .await
        .context("Media scan task failed")?
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"fake media").unwrap();
    }

    #[test]
    fn missing_root_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = MediaCatalog::scan(&dir.path().join("nope")).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn hero_items_are_sorted_and_positioned() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("hero/b.png"));
        touch(&dir.path().join("hero/a.jpg"));
        touch(&dir.path().join("hero/notes.txt"));
        touch(&dir.path().join("hero/c.mp4"));

        let catalog = MediaCatalog::scan(dir.path()).unwrap();

        let names: Vec<_> = catalog
            .hero
            .iter()
            .map(|i| i.path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.jpg", "b.png", "c.mp4"]);
        assert_eq!(catalog.hero[2].kind, MediaKind::Video);
        assert_eq!(
            catalog.hero.iter().map(|i| i.position).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn video_poster_is_not_listed_separately() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("hero/run.mp4"));
        touch(&dir.path().join("hero/run.jpg"));
        touch(&dir.path().join("hero/sit.png"));

        let catalog = MediaCatalog::scan(dir.path()).unwrap();

        assert_eq!(catalog.hero.len(), 2);
        let video = &catalog.hero[0];
        assert!(video.is_video());
        assert_eq!(
            video.poster.as_deref(),
            Some(dir.path().join("hero/run.jpg").as_path())
        );
    }

    #[test]
    fn unreadable_image_has_no_size() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("breeds/collie.png"));

        let catalog = MediaCatalog::scan(dir.path()).unwrap();

        assert_eq!(catalog.breeds.len(), 1);
        assert_eq!(catalog.breeds[0].size, None);
    }

    #[test]
    fn strips_are_grouped_by_directory() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("strips/yard/1.jpg"));
        touch(&dir.path().join("strips/yard/2.jpg"));
        touch(&dir.path().join("strips/grooming/1.jpg"));
        fs::create_dir_all(dir.path().join("strips/empty")).unwrap();

        let catalog = MediaCatalog::scan(dir.path()).unwrap();

        let names: Vec<&str> = catalog.strips.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["grooming", "yard"]);
        assert_eq!(catalog.strips[1].1.len(), 2);
        assert!(catalog.hero.is_empty());
        assert!(catalog.breeds.is_empty());
    }
}
