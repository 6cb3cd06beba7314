use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use thiserror::Error;

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not a supported image", .0.display())]
    Unsupported(PathBuf),
}

/// Rotation needed to display an image upright, from its EXIF orientation.
/// Mirrored orientations are shown unrotated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Normal,
    Rotate180,
    Rotate90Cw,
    Rotate90Ccw,
}

impl Orientation {
    pub fn from_exif(value: u16) -> Self {
        match value {
            3 => Orientation::Rotate180,
            6 => Orientation::Rotate90Cw,
            8 => Orientation::Rotate90Ccw,
            _ => Orientation::Normal,
        }
    }
}

#[derive(Debug)]
pub struct ImageBytes {
    pub bytes: Vec<u8>,
    pub extension: String,
    pub orientation: Orientation,
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase())
        .filter(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

pub fn is_supported(path: &Path) -> bool {
    extension_of(path).is_some()
}

// --- Image files of a directory, sorted by file name ---
pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("failed to read directory {}", dir_path.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.context("failed to read directory entry")?.path();
        if path.is_file() && is_supported(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        bail!("no image files found in directory {}", dir_path.display());
    }
    tracing::info!(count = paths.len(), dir = %dir_path.display(), "found images");
    Ok(paths)
}

/// EXIF orientation of a JPEG; anything unreadable counts as upright.
pub fn read_orientation(bytes: &[u8], extension: &str) -> Orientation {
    if extension != "jpg" && extension != "jpeg" {
        return Orientation::Normal;
    }
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .map(Orientation::from_exif)
            .unwrap_or(Orientation::Normal),
        Err(e) => {
            tracing::warn!("could not read EXIF data: {}", e);
            Orientation::Normal
        }
    }
}

/// Reads an image file without touching the GPU, so it can run off the
/// main thread.
pub fn read_image(path: &Path) -> Result<ImageBytes, LoadError> {
    let extension = extension_of(path).ok_or_else(|| LoadError::Unsupported(path.to_path_buf()))?;
    let bytes = fs::read(path).map_err(|source| LoadError::Read { path: path.to_path_buf(), source })?;
    let orientation = read_orientation(&bytes, &extension);
    Ok(ImageBytes { bytes, extension, orientation })
}

// --- Decode, apply EXIF rotation, create texture (main thread only) ---
pub fn create_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image: &ImageBytes,
) -> Result<Texture2D> {
    let mut decoded = Image::load_image_from_mem(&format!(".{}", image.extension), &image.bytes)
        .map_err(|e| anyhow::anyhow!("failed to decode image data: {}", e))?;

    match image.orientation {
        Orientation::Rotate180 => {
            decoded.rotate_cw();
            decoded.rotate_cw();
        }
        Orientation::Rotate90Cw => decoded.rotate_cw(),
        Orientation::Rotate90Ccw => decoded.rotate_ccw(),
        Orientation::Normal => {}
    }
    if image.orientation != Orientation::Normal {
        tracing::debug!(orientation = ?image.orientation, "applied EXIF rotation");
    }

    let texture = rl
        .load_texture_from_image(thread, &decoded)
        .map_err(|e| anyhow::anyhow!("failed to create texture: {}", e))?;

    // CPU copy is no longer needed once the texture exists
    drop(decoded);

    Ok(texture)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_mapping() {
        assert_eq!(Orientation::from_exif(1), Orientation::Normal);
        assert_eq!(Orientation::from_exif(3), Orientation::Rotate180);
        assert_eq!(Orientation::from_exif(6), Orientation::Rotate90Cw);
        assert_eq!(Orientation::from_exif(8), Orientation::Rotate90Ccw);
        assert_eq!(Orientation::from_exif(2), Orientation::Normal);
    }

    #[test]
    fn only_jpeg_is_inspected() {
        assert_eq!(read_orientation(b"not an image", "png"), Orientation::Normal);
        assert_eq!(read_orientation(b"not an image", "jpg"), Orientation::Normal);
    }

    #[test]
    fn discovery_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.JPG", "c.gif", "notes.txt", "d.webp"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let paths = load_sorted_image_paths(dir.path()).unwrap();
        let names: Vec<_> = paths
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.png", "c.gif"]);
    }

    #[test]
    fn empty_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("readme.md"), b"x").unwrap();
        assert!(load_sorted_image_paths(dir.path()).is_err());
    }

    #[test]
    fn read_image_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.png");
        assert!(matches!(read_image(&missing), Err(LoadError::Read { .. })));
        assert!(matches!(read_image(Path::new("x.tiff")), Err(LoadError::Unsupported(_))));
    }

    #[test]
    fn read_image_keeps_bytes_and_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pic.PNG");
        fs::write(&path, b"pixels").unwrap();
        let image = read_image(&path).unwrap();
        assert_eq!(image.bytes, b"pixels");
        assert_eq!(image.extension, "png");
        assert_eq!(image.orientation, Orientation::Normal);
    }
}
