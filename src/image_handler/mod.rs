// SPDX-License-Identifier: MPL-2.0
//! Image attachment loading, validation, and staging.
//!
//! Attachments are validated against the configured limits (file size,
//! pixel dimensions, supported formats), normalized to PNG, and staged in
//! a per-session temp directory. The staged files cross the process
//! boundary to the server, which encodes and deletes them.

use crate::config::Config;
use crate::error::{ImageError, Result};
use crate::feedback::{ImageOrigin, StagedImage};
use image_rs::imageops::FilterType;
use image_rs::{DynamicImage, RgbaImage};
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// File extensions accepted by the picker and drag-and-drop.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

/// Gallery thumbnail size in pixels.
pub const THUMBNAIL_WIDTH: u32 = 100;
pub const THUMBNAIL_HEIGHT: u32 = 80;

/// Returns true if the path's extension is one we can attach.
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

/// Stages validated attachments as PNG files in a session temp directory.
///
/// The directory is removed on drop unless [`ImageStager::keep`] is called,
/// which happens exactly once, on submission.
#[derive(Debug)]
pub struct ImageStager {
    dir: TempDir,
    counter: usize,
}

impl ImageStager {
    pub fn new() -> Result<Self> {
        let dir = tempfile::Builder::new()
            .prefix("mcp-feedback-")
            .tempdir()?;
        Ok(Self { dir, counter: 0 })
    }

    /// Validates and stages an image file from disk.
    pub fn stage_file(&mut self, path: &Path, config: &Config) -> Result<StagedImage> {
        if !is_supported_extension(path) {
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("")
                .to_string();
            return Err(ImageError::UnsupportedFormat(ext).into());
        }

        let metadata = fs::metadata(path)
            .map_err(|_| ImageError::NotFound(path.display().to_string()))?;
        if metadata.len() > config.max_file_size_bytes() {
            return Err(ImageError::TooLarge(metadata.len()).into());
        }

        let decoded = image_rs::open(path)
            .map_err(|e| ImageError::Decode(e.to_string()))?;
        check_dimensions(&decoded, config)?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        self.stage(decoded, ImageOrigin::File(name))
    }

    /// Grabs image data from the system clipboard and stages it.
    pub fn stage_clipboard(&mut self, config: &Config) -> Result<StagedImage> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| ImageError::Decode(e.to_string()))?;
        let data = clipboard
            .get_image()
            .map_err(|_| ImageError::ClipboardEmpty)?;

        let width = data.width as u32;
        let height = data.height as u32;
        let rgba = RgbaImage::from_raw(width, height, data.bytes.into_owned())
            .ok_or_else(|| ImageError::Decode("invalid clipboard pixel buffer".to_string()))?;

        let decoded = DynamicImage::ImageRgba8(rgba);
        check_dimensions(&decoded, config)?;
        self.stage(decoded, ImageOrigin::Clipboard)
    }

    /// Re-encodes the image as PNG into the staging directory.
    fn stage(&mut self, decoded: DynamicImage, origin: ImageOrigin) -> Result<StagedImage> {
        let (width, height) = (decoded.width(), decoded.height());
        let file_name = format!("feedback_{:03}.png", self.counter);
        self.counter += 1;

        let path = self.dir.path().join(file_name);
        decoded
            .save_with_format(&path, image_rs::ImageFormat::Png)
            .map_err(|e| ImageError::Decode(e.to_string()))?;

        Ok(StagedImage {
            path,
            origin,
            width,
            height,
        })
    }

    /// Deletes a single staged file, for gallery removal.
    pub fn discard(&self, image: &StagedImage) {
        let _ = fs::remove_file(&image.path);
    }

    /// Persists the staging directory so the files survive this process.
    /// The reader is responsible for deleting them afterwards.
    pub fn keep(self) -> PathBuf {
        self.dir.keep()
    }
}

fn check_dimensions(image: &DynamicImage, config: &Config) -> Result<()> {
    let (width, height) = (image.width(), image.height());
    let max = config.max_dimension();
    if width > max || height > max {
        return Err(ImageError::Dimensions(width, height).into());
    }
    Ok(())
}

/// Renders a staged image down to gallery-thumbnail PNG bytes.
pub fn thumbnail_png(path: &Path) -> Result<Vec<u8>> {
    let decoded = image_rs::open(path).map_err(|e| ImageError::Decode(e.to_string()))?;
    let thumb = decoded.resize(THUMBNAIL_WIDTH, THUMBNAIL_HEIGHT, FilterType::Lanczos3);

    let mut bytes = Vec::new();
    thumb
        .write_to(&mut Cursor::new(&mut bytes), image_rs::ImageFormat::Png)
        .map_err(|e| ImageError::Decode(e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ImagesConfig;
    use crate::error::Error;
    use image_rs::Rgba;
    use tempfile::tempdir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 80, 40, 255]));
        img.save(&path).expect("failed to write test image");
        path
    }

    #[test]
    fn supported_extension_check_is_case_insensitive() {
        assert!(is_supported_extension(Path::new("shot.PNG")));
        assert!(is_supported_extension(Path::new("shot.jpeg")));
        assert!(is_supported_extension(Path::new("anim.webp")));
        assert!(!is_supported_extension(Path::new("doc.pdf")));
        assert!(!is_supported_extension(Path::new("no_extension")));
    }

    #[test]
    fn stage_file_produces_png_with_dimensions() {
        let src_dir = tempdir().expect("temp dir");
        let src = write_png(src_dir.path(), "shot.png", 32, 24);

        let mut stager = ImageStager::new().expect("stager");
        let staged = stager
            .stage_file(&src, &Config::default())
            .expect("stage should succeed");

        assert_eq!(staged.width, 32);
        assert_eq!(staged.height, 24);
        assert_eq!(staged.origin, ImageOrigin::File("shot.png".to_string()));
        assert!(staged.path.exists());
        assert_eq!(staged.path.extension().and_then(|e| e.to_str()), Some("png"));
    }

    #[test]
    fn stage_file_rejects_unsupported_extension() {
        let src_dir = tempdir().expect("temp dir");
        let src = src_dir.path().join("notes.txt");
        fs::write(&src, "not an image").expect("write file");

        let mut stager = ImageStager::new().expect("stager");
        match stager.stage_file(&src, &Config::default()) {
            Err(Error::Image(ImageError::UnsupportedFormat(ext))) => assert_eq!(ext, "txt"),
            other => panic!("expected UnsupportedFormat, got {:?}", other),
        }
    }

    #[test]
    fn stage_file_rejects_missing_file() {
        let mut stager = ImageStager::new().expect("stager");
        match stager.stage_file(Path::new("/nonexistent/shot.png"), &Config::default()) {
            Err(Error::Image(ImageError::NotFound(_))) => {}
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn stage_file_rejects_oversized_file() {
        let config = Config {
            images: ImagesConfig {
                max_file_size_mb: Some(0),
                ..ImagesConfig::default()
            },
            ..Config::default()
        };
        let src_dir = tempdir().expect("temp dir");
        let src = write_png(src_dir.path(), "shot.png", 16, 16);

        let mut stager = ImageStager::new().expect("stager");
        match stager.stage_file(&src, &config) {
            Err(Error::Image(ImageError::TooLarge(_))) => {}
            other => panic!("expected TooLarge, got {:?}", other),
        }
    }

    #[test]
    fn stage_file_rejects_excessive_dimensions() {
        let config = Config {
            images: ImagesConfig {
                max_dimension: Some(16),
                ..ImagesConfig::default()
            },
            ..Config::default()
        };
        let src_dir = tempdir().expect("temp dir");
        let src = write_png(src_dir.path(), "wide.png", 40, 8);

        let mut stager = ImageStager::new().expect("stager");
        match stager.stage_file(&src, &config) {
            Err(Error::Image(ImageError::Dimensions(40, 8))) => {}
            other => panic!("expected Dimensions, got {:?}", other),
        }
    }

    #[test]
    fn stage_file_rejects_corrupt_data() {
        let src_dir = tempdir().expect("temp dir");
        let src = src_dir.path().join("broken.png");
        fs::write(&src, b"definitely not a png").expect("write file");

        let mut stager = ImageStager::new().expect("stager");
        match stager.stage_file(&src, &Config::default()) {
            Err(Error::Image(ImageError::Decode(_))) => {}
            other => panic!("expected Decode, got {:?}", other),
        }
    }

    #[test]
    fn staged_files_get_sequential_names() {
        let src_dir = tempdir().expect("temp dir");
        let src = write_png(src_dir.path(), "shot.png", 8, 8);

        let mut stager = ImageStager::new().expect("stager");
        let first = stager.stage_file(&src, &Config::default()).expect("first");
        let second = stager.stage_file(&src, &Config::default()).expect("second");

        assert!(first.path.ends_with("feedback_000.png"));
        assert!(second.path.ends_with("feedback_001.png"));
    }

    #[test]
    fn discard_removes_the_staged_file() {
        let src_dir = tempdir().expect("temp dir");
        let src = write_png(src_dir.path(), "shot.png", 8, 8);

        let mut stager = ImageStager::new().expect("stager");
        let staged = stager.stage_file(&src, &Config::default()).expect("stage");
        assert!(staged.path.exists());

        stager.discard(&staged);
        assert!(!staged.path.exists());
    }

    #[test]
    fn drop_removes_staging_directory() {
        let src_dir = tempdir().expect("temp dir");
        let src = write_png(src_dir.path(), "shot.png", 8, 8);

        let staged = {
            let mut stager = ImageStager::new().expect("stager");
            stager.stage_file(&src, &Config::default()).expect("stage")
        };
        assert!(!staged.path.exists(), "drop should clean up staged files");
    }

    #[test]
    fn keep_preserves_staged_files_past_drop() {
        let src_dir = tempdir().expect("temp dir");
        let src = write_png(src_dir.path(), "shot.png", 8, 8);

        let mut stager = ImageStager::new().expect("stager");
        let staged = stager.stage_file(&src, &Config::default()).expect("stage");
        let kept_dir = stager.keep();

        assert!(staged.path.exists(), "keep should preserve staged files");
        fs::remove_dir_all(kept_dir).expect("cleanup");
    }

    #[test]
    fn thumbnail_fits_within_bounds_and_keeps_aspect() {
        let src_dir = tempdir().expect("temp dir");
        let src = write_png(src_dir.path(), "big.png", 400, 200);

        let bytes = thumbnail_png(&src).expect("thumbnail");
        let thumb = image_rs::load_from_memory(&bytes).expect("decode thumbnail");

        assert!(thumb.width() <= THUMBNAIL_WIDTH);
        assert!(thumb.height() <= THUMBNAIL_HEIGHT);
        // 2:1 input stays 2:1
        assert_eq!(thumb.width(), thumb.height() * 2);
    }
}
