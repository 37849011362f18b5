//! Shared test utilities for the alternate-assets test suite.
//!
//! Provides writers for small but real sample images in every supported
//! format, a tree builder for directory-walk fixtures, and a collecting event
//! sink for the dispatcher.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! write_tree(tmp.path(), &["a.jpg", "sub/b.png", "c.txt"]);
//! write_jpeg(&tmp.path().join("real.jpg"), 64, 48);
//! ```

use image::{DynamicImage, ImageEncoder, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

pub use tempfile::TempDir;

use crate::process::ProcessEvent;

// =========================================================================
// Sample images
// =========================================================================

/// Gradient that never saturates, so a brightness shift always lands.
fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 3 % 200) as u8 + 20, (y * 5 % 200) as u8 + 20, 128])
    })
}

/// Write a baseline JPEG at the encoder's default quality.
pub fn write_jpeg(path: &Path, width: u32, height: u32) {
    let img = gradient(width, height);
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Write an RGB PNG with default compression.
pub fn write_png(path: &Path, width: u32, height: u32) {
    DynamicImage::ImageRgb8(gradient(width, height))
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

/// Write a half-transparent RGBA PNG.
pub fn write_rgba_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 7 % 200) as u8 + 20, (y * 7 % 200) as u8 + 20, 90, 128])
    });
    DynamicImage::ImageRgba8(img)
        .save_with_format(path, image::ImageFormat::Png)
        .unwrap();
}

/// Write a single-frame GIF.
pub fn write_gif(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 8 % 200) as u8 + 20, (y * 8 % 200) as u8 + 20, 60, 255])
    });
    DynamicImage::ImageRgba8(img)
        .save_with_format(path, image::ImageFormat::Gif)
        .unwrap();
}

/// Write a lossless WebP.
pub fn write_webp(path: &Path, width: u32, height: u32) {
    DynamicImage::ImageRgb8(gradient(width, height))
        .save_with_format(path, image::ImageFormat::WebP)
        .unwrap();
}

/// Write a real image for any supported extension in `path`.
pub fn write_sample(path: &Path) {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => write_jpeg(path, 64, 48),
        "png" => write_png(path, 64, 48),
        "gif" => write_gif(path, 32, 32),
        "webp" => write_webp(path, 32, 32),
        other => panic!("no sample writer for '.{other}'"),
    }
}

// =========================================================================
// Directory fixtures
// =========================================================================

/// Create every relative path under `root` with placeholder bytes, creating
/// parent directories as needed.
pub fn write_tree(root: &Path, files: &[&str]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|rel| {
            let path = root.join(rel);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(&path, format!("placeholder for {rel}")).unwrap();
            path
        })
        .collect()
}

/// Paths relative to `root`, `/`-separated and sorted, for stable asserts.
pub fn relative_sorted(root: &Path, paths: &[String]) -> Vec<String> {
    let mut rel: Vec<String> = paths
        .iter()
        .map(|p| {
            Path::new(p)
                .strip_prefix(root)
                .unwrap_or_else(|_| panic!("{p} is not under {}", root.display()))
                .components()
                .map(|c| c.as_os_str().to_string_lossy().to_string())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect();
    rel.sort();
    rel
}

// =========================================================================
// Event collection
// =========================================================================

/// Collects dispatcher events for later assertions.
#[derive(Default)]
pub struct EventLog {
    pub events: Vec<ProcessEvent>,
}

impl EventLog {
    pub fn sink(&mut self) -> impl FnMut(ProcessEvent) + '_ {
        move |event| self.events.push(event)
    }

    /// Paths of files that were rewritten, in emission order.
    pub fn processed_paths(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ProcessEvent::FileProcessed(report) => {
                    Some(report.path.to_string_lossy().to_string())
                }
                _ => None,
            })
            .collect()
    }

    /// Paths of entries reported as failed, in emission order.
    pub fn failed_paths(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|e| match e {
                ProcessEvent::FileFailed { path, .. }
                | ProcessEvent::DirectoryFailed { path, .. } => {
                    Some(path.to_string_lossy().to_string())
                }
                _ => None,
            })
            .collect()
    }
}
