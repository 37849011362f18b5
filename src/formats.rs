//! Extension-based eligibility for image assets.
//!
//! A file is eligible when its lower-cased extension appears in
//! [`SUPPORTED_EXTENSIONS`]. The matching [`AssetFormat`] selects the
//! re-encoding branch, so output format always follows the input extension:
//!
//! - `photo.JPG` → [`AssetFormat::Jpeg`]
//! - `icon.png` → [`AssetFormat::Png`]
//! - `notes.txt` → not eligible

use image::ImageFormat;
use std::fmt;
use std::path::Path;

/// Image formats the tool knows how to decode and write back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFormat {
    Jpeg,
    Png,
    Gif,
    WebP,
}

/// Recognized extensions, lower-case and without the leading dot.
pub const SUPPORTED_EXTENSIONS: &[(&str, AssetFormat)] = &[
    ("jpg", AssetFormat::Jpeg),
    ("jpeg", AssetFormat::Jpeg),
    ("png", AssetFormat::Png),
    ("gif", AssetFormat::Gif),
    ("webp", AssetFormat::WebP),
];

impl AssetFormat {
    /// Look up the format for a path by its extension, ignoring case.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_string_lossy().to_lowercase();
        SUPPORTED_EXTENSIONS
            .iter()
            .find(|(candidate, _)| *candidate == ext)
            .map(|(_, format)| *format)
    }

    /// Map a sniffed codec format back onto an asset format.
    pub fn from_image_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Jpeg => Some(Self::Jpeg),
            ImageFormat::Png => Some(Self::Png),
            ImageFormat::Gif => Some(Self::Gif),
            ImageFormat::WebP => Some(Self::WebP),
            _ => None,
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Png => ImageFormat::Png,
            Self::Gif => ImageFormat::Gif,
            Self::WebP => ImageFormat::WebP,
        }
    }
}

impl fmt::Display for AssetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::Gif => "GIF",
            Self::WebP => "WebP",
        };
        f.write_str(label)
    }
}

/// Lower-cased extension with its leading dot (`".jpg"`), or `""` when the
/// path has none. Used in user-facing messages.
pub fn dotted_extension(path: &Path) -> String {
    path.extension()
        .map(|e| format!(".{}", e.to_string_lossy().to_lowercase()))
        .unwrap_or_default()
}
