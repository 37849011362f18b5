//! Parameter types for image operations.
//!
//! These structs describe *what* to do to a file, not *how*. They are the
//! interface between the [`operations`](super::operations) module (which
//! estimates the original encoding and decides the new one) and the
//! [`backend`](super::backend) (which does the pixel work and writes the file).
//!
//! ## Types
//!
//! - [`Quality`]: JPEG encoding quality (1–100). Clamped on construction.
//! - [`PngCompression`]: PNG compression level, from none to best.
//! - [`EncodeSettings`]: estimated and chosen parameters for one file.
//! - [`MutateParams`]: full specification for rewriting one file in place.

use crate::formats::AssetFormat;
use std::fmt;
use std::path::PathBuf;

/// Brightness shift applied to every file, in percent of full scale.
pub const BRIGHTNESS_PERCENT: f32 = 0.1;

/// Quality setting for lossy JPEG encoding (1-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Quality(pub u32);

impl Quality {
    pub fn new(value: u32) -> Self {
        Self(value.clamp(1, 100))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self(75)
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// PNG compression level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PngCompression {
    None,
    BestSpeed,
    #[default]
    Default,
    Best,
}

impl fmt::Display for PngCompression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::None => "none",
            Self::BestSpeed => "best-speed",
            Self::Default => "default",
            Self::Best => "best",
        };
        f.write_str(label)
    }
}

/// Encoder parameters for one file: what the estimator guessed the original
/// used, and what the rewrite will use instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeSettings {
    Jpeg {
        estimated: Quality,
        quality: Quality,
    },
    Png {
        estimated: PngCompression,
        compression: PngCompression,
    },
    /// Codec defaults for the extension (GIF, WebP).
    Native,
}

/// Parameters for rewriting a single file in place.
#[derive(Debug, Clone, PartialEq)]
pub struct MutateParams {
    /// Read from and written back to.
    pub path: PathBuf,
    pub format: AssetFormat,
    pub brightness_percent: f32,
    pub settings: EncodeSettings,
}
