//! High-level image operations.
//!
//! These functions combine the pure lookup tables in
//! [`calculations`](super::calculations) with file metadata and backend
//! identification. The estimators never fail: when a file cannot be measured
//! they fall back to a fixed default, because the estimate only picks an
//! encode parameter that differs from the original.

use super::backend::{BackendError, ImageBackend, Identified};
use super::calculations::{
    DEFAULT_JPEG_QUALITY, estimate_compression_from_size, estimate_quality_from_density,
    perturb_quality, png_rewrite_compression,
};
use super::params::{BRIGHTNESS_PERCENT, EncodeSettings, MutateParams, PngCompression, Quality};
use crate::formats::AssetFormat;
use std::path::Path;
use tracing::debug;

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Estimate the quality a JPEG was saved at from its bytes-per-pixel density.
pub fn estimate_jpeg_quality(backend: &impl ImageBackend, path: &Path) -> Quality {
    let file_size = match std::fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "stat failed, using default JPEG quality");
            return Quality::new(DEFAULT_JPEG_QUALITY);
        }
    };

    match backend.identify(path) {
        Ok(Identified {
            format: Some(AssetFormat::Jpeg),
            dimensions,
        }) => estimate_quality_from_density(file_size, dimensions.width, dimensions.height),
        Ok(Identified { format, .. }) => {
            debug!(path = %path.display(), ?format, "not a JPEG stream, using default quality");
            Quality::new(DEFAULT_JPEG_QUALITY)
        }
        Err(e) => {
            debug!(path = %path.display(), error = %e, "identify failed, using default quality");
            Quality::new(DEFAULT_JPEG_QUALITY)
        }
    }
}

/// Estimate the compression level a PNG was saved at from its size on disk.
pub fn estimate_png_compression(path: &Path) -> PngCompression {
    match std::fs::metadata(path) {
        Ok(meta) => estimate_compression_from_size(meta.len()),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "stat failed, using default compression");
            PngCompression::Default
        }
    }
}

/// Decide the encode parameters for one file without touching its pixels.
pub fn plan_mutation(
    backend: &impl ImageBackend,
    path: &Path,
    format: AssetFormat,
) -> MutateParams {
    let settings = match format {
        AssetFormat::Jpeg => {
            let estimated = estimate_jpeg_quality(backend, path);
            EncodeSettings::Jpeg {
                estimated,
                quality: perturb_quality(estimated),
            }
        }
        AssetFormat::Png => {
            let estimated = estimate_png_compression(path);
            EncodeSettings::Png {
                estimated,
                compression: png_rewrite_compression(estimated),
            }
        }
        AssetFormat::Gif | AssetFormat::WebP => EncodeSettings::Native,
    };
    debug!(path = %path.display(), %format, ?settings, "planned rewrite");

    MutateParams {
        path: path.to_path_buf(),
        format,
        brightness_percent: BRIGHTNESS_PERCENT,
        settings,
    }
}

/// Plan and execute the in-place rewrite of one file.
pub fn alter_image(
    backend: &impl ImageBackend,
    path: &Path,
    format: AssetFormat,
) -> Result<EncodeSettings> {
    let params = plan_mutation(backend, path, format);
    backend.mutate(&params)?;
    Ok(params.settings)
}
