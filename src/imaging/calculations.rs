//! Pure lookup functions behind the format estimator.
//!
//! All functions here are pure and testable without any I/O or images. The
//! heuristics are ordered `(threshold, value)` tables evaluated by
//! [`step_lookup`]: the first row whose threshold is strictly greater than the
//! input wins, and inputs past the last row get the ceiling value.

use super::params::{PngCompression, Quality};

/// Bytes-per-pixel → estimated JPEG quality.
pub const JPEG_QUALITY_STEPS: &[(f64, u32)] = &[(0.5, 60), (0.75, 70), (1.0, 80), (1.5, 90)];

/// Estimate for files denser than the last JPEG step.
pub const JPEG_QUALITY_CEILING: u32 = 95;

/// Estimate used when the file cannot be measured as a JPEG.
pub const DEFAULT_JPEG_QUALITY: u32 = 75;

/// File size in bytes → estimated PNG compression level.
pub const PNG_COMPRESSION_STEPS: &[(u64, PngCompression)] = &[
    (10 * 1024, PngCompression::None),
    (100 * 1024, PngCompression::BestSpeed),
    (1024 * 1024, PngCompression::Default),
];

/// Estimate for PNG files of 1 MiB and above.
pub const PNG_COMPRESSION_CEILING: PngCompression = PngCompression::Best;

/// First-match-ascending lookup over a step table.
pub fn step_lookup<T: PartialOrd, V: Copy>(table: &[(T, V)], input: T, ceiling: V) -> V {
    table
        .iter()
        .find(|(threshold, _)| input < *threshold)
        .map(|(_, value)| *value)
        .unwrap_or(ceiling)
}

/// Estimate JPEG quality from compressed size and pixel dimensions.
///
/// # Examples
/// ```
/// # use alternate_assets::imaging::estimate_quality_from_density;
/// // 100x100 image stored in 4 KB → 0.4 bytes/pixel → quality 60
/// assert_eq!(estimate_quality_from_density(4_000, 100, 100).value(), 60);
/// ```
pub fn estimate_quality_from_density(file_size: u64, width: u32, height: u32) -> Quality {
    let pixels = u64::from(width) * u64::from(height);
    if pixels == 0 {
        return Quality::new(DEFAULT_JPEG_QUALITY);
    }
    let bytes_per_pixel = file_size as f64 / pixels as f64;
    Quality::new(step_lookup(
        JPEG_QUALITY_STEPS,
        bytes_per_pixel,
        JPEG_QUALITY_CEILING,
    ))
}

/// Estimate PNG compression level from raw file size.
pub fn estimate_compression_from_size(file_size: u64) -> PngCompression {
    step_lookup(PNG_COMPRESSION_STEPS, file_size, PNG_COMPRESSION_CEILING)
}

/// Pick a JPEG quality one step away from the estimate.
///
/// High estimates step down, everything else steps up, so the rewrite never
/// reuses the (estimated) original setting.
pub fn perturb_quality(estimated: Quality) -> Quality {
    if estimated.value() > 90 {
        Quality::new(estimated.value() - 1)
    } else {
        Quality::new(estimated.value() + 1)
    }
}

/// PNG rewrites always use the strongest compression, whatever the estimate.
pub fn png_rewrite_compression(_estimated: PngCompression) -> PngCompression {
    PngCompression::Best
}
