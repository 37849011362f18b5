//! Pure Rust image backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `ImageReader::with_guessed_format` + `into_dimensions` (header only) |
//! | Decode (JPEG, PNG, GIF, WebP) | `ImageReader::decode` |
//! | Brightness | [`adjust_brightness`](super::adjust::adjust_brightness) |
//! | Encode → JPEG | `JpegEncoder::new_with_quality` |
//! | Encode → PNG | `PngEncoder::new_with_quality` |
//! | Encode → GIF, WebP | `DynamicImage::save` (codec defaults) |
//!
//! The image is fully decoded before the target file is opened for writing.
//! Opening truncates it, so a failure during encoding leaves a partial file.

use super::adjust::adjust_brightness;
use super::backend::{BackendError, Dimensions, ImageBackend, Identified};
use super::params::{EncodeSettings, MutateParams, PngCompression, Quality};
use crate::formats::AssetFormat;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::{ColorType, DynamicImage, ImageReader};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Open an image with its format sniffed from the contents, falling back to
/// the extension.
fn open_reader(path: &Path) -> Result<ImageReader<std::io::BufReader<File>>, BackendError> {
    Ok(ImageReader::open(path)?.with_guessed_format()?)
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    open_reader(path)?
        .decode()
        .map_err(|e| BackendError::Decode(format!("{}: {}", path.display(), e)))
}

/// Baseline JPEG carries no alpha and only 8-bit samples.
fn jpeg_compatible(img: DynamicImage) -> DynamicImage {
    match img.color() {
        ColorType::L8 | ColorType::Rgb8 => img,
        ColorType::L16 | ColorType::La8 | ColorType::La16 => {
            DynamicImage::ImageLuma8(img.to_luma8())
        }
        _ => DynamicImage::ImageRgb8(img.to_rgb8()),
    }
}

fn png_compression_type(compression: PngCompression) -> CompressionType {
    match compression {
        PngCompression::Best => CompressionType::Best,
        PngCompression::Default => CompressionType::Default,
        // image has no stored-only level; fastest is the closest
        PngCompression::BestSpeed | PngCompression::None => CompressionType::Fast,
    }
}

fn create_output(path: &Path) -> Result<BufWriter<File>, BackendError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(BackendError::CreateOutput)
}

fn save_jpeg(img: DynamicImage, path: &Path, quality: Quality) -> Result<(), BackendError> {
    let img = jpeg_compatible(img);
    let writer = create_output(path)?;
    let encoder = JpegEncoder::new_with_quality(writer, quality.value() as u8);
    img.write_with_encoder(encoder)
        .map_err(|e| BackendError::Encode(e.to_string()))
}

fn save_png(
    img: &DynamicImage,
    path: &Path,
    compression: PngCompression,
) -> Result<(), BackendError> {
    let writer = create_output(path)?;
    let encoder = PngEncoder::new_with_quality(
        writer,
        png_compression_type(compression),
        PngFilter::Adaptive,
    );
    img.write_with_encoder(encoder)
        .map_err(|e| BackendError::Encode(e.to_string()))
}

fn save_native(img: &DynamicImage, path: &Path, format: AssetFormat) -> Result<(), BackendError> {
    img.save_with_format(path, format.image_format())
        .map_err(|e| BackendError::Encode(e.to_string()))
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Identified, BackendError> {
        let reader = open_reader(path)?;
        let format = reader.format().and_then(AssetFormat::from_image_format);
        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| BackendError::Decode(format!("{}: {}", path.display(), e)))?;
        Ok(Identified {
            format,
            dimensions: Dimensions { width, height },
        })
    }

    fn mutate(&self, params: &MutateParams) -> Result<(), BackendError> {
        let mut img = load_image(&params.path)?;
        adjust_brightness(&mut img, params.brightness_percent);

        match params.settings {
            EncodeSettings::Jpeg { quality, .. } => save_jpeg(img, &params.path, quality),
            EncodeSettings::Png { compression, .. } => save_png(&img, &params.path, compression),
            EncodeSettings::Native => save_native(&img, &params.path, params.format),
        }
    }
}
