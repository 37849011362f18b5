//! Image processing: estimate, adjust, re-encode.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::ImageReader` header sniffing |
//! | **Estimate** | step tables in `calculations` |
//! | **Brightness** | per-channel level shift with carried remainder |
//! | **Re-encode** | `image` JPEG/PNG encoders, default save for GIF/WebP |
//!
//! The module is split into:
//! - **Calculations**: Pure lookup tables and parameter nudging (unit testable)
//! - **Parameters**: Data structures describing a rewrite
//! - **Adjust**: In-memory brightness shift
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

mod adjust;
pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use adjust::adjust_brightness;
pub use backend::{BackendError, Dimensions, ImageBackend, Identified};
pub use calculations::{
    estimate_compression_from_size, estimate_quality_from_density, perturb_quality,
};
pub use operations::{alter_image, estimate_jpeg_quality, estimate_png_compression, plan_mutation};
pub use params::{BRIGHTNESS_PERCENT, EncodeSettings, MutateParams, PngCompression, Quality};
pub use rust_backend::RustBackend;
