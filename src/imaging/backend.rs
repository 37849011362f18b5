//! Image processing backend trait and shared types.
//!
//! The [`ImageBackend`] trait defines the two operations every backend must
//! support: identify (header-only format and dimensions) and mutate (decode,
//! shift brightness, re-encode in place).
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests swap in a recording mock so dispatcher logic can be checked
//! without encoding real images.

use super::params::MutateParams;
use crate::formats::AssetFormat;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode image: {0}")]
    Decode(String),
    #[error("failed to create output file: {0}")]
    CreateOutput(std::io::Error),
    #[error("failed to save image: {0}")]
    Encode(String),
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Result of an identify operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identified {
    /// Format sniffed from the file contents, if it is one we handle.
    pub format: Option<AssetFormat>,
    pub dimensions: Dimensions,
}

/// Trait for image processing backends.
pub trait ImageBackend {
    /// Read format and dimensions from the file header.
    fn identify(&self, path: &Path) -> Result<Identified, BackendError>;

    /// Decode `params.path`, shift its brightness, and overwrite it with the
    /// re-encoded result.
    fn mutate(&self, params: &MutateParams) -> Result<(), BackendError>;
}
