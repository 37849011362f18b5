//! # Alternate Assets
//!
//! Rewrites image files with an imperceptible change so their content hash
//! changes while they look the same. Useful when a cache, CDN, or asset
//! pipeline keys on file checksums and a fresh copy has to be forced without
//! touching the artwork.
//!
//! # Pipeline
//!
//! Every eligible file goes through the same steps:
//!
//! ```text
//! 1. Checksum   MD5 of the file as it is on disk
//! 2. Estimate   guess the original JPEG quality / PNG compression
//! 3. Adjust     +0.1% brightness on every colour channel
//! 4. Encode     re-encode with a nudged parameter, overwriting the file
//! 5. Checksum   MD5 again, report whether it moved
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`process`] | Path dispatch, bounded directory walk, per-file pipeline |
//! | [`imaging`] | Estimation tables, brightness shift, `image`-crate backend |
//! | [`checksum`] | Streaming MD5 of file contents |
//! | [`formats`] | Extension table deciding which files are eligible |
//! | [`config`] | Read-only run settings passed down from the CLI |
//! | [`output`] | Report line formatting for stdout and stderr |
//!
//! # Design Decisions
//!
//! ## In-Place Overwrite
//!
//! Files are rewritten at their original path. The image is fully decoded in
//! memory first, but the write itself truncates the original, so an
//! interrupted encode loses the file. There is no temp-file-and-rename step;
//! tools downstream see the same inode and path they had before.
//!
//! ## Heuristics as Tables
//!
//! The JPEG quality and PNG compression estimates are ordered
//! `(threshold, value)` tables with a single first-match lookup. They only
//! need to be plausible: the estimate is used to pick an encode parameter that
//! differs from the original, not to recover the original.
//!
//! ## PNG Always Encodes at Best
//!
//! JPEG nudges its estimate by one quality step. PNG estimates a compression
//! level too, but always writes at the strongest level regardless. The
//! estimate is still reported in verbose output.
//!
//! ## No Global State
//!
//! Depth and verbosity travel in a [`config::RunConfig`] value. Per-file
//! results flow out through an event callback, so the walk itself can be
//! driven from tests with a mock backend and no stdout capture.

pub mod checksum;
pub mod config;
pub mod formats;
pub mod imaging;
pub mod output;
pub mod process;

#[cfg(test)]
pub(crate) mod test_helpers;
