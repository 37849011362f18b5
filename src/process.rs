//! Path dispatch and per-file processing.
//!
//! Given a path, decides whether it names a file or a directory and runs the
//! rewrite pipeline on every eligible file:
//!
//! ```text
//! checksum (before) → estimate → adjust + re-encode in place → checksum (after)
//! ```
//!
//! ## Directory Walks
//!
//! Directories are walked in file-name order with [`walkdir`], bounded by
//! [`RunConfig::max_depth`]: depth 0 visits only the root's own entries, depth
//! N descends N levels. Entries with unsupported extensions are skipped
//! silently. A file that fails to process, or a sub-directory that cannot be
//! read, is reported through the event sink and the walk moves on. Only a
//! failure to stat the root or to read the root directory aborts the run.
//!
//! ## Single Files
//!
//! A path naming a file is processed regardless of the depth setting. Here an
//! unsupported extension is an error, reported before the file is opened.
//!
//! ## Events
//!
//! Results are handed to a caller-supplied `FnMut(ProcessEvent)` as soon as
//! each file is done. This module never prints; see [`crate::output`].

use crate::checksum::file_checksum;
use crate::config::RunConfig;
use crate::formats::{AssetFormat, dotted_extension};
use crate::imaging::{BackendError, EncodeSettings, ImageBackend, RustBackend, alter_image};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use walkdir::WalkDir;

/// Which of the two checksum passes failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumStage {
    Original,
    New,
}

impl fmt::Display for ChecksumStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original => f.write_str("original"),
            Self::New => f.write_str("new"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("cannot access {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read directory: {0}")]
    ReadDir(#[source] walkdir::Error),
    #[error("unsupported file extension: {0}")]
    UnsupportedExtension(String),
    #[error("failed to calculate {stage} checksum: {source}")]
    Checksum {
        stage: ChecksumStage,
        source: std::io::Error,
    },
    #[error(transparent)]
    Imaging(#[from] BackendError),
}

/// Outcome of rewriting one file.
#[derive(Debug, Clone, PartialEq)]
pub struct FileReport {
    pub path: PathBuf,
    pub original_checksum: String,
    pub new_checksum: String,
    pub settings: EncodeSettings,
}

impl FileReport {
    pub fn changed(&self) -> bool {
        self.original_checksum != self.new_checksum
    }
}

/// Progress events emitted while processing.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    FileProcessed(FileReport),
    FileFailed { path: PathBuf, error: String },
    DirectoryFailed { path: PathBuf, error: String },
}

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Files rewritten successfully.
    pub processed: usize,
    /// Of those, files whose checksum actually changed.
    pub changed: usize,
    /// Files or directories that failed during a walk.
    pub failed: usize,
}

impl Summary {
    fn record(&mut self, report: &FileReport) {
        self.processed += 1;
        if report.changed() {
            self.changed += 1;
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} processed, {} changed, {} failed",
            self.processed, self.changed, self.failed
        )
    }
}

/// Process a file or directory with the production backend.
pub fn process_path(
    path: &Path,
    config: &RunConfig,
    on_event: &mut impl FnMut(ProcessEvent),
) -> Result<Summary, ProcessError> {
    process_path_with_backend(&RustBackend::new(), path, config, on_event)
}

/// Process a file or directory using a specific backend (allows testing with mock).
pub fn process_path_with_backend(
    backend: &impl ImageBackend,
    path: &Path,
    config: &RunConfig,
    on_event: &mut impl FnMut(ProcessEvent),
) -> Result<Summary, ProcessError> {
    let meta = std::fs::metadata(path).map_err(|source| ProcessError::Stat {
        path: path.to_path_buf(),
        source,
    })?;

    if meta.is_dir() {
        return process_directory(backend, path, config, on_event);
    }

    let report = process_file(backend, path)?;
    let mut summary = Summary::default();
    summary.record(&report);
    on_event(ProcessEvent::FileProcessed(report));
    Ok(summary)
}

/// Rewrite a single file named directly by the user.
pub fn process_file(backend: &impl ImageBackend, path: &Path) -> Result<FileReport, ProcessError> {
    let format = AssetFormat::from_path(path)
        .ok_or_else(|| ProcessError::UnsupportedExtension(dotted_extension(path)))?;
    process_asset(backend, path, format)
}

fn process_asset(
    backend: &impl ImageBackend,
    path: &Path,
    format: AssetFormat,
) -> Result<FileReport, ProcessError> {
    let original_checksum = file_checksum(path).map_err(|source| ProcessError::Checksum {
        stage: ChecksumStage::Original,
        source,
    })?;

    let settings = alter_image(backend, path, format)?;

    let new_checksum = file_checksum(path).map_err(|source| ProcessError::Checksum {
        stage: ChecksumStage::New,
        source,
    })?;

    Ok(FileReport {
        path: path.to_path_buf(),
        original_checksum,
        new_checksum,
        settings,
    })
}

/// Walk `root` up to the configured depth, rewriting every eligible file.
pub fn process_directory(
    backend: &impl ImageBackend,
    root: &Path,
    config: &RunConfig,
    on_event: &mut impl FnMut(ProcessEvent),
) -> Result<Summary, ProcessError> {
    let mut summary = Summary::default();
    let walker = WalkDir::new(root)
        .min_depth(1)
        .max_depth(config.walk_depth())
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => return Err(ProcessError::ReadDir(err)),
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                debug!(path = %path.display(), error = %err, "directory unreadable, skipping");
                summary.failed += 1;
                on_event(ProcessEvent::DirectoryFailed {
                    path,
                    error: ProcessError::ReadDir(err).to_string(),
                });
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }
        let path = entry.path();
        let Some(format) = AssetFormat::from_path(path) else {
            debug!(path = %path.display(), "unsupported extension, skipping");
            continue;
        };

        match process_asset(backend, path, format) {
            Ok(report) => {
                summary.record(&report);
                on_event(ProcessEvent::FileProcessed(report));
            }
            Err(err) => {
                debug!(path = %path.display(), error = %err, "file failed, continuing walk");
                summary.failed += 1;
                on_event(ProcessEvent::FileFailed {
                    path: path.to_path_buf(),
                    error: err.to_string(),
                });
            }
        }
    }

    Ok(summary)
}
