//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Default
//!
//! One line per rewritten file, marked ✓ when its checksum changed and ✗ when
//! it did not:
//!
//! ```text
//! Processed: assets/logo.png ✓
//! Processed: assets/hero.jpg ✓
//! ```
//!
//! ## Verbose
//!
//! The encode decision first (JPEG and PNG only), then both checksums:
//!
//! ```text
//! JPEG quality adjustment: 80 → 81
//! Processed: assets/hero.jpg
//! Original checksum: 6f1ed002ab5595859014ebf0951522d9
//! New checksum: 0c4e3a1b3e1cf0a8ed1a4bd1b3d0b7a2
//! Checksum changed: true
//!
//! ```
//!
//! ## Failures
//!
//! Walk failures go to stderr, one line each, and the walk continues:
//!
//! ```text
//! Error processing file assets/broken.jpg: failed to decode image: ...
//! Error processing directory assets/locked: failed to read directory: ...
//! ```
//!
//! # Architecture
//!
//! [`format_event`] is pure and returns the lines for one event together with
//! the stream they belong on. [`print_event`] writes them out.

use crate::imaging::EncodeSettings;
use crate::process::{FileReport, ProcessEvent};

/// Marker for a file whose checksum changed.
pub const CHANGED_MARK: &str = "✓";
/// Marker for a file whose checksum stayed the same.
pub const UNCHANGED_MARK: &str = "✗";

/// Destination stream for formatted lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Describe the encode decision, if the format has one.
fn settings_line(settings: &EncodeSettings) -> Option<String> {
    match settings {
        EncodeSettings::Jpeg { estimated, quality } => {
            Some(format!("JPEG quality adjustment: {} → {}", estimated, quality))
        }
        EncodeSettings::Png {
            estimated,
            compression,
        } => Some(format!("PNG compression: {} → {}", estimated, compression)),
        EncodeSettings::Native => None,
    }
}

/// Format the report for one rewritten file.
pub fn format_file_report(report: &FileReport, verbose: bool) -> Vec<String> {
    let path = report.path.display();
    if !verbose {
        let mark = if report.changed() {
            CHANGED_MARK
        } else {
            UNCHANGED_MARK
        };
        return vec![format!("Processed: {} {}", path, mark)];
    }

    let mut lines = Vec::new();
    lines.extend(settings_line(&report.settings));
    lines.push(format!("Processed: {}", path));
    lines.push(format!("Original checksum: {}", report.original_checksum));
    lines.push(format!("New checksum: {}", report.new_checksum));
    lines.push(format!("Checksum changed: {}", report.changed()));
    lines.push(String::new());
    lines
}

/// Format any process event and pick its stream.
pub fn format_event(event: &ProcessEvent, verbose: bool) -> (Stream, Vec<String>) {
    match event {
        ProcessEvent::FileProcessed(report) => {
            (Stream::Stdout, format_file_report(report, verbose))
        }
        ProcessEvent::FileFailed { path, error } => (
            Stream::Stderr,
            vec![format!("Error processing file {}: {}", path.display(), error)],
        ),
        ProcessEvent::DirectoryFailed { path, error } => (
            Stream::Stderr,
            vec![format!(
                "Error processing directory {}: {}",
                path.display(),
                error
            )],
        ),
    }
}

/// Print one event to stdout or stderr.
pub fn print_event(event: &ProcessEvent, verbose: bool) {
    let (stream, lines) = format_event(event, verbose);
    for line in lines {
        match stream {
            Stream::Stdout => println!("{}", line),
            Stream::Stderr => eprintln!("{}", line),
        }
    }
}

/// Format a run-ending error.
pub fn format_fatal(error: &dyn std::error::Error) -> String {
    format!("Error: {}", error)
}
