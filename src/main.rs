use alternate_assets::config::RunConfig;
use alternate_assets::{output, process};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    let describe = env!("GIT_DESCRIBE");
    if on_tag == "true" || describe.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        // Leaked once at startup
        Box::leak(format!("{} ({describe})", env!("CARGO_PKG_VERSION")).into_boxed_str())
    }
}

#[derive(Parser)]
#[command(name = "alternate-assets")]
#[command(
    about = "Slightly alters image assets to change their checksums while keeping visual changes imperceptible"
)]
#[command(long_about = "\
Slightly alters image assets to change their checksums while keeping visual
changes imperceptible.

Each JPEG, PNG, GIF or WebP file is decoded, brightened by 0.1%, and written
back over the original with a slightly different encoder setting:

  .jpg .jpeg   quality estimated from bytes per pixel, then nudged by one
  .png         re-encoded at best compression
  .gif .webp   re-encoded with codec defaults

Files are overwritten in place. Keep a copy if you need the originals.

Directories are processed entry by entry; --recursive sets how many levels
below the given directory are visited (0 = only its own files).")]
#[command(version = version_string())]
struct Cli {
    /// Image file or directory to process
    path: PathBuf,

    /// Process directories recursively up to this depth
    #[arg(short, long, value_name = "DEPTH", default_value_t = 0)]
    recursive: usize,

    /// Display checksums and encoder settings for every file
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = RunConfig::new(cli.recursive, cli.verbose);
    init_tracing(&config);

    let mut on_event = |event: process::ProcessEvent| output::print_event(&event, config.verbose);
    match process::process_path(&cli.path, &config, &mut on_event) {
        Ok(summary) => {
            tracing::info!(path = %cli.path.display(), %summary, "run complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", output::format_fatal(&err));
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr so stdout carries only report lines.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` selects `info`.
fn init_tracing(config: &RunConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_log_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
