//! End-to-end tests that run the compiled binary.
//!
//! Each test builds a throwaway directory of real images, invokes
//! `alternate-assets` on it, and checks exit status, stdout and stderr.

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_alternate-assets");

fn write_image(path: &Path, format: ImageFormat) {
    let img = RgbImage::from_fn(48, 32, |x, y| Rgb([(x * 4) as u8 + 10, (y * 6) as u8 + 10, 90]));
    let img = match format {
        ImageFormat::Gif => DynamicImage::ImageRgba8(DynamicImage::ImageRgb8(img).to_rgba8()),
        _ => DynamicImage::ImageRgb8(img),
    };
    img.save_with_format(path, format).unwrap();
}

fn run(args: &[&str]) -> Output {
    Command::new(BIN)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).to_string()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).to_string()
}

#[test]
fn directory_processes_images_and_skips_text() {
    let tmp = TempDir::new().unwrap();
    write_image(&tmp.path().join("a.jpg"), ImageFormat::Jpeg);
    write_image(&tmp.path().join("b.png"), ImageFormat::Png);
    std::fs::write(tmp.path().join("c.txt"), "leave me alone").unwrap();

    let out = run(&[tmp.path().to_str().unwrap()]);

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2, "{text}");
    assert!(lines[0].contains("a.jpg") && lines[0].ends_with('✓'), "{text}");
    assert!(lines[1].contains("b.png") && lines[1].ends_with('✓'), "{text}");
    assert!(!text.contains("c.txt"));
    assert_eq!(
        std::fs::read_to_string(tmp.path().join("c.txt")).unwrap(),
        "leave me alone"
    );
}

#[test]
fn unsupported_single_file_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("c.txt");
    std::fs::write(&path, "leave me alone").unwrap();

    let out = run(&[path.to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(1));
    assert!(
        stderr(&out).contains("unsupported file extension: .txt"),
        "{}",
        stderr(&out)
    );
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "leave me alone");
}

#[test]
fn missing_path_fails() {
    let tmp = TempDir::new().unwrap();
    let out = run(&[tmp.path().join("missing.png").to_str().unwrap()]);

    assert_eq!(out.status.code(), Some(1));
    assert!(stderr(&out).starts_with("Error: "));
}

#[test]
fn verbose_prints_both_checksums() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("hero.jpg");
    write_image(&path, ImageFormat::Jpeg);

    let out = run(&[path.to_str().unwrap(), "--verbose"]);

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("JPEG quality adjustment: "), "{text}");
    assert!(text.contains("Original checksum: "), "{text}");
    assert!(text.contains("New checksum: "), "{text}");
    assert!(text.contains("Checksum changed: true"), "{text}");

    let checksum = |prefix: &str| {
        text.lines()
            .find_map(|l| l.strip_prefix(prefix))
            .map(str::to_string)
            .unwrap()
    };
    let original = checksum("Original checksum: ");
    let new = checksum("New checksum: ");
    assert_eq!(original.len(), 32);
    assert_eq!(new.len(), 32);
    assert_ne!(original, new);
}

#[test]
fn recursive_flag_bounds_the_walk() {
    let tmp = TempDir::new().unwrap();
    let nested = tmp.path().join("one").join("two");
    std::fs::create_dir_all(&nested).unwrap();
    write_image(&tmp.path().join("top.png"), ImageFormat::Png);
    write_image(&tmp.path().join("one").join("mid.png"), ImageFormat::Png);
    write_image(&nested.join("deep.png"), ImageFormat::Png);
    let deep_before = std::fs::read(nested.join("deep.png")).unwrap();

    let out = run(&[tmp.path().to_str().unwrap(), "-r", "1"]);

    assert!(out.status.success(), "stderr: {}", stderr(&out));
    let text = stdout(&out);
    assert!(text.contains("top.png"));
    assert!(text.contains("mid.png"));
    assert!(!text.contains("deep.png"));
    assert_eq!(std::fs::read(nested.join("deep.png")).unwrap(), deep_before);
}

#[test]
fn corrupt_file_in_walk_keeps_exit_zero() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("a.jpg"), b"garbage").unwrap();
    write_image(&tmp.path().join("b.gif"), ImageFormat::Gif);

    let out = run(&[tmp.path().to_str().unwrap()]);

    assert!(out.status.success());
    assert!(stderr(&out).contains("Error processing file"), "{}", stderr(&out));
    assert!(stderr(&out).contains("a.jpg"));
    assert!(stdout(&out).contains("b.gif"));
}

#[test]
fn negative_depth_is_a_usage_error() {
    let tmp = TempDir::new().unwrap();
    let out = run(&[tmp.path().to_str().unwrap(), "--recursive", "-1"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn version_flag_prints_version() {
    let out = run(&["--version"]);
    assert!(out.status.success());
    assert!(stdout(&out).contains(env!("CARGO_PKG_VERSION")));
}
