use std::path::Path;
use std::process::Command;

use image::{Rgba, RgbaImage};
use tempfile::tempdir;

fn write_png(path: &Path, w: u32, h: u32, color: Rgba<u8>) {
    RgbaImage::from_pixel(w, h, color).save(path).unwrap();
}

#[test]
fn grid_preview_writes_a_png() {
    let tmp = tempdir().unwrap();
    let a = tmp.path().join("a.png");
    let b = tmp.path().join("b.png");
    let out = tmp.path().join("grid.png");
    write_png(&a, 60, 40, Rgba([255, 0, 0, 255]));
    write_png(&b, 60, 40, Rgba([255, 0, 0, 255]));

    let status = Command::new(env!("CARGO_BIN_EXE_viewplane"))
        .arg(&a)
        .arg(&b)
        .args(["--mode", "grid", "--window", "300x300", "--out"])
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let img = image::open(&out).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (300, 300));
    // Margins around the single 250px column keep the grid clear color.
    assert_eq!(img.get_pixel(299, 5).0, [3, 3, 3, 255]);
    // Tile 0 center shows the image; its left edge carries the selection
    // border (item 0 is selected by default).
    assert_eq!(img.get_pixel(150, 150).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(21, 150).0, [255, 204, 26, 255]);
}

#[test]
fn one_image_defaults_to_single_view() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("photo.png");
    let out = tmp.path().join("single.png");
    write_png(&input, 100, 50, Rgba([255, 0, 0, 255]));

    let status = Command::new(env!("CARGO_BIN_EXE_viewplane"))
        .arg(&input)
        .args(["--window", "200x100", "--out"])
        .arg(&out)
        .status()
        .unwrap();
    assert!(status.success());

    let img = image::open(&out).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (200, 100));
    // Fit caps at 1:1, so the 100x50 image sits centered over black.
    assert_eq!(img.get_pixel(100, 50).0, [255, 0, 0, 255]);
    assert_eq!(img.get_pixel(5, 5).0, [0, 0, 0, 255]);
}

#[test]
fn out_of_range_selection_fails() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("photo.png");
    write_png(&input, 60, 40, Rgba([0, 255, 0, 255]));

    let status = Command::new(env!("CARGO_BIN_EXE_viewplane"))
        .arg(&input)
        .args(["--mode", "grid", "--selected", "9", "--out"])
        .arg(tmp.path().join("never.png"))
        .status()
        .unwrap();
    assert!(!status.success());
    assert!(!tmp.path().join("never.png").exists());
}
