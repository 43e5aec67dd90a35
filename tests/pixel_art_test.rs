//! Pixel-art conversion, file in to file out.

mod common;

use common::*;
use db32art::error::RenderError;
use db32art::models::AppConfig;
use db32_pixel::{ConfigError, MAX_OUTPUT_EDGE};
use db32art::services::Converter;
use pretty_assertions::assert_eq;

fn converter(max_size: i64, scale: i64, border: Option<i64>) -> Converter {
    let mut config = AppConfig::default();
    config.override_pixel_art(Some(max_size), Some(scale), border, border.is_none());
    Converter::new(config)
}

#[test]
fn test_red_reference_image() {
    let dir = scratch();
    let input = solid_png(dir.path(), "red.png", 256, 128, RED);
    let output = dir.path().join("out.png");

    let summary = converter(64, 2, None).pixel_art(&input, &output).unwrap();

    assert_eq!(summary.input_dimensions, (256, 128));
    assert_eq!(summary.output_dimensions, (128, 64));
    assert_dimensions(&output, (128, 64));
    assert_uniform(&output, DB32_RED);
}

#[test]
fn test_default_settings_frame_the_image() {
    let dir = scratch();
    let input = rainbow_png(dir.path(), "rainbow.png", 300, 150);
    let output = dir.path().join("out.png");

    let summary = Converter::new(AppConfig::default())
        .pixel_art(&input, &output)
        .unwrap();

    // 128x64 body, 4x upscale, 20px margin
    assert_eq!(summary.output_dimensions, (552, 296));
    assert_dimensions(&output, (552, 296));
    assert_db32_only(&output);

    let img = read_png(&output);
    assert_eq!(img.get_pixel(0, 0).0, [255, 255, 255]);
    assert_eq!(img.get_pixel(4, 4).0, [91, 110, 225]);
    assert_eq!(img.get_pixel(10, 10).0, [0, 0, 0]);
}

#[test]
fn test_zero_border_adds_no_margin() {
    let dir = scratch();
    let input = rainbow_png(dir.path(), "rainbow.png", 40, 30);
    let output = dir.path().join("out.png");

    converter(128, 1, Some(0)).pixel_art(&input, &output).unwrap();

    assert_dimensions(&output, (40, 30));
    assert_db32_only(&output);
}

#[test]
fn test_small_image_is_not_downscaled() {
    let dir = scratch();
    let input = solid_png(dir.path(), "small.png", 10, 6, RED);
    let output = dir.path().join("out.png");

    converter(128, 3, None).pixel_art(&input, &output).unwrap();

    assert_dimensions(&output, (30, 18));
    assert_uniform(&output, DB32_RED);
}

#[test]
fn test_invalid_config_writes_nothing() {
    let dir = scratch();
    let input = solid_png(dir.path(), "red.png", 16, 16, RED);
    let output = dir.path().join("out.png");

    let err = converter(-1, 2, None)
        .pixel_art(&input, &output)
        .unwrap_err();

    assert!(matches!(err, RenderError::InvalidConfig(_)));
    assert!(!output.exists());
}

#[test]
fn test_oversized_output_is_rejected() {
    let dir = scratch();
    let input = solid_png(dir.path(), "red.png", 16, 16, RED);
    let output = dir.path().join("out.png");

    let err = converter(128, i64::MAX, None)
        .pixel_art(&input, &output)
        .unwrap_err();
    assert!(matches!(
        err,
        RenderError::InvalidConfig(ConfigError::OutputTooLarge { limit: MAX_OUTPUT_EDGE })
    ));
    assert!(!output.exists());

    let err = converter(128, 1, Some(i64::MAX))
        .pixel_art(&input, &output)
        .unwrap_err();
    assert!(matches!(
        err,
        RenderError::InvalidConfig(ConfigError::OutputTooLarge { .. })
    ));
    assert!(!output.exists());
}

#[test]
fn test_custom_frame_colors() {
    let dir = scratch();
    let input = solid_png(dir.path(), "red.png", 16, 16, RED);
    let output = dir.path().join("out.png");

    let mut config = AppConfig::default();
    config.override_pixel_art(None, Some(1), Some(10), false);
    config.pixel_art.frame_colors = vec!["#FBF236".to_string()];
    Converter::new(config).pixel_art(&input, &output).unwrap();

    // one 2px stroke of yellow, then black up to the body
    assert_dimensions(&output, (36, 36));
    let img = read_png(&output);
    assert_eq!(img.get_pixel(0, 0).0, [251, 242, 54]);
    assert_eq!(img.get_pixel(1, 1).0, [251, 242, 54]);
    assert_eq!(img.get_pixel(2, 2).0, [0, 0, 0]);
    assert_eq!(img.get_pixel(10, 10).0, DB32_RED);
}

#[test]
fn test_undecodable_input_writes_nothing() {
    let dir = scratch();
    let input = dir.path().join("not-an-image.png");
    std::fs::write(&input, "plain text").unwrap();
    let output = dir.path().join("out.png");

    let err = Converter::new(AppConfig::default())
        .pixel_art(&input, &output)
        .unwrap_err();

    assert!(matches!(err, RenderError::Decode { .. }));
    assert!(!output.exists());
}
