//! File round-trip tests for [`Image`].
//!
//! Fixtures are written as PNG into a scratch directory, decoded with
//! [`Image::load`], and re-encoded with [`Image::save`].

#![cfg(feature = "image-io")]

use std::path::{Path, PathBuf};

use image::ExtendedColorType;
use rstest::rstest;

use glkit_core::texture::{BufferState, Image, ImageError, PixelFormat};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Write a PNG fixture where every byte holds its own offset.
fn write_png(dir: &Path, name: &str, width: u32, height: u32, color: ExtendedColorType) -> PathBuf {
    let channels = u32::from(color.channel_count());
    let data: Vec<u8> = (0..width * height * channels).map(|i| i as u8).collect();
    let path = dir.join(name);
    image::save_buffer(&path, &data, width, height, color).expect("failed to write fixture");
    path
}

#[rstest]
#[case::mono(ExtendedColorType::L8, 1, PixelFormat::Mono)]
#[case::mono_alpha(ExtendedColorType::La8, 2, PixelFormat::Rgba)]
#[case::rgb(ExtendedColorType::Rgb8, 3, PixelFormat::Rgb)]
#[case::rgba(ExtendedColorType::Rgba8, 4, PixelFormat::Rgba)]
fn test_load_keeps_native_channels(
    #[case] color: ExtendedColorType,
    #[case] channels: u32,
    #[case] format: PixelFormat,
) {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "fixture.png", 5, 3, color);

    let image = Image::load(&path, false).unwrap();
    assert_eq!(image.width(), 5);
    assert_eq!(image.height(), 3);
    assert_eq!(image.channels(), channels);
    assert_eq!(image.format(), format);
    assert_eq!(image.byte_len(), (5 * 3 * channels) as usize);
    assert_eq!(image.path(), Some(path.as_path()));
    assert_eq!(image.state(), BufferState::Owning);

    let expected: Vec<u8> = (0..5 * 3 * channels).map(|i| i as u8).collect();
    assert_eq!(image.data(), expected.as_slice());
}

#[test]
fn test_load_flip() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two_rows.png");
    // Top row red, bottom row blue.
    let data = [255, 0, 0, 0, 0, 255];
    image::save_buffer(&path, &data, 1, 2, ExtendedColorType::Rgb8).unwrap();

    let upright = Image::load(&path, false).unwrap();
    assert_eq!(upright.pixel(0), &[255, 0, 0]);
    assert_eq!(upright.pixel(1), &[0, 0, 255]);

    let flipped = Image::load(&path, true).unwrap();
    assert_eq!(flipped.pixel(0), &[0, 0, 255]);
    assert_eq!(flipped.pixel(1), &[255, 0, 0]);
}

#[test]
fn test_load_missing_file() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.png");

    let err = Image::load(&path, true).unwrap_err();
    assert!(std::error::Error::source(&err).is_some());
    assert!(matches!(err, ImageError::Decode { path: Some(p), .. } if p == path));
}

#[test]
fn test_load_corrupt_file() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.png");
    std::fs::write(&path, b"\x89PNG\r\n\x1a\nthis is not a png").unwrap();

    let err = Image::load(&path, false).unwrap_err();
    assert!(matches!(err, ImageError::Decode { .. }));
}

#[test]
fn test_load_from_memory() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "memory.png", 4, 4, ExtendedColorType::Rgba8);
    let bytes = std::fs::read(&path).unwrap();

    let image = Image::load_from_memory(&bytes, false).unwrap();
    assert_eq!(image.path(), None);
    assert_eq!(image.pixel(1), &[4, 5, 6, 7]);

    let err = Image::load_from_memory(b"garbage", false).unwrap_err();
    assert!(matches!(err, ImageError::Decode { path: None, .. }));
}

#[test]
fn test_rows_roundtrip_on_loaded_image() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "rows.png", 7, 5, ExtendedColorType::Rgb8);
    let image = Image::load(&path, true).unwrap();

    let rows = image.to_rows();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|row| row.len() == 7 * 3));

    let rebuilt = Image::from_rows(&rows, image.width(), image.height(), image.channels());
    assert_eq!(rebuilt.data(), image.data());
    assert_eq!(rebuilt.path(), None);
}

#[rstest]
#[case::mono(1, 1)]
#[case::mono_alpha(2, 1)]
#[case::rgb(3, 3)]
#[case::rgba(4, 3)]
fn test_save_writes_jpeg(#[case] channels: u32, #[case] saved_channels: u32) {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.jpg");
    let data = vec![128u8; (16 * 8 * channels) as usize];
    let image = Image::from_buffer(16, 8, channels, data, true);

    image.save(&path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(image::guess_format(&bytes).unwrap(), image::ImageFormat::Jpeg);
    let reloaded = Image::load(&path, false).unwrap();
    assert_eq!(reloaded.width(), 16);
    assert_eq!(reloaded.height(), 8);
    assert_eq!(reloaded.channels(), saved_channels);
}

#[test]
fn test_save_leaves_buffer_untouched_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing_dir").join("out.jpg");
    let image = Image::from_buffer(2, 2, 3, vec![1u8; 12], true);

    let err = image.save(&path).unwrap_err();
    assert!(matches!(err, ImageError::Encode { .. }));
    assert_eq!(image.data(), &[1u8; 12]);
    assert_eq!(image.state(), BufferState::Owning);
}

#[test]
fn test_cube_map_faces_share_one_decoded_image() {
    init_logger();
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "face.png", 2, 2, ExtendedColorType::Rgba8);

    let mut source = Image::load(&path, false).unwrap();
    let faces: Vec<Image> = (0..6).map(|_| source.alias()).collect();
    for face in &faces {
        assert!(face.buffer().ptr_eq(source.buffer()));
        assert_eq!(face.state(), BufferState::Released);
    }

    source.release();
    source.release();
    assert_eq!(source.state(), BufferState::Released);
    for face in &faces {
        let texture = face.texture_data();
        assert_eq!(texture.byte_len(), 16);
        assert_eq!(texture.format, PixelFormat::Rgba);
    }
}
