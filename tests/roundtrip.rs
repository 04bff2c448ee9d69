//! Save/open round trips through the codec adapters.

use pixmat::{ImageError, ImageFormat, Pixel, PixelBuffer, RasterImage};

fn test_pattern(width: usize, height: usize) -> PixelBuffer {
    let mut buffer = PixelBuffer::new(width, height);
    for y in 0..height {
        for x in 0..width {
            buffer.put_pixel(
                x,
                y,
                Pixel::new(
                    (x * 40) as u8,
                    (y * 40) as u8,
                    ((x + y) * 20) as u8,
                    255 - (x * 10) as u8,
                ),
            );
        }
    }
    buffer
}

#[test]
fn png_round_trip_preserves_every_byte() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pattern.png");

    let buffer = test_pattern(5, 4);
    RasterImage::from_buffer(buffer.clone(), ImageFormat::Png)
        .save(&path)
        .unwrap();

    let reopened = RasterImage::open(&path).unwrap();
    assert_eq!(reopened.format(), ImageFormat::Png);
    assert_eq!(reopened.dimensions(), (5, 4));
    assert_eq!(reopened.buffer(), &buffer);
}

#[test]
fn png_round_trip_survives_a_transform_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("processed.png");

    let mut image = RasterImage::from_buffer(test_pattern(6, 6), ImageFormat::Png);
    image.mirror_horizontally();
    image.sepia();
    image.pixelate(3);
    image.save(&path).unwrap();

    let reopened = RasterImage::open(&path).unwrap();
    assert_eq!(reopened.buffer(), image.buffer());
}

#[test]
fn jpeg_round_trip_preserves_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pattern.jpg");

    RasterImage::from_buffer(test_pattern(8, 3), ImageFormat::Jpeg)
        .save(&path)
        .unwrap();

    let reopened = RasterImage::open(&path).unwrap();
    assert_eq!(reopened.format(), ImageFormat::Jpeg);
    // JPEG is lossy, so only the geometry is stable.
    assert_eq!(reopened.dimensions(), (8, 3));
}

#[test]
fn save_with_unknown_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pattern.webp");

    let err = RasterImage::from_buffer(test_pattern(2, 2), ImageFormat::Png)
        .save(&path)
        .unwrap_err();
    assert!(matches!(err, ImageError::UnsupportedFormat { .. }));
    assert!(!path.exists());
}

#[test]
fn open_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = RasterImage::open(dir.path().join("nope.png")).unwrap_err();
    assert!(matches!(err, ImageError::Io { .. }));
}

#[test]
fn open_malformed_png_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"this is not a png at all").unwrap();

    let err = RasterImage::open(&path).unwrap_err();
    assert!(matches!(
        err,
        ImageError::Decoding {
            format: ImageFormat::Png,
            ..
        }
    ));
}

#[test]
fn open_malformed_jpeg_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.jpg");
    std::fs::write(&path, b"\xff\xd8garbage").unwrap();

    let err = RasterImage::open(&path).unwrap_err();
    assert!(matches!(
        err,
        ImageError::Decoding {
            format: ImageFormat::Jpeg,
            ..
        }
    ));
}
