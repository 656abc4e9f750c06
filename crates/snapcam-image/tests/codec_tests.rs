use snapcam_image::{decode_frame, encode_jpeg, write_jpeg, Frame, ImageError};
use std::fs;

fn gradient_frame(width: u32, height: u32) -> Frame {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let val = ((x + y) % 256) as u8;
            data.extend_from_slice(&[val, val.wrapping_add(10), val.wrapping_add(20)]);
        }
    }
    Frame::new(width, height, data).unwrap()
}

#[test]
fn test_decode_synthetic_jpeg() {
    // Create a small 16x16 RGB JPEG using the image crate directly
    let mut jpeg_buffer = Vec::new();
    let img = image::RgbImage::from_fn(16, 16, |x, y| {
        let val = ((x + y) % 256) as u8;
        image::Rgb([val, val + 10, val + 20])
    });
    image::codecs::jpeg::JpegEncoder::new(&mut jpeg_buffer)
        .encode_image(&img)
        .unwrap();

    let frame = decode_frame(&jpeg_buffer).unwrap();

    assert_eq!(frame.width, 16);
    assert_eq!(frame.height, 16);
    assert_eq!(frame.data.len(), 16 * 16 * 3);
}

#[test]
fn test_decode_grayscale_converts_to_rgb() {
    let mut jpeg_buffer = Vec::new();
    let img = image::GrayImage::from_fn(8, 8, |x, y| image::Luma([((x + y) % 256) as u8]));
    image::codecs::jpeg::JpegEncoder::new(&mut jpeg_buffer)
        .encode_image(&img)
        .unwrap();

    let frame = decode_frame(&jpeg_buffer).unwrap();

    assert_eq!(frame.width, 8);
    assert_eq!(frame.height, 8);
    assert_eq!(frame.data.len(), 8 * 8 * 3);
}

#[test]
fn test_decode_garbage_fails() {
    let result = decode_frame(b"not an image at all");
    match result {
        Err(ImageError::Decode(_)) => {}
        other => panic!("Expected ImageError::Decode, got {:?}", other),
    }
}

#[test]
fn test_encode_then_decode_preserves_dimensions() {
    let frame = gradient_frame(32, 24);

    let jpeg = encode_jpeg(&frame).unwrap();
    let decoded = decode_frame(&jpeg).unwrap();

    assert_eq!(decoded.width, 32);
    assert_eq!(decoded.height, 24);
}

#[test]
fn test_write_jpeg_creates_file() {
    let dir = std::env::temp_dir().join(format!("snapcam-image-test-{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();

    let frame = gradient_frame(16, 16);
    let path = dir.join("out.jpg");
    write_jpeg(&frame, &path).unwrap();

    let bytes = fs::read(&path).unwrap();
    let decoded = decode_frame(&bytes).unwrap();
    assert_eq!(decoded.width, 16);
    assert_eq!(decoded.height, 16);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_write_jpeg_missing_directory_is_io_error() {
    let frame = gradient_frame(4, 4);
    let path = std::path::Path::new("/nonexistent-snapcam-dir/out.jpg");

    match write_jpeg(&frame, path) {
        Err(ImageError::Io(_)) => {}
        other => panic!("Expected ImageError::Io, got {:?}", other),
    }
}

#[test]
fn test_frame_size_mismatch() {
    let result = Frame::new(4, 4, vec![0u8; 10]);
    match result {
        Err(ImageError::Decode(msg)) => assert!(msg.contains("mismatch")),
        other => panic!("Expected ImageError::Decode, got {:?}", other),
    }
}

#[test]
fn test_error_display() {
    let decode_err = ImageError::Decode("bad marker".to_string());
    assert!(decode_err.to_string().contains("bad marker"));

    let encode_err = ImageError::Encode("width overflow".to_string());
    assert!(encode_err.to_string().contains("width overflow"));
}
