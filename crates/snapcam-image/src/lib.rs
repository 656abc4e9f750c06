//! Frame type and JPEG codec boundary for the snapcam pipeline.
//!
//! This crate wraps the `image` crate in both directions: decoding camera
//! MJPEG buffers into `Frame`s and encoding `Frame`s back to JPEG for upload.
//! All frames are RGB8 in HWC layout `[height, width, 3]`.

pub mod error;
pub mod types;

pub use error::ImageError;
pub use types::Frame;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder};
use std::path::Path;

/// Decodes an image from raw bytes into an RGB8 `Frame`.
///
/// The format is auto-detected by the `image` crate; non-RGB sources
/// (grayscale, RGBA) are converted to RGB8.
///
/// # Errors
///
/// Returns `ImageError::Decode` if the data is invalid or the format is
/// unsupported.
pub fn decode_frame(data: &[u8]) -> Result<Frame, ImageError> {
    let img = image::load_from_memory(data)?;
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    Frame::new(width, height, rgb.into_raw())
}

/// Encodes an RGB8 `Frame` as JPEG, returning the encoded bytes.
pub fn encode_jpeg(frame: &Frame) -> Result<Vec<u8>, ImageError> {
    let mut buf = Vec::new();
    JpegEncoder::new(&mut buf)
        .write_image(
            &frame.data,
            frame.width,
            frame.height,
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buf)
}

/// Encodes a `Frame` as JPEG and writes it to `path`.
///
/// The file handle is closed before this returns, on success and failure alike.
pub fn write_jpeg(frame: &Frame, path: &Path) -> Result<(), ImageError> {
    let bytes = encode_jpeg(frame)?;
    std::fs::write(path, bytes)?;
    Ok(())
}
