use crate::ImageError;

/// An RGB8 raster frame in HWC layout `[height, width, 3]`.
///
/// Owned transiently by the pipeline between capture and encode.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl Frame {
    /// Create a frame, validating that `data` holds exactly
    /// `width * height * 3` bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(ImageError::Decode(format!(
                "frame size mismatch: expected {} bytes for {}x{}, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }
        Ok(Self { width, height, data })
    }
}
