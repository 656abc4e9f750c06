use crate::CameraError;
use snapcam_image::Frame;

/// Blocking camera trait for frame capture.
///
/// Implementations return one decoded RGB8 `Frame` per `read` call, blocking
/// until a frame is available. Dropping the camera releases the device.
pub trait Camera {
    /// Read the next frame from the camera.
    fn read(&mut self) -> Result<Frame, CameraError>;
}
