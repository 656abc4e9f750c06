/// Capture settings for the one-shot still capture.
///
/// The pipeline always runs with the defaults: the first video device, VGA
/// resolution, 30 fps. The builders exist for tests and for hosts whose
/// webcam is not `/dev/video0`.
#[derive(Clone, Debug)]
pub struct CameraConfig {
    device: String,
    width: u32,
    height: u32,
    fps: u32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            device: "/dev/video0".to_string(),
            width: 640,
            height: 480,
            fps: 30,
        }
    }
}

impl CameraConfig {
    /// Capture from a different device node.
    pub fn with_device(mut self, device: String) -> Self {
        self.device = device;
        self
    }

    /// Request a different resolution for the MJPEG format negotiation.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Request a different frame rate.
    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = fps;
        self
    }

    pub fn device(&self) -> &str {
        &self.device
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}
