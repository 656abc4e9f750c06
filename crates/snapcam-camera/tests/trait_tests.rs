use snapcam_camera::{Camera, CameraError};
use snapcam_image::Frame;

// Mock implementation for testing
struct MockCamera {
    frame_count: usize,
}

impl MockCamera {
    fn new() -> Self {
        Self { frame_count: 0 }
    }
}

impl Camera for MockCamera {
    fn read(&mut self) -> Result<Frame, CameraError> {
        self.frame_count += 1;
        // Return a dummy 2x2 RGB frame
        Frame::new(2, 2, vec![0u8; 12]).map_err(CameraError::Decode)
    }
}

#[test]
fn test_camera_trait_mock_implementation() {
    let mut cam = MockCamera::new();

    // First frame
    let frame1 = cam.read().unwrap();
    assert_eq!((frame1.width, frame1.height), (2, 2));
    assert_eq!(cam.frame_count, 1);

    // Second frame
    let frame2 = cam.read().unwrap();
    assert_eq!(frame2.data.len(), 12);
    assert_eq!(cam.frame_count, 2);
}

#[test]
fn test_camera_trait_polymorphism() {
    fn capture_frames(camera: &mut impl Camera, count: usize) -> Result<Vec<Frame>, CameraError> {
        let mut frames = Vec::new();
        for _ in 0..count {
            frames.push(camera.read()?);
        }
        Ok(frames)
    }

    let mut cam = MockCamera::new();
    let frames = capture_frames(&mut cam, 3).unwrap();
    assert_eq!(frames.len(), 3);
    assert_eq!(cam.frame_count, 3);
}
