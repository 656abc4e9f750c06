#[cfg(feature = "v4l2")]
mod v4l2_tests {
    use snapcam_camera::{CameraConfig, CameraError, V4l2Camera};

    // Opening a missing device node must fail up front, before any capture
    // resource exists; the binary reports this and never touches the network.
    #[test]
    fn test_open_missing_device_fails_before_capture() {
        let config = CameraConfig::default().with_device("/dev/snapcam-missing".to_string());

        match V4l2Camera::new(config) {
            Err(CameraError::Device(_)) => {}
            Ok(_) => panic!("open of a missing device node must fail"),
            Err(other) => panic!("Expected CameraError::Device, got {:?}", other),
        }
    }
}

mod config_tests {
    use snapcam_camera::CameraConfig;

    #[test]
    fn test_defaults_match_the_pipeline() {
        // The pipeline always captures with the defaults: first device, VGA
        let config = CameraConfig::default();

        assert_eq!(config.device(), "/dev/video0");
        assert_eq!((config.width(), config.height()), (640, 480));
        assert_eq!(config.fps(), 30);
    }

    #[test]
    fn test_builders_override_defaults() {
        let config = CameraConfig::default()
            .with_device("/dev/video2".to_string())
            .with_resolution(1280, 720)
            .with_fps(15);

        assert_eq!(config.device(), "/dev/video2");
        assert_eq!((config.width(), config.height()), (1280, 720));
        assert_eq!(config.fps(), 15);
    }
}
