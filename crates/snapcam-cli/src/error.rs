use snapcam_camera::CameraError;
use snapcam_image::ImageError;
use snapcam_upload::UploadError;
use std::fmt;

/// Fatal pipeline failures. Each maps to a labeled stderr message and a
/// non-zero exit in `main`. A non-200 response is not among them: the run
/// still reaches cleanup and reports the rejection instead.
#[derive(Debug)]
pub enum PipelineError {
    Capture(CameraError),
    Encode(ImageError),
    Io(std::io::Error),
    Upload(UploadError),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Capture(err) => write!(f, "failed to capture frame: {err}"),
            PipelineError::Encode(err) => write!(f, "failed to write image: {err}"),
            PipelineError::Io(err) => write!(f, "file error: {err}"),
            // UploadError already carries its category label
            PipelineError::Upload(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<CameraError> for PipelineError {
    fn from(err: CameraError) -> Self {
        PipelineError::Capture(err)
    }
}

impl From<ImageError> for PipelineError {
    fn from(err: ImageError) -> Self {
        PipelineError::Encode(err)
    }
}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        PipelineError::Io(err)
    }
}

impl From<UploadError> for PipelineError {
    fn from(err: UploadError) -> Self {
        PipelineError::Upload(err)
    }
}
