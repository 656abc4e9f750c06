//! The snapcam pipeline: capture one frame, upload it, clean up.

pub mod error;
pub mod pipeline;

pub use error::PipelineError;
pub use pipeline::{capture_filename, run, UploadOutcome, WARMUP_FRAME_COUNT};
