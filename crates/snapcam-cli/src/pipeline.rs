//! The capture-then-upload pipeline.
//!
//! Linear, single attempt: discard warm-up frames, capture one frame, release
//! the device, encode to a timestamped JPEG in the output directory, upload
//! it as multipart form data, report the outcome, remove the file.

use crate::PipelineError;
use chrono::{DateTime, Local};
use snapcam_base::log;
use snapcam_camera::Camera;
use snapcam_image::Frame;
use snapcam_upload::UploadClient;
use std::fs;
use std::path::Path;

/// Frames read and discarded after opening the device so auto-exposure and
/// white balance settle. Empirical count, not configurable.
pub const WARMUP_FRAME_COUNT: usize = 10;

/// Outcome of a run that reached cleanup.
#[derive(Debug, Clone, PartialEq)]
pub enum UploadOutcome {
    /// Server answered 200; carries the response body.
    Accepted(String),
    /// Server answered with any other status. Reported, cleanup still ran.
    Rejected { status: u16, body: String },
}

/// Filename for a capture taken at `now`: local wall-clock time at second
/// resolution with a `.jpg` suffix, e.g. `2025-01-02_03-04-05.jpg`.
pub fn capture_filename(now: DateTime<Local>) -> String {
    format!("{}.jpg", now.format("%Y-%m-%d_%H-%M-%S"))
}

/// Run the pipeline: capture one frame from `camera`, write it under
/// `out_dir`, POST it to `url` via `client`, then remove the file.
///
/// The camera is consumed and dropped immediately after the capture attempt,
/// before its result is inspected, so the device is never held longer than
/// necessary. On upload transport errors the file is left on disk; on a
/// received non-200 response it is still removed. That asymmetry matches the
/// deployed behavior and is kept deliberately.
pub fn run<C, U>(
    mut camera: C,
    client: &U,
    url: &str,
    out_dir: &Path,
) -> Result<UploadOutcome, PipelineError>
where
    C: Camera,
    U: UploadClient,
{
    log::debug!("discarding {WARMUP_FRAME_COUNT} warm-up frames");
    for _ in 0..WARMUP_FRAME_COUNT {
        // Warm-up reads may fail while the sensor settles; only the recorded
        // read below decides the run.
        let _ = camera.read();
    }

    let captured = camera.read();
    drop(camera);

    let frame = captured?;
    persist_and_upload(&frame, client, url, out_dir)
}

fn persist_and_upload<U: UploadClient>(
    frame: &Frame,
    client: &U,
    url: &str,
    out_dir: &Path,
) -> Result<UploadOutcome, PipelineError> {
    let filename = capture_filename(Local::now());
    let path = out_dir.join(&filename);

    snapcam_image::write_jpeg(frame, &path)?;
    println!("{filename} saved");

    let bytes = fs::read(&path)?;
    log::info!("uploading {filename} ({} bytes) to {url}", bytes.len());
    let response = client.post_file(url, &filename, bytes)?;

    let outcome = if response.status == 200 {
        println!("upload succeeded: {}", response.body);
        UploadOutcome::Accepted(response.body)
    } else {
        eprintln!("upload failed: {} {}", response.status, response.body);
        UploadOutcome::Rejected {
            status: response.status,
            body: response.body,
        }
    };

    // Cleanup runs for accepted and rejected uploads alike; transport errors
    // above returned early and left the file in place.
    if let Err(e) = fs::remove_file(&path) {
        log::warn!("failed to remove {}: {e}", path.display());
    }

    Ok(outcome)
}
