use snapcam_base::log;
use snapcam_camera::{CameraConfig, V4l2Camera};
use snapcam_cli::pipeline;
use snapcam_upload::HttpUploadClient;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    snapcam_base::init_stdout_logger();

    let Some(url) = std::env::args().nth(1) else {
        eprintln!("usage: snapcam <upload-url>");
        return ExitCode::from(2);
    };

    let config = CameraConfig::default();
    log::info!("opening camera {}", config.device());
    let camera = match V4l2Camera::new(config) {
        Ok(camera) => camera,
        Err(e) => {
            eprintln!("failed to open camera: {e}");
            return ExitCode::FAILURE;
        }
    };

    let client = match HttpUploadClient::new() {
        Ok(client) => client,
        Err(e) => {
            eprintln!("failed to build http client: {e}");
            return ExitCode::FAILURE;
        }
    };

    match pipeline::run(camera, &client, &url, Path::new(".")) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
