use crate::{Camera, CameraConfig, CameraError};
use snapcam_image::Frame;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use v4l::buffer::Type;
use v4l::io::mmap::Stream as MmapStream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

type FrameResult = Result<Frame, CameraError>;

/// Driver-side mmap buffers; enough to keep warm-up reads flowing without
/// buffering frames the one-shot capture will never consume.
const BUFFER_COUNT: u32 = 4;

/// V4L2 camera backend.
///
/// The device is opened eagerly in `new` so open failures surface before any
/// frame is requested. Frames are captured on a dedicated thread that owns
/// the device and its mmap stream; `read` pulls decoded frames from a bounded
/// channel one at a time. Dropping the camera drops the receiver and joins
/// the thread, which releases the device on every exit path.
pub struct V4l2Camera {
    device: Option<Device>,
    receiver: Option<mpsc::Receiver<FrameResult>>,
    thread_handle: Option<JoinHandle<()>>,
}

impl std::fmt::Debug for V4l2Camera {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("V4l2Camera")
            .field("device", &"<v4l::Device>")
            .field("receiver", &self.receiver.is_some())
            .field("thread_handle", &self.thread_handle.is_some())
            .finish()
    }
}

impl Camera for V4l2Camera {
    fn read(&mut self) -> Result<Frame, CameraError> {
        // Ensure capture thread is running
        self.ensure_started()?;

        let receiver = self
            .receiver
            .as_mut()
            .ok_or_else(|| CameraError::Channel("receiver not initialized".to_string()))?;

        receiver
            .recv()
            .map_err(|_| CameraError::Channel("capture thread stopped".to_string()))?
    }
}

impl Drop for V4l2Camera {
    fn drop(&mut self) {
        // Drop the receiver to signal the thread to stop
        drop(self.receiver.take());

        // Wait for the thread to finish; the device is released when the
        // thread returns
        if let Some(handle) = self.thread_handle.take() {
            let _ = handle.join();
        }
    }
}

impl V4l2Camera {
    /// Create a new V4L2 camera with the given configuration.
    ///
    /// Opens the device at `config.device()`, sets MJPEG format at the
    /// requested resolution, and configures the frame rate. The config is not
    /// retained; once the format is negotiated the device is the only state
    /// that matters.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Device` if:
    /// - The device cannot be opened
    /// - MJPEG format is not supported
    /// - Format or parameter setting fails
    pub fn new(config: CameraConfig) -> Result<Self, CameraError> {
        let device = Device::with_path(config.device())?;

        // Set MJPEG format at requested resolution
        let mut format = Format::new(config.width(), config.height(), FourCC::new(b"MJPG"));
        format = Capture::set_format(&device, &format)?;

        // The device may silently substitute another format
        if format.fourcc != FourCC::new(b"MJPG") {
            return Err(CameraError::Device(
                "MJPEG format not supported by device".to_string(),
            ));
        }

        let params = v4l::video::capture::Parameters::with_fps(config.fps());
        v4l::video::Capture::set_params(&device, &params)?;

        log::debug!(
            "opened {} at {}x{}",
            config.device(),
            format.width,
            format.height
        );

        Ok(Self {
            device: Some(device),
            receiver: None,
            thread_handle: None,
        })
    }

    /// Start the capture thread if not already running.
    ///
    /// This is called automatically on the first `read()` call.
    fn ensure_started(&mut self) -> Result<(), CameraError> {
        if self.receiver.is_some() {
            return Ok(());
        }

        // Take ownership of the device
        let device = self
            .device
            .take()
            .ok_or_else(|| CameraError::Device("device already consumed".to_string()))?;

        let (tx, rx) = mpsc::sync_channel(BUFFER_COUNT as usize);

        let handle = thread::spawn(move || {
            Self::capture_loop(device, tx);
        });

        self.receiver = Some(rx);
        self.thread_handle = Some(handle);

        Ok(())
    }

    /// Background thread capture loop.
    ///
    /// Reads MJPEG buffers from V4L2, decodes them, and sends frames through
    /// the channel. Per-frame failures are sent as errors rather than ending
    /// the loop, so early reads can fail while the sensor settles without
    /// taking the device down.
    fn capture_loop(device: Device, tx: mpsc::SyncSender<FrameResult>) {
        let mut stream = match MmapStream::with_buffers(&device, Type::VideoCapture, BUFFER_COUNT)
        {
            Ok(stream) => stream,
            Err(e) => {
                let _ = tx.send(Err(CameraError::Stream(e.to_string())));
                return;
            }
        };

        loop {
            let frame_data = match CaptureStream::next(&mut stream) {
                // Buffer is borrowed and only valid until the next call
                Ok((data, _metadata)) => data.to_vec(),
                Err(e) => {
                    if tx.send(Err(CameraError::Stream(e.to_string()))).is_err() {
                        break;
                    }
                    continue;
                }
            };

            let result = snapcam_image::decode_frame(&frame_data).map_err(CameraError::Decode);

            if tx.send(result).is_err() {
                // Receiver dropped - exit thread, releasing the device
                break;
            }
        }
    }
}
