use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};
use thiserror::Error;

use crate::capture::domain::frame_source::FrameSource;

#[derive(Error, Debug)]
pub enum CameraError {
    #[error("cannot open camera device {device}")]
    Open { device: i32 },
    #[error("camera device {device} failed: {source}")]
    Backend {
        device: i32,
        #[source]
        source: opencv::Error,
    },
}

/// Webcam capture backed by `opencv::videoio::VideoCapture`.
///
/// The handle is exclusively owned and released in `Drop`, so every exit
/// path gives the device back.
pub struct CameraSource {
    capture: VideoCapture,
    device: i32,
}

impl CameraSource {
    /// Opens the given device index, failing if the device is absent or
    /// busy. On Windows the DirectShow backend is requested to avoid
    /// capture-start latency; elsewhere the request is the default
    /// backend and effectively a no-op.
    pub fn open(device: i32) -> Result<Self, CameraError> {
        let capture = VideoCapture::new(device, preferred_backend())
            .map_err(|source| CameraError::Backend { device, source })?;

        let opened = capture
            .is_opened()
            .map_err(|source| CameraError::Backend { device, source })?;
        if !opened {
            return Err(CameraError::Open { device });
        }

        log::info!("camera device {device} opened");
        Ok(Self { capture, device })
    }
}

#[cfg(windows)]
fn preferred_backend() -> i32 {
    videoio::CAP_DSHOW
}

#[cfg(not(windows))]
fn preferred_backend() -> i32 {
    videoio::CAP_ANY
}

impl FrameSource for CameraSource {
    fn next_frame(&mut self) -> Result<Option<Mat>, Box<dyn std::error::Error>> {
        let mut frame = Mat::default();
        let grabbed = self.capture.read(&mut frame)?;
        if !grabbed || frame.size()?.width <= 0 {
            return Ok(None);
        }
        Ok(Some(frame))
    }
}

impl Drop for CameraSource {
    fn drop(&mut self) {
        if let Err(e) = self.capture.release() {
            log::warn!("failed to release camera device {}: {e}", self.device);
        }
    }
}
