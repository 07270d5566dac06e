//! Webcam frame source and the degraded-startup placeholder frame.

use opencv::core::{self, Mat, Point, Scalar};
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture};
use opencv::imgproc;

use super::FrameSource;

/// Frame source backed by an OpenCV `VideoCapture` device.
pub struct CameraSource {
    capture: VideoCapture,
}

impl CameraSource {
    /// Open a capture device by index.
    ///
    /// Opening never fails outright for a bad index; callers must check
    /// `is_opened` before entering the capture loop.
    pub fn open(index: i32) -> opencv::Result<Self> {
        let capture = VideoCapture::new(index, videoio::CAP_ANY)?;
        Ok(Self { capture })
    }

    pub fn is_opened(&self) -> opencv::Result<bool> {
        self.capture.is_opened()
    }
}

impl FrameSource for CameraSource {
    fn grab(&mut self) -> opencv::Result<Mat> {
        let mut frame = Mat::default();
        // A false return leaves the frame empty; the caller treats an empty
        // frame as a fatal capture error.
        self.capture.read(&mut frame)?;
        Ok(frame)
    }

    fn release(&mut self) -> opencv::Result<()> {
        self.capture.release()
    }
}

/// Static 640x480 frame shown when no capture device is available.
pub fn placeholder_frame(message: &str) -> opencv::Result<Mat> {
    let mut canvas = Mat::zeros(480, 640, core::CV_8UC3)?.to_mat()?;
    imgproc::put_text(
        &mut canvas,
        message,
        Point::new(50, 240),
        imgproc::FONT_HERSHEY_SIMPLEX,
        0.7,
        Scalar::new(255.0, 255.0, 255.0, 0.0),
        2,
        imgproc::LINE_8,
        false,
    )?;
    Ok(canvas)
}
