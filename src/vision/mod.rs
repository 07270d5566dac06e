//! Capability seams for the external vision collaborators.
//!
//! The display pipeline only talks to these three traits, so each
//! collaborator can be swapped for a synthetic double in tests without
//! touching the pipeline logic. The production implementations delegate
//! everything to OpenCV.

pub mod camera;
pub mod cascade;
pub mod filters;

pub use camera::CameraSource;
pub use cascade::{CascadeDetector, DetectParams};
pub use filters::{CvFilters, FilterParams};

use opencv::core::{Mat, Rect};

/// Supplies sequential color frames from a capture device.
///
/// A successfully read frame may still be empty; the caller treats that as
/// a fatal capture error.
pub trait FrameSource {
    /// Read the next frame from the device.
    fn grab(&mut self) -> opencv::Result<Mat>;

    /// Release the underlying device. Called once at loop exit.
    fn release(&mut self) -> opencv::Result<()>;
}

/// Finds axis-aligned regions likely containing a face in a grayscale image.
pub trait FaceDetector {
    /// Detection regions in frame coordinates, in the order the detector
    /// reports them.
    fn detect(&mut self, gray: &Mat) -> opencv::Result<Vec<Rect>>;
}

/// Pure image-to-image transforms: grayscale conversion in both directions,
/// Gaussian blur, and Canny edge extraction.
pub trait FilterBank {
    /// Color (BGR) to single-channel grayscale.
    fn to_gray(&self, src: &Mat) -> opencv::Result<Mat>;

    /// Single-channel grayscale back to 3-channel BGR for display.
    fn gray_to_bgr(&self, gray: &Mat) -> opencv::Result<Mat>;

    /// Gaussian blur with the configured kernel.
    fn blur(&self, src: &Mat) -> opencv::Result<Mat>;

    /// Canny edge extraction over a grayscale image.
    fn edges(&self, gray: &Mat) -> opencv::Result<Mat>;
}
