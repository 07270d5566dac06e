//! Haar-cascade face detector.

use std::path::Path;

use opencv::core::{self, Mat, Rect, Size, Vector};
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::*;

use super::FaceDetector;

/// Cascade detection tunables.
#[derive(Debug, Clone, Copy)]
pub struct DetectParams {
    /// How much the search window shrinks between scales.
    pub scale_factor: f64,
    /// Minimum neighboring detections required to keep a region.
    pub min_neighbors: i32,
    /// Minimum region side length in pixels.
    pub min_size: i32,
}

impl Default for DetectParams {
    fn default() -> Self {
        Self {
            scale_factor: 1.1,
            min_neighbors: 5,
            min_size: 30,
        }
    }
}

/// Face detector backed by an OpenCV Haar cascade classifier.
pub struct CascadeDetector {
    classifier: CascadeClassifier,
    params: DetectParams,
}

impl CascadeDetector {
    /// Load a cascade model from an XML file.
    ///
    /// OpenCV reports an unloadable model through the boolean return of
    /// `load`, not through an exception, so a false return is mapped to an
    /// error here.
    pub fn load(path: &Path, params: DetectParams) -> opencv::Result<Self> {
        let mut classifier = CascadeClassifier::default()?;
        if !classifier.load(&path.to_string_lossy())? {
            return Err(opencv::Error::new(
                core::StsError,
                format!("could not load face cascade from '{}'", path.display()),
            ));
        }
        Ok(Self { classifier, params })
    }
}

impl FaceDetector for CascadeDetector {
    fn detect(&mut self, gray: &Mat) -> opencv::Result<Vec<Rect>> {
        let mut regions = Vector::<Rect>::new();
        self.classifier.detect_multi_scale(
            gray,
            &mut regions,
            self.params.scale_factor,
            self.params.min_neighbors,
            0,
            Size::new(self.params.min_size, self.params.min_size),
            Size::new(0, 0),
        )?;
        Ok(regions.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_match_fixed_tunables() {
        let params = DetectParams::default();
        assert_eq!(params.scale_factor, 1.1);
        assert_eq!(params.min_neighbors, 5);
        assert_eq!(params.min_size, 30);
    }

    #[test]
    fn test_load_missing_model_fails() {
        let result = CascadeDetector::load(
            Path::new("/nonexistent/haarcascade_frontalface_default.xml"),
            DetectParams::default(),
        );
        assert!(result.is_err());
    }
}
