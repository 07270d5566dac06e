//! OpenCV-backed filter primitives.

use opencv::core::{Mat, Size};
use opencv::imgproc;

use super::FilterBank;

/// Fixed filter tunables.
#[derive(Debug, Clone, Copy)]
pub struct FilterParams {
    /// Gaussian kernel side length; must be odd.
    pub blur_kernel: i32,
    /// Canny lower hysteresis threshold.
    pub canny_low: f64,
    /// Canny upper hysteresis threshold.
    pub canny_high: f64,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            blur_kernel: 15,
            canny_low: 50.0,
            canny_high: 150.0,
        }
    }
}

/// Filter bank delegating to `opencv::imgproc`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CvFilters {
    pub params: FilterParams,
}

impl CvFilters {
    pub fn new(params: FilterParams) -> Self {
        Self { params }
    }
}

impl FilterBank for CvFilters {
    fn to_gray(&self, src: &Mat) -> opencv::Result<Mat> {
        let mut gray = Mat::default();
        imgproc::cvt_color_def(src, &mut gray, imgproc::COLOR_BGR2GRAY)?;
        Ok(gray)
    }

    fn gray_to_bgr(&self, gray: &Mat) -> opencv::Result<Mat> {
        let mut bgr = Mat::default();
        imgproc::cvt_color_def(gray, &mut bgr, imgproc::COLOR_GRAY2BGR)?;
        Ok(bgr)
    }

    fn blur(&self, src: &Mat) -> opencv::Result<Mat> {
        let mut blurred = Mat::default();
        let k = self.params.blur_kernel;
        // Zero sigma lets OpenCV derive it from the kernel size.
        imgproc::gaussian_blur_def(src, &mut blurred, Size::new(k, k), 0.0)?;
        Ok(blurred)
    }

    fn edges(&self, gray: &Mat) -> opencv::Result<Mat> {
        let mut edges = Mat::default();
        imgproc::canny_def(gray, &mut edges, self.params.canny_low, self.params.canny_high)?;
        Ok(edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_match_fixed_tunables() {
        let params = FilterParams::default();
        assert_eq!(params.blur_kernel, 15);
        assert_eq!(params.canny_low, 50.0);
        assert_eq!(params.canny_high, 150.0);
    }

    #[test]
    fn test_default_kernel_is_odd() {
        assert_eq!(FilterParams::default().blur_kernel % 2, 1);
    }
}
