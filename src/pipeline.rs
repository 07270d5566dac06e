//! Per-frame display pipeline.
//!
//! `RenderPlan` captures the filter precedence as pure data so the mutual
//! exclusion between edge mode and face annotation can be tested without
//! any image work; `render_frame` executes a plan over the capability
//! traits.

use opencv::core::Mat;

use crate::display::DisplayState;
use crate::overlay;
use crate::vision::{FaceDetector, FilterBank};

/// Which pipeline steps run this cycle, derived from the toggle state.
///
/// Precedence: the base buffer is color or grayscale, blur applies to that
/// base, an active edge view then replaces the buffer outright, and face
/// annotation only runs when edge mode is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPlan {
    pub gray_base: bool,
    pub blur: bool,
    pub edges: bool,
    pub annotate_faces: bool,
}

impl RenderPlan {
    pub fn from_state(state: &DisplayState) -> Self {
        Self {
            gray_base: state.grayscale,
            blur: state.blur,
            edges: state.edges,
            annotate_faces: state.faces_active(),
        }
    }
}

/// Produce one annotated display buffer from a frame.
///
/// The source frame is never mutated; every transform writes into a fresh
/// buffer.
pub fn render_frame(
    frame: &Mat,
    state: &DisplayState,
    filters: &dyn FilterBank,
    detector: &mut dyn FaceDetector,
) -> opencv::Result<Mat> {
    let plan = RenderPlan::from_state(state);

    // Both the edge and face paths work on the grayscale derivative, so it
    // is computed every cycle regardless of the toggles.
    let gray = filters.to_gray(frame)?;

    let mut display = if plan.gray_base {
        filters.gray_to_bgr(&gray)?
    } else {
        frame.clone()
    };

    if plan.blur {
        display = filters.blur(&display)?;
    }

    if plan.edges {
        let edges = filters.edges(&gray)?;
        display = filters.gray_to_bgr(&edges)?;
    } else if plan.annotate_faces {
        let faces = detector.detect(&gray)?;
        overlay::draw_face_annotations(&mut display, &faces)?;
    }

    overlay::draw_status_line(&mut display, &state.status_line())?;
    Ok(display)
}
