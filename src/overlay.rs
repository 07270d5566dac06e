//! Annotation drawing: face rectangles, labels, the detection count, and
//! the status line.
//!
//! Label geometry is computed by pure helpers so the clamping behavior at
//! the frame top edge can be tested without constructing images.

use opencv::core::{Mat, Point, Rect, Scalar, Size};
use opencv::imgproc;
use opencv::prelude::*;

const FONT: i32 = imgproc::FONT_HERSHEY_SIMPLEX;
const LABEL_SCALE: f64 = 0.5;
const LABEL_THICKNESS: i32 = 1;
const COUNT_SCALE: f64 = 0.7;
const COUNT_ANCHOR: (i32, i32) = (10, 30);
const STATUS_SCALE: f64 = 0.5;
/// Status line sits this many pixels above the bottom edge.
const STATUS_MARGIN: i32 = 30;
/// Gap between a face rectangle and its label baseline.
const LABEL_GAP: i32 = 10;

fn green() -> Scalar {
    Scalar::new(0.0, 255.0, 0.0, 0.0)
}

fn black() -> Scalar {
    Scalar::new(0.0, 0.0, 0.0, 0.0)
}

fn white() -> Scalar {
    Scalar::new(255.0, 255.0, 255.0, 0.0)
}

/// Label text for the region at `index` in the detection result.
pub fn face_label(index: usize) -> String {
    format!("Face {}", index + 1)
}

/// Bottom-left origin of a face label, clamped so the filled background
/// (which extends `text.height` above the origin) never leaves the frame.
pub fn label_origin(face: Rect, text: Size) -> Point {
    let y = (face.y - LABEL_GAP).max(text.height);
    Point::new(face.x, y)
}

/// Filled background behind a label, sized from the text metrics.
///
/// Spans from `text.height` above the origin down to `baseline` below it,
/// matching how `put_text` lays out glyphs around the origin.
pub fn label_background(origin: Point, text: Size, baseline: i32) -> Rect {
    Rect::new(
        origin.x,
        origin.y - text.height,
        text.width,
        text.height + baseline,
    )
}

/// Draw an outline, label, and label background for every detected region,
/// in detection order, then the running count at the top-left anchor.
pub fn draw_face_annotations(display: &mut Mat, faces: &[Rect]) -> opencv::Result<()> {
    for (i, face) in faces.iter().enumerate() {
        imgproc::rectangle(display, *face, green(), 3, imgproc::LINE_8, 0)?;

        let label = face_label(i);
        let mut baseline = 0;
        let text = imgproc::get_text_size(&label, FONT, LABEL_SCALE, LABEL_THICKNESS, &mut baseline)?;
        let origin = label_origin(*face, text);

        imgproc::rectangle(
            display,
            label_background(origin, text, baseline),
            green(),
            imgproc::FILLED,
            imgproc::LINE_8,
            0,
        )?;
        imgproc::put_text(
            display,
            &label,
            origin,
            FONT,
            LABEL_SCALE,
            black(),
            LABEL_THICKNESS,
            imgproc::LINE_8,
            false,
        )?;
    }

    let count = format!("Faces detected: {}", faces.len());
    imgproc::put_text(
        display,
        &count,
        Point::new(COUNT_ANCHOR.0, COUNT_ANCHOR.1),
        FONT,
        COUNT_SCALE,
        green(),
        2,
        imgproc::LINE_8,
        false,
    )?;
    Ok(())
}

/// Draw the active-toggle status line at the fixed bottom-left anchor.
pub fn draw_status_line(display: &mut Mat, status: &str) -> opencv::Result<()> {
    let anchor = Point::new(10, display.rows() - STATUS_MARGIN);
    imgproc::put_text(
        display,
        status,
        anchor,
        FONT,
        STATUS_SCALE,
        white(),
        1,
        imgproc::LINE_8,
        false,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_labels_are_one_indexed() {
        assert_eq!(face_label(0), "Face 1");
        assert_eq!(face_label(4), "Face 5");
    }

    #[test]
    fn test_label_sits_above_the_face() {
        let face = Rect::new(100, 200, 50, 50);
        let text = Size::new(40, 12);
        let origin = label_origin(face, text);
        assert_eq!(origin.x, 100);
        assert_eq!(origin.y, 190);
    }

    #[test]
    fn test_label_clamps_at_top_edge() {
        // A face at y=5 would put the label background above the frame;
        // the origin must be pushed down so the background top stays at 0.
        let face = Rect::new(100, 5, 50, 50);
        let text = Size::new(40, 12);
        let origin = label_origin(face, text);
        assert_eq!(origin.y, text.height);

        let background = label_background(origin, text, 3);
        assert!(background.y >= 0);
    }

    #[test]
    fn test_label_background_covers_text_metrics() {
        let origin = Point::new(100, 190);
        let text = Size::new(40, 12);
        let baseline = 3;
        let background = label_background(origin, text, baseline);

        assert_eq!(background.x, 100);
        assert_eq!(background.y, 190 - 12);
        assert_eq!(background.width, 40);
        assert_eq!(background.height, 12 + 3);
    }
}
