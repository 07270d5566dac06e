//! Toggle state read by the display pipeline once per frame.

use std::fmt;

/// One of the four user-controlled display toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Edges,
    Faces,
    Grayscale,
    Blur,
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Toggle::Edges => write!(f, "Edge detection"),
            Toggle::Faces => write!(f, "Face detection"),
            Toggle::Grayscale => write!(f, "Grayscale"),
            Toggle::Blur => write!(f, "Blur"),
        }
    }
}

/// The four independent display toggles.
///
/// Mutated only by the input handler, read once per frame by the pipeline.
/// Not persisted across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    pub edges: bool,
    pub faces: bool,
    pub grayscale: bool,
    pub blur: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        // Face detection starts on, everything else off.
        Self {
            edges: false,
            faces: true,
            grayscale: false,
            blur: false,
        }
    }
}

impl DisplayState {
    /// Invert one toggle, leaving the other three untouched.
    /// Returns the new value of the flipped toggle.
    pub fn toggle(&mut self, toggle: Toggle) -> bool {
        let flag = match toggle {
            Toggle::Edges => &mut self.edges,
            Toggle::Faces => &mut self.faces,
            Toggle::Grayscale => &mut self.grayscale,
            Toggle::Blur => &mut self.blur,
        };
        *flag = !*flag;
        *flag
    }

    /// Face annotations draw only when the face toggle is on and edge mode
    /// is off. Edge mode replaces the display buffer entirely.
    pub fn faces_active(&self) -> bool {
        self.faces && !self.edges
    }

    /// Status line listing every active toggle in declared order.
    pub fn status_line(&self) -> String {
        let mut status = String::from("Active: ");
        if self.faces_active() {
            status.push_str("[Face Detection] ");
        }
        if self.edges {
            status.push_str("[Edges] ");
        }
        if self.grayscale {
            status.push_str("[Grayscale] ");
        }
        if self.blur {
            status.push_str("[Blur] ");
        }
        status
    }
}
