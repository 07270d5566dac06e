//! Application wiring: startup, the capture loop, and cleanup.
//!
//! The loop is synchronous and single-threaded: capture, process, render,
//! poll for a key, repeat until the quit key or a capture failure. The only
//! blocking points are the frame read and the bounded key poll.

use std::path::PathBuf;

use opencv::highgui;
use opencv::prelude::*;
use thiserror::Error;

use crate::display::DisplayState;
use crate::input::{self, KeyAction};
use crate::pipeline;
use crate::vision::{
    camera, CameraSource, CascadeDetector, CvFilters, DetectParams, FilterParams, FrameSource,
};

pub const WINDOW_NAME: &str = "camscope";

/// How long the placeholder frame stays up when no webcam is available.
const PLACEHOLDER_HOLD_MS: i32 = 3000;

/// Fully merged runtime settings (CLI over config file over defaults).
#[derive(Debug, Clone)]
pub struct Options {
    pub camera_index: i32,
    pub cascade: PathBuf,
    pub detect: DetectParams,
    pub filters: FilterParams,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not load face cascade classifier: {source}")]
    CascadeLoad {
        #[source]
        source: opencv::Error,
    },
    #[error("cannot open webcam (device {0})")]
    CameraUnavailable(i32),
    #[error("cannot read frame from capture device")]
    CaptureFailed,
    #[error(transparent)]
    Vision(#[from] opencv::Error),
}

/// Run the demo to completion.
///
/// Returns an error for every failure path: cascade load, camera open, and
/// a mid-loop read failure all exit non-zero. Resources are released on
/// every exit path.
pub fn run(options: &Options) -> Result<(), AppError> {
    let mut detector = CascadeDetector::load(&options.cascade, options.detect)
        .map_err(|source| AppError::CascadeLoad { source })?;
    log::info!("loaded face cascade from '{}'", options.cascade.display());

    let mut source = CameraSource::open(options.camera_index)?;
    if !source.is_opened()? {
        log::error!("cannot open webcam (device {})", options.camera_index);
        show_placeholder()?;
        return Err(AppError::CameraUnavailable(options.camera_index));
    }

    print_banner();

    let filters = CvFilters::new(options.filters);
    highgui::named_window_def(WINDOW_NAME)?;

    let result = capture_loop(&mut source, &mut detector, &filters);

    // Cleanup runs on every exit path, normal quit or capture error.
    if let Err(e) = source.release() {
        log::warn!("failed to release capture device: {}", e);
    }
    let _ = highgui::destroy_all_windows();

    result
}

fn capture_loop(
    source: &mut CameraSource,
    detector: &mut CascadeDetector,
    filters: &CvFilters,
) -> Result<(), AppError> {
    let mut state = DisplayState::default();

    loop {
        let frame = source.grab()?;
        if frame.empty() {
            log::error!("cannot read frame from capture device");
            return Err(AppError::CaptureFailed);
        }

        let display = pipeline::render_frame(&frame, &state, filters, detector)?;
        highgui::imshow(WINDOW_NAME, &display)?;

        match input::map_key(highgui::wait_key(input::POLL_TIMEOUT_MS)?) {
            KeyAction::Quit => {
                log::info!("quit requested");
                return Ok(());
            }
            KeyAction::Toggle(toggle) => {
                let on = state.toggle(toggle);
                log::info!("{}: {}", toggle, if on { "ON" } else { "OFF" });
            }
            KeyAction::None => {}
        }
    }
}

/// Degraded startup path: show one static frame for a bounded duration.
fn show_placeholder() -> opencv::Result<()> {
    let frame = camera::placeholder_frame("camscope - webcam not available")?;
    highgui::named_window_def(WINDOW_NAME)?;
    highgui::imshow(WINDOW_NAME, &frame)?;
    highgui::wait_key(PLACEHOLDER_HOLD_MS)?;
    highgui::destroy_all_windows()
}

fn print_banner() {
    println!("======================================");
    println!("  camscope - computer vision demo");
    println!("======================================");
    println!("Controls:");
    println!("  'q' - Quit");
    println!("  'e' - Toggle edge detection");
    println!("  'f' - Toggle face detection");
    println!("  'g' - Toggle grayscale");
    println!("  'b' - Toggle blur");
    println!("======================================");
}
