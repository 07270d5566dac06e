use std::path::PathBuf;

use clap::Parser;

use camscope::app::{self, Options};
use camscope::config::{self, Config};

/// camscope: live webcam viewer with toggleable vision filters
#[derive(Parser)]
#[command(name = "camscope")]
#[command(version, about = "Live webcam viewer with toggleable OpenCV filters")]
#[command(long_about = "Shows the webcam feed in a window and toggles grayscale, \
    Gaussian blur, Canny edge detection, and Haar-cascade face detection per \
    frame with single-key commands.")]
#[command(after_help = "CONTROLS (while running):
    q    Quit
    e    Toggle edge detection
    f    Toggle face detection
    g    Toggle grayscale
    b    Toggle blur

EXAMPLES:
    # Run with defaults (device 0, probed cascade location)
    camscope

    # Explicit cascade model and second camera
    camscope --cascade /usr/share/opencv4/haarcascades/haarcascade_frontalface_default.xml --camera 1")]
struct Cli {
    /// Path to the Haar cascade XML model
    /// (default: probe well-known OpenCV install locations)
    #[arg(long)]
    cascade: Option<PathBuf>,

    /// Capture device index
    #[arg(long)]
    camera: Option<i32>,

    /// Custom config file path (default: ~/.config/camscope/config.toml)
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // If --config is specified the file must exist; the default path falls
    // back to built-in settings when missing.
    let cfg = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let cascade = match config::resolve_cascade(cli.cascade.as_deref(), &cfg) {
        Ok(path) => path,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    // CLI args > config file > built-in defaults
    let options = Options {
        camera_index: cli.camera.unwrap_or(cfg.camera.device),
        cascade,
        detect: cfg.detect_params(),
        filters: cfg.filter_params(),
    };

    match app::run(&options) {
        Ok(()) => {
            println!("Program terminated successfully");
        }
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}
