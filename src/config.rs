//! Configuration file handling.
//!
//! Loads `~/.config/camscope/config.toml` (or a custom path given on the
//! command line). CLI flags win over the file, the file wins over built-in
//! defaults, and the built-in defaults reproduce the original fixed
//! tunables exactly.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::vision::{DetectParams, FilterParams};

/// Name of the frontal-face Haar cascade model file.
pub const CASCADE_FILE: &str = "haarcascade_frontalface_default.xml";

/// Well-known directories where OpenCV installs ship the Haar cascades.
const CASCADE_SEARCH_DIRS: &[&str] = &[
    "/usr/share/opencv4/haarcascades",
    "/usr/local/share/opencv4/haarcascades",
    "/opt/homebrew/share/opencv4/haarcascades",
    "/usr/share/opencv/haarcascades",
];

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub detector: DetectorConfig,
    #[serde(default)]
    pub filters: FilterConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct CameraConfig {
    /// Capture device index.
    #[serde(default)]
    pub device: i32,
}

#[derive(Debug, Deserialize)]
pub struct DetectorConfig {
    /// Path to the Haar cascade XML; probed from well-known locations when
    /// absent.
    pub cascade: Option<PathBuf>,
    #[serde(default = "default_scale_factor")]
    pub scale_factor: f64,
    #[serde(default = "default_min_neighbors")]
    pub min_neighbors: i32,
    #[serde(default = "default_min_size")]
    pub min_size: i32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            cascade: None,
            scale_factor: default_scale_factor(),
            min_neighbors: default_min_neighbors(),
            min_size: default_min_size(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_blur_kernel")]
    pub blur_kernel: i32,
    #[serde(default = "default_canny_low")]
    pub canny_low: f64,
    #[serde(default = "default_canny_high")]
    pub canny_high: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            blur_kernel: default_blur_kernel(),
            canny_low: default_canny_low(),
            canny_high: default_canny_high(),
        }
    }
}

fn default_scale_factor() -> f64 {
    1.1
}

fn default_min_neighbors() -> i32 {
    5
}

fn default_min_size() -> i32 {
    30
}

fn default_blur_kernel() -> i32 {
    15
}

fn default_canny_low() -> f64 {
    50.0
}

fn default_canny_high() -> f64 {
    150.0
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist; the default path falls back to built-in
    /// defaults when missing.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) if !p.exists() => Err(ConfigError::NotFound {
                path: p.to_path_buf(),
            }),
            Some(p) => Self::read(p),
            None => {
                let p = default_path();
                if p.exists() {
                    Self::read(&p)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn detect_params(&self) -> DetectParams {
        DetectParams {
            scale_factor: self.detector.scale_factor,
            min_neighbors: self.detector.min_neighbors,
            min_size: self.detector.min_size,
        }
    }

    pub fn filter_params(&self) -> FilterParams {
        FilterParams {
            blur_kernel: self.filters.blur_kernel,
            canny_low: self.filters.canny_low,
            canny_high: self.filters.canny_high,
        }
    }
}

/// Resolve the cascade model path: CLI flag, then config file, then the
/// well-known install locations.
pub fn resolve_cascade(flag: Option<&Path>, config: &Config) -> Result<PathBuf, ConfigError> {
    if let Some(path) = flag.or(config.detector.cascade.as_deref()) {
        return Ok(path.to_path_buf());
    }

    for dir in CASCADE_SEARCH_DIRS {
        let candidate = Path::new(dir).join(CASCADE_FILE);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    Err(ConfigError::CascadeNotFound {
        searched: CASCADE_SEARCH_DIRS
            .iter()
            .map(|d| Path::new(d).join(CASCADE_FILE))
            .collect(),
    })
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file '{path}' does not exist")]
    NotFound { path: PathBuf },
    #[error("failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("no Haar cascade found; pass --cascade or install the OpenCV haarcascades (searched {searched:?})")]
    CascadeNotFound { searched: Vec<PathBuf> },
}

/// Default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("camscope")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_fixed_tunables() {
        let config = Config::default();
        assert_eq!(config.camera.device, 0);
        assert_eq!(config.detector.scale_factor, 1.1);
        assert_eq!(config.detector.min_neighbors, 5);
        assert_eq!(config.detector.min_size, 30);
        assert_eq!(config.filters.blur_kernel, 15);
        assert_eq!(config.filters.canny_low, 50.0);
        assert_eq!(config.filters.canny_high, 150.0);
        assert!(config.detector.cascade.is_none());
    }

    #[test]
    fn test_load_full_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[camera]
device = 2

[detector]
cascade = "/tmp/cascade.xml"
min_neighbors = 3

[filters]
blur_kernel = 21
"#
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.camera.device, 2);
        assert_eq!(
            config.detector.cascade.as_deref(),
            Some(Path::new("/tmp/cascade.xml"))
        );
        assert_eq!(config.detector.min_neighbors, 3);
        // Untouched keys keep their defaults
        assert_eq!(config.detector.scale_factor, 1.1);
        assert_eq!(config.filters.blur_kernel, 21);
        assert_eq!(config.filters.canny_low, 50.0);
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/camscope.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not [ valid toml").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_flag_wins_cascade_resolution() {
        let mut config = Config::default();
        config.detector.cascade = Some(PathBuf::from("/from/config.xml"));

        let resolved = resolve_cascade(Some(Path::new("/from/flag.xml")), &config).unwrap();
        assert_eq!(resolved, PathBuf::from("/from/flag.xml"));
    }

    #[test]
    fn test_config_cascade_used_without_flag() {
        let mut config = Config::default();
        config.detector.cascade = Some(PathBuf::from("/from/config.xml"));

        let resolved = resolve_cascade(None, &config).unwrap();
        assert_eq!(resolved, PathBuf::from("/from/config.xml"));
    }

    #[test]
    fn test_detect_params_from_config() {
        let config = Config::default();
        let params = config.detect_params();
        assert_eq!(params.scale_factor, 1.1);
        assert_eq!(params.min_neighbors, 5);
        assert_eq!(params.min_size, 30);
    }
}
