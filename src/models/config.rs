use chroma_core::{Illuminant, Observer};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "CHROMAPICK_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Reference illuminant label for Lab/LCh output (A, C, D50, ...)
    #[serde(default = "default_illuminant")]
    pub illuminant: String,

    /// Standard observer label, "2" or "10"
    #[serde(default = "default_observer")]
    pub observer: String,

    /// Palette settings
    #[serde(default)]
    pub palette: PaletteConfig,

    /// Default output format
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_illuminant() -> String {
    "D50".to_string()
}

fn default_observer() -> String {
    "2".to_string()
}

/// Configuration for palette extraction
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaletteConfig {
    /// Maximum number of colors to extract
    #[serde(default = "default_colors")]
    pub colors: usize,

    /// Octree depth
    #[serde(default = "default_depth")]
    pub max_depth: u32,

    /// Prefix for entry names; the input file name when unset
    #[serde(default)]
    pub name: Option<String>,
}

fn default_colors() -> usize {
    chroma_core::quantize::DEFAULT_MAX_COLORS
}

fn default_depth() -> u32 {
    chroma_core::quantize::DEFAULT_MAX_DEPTH
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            max_depth: default_depth(),
            name: None,
        }
    }
}

/// How command results are printed
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl AppConfig {
    /// Parse a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self, AppError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Read and parse a YAML file.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from `path`, or from the file named by
    /// `CHROMAPICK_CONFIG` when `path` is `None`.
    ///
    /// A missing or broken file is not fatal: it is logged and the defaults
    /// are used.
    pub fn load(path: Option<&Path>) -> Self {
        let path = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    illuminant = %config.illuminant,
                    observer = %config.observer,
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve the configured labels. Unknown labels fall back to D50 and
    /// the 2 degree observer with a warning.
    pub fn reference(&self) -> (Illuminant, Observer) {
        let illuminant = self.illuminant.parse().unwrap_or_else(|e| {
            tracing::warn!(%e, "Falling back to D50");
            Illuminant::default()
        });
        let observer = self.observer.parse().unwrap_or_else(|e| {
            tracing::warn!(%e, "Falling back to 2 degree observer");
            Observer::default()
        });
        (illuminant, observer)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            illuminant: default_illuminant(),
            observer: default_observer(),
            palette: PaletteConfig::default(),
            output: OutputFormat::default(),
        }
    }
}
