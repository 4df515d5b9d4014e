//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Defaults applied when a new tracer is placed.
    #[serde(default)]
    pub tracer: TracerDefaults,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Default tracer parameters and output style.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TracerDefaults {
    /// Output frame rate used when the source does not report one.
    pub fps: u32,

    /// Apex elevation as a fraction of frame height.
    pub peak_height: f64,

    /// Signed lateral bend.
    pub curve: f64,

    /// Rise-phase speed multiplier.
    pub ball_speed: f64,

    /// Apex hold and launch reach.
    pub hangtime: f64,

    /// Tracer colour at the ball's origin (hex).
    pub start_color: String,

    /// Tracer colour at the landing end (hex).
    pub end_color: String,

    /// Stroke width in pixels before tapering.
    pub line_width: u32,

    /// Glow radius hint for the renderer.
    pub glow_intensity: u32,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "opentrace=debug,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tracer: TracerDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for TracerDefaults {
    fn default() -> Self {
        Self {
            fps: 60,
            peak_height: 0.3,
            curve: 0.0,
            ball_speed: 1.0,
            hangtime: 0.3,
            start_color: "#FFD700".to_string(),
            end_color: "#FF4500".to_string(),
            line_width: 4,
            glow_intensity: 10,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Same config with the level raised to `debug`.
    pub fn verbose(&self) -> Self {
        Self {
            level: "debug".to_string(),
            ..self.clone()
        }
    }
}

impl AppConfig {
    /// Load config from the standard location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_file_path())
    }

    /// Load config from an explicit path, falling back to defaults.
    pub fn load_from(config_path: &std::path::Path) -> Self {
        if config_path.exists() {
            match std::fs::read_to_string(config_path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {:?}: {}", config_path, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {:?}: {}", config_path, e);
                }
            }
        }
        Self::default()
    }

    /// Save config to the standard location.
    pub fn save(&self) -> Result<(), std::io::Error> {
        self.save_to(&config_file_path())
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, config_path: &std::path::Path) -> Result<(), std::io::Error> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(config_path, json)
    }
}

/// Standard config file location.
pub fn config_file_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("opentrace").join("config.json")
}
