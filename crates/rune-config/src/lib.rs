//! Rune tweener configuration system
//!
//! This crate provides centralized configuration for the tweener, loading
//! defaults from `rune.toml` with environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RuneConfig {
    /// Tween engine defaults
    pub tween: TweenConfig,
}

/// Tween engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TweenConfig {
    /// Frames per second of the tick loop
    pub fps: u32,
    /// Default duration in seconds
    pub time: f64,
    /// Default easing name (case-insensitive, e.g. "easeOutCubic")
    pub transition: String,
    /// Default start delay in seconds
    pub delay: f64,
}

impl Default for TweenConfig {
    fn default() -> Self {
        Self {
            fps: 55,
            time: 1.0,
            transition: "easeOutCubic".to_string(),
            delay: 0.0,
        }
    }
}

impl RuneConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the rune.toml configuration file
    ///
    /// # Returns
    /// * `Ok(RuneConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (rune.toml in the current directory)
    /// or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("rune.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// Values that fail to parse are ignored.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("RUNE_TWEEN_FPS") {
            if let Ok(fps) = val.trim().parse::<u32>() {
                self.tween.fps = fps;
            }
        }
        if let Ok(val) = std::env::var("RUNE_TWEEN_TIME") {
            if let Ok(time) = val.trim().parse::<f64>() {
                self.tween.time = time;
            }
        }
        if let Ok(transition) = std::env::var("RUNE_TWEEN_TRANSITION") {
            if !transition.trim().is_empty() {
                self.tween.transition = transition.trim().to_string();
            }
        }
        if let Ok(val) = std::env::var("RUNE_TWEEN_DELAY") {
            if let Ok(delay) = val.trim().parse::<f64>() {
                self.tween.delay = delay;
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// 1. Load from rune.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
