//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file, and centralizes the
//! default values for the zoom engine's constants.
//!
//! Zoom state itself is deliberately not persisted; the only preference kept
//! across runs is the UI language.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ZoomView";

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor when an image is first loaded (1.0 = fit the viewport).
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.0;

/// Minimum allowed zoom factor.
pub const MIN_ZOOM_FACTOR: f32 = 1.0;

/// Maximum allowed zoom factor.
pub const MAX_ZOOM_FACTOR: f32 = 5.0;

/// Multiplier applied per zoom-in step (wheel notch up or `+` button).
pub const ZOOM_IN_FACTOR: f32 = 1.1;

/// Multiplier applied per zoom-out step (wheel notch down or `-` button).
pub const ZOOM_OUT_FACTOR: f32 = 0.9;

// ==========================================================================
// Scrollbar Defaults
// ==========================================================================

/// Smallest thumb length, as a percentage of the track, so the indicator
/// stays perceptible at maximum zoom.
pub const MIN_THUMB_PERCENT: f32 = 20.0;

/// Thumb length when an axis does not overflow.
pub const FULL_THUMB_PERCENT: f32 = 100.0;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub language: Option<String>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
