//! Configuration loading for astral.
//!
//! Settings live in `config.toml` under the platform config directory
//! (e.g. `~/.config/astral/config.toml` on Linux). Missing keys fall
//! back to their defaults, and a missing or malformed file falls back to
//! the full default configuration so startup never fails on config.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use astral_core::Variant;
use directories::ProjectDirs;
use serde::Deserialize;

/// Runtime configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which scene to run.
    pub variant: Variant,
    /// Target frames per second (clamped to 1..=120).
    pub fps: u32,
    /// Optional RNG seed for a reproducible sky.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            variant: Variant::Hero,
            fps: 60,
            seed: None,
        }
    }
}

impl Config {
    /// Load from the platform config file, falling back to defaults.
    pub fn load() -> Config {
        config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .and_then(|text| toml::from_str(&text).ok())
            .unwrap_or_default()
    }

    /// Frame interval implied by the configured fps.
    pub fn tick_interval(&self) -> Duration {
        let fps = self.fps.clamp(1, 120);
        Duration::from_nanos(1_000_000_000 / fps as u64)
    }
}

/// Path to the config file, if a platform config dir exists.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "astral").map(|dirs| dirs.config_dir().join("config.toml"))
}
