//! Simulation configuration
//!
//! Consumed once at construction by the embedding loop. Kept separate from
//! run snapshots: a snapshot captures a run in flight, the config describes
//! how to start one.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{MAX_BALLS, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Startup configuration for a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Viewport width (wall-collision bound)
    pub width: f32,
    /// Viewport height (wall-collision bound)
    pub height: f32,
    /// Cap on ball count; extra digits in the input are ignored
    pub max_balls: usize,
    /// RNG seed for spawn positions and initial velocities
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            max_balls: MAX_BALLS,
            seed: 0,
        }
    }
}

impl SimConfig {
    /// Load config from a JSON file, falling back to defaults when the file
    /// is missing or malformed.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring invalid config {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
