//! Engine configuration
//!
//! Immutable for the lifetime of one engine. Loaded from JSON; fields left
//! out of the file keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunable physics, pacing and spawn parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Flyer physics ===
    /// Downward acceleration (units/s²)
    pub gravity: f32,
    /// Upward velocity set by a flap; only the magnitude is used
    pub flap_impulse: f32,
    /// Vertical speed limit in both directions
    pub terminal_velocity: f32,

    // === Scrolling ===
    /// Scroll speed at the start of a run
    pub base_speed: f32,
    /// Scroll speed ceiling
    pub max_speed: f32,
    /// Scroll speed increase per second
    pub speed_ramp: f32,

    // === Gap ===
    /// Vertical opening of each obstacle
    pub gap_height: f32,
    /// Gap shrink per second (0 disables shrinking)
    pub gap_shrink_rate: f32,
    pub min_gap: f32,
    pub max_gap: f32,

    // === Geometry ===
    /// Horizontal distance between consecutive obstacles
    pub pipe_spacing: f32,
    pub pipe_width: f32,
    /// Side length of the square flyer hitbox
    pub flyer_size: f32,
    /// Band at the bottom of the screen the flyer can't enter
    pub floor_padding: f32,
    /// How far past the right edge new obstacles appear
    pub spawn_offset: f32,
    /// Flyer's horizontal position as a fraction of visible width
    pub flyer_x_fraction: f32,

    // === Spawning ===
    /// Probability (0..1) that a spawned obstacle brings a collectible
    pub stamp_chance: f64,
    /// RNG seed (random when absent)
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: 1800.0,
            flap_impulse: 520.0,
            terminal_velocity: 900.0,

            base_speed: 260.0,
            max_speed: 420.0,
            speed_ramp: 6.0,

            gap_height: 240.0,
            gap_shrink_rate: 0.0,
            min_gap: 170.0,
            max_gap: 240.0,

            pipe_spacing: 260.0,
            pipe_width: 72.0,
            flyer_size: 34.0,
            floor_padding: 80.0,
            spawn_offset: 120.0,
            flyer_x_fraction: 0.3,

            stamp_chance: 0.35,
            seed: None,
        }
    }
}

impl Config {
    /// Parse a JSON document and validate the result
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every value is usable by the engine
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("gravity", self.gravity),
            ("flap_impulse", self.flap_impulse),
            ("terminal_velocity", self.terminal_velocity),
            ("base_speed", self.base_speed),
            ("max_speed", self.max_speed),
            ("speed_ramp", self.speed_ramp),
            ("gap_height", self.gap_height),
            ("gap_shrink_rate", self.gap_shrink_rate),
            ("min_gap", self.min_gap),
            ("max_gap", self.max_gap),
            ("pipe_spacing", self.pipe_spacing),
            ("pipe_width", self.pipe_width),
            ("flyer_size", self.flyer_size),
            ("floor_padding", self.floor_padding),
            ("spawn_offset", self.spawn_offset),
            ("flyer_x_fraction", self.flyer_x_fraction),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(invalid(format!("{name} must be finite")));
        }

        if self.terminal_velocity <= 0.0 {
            return Err(invalid("terminal_velocity must be positive"));
        }
        if self.base_speed < 0.0 || self.max_speed < self.base_speed {
            return Err(invalid("speeds must satisfy 0 <= base_speed <= max_speed"));
        }
        if self.speed_ramp < 0.0 {
            return Err(invalid("speed_ramp must not be negative"));
        }
        if self.gap_height <= 0.0 {
            return Err(invalid("gap_height must be positive"));
        }
        if self.gap_shrink_rate != 0.0 && (self.min_gap <= 0.0 || self.min_gap > self.max_gap) {
            return Err(invalid("gap bounds must satisfy 0 < min_gap <= max_gap"));
        }
        if self.pipe_spacing <= 0.0 || self.pipe_width <= 0.0 || self.flyer_size <= 0.0 {
            return Err(invalid("pipe_spacing, pipe_width and flyer_size must be positive"));
        }
        if self.floor_padding < 0.0 || self.spawn_offset < 0.0 {
            return Err(invalid("floor_padding and spawn_offset must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.flyer_x_fraction) {
            return Err(invalid("flyer_x_fraction must be within 0..=1"));
        }
        if !(0.0..=1.0).contains(&self.stamp_chance) {
            return Err(invalid("stamp_chance must be within 0..=1"));
        }
        Ok(())
    }

    /// Upward velocity applied by a flap (always negative or zero)
    #[inline]
    pub fn flap_velocity(&self) -> f32 {
        -self.flap_impulse.abs()
    }

    /// Gap height at the start of a run
    pub fn initial_gap(&self) -> f32 {
        if self.gap_shrink_rate != 0.0 {
            self.gap_height.clamp(self.min_gap, self.max_gap)
        } else {
            self.gap_height
        }
    }
}

fn invalid(msg: impl Into<String>) -> ConfigError {
    ConfigError::Invalid(msg.into())
}
