//! Simulation constants and host settings.
//!
//! [`Config`] can be built in code (`Config::default()` plus field
//! overrides) or loaded from YAML. Every field is optional in the file;
//! missing ones keep their default:
//!
//! ```yaml
//! gravitational_constant: 6.67e-11
//! dt: 0.001
//! bounds: { width: 1280.0, height: 720.0 }
//! spawn:
//!   min_mass: 7
//!   max_mass: 100000000
//!   min_radius: 5
//!   max_radius: 55
//!   scatter_count: 3
//! history_capacity: 500   # omit for an unbounded trail
//! tick_interval: 0.001
//! max_ticks_per_frame: 64
//! ```

use crate::bounds::Bounds;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Ranges random spawns draw from.
///
/// Radius and raw mass are drawn as integers; the spawned body's mass is
/// `mass_draw / radius`, so larger bodies end up lighter per draw.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnRanges {
    pub min_mass: u64,
    pub max_mass: u64,
    pub min_radius: u32,
    pub max_radius: u32,
    /// Bodies added by a single scatter.
    pub scatter_count: usize,
    pub min_scatter_speed: f64,
    pub max_scatter_speed: f64,
}

impl Default for SpawnRanges {
    fn default() -> Self {
        Self {
            min_mass: 7,
            max_mass: 100_000_000,
            min_radius: 5,
            max_radius: 55,
            scatter_count: 3,
            min_scatter_speed: -10.0,
            max_scatter_speed: 10.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub gravitational_constant: f64,
    /// Integration step passed to every tick.
    pub dt: f64,
    pub bounds: Bounds,
    pub spawn: SpawnRanges,
    /// `None` keeps every visited position.
    pub history_capacity: Option<usize>,
    /// Wall-clock seconds between ticks when a host drives the loop.
    pub tick_interval: f64,
    pub max_ticks_per_frame: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravitational_constant: 6.67e-11,
            dt: 0.001,
            bounds: Bounds::default(),
            spawn: SpawnRanges::default(),
            history_capacity: None,
            tick_interval: 0.001,
            max_ticks_per_frame: 64,
        }
    }
}

impl Config {
    pub fn from_yaml_str(src: &str) -> Result<Self, ConfigError> {
        let cfg: Config = serde_yaml::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let src = std::fs::read_to_string(path.as_ref())?;
        let cfg = Self::from_yaml_str(&src)?;
        log::info!("loaded config from {}", path.as_ref().display());
        Ok(cfg)
    }

    /// Checks the preconditions the integrator and spawner rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gravitational_constant.is_finite() {
            return Err(invalid("gravitational_constant must be finite"));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(invalid("dt must be positive and finite"));
        }
        if !self.bounds.is_valid() {
            return Err(invalid("bounds must be positive and finite"));
        }
        if !(self.tick_interval.is_finite() && self.tick_interval > 0.0) {
            return Err(invalid("tick_interval must be positive and finite"));
        }
        if self.max_ticks_per_frame == 0 {
            return Err(invalid("max_ticks_per_frame must be at least 1"));
        }

        let s = &self.spawn;
        if s.min_mass == 0 || s.min_mass > s.max_mass {
            return Err(invalid("spawn mass range must satisfy 1 <= min_mass <= max_mass"));
        }
        if s.min_radius == 0 || s.min_radius > s.max_radius {
            return Err(invalid(
                "spawn radius range must satisfy 1 <= min_radius <= max_radius",
            ));
        }
        if !(s.min_scatter_speed.is_finite()
            && s.max_scatter_speed.is_finite()
            && s.min_scatter_speed <= s.max_scatter_speed)
        {
            return Err(invalid("scatter speed range is inverted or not finite"));
        }
        Ok(())
    }
}

fn invalid(msg: &str) -> ConfigError {
    ConfigError::Invalid(msg.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = Config::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.gravitational_constant, 6.67e-11);
        assert_eq!(cfg.dt, 0.001);
        assert_eq!(cfg.spawn.min_mass, 7);
        assert_eq!(cfg.spawn.max_radius, 55);
        assert_eq!(cfg.history_capacity, None);
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg = Config::from_yaml_str(
            "dt: 0.5\nbounds: { width: 1280.0, height: 720.0 }\nspawn:\n  max_radius: 10\n",
        )
        .unwrap();

        assert_eq!(cfg.dt, 0.5);
        assert_eq!(cfg.bounds, Bounds::new(1280.0, 720.0));
        assert_eq!(cfg.spawn.max_radius, 10);
        assert_eq!(cfg.spawn.min_radius, 5);
        assert_eq!(cfg.gravitational_constant, 6.67e-11);
    }

    #[test]
    fn history_capacity_parses_from_yaml() {
        let cfg = Config::from_yaml_str("history_capacity: 32").unwrap();
        assert_eq!(cfg.history_capacity, Some(32));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = Config::from_yaml_str("dt: [1, 2").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut cfg = Config::default();
        cfg.dt = 0.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));

        let mut cfg = Config::default();
        cfg.bounds.width = -1.0;
        assert!(cfg.validate().is_err());

        let mut cfg = Config::default();
        cfg.spawn.min_radius = 60;
        assert!(cfg.validate().is_err());

        let mut cfg = Config::default();
        cfg.spawn.min_mass = 0;
        assert!(cfg.validate().is_err());

        assert!(Config::from_yaml_str("max_ticks_per_frame: 0").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
