use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{EngineComponent, WingComponent};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AircraftType {
    Fighter,
}

/// Full description of an aircraft: airframe mass plus its engines and
/// wings. Loadable from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftConfig {
    pub name: String,
    pub aircraft_type: AircraftType,

    /// Airframe mass excluding engines and wings [kg]
    pub mass: f64,

    pub engines: Vec<EngineComponent>,
    pub wings: Vec<WingComponent>,
}

impl AircraftConfig {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let contents = serde_yaml::to_string(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mass <= 0.0 {
            return Err(ConfigError::ValidationError(format!(
                "airframe mass must be positive, got {}",
                self.mass
            )));
        }
        if self.engines.is_empty() {
            return Err(ConfigError::ValidationError(
                "aircraft needs at least one engine".to_string(),
            ));
        }
        for engine in &self.engines {
            if engine.power < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "engine power must be non-negative, got {}",
                    engine.power
                )));
            }
            if !(0.0..=1.0).contains(&engine.throttle) {
                return Err(ConfigError::ValidationError(format!(
                    "engine throttle must be within [0, 1], got {}",
                    engine.throttle
                )));
            }
            if !(0.0..=1.0).contains(&engine.target_throttle) {
                return Err(ConfigError::ValidationError(format!(
                    "engine target throttle must be within [0, 1], got {}",
                    engine.target_throttle
                )));
            }
            if engine.acceleration < 0.0 || engine.deceleration < 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "engine spool rates must be non-negative, got {}/{}",
                    engine.acceleration, engine.deceleration
                )));
            }
        }
        for wing in &self.wings {
            if wing.size <= 0.0 {
                return Err(ConfigError::ValidationError(format!(
                    "wing size must be positive, got {}",
                    wing.size
                )));
            }
            wing.lift_curve.validate()?;
        }
        Ok(())
    }

    /// Total vehicle mass: airframe plus all attached parts [kg]
    pub fn total_mass(&self) -> f64 {
        self.mass
            + self.engines.iter().map(|e| e.mass).sum::<f64>()
            + self.wings.iter().map(|w| w.mass).sum::<f64>()
    }

    /// A small single-engine fighter: one main wing, one tailplane, one
    /// rudder.
    pub fn fighter() -> Self {
        Self {
            name: "Fighter".to_string(),
            aircraft_type: AircraftType::Fighter,
            mass: 6000.0,
            engines: vec![EngineComponent::new(1200.0, 75_000.0).with_spool_rates(1.5, 2.0)],
            wings: vec![
                WingComponent::flat(450.0, 24.0),
                WingComponent::flat(120.0, 6.0),
                WingComponent::rudder(80.0, 4.0),
            ],
        }
    }
}
