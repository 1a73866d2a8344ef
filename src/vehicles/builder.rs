use crate::components::{AircraftConfig, AircraftType, ConfigError};

use super::Aircraft;

/// Builds one kind of aircraft
pub trait AircraftBuilder {
    fn config(&self) -> AircraftConfig;

    fn build(&self) -> Result<Aircraft, ConfigError> {
        Aircraft::from_config(self.config())
    }
}

/// Builder for the fighter preset
#[derive(Debug, Default)]
pub struct FighterBuilder;

impl AircraftBuilder for FighterBuilder {
    fn config(&self) -> AircraftConfig {
        AircraftConfig::fighter()
    }
}

/// Creates aircraft by type
#[derive(Default)]
pub struct AircraftFactory;

impl AircraftFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn create(&self, aircraft_type: AircraftType) -> Result<Aircraft, ConfigError> {
        match aircraft_type {
            AircraftType::Fighter => FighterBuilder.build(),
        }
    }
}
