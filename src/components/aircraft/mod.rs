mod config;
mod engine;
mod lift_curve;
mod wing;

pub use config::{AircraftConfig, AircraftType, ConfigError};
pub use engine::EngineComponent;
pub use lift_curve::{CurveKey, LiftCurve};
pub use wing::WingComponent;
