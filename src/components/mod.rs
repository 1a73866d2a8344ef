pub mod aircraft;
mod physics;
mod spatial;

pub use aircraft::{
    AircraftConfig, AircraftType, ConfigError, CurveKey, EngineComponent, LiftCurve, WingComponent,
};
pub use physics::{Force, ForceCategory, PhysicsComponent, ReferenceFrame};
pub use spatial::SpatialComponent;
