mod aerodynamics;
mod controller;
mod physics;
mod propulsion;

pub use aerodynamics::{lift_forces, wing_air_data, WingAirData};
pub use controller::{
    ControlInputs, FlightControlConfig, FlightControlSystem, InputShaper, RawInputs,
};
pub use physics::{gravity_force, integrate};
pub use propulsion::{integrate_throttles, thrust_force};
