pub const GRAVITY: f64 = 9.80665; // m/s^2
pub const ISA_SEA_LEVEL_DENSITY: f64 = 1.225; // kg/m^3

pub const DEFAULT_FIXED_TIMESTEP: f64 = 1.0 / 50.0; // Physics tick length [s]

// Control limits
pub const MAX_THROTTLE: f64 = 1.0;
pub const MIN_THROTTLE: f64 = 0.0;
