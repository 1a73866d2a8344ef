use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::utils::{deg_to_rad, lerp};

/// Shaped control demands in [-1, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInputs {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

/// Raw per-frame input sample, before shaping. How these are polled from
/// a device is the caller's concern.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawInputs {
    /// Vertical axis in [-1, 1]
    pub pitch_axis: f64,
    /// Horizontal axis in [-1, 1]
    pub roll_axis: f64,
    pub yaw_left: bool,
    pub yaw_right: bool,
    /// Freeze pitch/roll at their current demands and modulate them
    pub aileron_lock: bool,
}

/// Turns raw input samples into control demands.
///
/// While the aileron lock is held, pitch and roll keep their last demand;
/// pushing into the held direction scales the demand up (x1.5), pushing
/// against it scales it down (x0.5), and centering the stick restores the
/// demand to a full +/-1. Opposing yaw inputs cancel.
#[derive(Debug, Clone)]
pub struct InputShaper {
    active: Vector3<f64>, // pitch (x), yaw (y), roll (z)
    mult_up: f64,
    mult_down: f64,
}

impl Default for InputShaper {
    fn default() -> Self {
        Self {
            active: Vector3::zeros(),
            mult_up: 1.5,
            mult_down: 0.5,
        }
    }
}

impl InputShaper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shape(&mut self, raw: &RawInputs) -> ControlInputs {
        if !raw.aileron_lock {
            self.active = Vector3::new(raw.pitch_axis, 0.0, -raw.roll_axis);
        }

        self.active.y = match (raw.yaw_left, raw.yaw_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        };

        if raw.aileron_lock {
            self.active.x =
                Self::locked_axis(self.active.x, raw.pitch_axis, self.mult_up, self.mult_down);
            self.active.z =
                Self::locked_axis(self.active.z, -raw.roll_axis, self.mult_up, self.mult_down);
        }

        ControlInputs {
            pitch: self.active.x,
            yaw: self.active.y,
            roll: self.active.z,
        }
    }

    fn locked_axis(value: f64, input: f64, mult_up: f64, mult_down: f64) -> f64 {
        let mut value = value;
        if value > 0.0 {
            if input >= 1.0 && value < mult_up {
                value *= mult_up;
            } else if input <= -1.0 && value > mult_down {
                value *= mult_down;
            }
        } else if value < 0.0 {
            if input <= -1.0 && value > -mult_up {
                value *= mult_up;
            } else if input >= 1.0 && value < -mult_down {
                value *= mult_down;
            }
        }

        // Centered stick restores the held demand to full deflection.
        if input == 0.0 {
            if value < 0.0 {
                value = -1.0;
            } else if value > 0.0 {
                value = 1.0;
            }
        }
        value
    }
}

/// Maximum rotation rates [deg/s] and demand smoothing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightControlConfig {
    /// Pitch, yaw, roll rate limits [deg/s]
    pub movement_strengths: Vector3<f64>,
    /// Demand smoothing factor [1/s]
    pub smoothing: f64,
}

impl Default for FlightControlConfig {
    fn default() -> Self {
        Self {
            movement_strengths: Vector3::new(90.0, 25.0, 100.0),
            smoothing: 2.5,
        }
    }
}

/// Smooths control demands into body rotation rates
#[derive(Debug, Clone)]
pub struct FlightControlSystem {
    config: FlightControlConfig,
    /// Pitch, yaw, roll rates [deg/s]
    rotation_speed: Vector3<f64>,
}

impl FlightControlSystem {
    pub fn new(config: FlightControlConfig) -> Self {
        Self {
            config,
            rotation_speed: Vector3::zeros(),
        }
    }

    /// Per-frame: move the rotation rates toward the demanded rates
    pub fn update(&mut self, inputs: &ControlInputs, dt: f64) {
        let factor = dt * self.config.smoothing;
        let strengths = &self.config.movement_strengths;
        self.rotation_speed.x = lerp(self.rotation_speed.x, inputs.pitch * strengths.x, factor);
        self.rotation_speed.y = lerp(self.rotation_speed.y, inputs.yaw * strengths.y, factor);
        self.rotation_speed.z = lerp(self.rotation_speed.z, inputs.roll * strengths.z, factor);
    }

    /// Current body rotation rates [rad/s]: roll about x, pitch about y,
    /// yaw about z
    pub fn body_rates(&self) -> Vector3<f64> {
        Vector3::new(
            deg_to_rad(self.rotation_speed.z),
            deg_to_rad(self.rotation_speed.x),
            deg_to_rad(self.rotation_speed.y),
        )
    }

    pub fn rotation_speed(&self) -> &Vector3<f64> {
        &self.rotation_speed
    }
}

impl Default for FlightControlSystem {
    fn default() -> Self {
        Self::new(FlightControlConfig::default())
    }
}
