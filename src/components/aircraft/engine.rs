use serde::{Deserialize, Serialize};

use crate::utils::{MAX_THROTTLE, MIN_THROTTLE};

/// A single engine. Thrust acts along the body forward axis only, so
/// engine position plays no role in the force model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineComponent {
    /// Engine mass [kg]
    pub mass: f64,

    /// Maximum power output [W]
    pub power: f64,

    /// Current throttle setting [0-1]
    pub throttle: f64,

    /// Commanded throttle the current setting spools toward [0-1]
    pub target_throttle: f64,

    /// Spool-up rate [1/s]
    pub acceleration: f64,

    /// Spool-down rate [1/s]
    pub deceleration: f64,
}

impl EngineComponent {
    pub fn new(mass: f64, power: f64) -> Self {
        Self {
            mass,
            power,
            throttle: 0.0,
            target_throttle: 0.0,
            acceleration: 2.0,
            deceleration: 2.0,
        }
    }

    pub fn with_spool_rates(mut self, acceleration: f64, deceleration: f64) -> Self {
        self.acceleration = acceleration;
        self.deceleration = deceleration;
        self
    }

    /// Command a throttle setting, clamped to [0, 1]
    pub fn command_throttle(&mut self, throttle: f64) {
        self.target_throttle = throttle.clamp(MIN_THROTTLE, MAX_THROTTLE);
    }

    /// Set the throttle directly, bypassing the spool model
    pub fn set_throttle(&mut self, throttle: f64) {
        self.throttle = throttle.clamp(MIN_THROTTLE, MAX_THROTTLE);
        self.target_throttle = self.throttle;
    }

    /// Move the throttle toward the commanded setting over one tick
    pub fn integrate_throttle(&mut self, dt: f64) {
        let delta = self.target_throttle - self.throttle;
        if delta.abs() < f64::EPSILON {
            return;
        }
        let rate = if delta > 0.0 {
            self.acceleration
        } else {
            self.deceleration
        };
        let step = rate * dt;
        if delta.abs() <= step {
            self.throttle = self.target_throttle;
        } else {
            self.throttle += step * delta.signum();
        }
    }
}
