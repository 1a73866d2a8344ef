use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::LiftCurve;

/// A lifting surface.
///
/// `orientation` is the Euler rotation in degrees (roll, pitch, yaw) from
/// the default flat wing. A rudder is a flat wing rolled 90 degrees:
/// (90, 0, 0). Wing position plays no role in the force model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WingComponent {
    /// Wing mass [kg]
    pub mass: f64,

    /// Wing area [m^2]
    pub size: f64,

    /// Euler rotation from the flat default [deg]
    pub orientation: Vector3<f64>,

    /// Angle of attack to lift coefficient
    pub lift_curve: LiftCurve,
}

impl WingComponent {
    pub fn new(mass: f64, size: f64, orientation: Vector3<f64>, lift_curve: LiftCurve) -> Self {
        Self {
            mass,
            size,
            orientation,
            lift_curve,
        }
    }

    /// A flat main wing with the default stall curve
    pub fn flat(mass: f64, size: f64) -> Self {
        Self::new(mass, size, Vector3::zeros(), LiftCurve::flat_plate())
    }

    /// A vertical surface: a flat wing rolled 90 degrees
    pub fn rudder(mass: f64, size: f64) -> Self {
        Self::new(
            mass,
            size,
            Vector3::new(90.0, 0.0, 0.0),
            LiftCurve::flat_plate(),
        )
    }
}
