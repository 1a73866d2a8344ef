use nalgebra::Vector3;

use crate::components::{EngineComponent, Force, ForceCategory, ReferenceFrame};

/// Combined thrust of all engines over one tick.
///
/// Thrust acts purely along the body forward axis: engine placement
/// contributes no torque.
pub fn thrust_force(engines: &[EngineComponent], dt: f64) -> Force {
    let magnitude: f64 = engines
        .iter()
        .map(|engine| engine.power * engine.throttle * dt)
        .sum();
    Force {
        vector: Vector3::new(magnitude, 0.0, 0.0),
        frame: ReferenceFrame::Body,
        category: ForceCategory::Propulsive,
    }
}

/// Advance every engine's spool model by one tick
pub fn integrate_throttles(engines: &mut [EngineComponent], dt: f64) {
    for engine in engines {
        engine.integrate_throttle(dt);
    }
}
