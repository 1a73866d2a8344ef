use nalgebra::{UnitQuaternion, Vector3};

use crate::components::{Force, ForceCategory, PhysicsComponent, ReferenceFrame, SpatialComponent};
use crate::utils::GRAVITY;

/// Weight of the vehicle (NED: positive z is down)
pub fn gravity_force(mass: f64) -> Force {
    Force {
        vector: Vector3::new(0.0, 0.0, mass * GRAVITY),
        frame: ReferenceFrame::Inertial,
        category: ForceCategory::Gravitational,
    }
}

/// Advance the spatial state by one tick.
///
/// Semi-implicit Euler over the accumulated forces, then the commanded
/// body rotation rates. Consumes the pending forces.
pub fn integrate(spatial: &mut SpatialComponent, physics: &mut PhysicsComponent, dt: f64) {
    let net = physics.net_force(&spatial.attitude);
    let acceleration = net / physics.mass;

    spatial.velocity += acceleration * dt;
    spatial.position += spatial.velocity * dt;

    if spatial.angular_velocity.norm_squared() > 0.0 {
        let rotation = UnitQuaternion::from_scaled_axis(spatial.angular_velocity * dt);
        spatial.attitude *= rotation;
    }

    physics.clear_forces();
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gravity_pulls_down() {
        let force = gravity_force(100.0);
        assert_relative_eq!(force.vector.z, 100.0 * GRAVITY);
    }

    #[test]
    fn test_free_fall_integration() {
        let mut spatial = SpatialComponent::default();
        let mut physics = PhysicsComponent::new(10.0);

        physics.add_force(gravity_force(physics.mass));
        integrate(&mut spatial, &mut physics, 1.0);

        assert_relative_eq!(spatial.velocity.z, GRAVITY, epsilon = 1e-10);
        assert_relative_eq!(spatial.position.z, GRAVITY, epsilon = 1e-10);
        assert!(physics.forces.is_empty());
    }

    #[test]
    fn test_rotation_rates_advance_attitude() {
        let mut spatial = SpatialComponent::default();
        let mut physics = PhysicsComponent::new(10.0);

        // Yaw at 90 deg/s for one second.
        spatial.angular_velocity = Vector3::new(0.0, 0.0, std::f64::consts::FRAC_PI_2);
        integrate(&mut spatial, &mut physics, 1.0);

        let forward = spatial.forward();
        assert_relative_eq!(forward.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(forward.y, 1.0, epsilon = 1e-10);
    }
}
