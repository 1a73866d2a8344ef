use nalgebra::Vector3;

use crate::components::{Force, ForceCategory, ReferenceFrame, SpatialComponent, WingComponent};
use crate::utils::{rad_to_deg, rotate_by_euler_deg, signed_angle};

const MIN_DYNAMIC_PRESSURE: f64 = 1e-6;

/// Per-wing aerodynamic sample for one tick
#[derive(Debug, Clone, Copy)]
pub struct WingAirData {
    /// Angle of attack [deg]
    pub angle_of_attack: f64,
    /// Lift coefficient from the wing's curve
    pub coefficient: f64,
    /// Lift magnitude [N]
    pub magnitude: f64,
}

/// Sample one wing against the current attitude and airspeed.
///
/// The angle of attack is attitude-based: the signed angle between the
/// horizontal projection of the wing's forward axis and the axis itself,
/// measured about the wing's right axis. A rudder (rolled 90 degrees)
/// therefore sees no angle of attack from pure pitch.
pub fn wing_air_data(
    wing: &WingComponent,
    spatial: &SpatialComponent,
    air_density: f64,
) -> WingAirData {
    let dynamic_pressure = 0.5 * air_density * spatial.velocity.norm_squared();
    if dynamic_pressure <= MIN_DYNAMIC_PRESSURE {
        return WingAirData {
            angle_of_attack: 0.0,
            coefficient: 0.0,
            magnitude: 0.0,
        };
    }

    let wing_forward = spatial.attitude * rotate_by_euler_deg(&Vector3::x(), &wing.orientation);
    let wing_right = spatial.attitude * rotate_by_euler_deg(&Vector3::y(), &wing.orientation);

    let towards_horizon = Vector3::new(wing_forward.x, wing_forward.y, 0.0);
    let angle_of_attack = if towards_horizon.norm() <= f64::EPSILON {
        0.0
    } else {
        rad_to_deg(signed_angle(&towards_horizon, &wing_forward, &wing_right))
    };

    let coefficient = wing.lift_curve.evaluate(angle_of_attack);
    WingAirData {
        angle_of_attack,
        coefficient,
        magnitude: coefficient * wing.size * dynamic_pressure,
    }
}

/// Lift force of every wing, applied along each wing's up axis in world
/// coordinates
pub fn lift_forces(
    wings: &[WingComponent],
    spatial: &SpatialComponent,
    air_density: f64,
) -> Vec<Force> {
    wings
        .iter()
        .map(|wing| {
            let air_data = wing_air_data(wing, spatial, air_density);
            let wing_up = spatial.attitude * rotate_by_euler_deg(&-Vector3::z(), &wing.orientation);
            Force {
                vector: wing_up * air_data.magnitude,
                frame: ReferenceFrame::Inertial,
                category: ForceCategory::Aerodynamic,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{CurveKey, LiftCurve};
    use crate::utils::{deg_to_rad, ISA_SEA_LEVEL_DENSITY};
    use approx::assert_relative_eq;
    use nalgebra::UnitQuaternion;

    fn linear_curve() -> LiftCurve {
        LiftCurve::new(vec![CurveKey::new(-30.0, -3.0), CurveKey::new(30.0, 3.0)]).unwrap()
    }

    fn moving_spatial(pitch_deg: f64) -> SpatialComponent {
        SpatialComponent {
            velocity: Vector3::new(50.0, 0.0, 0.0),
            attitude: UnitQuaternion::from_euler_angles(0.0, deg_to_rad(pitch_deg), 0.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_angle_of_attack_tracks_pitch() {
        let wing = WingComponent::new(10.0, 5.0, Vector3::zeros(), linear_curve());
        let air_data = wing_air_data(&wing, &moving_spatial(10.0), ISA_SEA_LEVEL_DENSITY);
        assert_relative_eq!(air_data.angle_of_attack, 10.0, epsilon = 1e-9);
        assert_relative_eq!(air_data.coefficient, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_lift_magnitude_uses_dynamic_pressure() {
        let wing = WingComponent::new(10.0, 5.0, Vector3::zeros(), linear_curve());
        let spatial = moving_spatial(10.0);
        let air_data = wing_air_data(&wing, &spatial, ISA_SEA_LEVEL_DENSITY);

        let q = 0.5 * ISA_SEA_LEVEL_DENSITY * 50.0 * 50.0;
        assert_relative_eq!(air_data.magnitude, 1.0 * 5.0 * q, epsilon = 1e-6);
    }

    #[test]
    fn test_no_lift_when_stationary() {
        let wing = WingComponent::new(10.0, 5.0, Vector3::zeros(), linear_curve());
        let spatial = SpatialComponent::default();
        let air_data = wing_air_data(&wing, &spatial, ISA_SEA_LEVEL_DENSITY);
        assert_relative_eq!(air_data.magnitude, 0.0);
    }

    #[test]
    fn test_rudder_sees_no_angle_of_attack_from_pitch() {
        let rudder = WingComponent::new(
            10.0,
            5.0,
            Vector3::new(90.0, 0.0, 0.0),
            linear_curve(),
        );
        let air_data = wing_air_data(&rudder, &moving_spatial(10.0), ISA_SEA_LEVEL_DENSITY);
        assert_relative_eq!(air_data.angle_of_attack, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_flat_wing_lift_points_up() {
        let wing = WingComponent::new(10.0, 5.0, Vector3::zeros(), linear_curve());
        let spatial = moving_spatial(10.0);
        let forces = lift_forces(std::slice::from_ref(&wing), &spatial, ISA_SEA_LEVEL_DENSITY);
        assert_eq!(forces.len(), 1);
        // NED: up is negative z.
        assert!(forces[0].vector.z < 0.0);
    }
}
