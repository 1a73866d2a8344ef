use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

/// Spatial state of a vehicle.
///
/// Axes follow the NED body convention: x forward, y right, z down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpatialComponent {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Angular velocity in body frame [rad/s]
    pub angular_velocity: Vector3<f64>,
}

impl Default for SpatialComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
        }
    }
}

impl SpatialComponent {
    pub fn new(
        position: Vector3<f64>,
        velocity: Vector3<f64>,
        attitude: UnitQuaternion<f64>,
        angular_velocity: Vector3<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            attitude,
            angular_velocity,
        }
    }

    /// Create a new spatial component at a specific position
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Body forward axis expressed in world coordinates
    pub fn forward(&self) -> Vector3<f64> {
        self.attitude * Vector3::x()
    }

    /// Body right axis expressed in world coordinates
    pub fn right(&self) -> Vector3<f64> {
        self.attitude * Vector3::y()
    }

    /// Body up axis expressed in world coordinates (NED: up is -z)
    pub fn up(&self) -> Vector3<f64> {
        self.attitude * -Vector3::z()
    }
}
