use nalgebra::{UnitQuaternion, Vector2, Vector3};
use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor.clamp(0.0, 1.0)
}

/// Rotate a vector by Euler angles given in degrees (roll, pitch, yaw)
pub fn rotate_by_euler_deg(vector: &Vector3<f64>, angles_deg: &Vector3<f64>) -> Vector3<f64> {
    let rotation = UnitQuaternion::from_euler_angles(
        deg_to_rad(angles_deg.x),
        deg_to_rad(angles_deg.y),
        deg_to_rad(angles_deg.z),
    );
    rotation * vector
}

/// Signed angle between two vectors about an axis [rad].
///
/// The sine term is projected onto the axis, so components of the
/// rotation perpendicular to the axis do not contribute.
pub fn signed_angle(from: &Vector3<f64>, to: &Vector3<f64>, axis: &Vector3<f64>) -> f64 {
    let axis_unit = match axis.try_normalize(1e-12) {
        Some(unit) => unit,
        None => return 0.0,
    };
    from.cross(to).dot(&axis_unit).atan2(from.dot(to))
}

/// Rotate a 2D vector by an angle in radians
pub fn rotate_vec2_rad(vector: &Vector2<f64>, angle: f64) -> Vector2<f64> {
    Vector2::new(
        vector.x * angle.cos() - angle.sin() * vector.y,
        vector.x * angle.sin() + angle.cos() * vector.y,
    )
}

/// Rotate a 2D vector by an angle in degrees
pub fn rotate_vec2_deg(vector: &Vector2<f64>, angle_deg: f64) -> Vector2<f64> {
    rotate_vec2_rad(vector, deg_to_rad(angle_deg))
}

/// Which components of a 2D vector a smoothing factor applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmoothAxis {
    X,
    Y,
    Both,
}

/// Scale the selected components of a 2D vector by a factor
pub fn smooth_vec2(vector: &Vector2<f64>, factor: f64, axis: SmoothAxis) -> Vector2<f64> {
    match axis {
        SmoothAxis::X => Vector2::new(vector.x * factor, vector.y),
        SmoothAxis::Y => Vector2::new(vector.x, vector.y * factor),
        SmoothAxis::Both => Vector2::new(vector.x * factor, vector.y * factor),
    }
}
