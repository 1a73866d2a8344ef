use serde::{Deserialize, Serialize};

use super::ConfigError;

/// One keyframe of a lift curve: angle of attack [deg] to lift coefficient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveKey {
    pub angle: f64,
    pub coefficient: f64,
}

impl CurveKey {
    pub fn new(angle: f64, coefficient: f64) -> Self {
        Self { angle, coefficient }
    }
}

/// A 1-D lift curve sampled at keyframes with linear interpolation.
///
/// Evaluation outside the keyed range clamps to the end values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiftCurve {
    keys: Vec<CurveKey>,
}

impl LiftCurve {
    /// Build a curve from keyframes. Keys must be non-empty with strictly
    /// increasing angles.
    pub fn new(keys: Vec<CurveKey>) -> Result<Self, ConfigError> {
        let curve = Self { keys };
        curve.validate()?;
        Ok(curve)
    }

    /// Re-check the keyframe invariant. Deserialization does not go through
    /// `new`, so loaded configs must call this before the curve is sampled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.keys.is_empty() {
            return Err(ConfigError::ValidationError(
                "lift curve needs at least one key".to_string(),
            ));
        }
        for pair in self.keys.windows(2) {
            if pair[1].angle <= pair[0].angle {
                return Err(ConfigError::ValidationError(format!(
                    "lift curve keys must have strictly increasing angles ({} then {})",
                    pair[0].angle, pair[1].angle
                )));
            }
        }
        Ok(())
    }

    /// A symmetric curve with a stall past 15 degrees, suitable for a
    /// simple main wing.
    pub fn flat_plate() -> Self {
        Self {
            keys: vec![
                CurveKey::new(-90.0, 0.0),
                CurveKey::new(-20.0, -0.6),
                CurveKey::new(-15.0, -1.2),
                CurveKey::new(0.0, 0.0),
                CurveKey::new(15.0, 1.2),
                CurveKey::new(20.0, 0.6),
                CurveKey::new(90.0, 0.0),
            ],
        }
    }

    pub fn keys(&self) -> &[CurveKey] {
        &self.keys
    }

    /// Lift coefficient at the given angle of attack [deg]
    pub fn evaluate(&self, angle: f64) -> f64 {
        let first = self.keys[0];
        let last = self.keys[self.keys.len() - 1];
        if angle <= first.angle {
            return first.coefficient;
        }
        if angle >= last.angle {
            return last.coefficient;
        }

        for pair in self.keys.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if angle <= b.angle {
                let span = b.angle - a.angle;
                let t = (angle - a.angle) / span;
                return a.coefficient + (b.coefficient - a.coefficient) * t;
            }
        }
        last.coefficient
    }
}
