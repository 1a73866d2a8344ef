use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Accumulated rigid-body state for one vehicle.
///
/// Forces are collected over a tick and consumed by the integrator.
/// The model is force-only: engine and wing positions play no role, so
/// no moments are tracked and rotation is purely kinematic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhysicsComponent {
    pub mass: f64,
    pub forces: Vec<Force>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Force {
    pub vector: Vector3<f64>,
    pub frame: ReferenceFrame,
    pub category: ForceCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceFrame {
    Body,
    Inertial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceCategory {
    Aerodynamic,
    Propulsive,
    Gravitational,
}

impl PhysicsComponent {
    pub fn new(mass: f64) -> Self {
        Self {
            mass,
            forces: Vec::new(),
        }
    }

    pub fn add_force(&mut self, force: Force) {
        self.forces.push(force);
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
    }

    /// Sum of all pending forces in the given attitude's world frame
    pub fn net_force(&self, attitude: &nalgebra::UnitQuaternion<f64>) -> Vector3<f64> {
        self.forces
            .iter()
            .map(|force| match force.frame {
                ReferenceFrame::Body => attitude * force.vector,
                ReferenceFrame::Inertial => force.vector,
            })
            .sum()
    }
}
