use nalgebra::Vector3;

use crate::components::{
    AircraftConfig, AircraftType, ConfigError, EngineComponent, PhysicsComponent, SpatialComponent,
    WingComponent,
};
use crate::systems::{
    gravity_force, integrate, integrate_throttles, lift_forces, thrust_force, ControlInputs,
    FlightControlSystem,
};
use crate::utils::ISA_SEA_LEVEL_DENSITY;

/// A simulated aircraft assembled from a validated configuration.
///
/// The caller drives it with two clocks, the way a game loop does:
/// `update` once per frame with the current control demands, and
/// `fixed_update` once per physics tick.
#[derive(Debug)]
pub struct Aircraft {
    pub name: String,
    pub aircraft_type: AircraftType,

    pub spatial: SpatialComponent,
    pub physics: PhysicsComponent,
    pub engines: Vec<EngineComponent>,
    pub wings: Vec<WingComponent>,
    pub controls: FlightControlSystem,

    air_density: f64,
    thrust: Vector3<f64>,
    lift: Vector3<f64>,
}

impl Aircraft {
    pub fn from_config(config: AircraftConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let physics = PhysicsComponent::new(config.total_mass());
        Ok(Self {
            name: config.name,
            aircraft_type: config.aircraft_type,
            spatial: SpatialComponent::default(),
            physics,
            engines: config.engines,
            wings: config.wings,
            controls: FlightControlSystem::default(),
            air_density: ISA_SEA_LEVEL_DENSITY,
            thrust: Vector3::zeros(),
            lift: Vector3::zeros(),
        })
    }

    pub fn with_air_density(mut self, air_density: f64) -> Self {
        self.air_density = air_density;
        self
    }

    /// Command all engines toward a throttle setting in [0, 1]
    pub fn command_throttle(&mut self, throttle: f64) {
        for engine in &mut self.engines {
            engine.command_throttle(throttle);
        }
    }

    /// Per-frame step: smooth control demands into rotation rates
    pub fn update(&mut self, inputs: &ControlInputs, dt: f64) {
        self.controls.update(inputs, dt);
    }

    /// Physics tick: spool engines, accumulate thrust, lift and gravity,
    /// then integrate
    pub fn fixed_update(&mut self, dt: f64) {
        integrate_throttles(&mut self.engines, dt);
        self.spatial.angular_velocity = self.controls.body_rates();

        let thrust = thrust_force(&self.engines, dt);
        self.thrust = self.spatial.attitude * thrust.vector;
        self.physics.add_force(thrust);

        self.lift = Vector3::zeros();
        for force in lift_forces(&self.wings, &self.spatial, self.air_density) {
            self.lift += force.vector;
            self.physics.add_force(force);
        }

        self.physics.add_force(gravity_force(self.physics.mass));

        integrate(&mut self.spatial, &mut self.physics, dt);
    }

    /// Thrust applied during the last tick, in world coordinates [N]
    pub fn thrust(&self) -> &Vector3<f64> {
        &self.thrust
    }

    /// Total lift applied during the last tick, in world coordinates [N]
    pub fn lift(&self) -> &Vector3<f64> {
        &self.lift
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_config_sums_mass() {
        let aircraft = Aircraft::from_config(AircraftConfig::fighter()).unwrap();
        assert_relative_eq!(aircraft.physics.mass, AircraftConfig::fighter().total_mass());
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let mut config = AircraftConfig::fighter();
        config.mass = -1.0;
        assert!(Aircraft::from_config(config).is_err());
    }

    #[test]
    fn test_full_throttle_accelerates_forward() {
        let mut aircraft = Aircraft::from_config(AircraftConfig::fighter()).unwrap();
        for engine in &mut aircraft.engines {
            engine.set_throttle(1.0);
        }

        let dt = 0.02;
        aircraft.fixed_update(dt);

        assert!(aircraft.spatial.velocity.x > 0.0);
        assert!(aircraft.thrust().x > 0.0);
    }

    #[test]
    fn test_stationary_aircraft_falls() {
        let mut aircraft = Aircraft::from_config(AircraftConfig::fighter()).unwrap();
        aircraft.fixed_update(0.02);
        // NED: falling increases z.
        assert!(aircraft.spatial.velocity.z > 0.0);
        assert_relative_eq!(aircraft.lift().norm(), 0.0);
    }
}
