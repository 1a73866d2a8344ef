use nalgebra::{UnitQuaternion, Vector3};
use skylark::components::AircraftConfig;
use skylark::utils::deg_to_rad;
use skylark::vehicles::Aircraft;

/// A fighter already flying straight at cruise speed with a small nose-up
/// attitude
pub fn cruising_fighter(airspeed: f64, pitch_deg: f64) -> Aircraft {
    let mut aircraft = Aircraft::from_config(AircraftConfig::fighter()).unwrap();
    aircraft.spatial.position = Vector3::new(0.0, 0.0, -1000.0);
    aircraft.spatial.velocity = Vector3::new(airspeed, 0.0, 0.0);
    aircraft.spatial.attitude = UnitQuaternion::from_euler_angles(0.0, deg_to_rad(pitch_deg), 0.0);
    aircraft
}

/// Run a fixed number of physics ticks at the default 50 Hz
pub fn run_ticks(aircraft: &mut Aircraft, ticks: usize) {
    for _ in 0..ticks {
        aircraft.fixed_update(skylark::utils::DEFAULT_FIXED_TIMESTEP);
    }
}
