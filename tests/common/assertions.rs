use skylark::components::SpatialComponent;
use skylark::vehicles::Aircraft;

/// Assert that a spatial state contains no NaNs or infinities
#[track_caller]
pub fn assert_spatial_valid(spatial: &SpatialComponent) {
    assert!(spatial.position.x.is_finite(), "Position x is not finite");
    assert!(spatial.position.y.is_finite(), "Position y is not finite");
    assert!(spatial.position.z.is_finite(), "Position z is not finite");

    assert!(spatial.velocity.x.is_finite(), "Velocity x is not finite");
    assert!(spatial.velocity.y.is_finite(), "Velocity y is not finite");
    assert!(spatial.velocity.z.is_finite(), "Velocity z is not finite");

    assert!(
        spatial.angular_velocity.iter().all(|x| x.is_finite()),
        "Angular velocity contains non-finite values"
    );
}

/// Assert that an aircraft's full state is physically sane
#[track_caller]
pub fn assert_aircraft_valid(aircraft: &Aircraft) {
    assert!(aircraft.physics.mass > 0.0, "Mass must be positive");
    assert_spatial_valid(&aircraft.spatial);
    for engine in &aircraft.engines {
        assert!(
            (0.0..=1.0).contains(&engine.throttle),
            "Throttle out of range: {}",
            engine.throttle
        );
    }
}
