//! Common test utilities for integration tests.

use bevy::prelude::*;
use orrery::orbital::{BodyConfig, OrbitalModel};

/// Sun at the origin and Earth starting on the +X axis.
pub fn sun_and_earth() -> Vec<BodyConfig> {
    vec![
        BodyConfig::new("Sun", 5.0, 0.0, 0.0),
        BodyConfig::new("Earth", 1.5, 20.0, 0.01).with_initial_angle(0.0),
    ]
}

/// Model loaded with [`sun_and_earth`].
pub fn sun_and_earth_model() -> OrbitalModel {
    let mut model = OrbitalModel::default();
    model
        .initialize(&sun_and_earth())
        .expect("sun/earth table is valid");
    model
}

/// Current angle of a body, panicking if it is missing.
pub fn angle_of(model: &OrbitalModel, name: &str) -> f64 {
    model.body(name).expect("body exists").angle()
}

/// Assert two render-space vectors agree to within `eps` per component.
pub fn assert_vec3_near(actual: Vec3, expected: Vec3, eps: f32) {
    assert!(
        (actual - expected).abs().max_element() <= eps,
        "expected {expected:?}, got {actual:?}"
    );
}
