//! Property-based tests for the orbital model using proptest.

use bevy::math::DVec3;
use proptest::prelude::*;

use super::{BodyConfig, OrbitalModel};

/// Strategy for a body table with unique names and a mix of central and
/// orbiting bodies.
fn body_table() -> impl Strategy<Value = Vec<BodyConfig>> {
    prop::collection::vec(
        (
            0.1f64..10.0,
            prop_oneof![Just(0.0), 0.5f64..100.0],
            -0.1f64..0.1,
            0.0f64..std::f64::consts::TAU,
        ),
        1..12,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (mean_radius, orbit_radius, speed, angle))| {
                BodyConfig::new(format!("body-{i}"), mean_radius, orbit_radius, speed)
                    .with_initial_angle(angle)
            })
            .collect()
    })
}

fn model_from(config: &[BodyConfig]) -> OrbitalModel {
    let mut model = OrbitalModel::default();
    model.initialize(config).expect("strategy yields valid tables");
    model
}

fn angles(model: &OrbitalModel) -> Vec<f64> {
    model
        .bodies()
        .expect("initialized")
        .iter()
        .map(|b| b.angle())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A zero step leaves every phase exactly where it was.
    #[test]
    fn prop_zero_delta_is_identity(
        config in body_table(),
        warmup in 0.0f64..500.0,
    ) {
        let mut model = model_from(&config);
        model.advance(warmup).unwrap();
        let before = angles(&model);

        model.advance(0.0).unwrap();

        prop_assert_eq!(angles(&model), before);
    }

    /// Central bodies stay at the origin however far time advances.
    #[test]
    fn prop_central_bodies_stay_at_origin(
        config in body_table(),
        deltas in prop::collection::vec(0.0f64..1000.0, 0..20),
    ) {
        let mut model = model_from(&config);
        for d in deltas {
            model.advance(d).unwrap();
        }

        for body in model.bodies().unwrap().iter().filter(|b| b.is_central()) {
            prop_assert_eq!(model.position_of(&body.name).unwrap(), DVec3::ZERO);
        }
    }

    /// Stepping through a delta sequence matches one step of the summed delta.
    #[test]
    fn prop_split_steps_match_single_step(
        config in body_table(),
        deltas in prop::collection::vec(0.0f64..100.0, 1..30),
    ) {
        let mut stepped = model_from(&config);
        let mut single = model_from(&config);

        let total: f64 = deltas.iter().sum();
        for &d in &deltas {
            stepped.advance(d).unwrap();
        }
        single.advance(total).unwrap();

        for (a, b) in angles(&stepped).into_iter().zip(angles(&single)) {
            prop_assert!(
                (a - b).abs() <= 1e-9 * (1.0 + b.abs()),
                "split {} vs single {}", a, b
            );
        }
    }

    /// Orbiting bodies stay on their circle in the XZ plane.
    #[test]
    fn prop_position_on_orbit_circle(
        config in body_table(),
        delta in 0.0f64..10_000.0,
    ) {
        let mut model = model_from(&config);
        model.advance(delta).unwrap();

        for snap in model.snapshot().unwrap() {
            let body = model.body(&snap.name).unwrap();
            prop_assert_eq!(snap.position.y, 0.0);
            let r = snap.position.length();
            prop_assert!((r - body.orbit_radius).abs() <= 1e-9 * (1.0 + body.orbit_radius));
        }
    }
}
