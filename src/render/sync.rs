//! Position synchronization between the orbital model and rendering.
//!
//! Updates visual Transform positions from the model snapshot and applies
//! the cosmetic axial spin.

use bevy::prelude::*;

use crate::orbital::OrbitalModel;
use crate::render::bodies::CelestialBody;
use crate::time::SimulationClock;

/// Axial rotation applied to every body, purely visual.
#[derive(Resource, Clone, Debug)]
pub struct BodySpin {
    /// Radians per simulated time unit.
    pub rate: f32,
}

impl Default for BodySpin {
    fn default() -> Self {
        Self { rate: 0.01 }
    }
}

/// Sync body render positions from the orbital model.
pub fn sync_body_transforms(
    mut query: Query<(&mut Transform, &CelestialBody)>,
    model: Res<OrbitalModel>,
) {
    let snapshot = match model.snapshot() {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!("Skipping transform sync: {err}");
            return;
        }
    };

    for (mut transform, body) in query.iter_mut() {
        let Some(entry) = snapshot.iter().find(|s| s.name == body.name) else {
            continue;
        };
        // f64 model units to f32 render units
        transform.translation = entry.position.as_vec3();
    }
}

/// Spin every body about its Y axis.
pub fn spin_bodies(
    mut query: Query<&mut Transform, With<CelestialBody>>,
    spin: Res<BodySpin>,
    clock: Res<SimulationClock>,
    time: Res<Time>,
) {
    let dt = clock.delta_for(time.delta_secs_f64()) as f32;
    if dt == 0.0 {
        return;
    }

    for mut transform in query.iter_mut() {
        transform.rotate_y(spin.rate * dt);
    }
}
