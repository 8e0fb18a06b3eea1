//! Simulation clock for the orrery.
//!
//! Converts real frame time into simulated time units and drives the
//! orbital model once per frame.

use bevy::prelude::*;

use crate::orbital::OrbitalModel;

/// Simulated units per real second at scale 1. One unit per frame at 60 Hz,
/// so body speeds read as radians per frame.
pub const DEFAULT_UNITS_PER_SECOND: f64 = 60.0;

/// System set for the model update. Rendering sync runs after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdvanceOrbitsSet;

/// Simulation clock resource.
#[derive(Resource, Clone, Debug)]
pub struct SimulationClock {
    /// Simulated units elapsed since startup.
    pub elapsed: f64,
    /// Simulated units per real second.
    pub scale: f64,
    /// Whether simulation is paused
    pub paused: bool,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            scale: DEFAULT_UNITS_PER_SECOND,
            paused: false,
        }
    }
}

impl SimulationClock {
    /// Simulated units corresponding to `real_secs` of wall time.
    /// Zero while paused.
    pub fn delta_for(&self, real_secs: f64) -> f64 {
        if self.paused {
            0.0
        } else {
            real_secs * self.scale
        }
    }
}

/// Plugin providing time advancement functionality.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SimulationClock>()
            .init_resource::<OrbitalModel>()
            .add_systems(Update, advance_orbits.in_set(AdvanceOrbitsSet));
    }
}

/// Advance the clock and the orbital model by this frame's delta.
pub fn advance_orbits(
    mut clock: ResMut<SimulationClock>,
    mut model: ResMut<OrbitalModel>,
    time: Res<Time>,
) {
    if clock.paused {
        return;
    }

    let dt = clock.delta_for(time.delta_secs_f64());
    if let Err(err) = model.advance(dt) {
        error!("Failed to advance orbits by {dt}: {err}");
        return;
    }
    clock.elapsed += dt;
}
