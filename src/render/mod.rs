//! Rendering systems for the orrery.
//!
//! This module provides visual representation of celestial bodies,
//! orbit rings, and background elements.

mod background;
pub mod bodies;
mod orbits;
mod sync;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::CelestialBodyPlugin;
use self::orbits::OrbitRingPlugin;
use self::sync::{spin_bodies, sync_body_transforms};
use crate::time::AdvanceOrbitsSet;

// Re-export for use in other modules
pub use self::background::{StarfieldSettings, star_positions};
pub use self::bodies::CelestialBody;
pub use self::orbits::{OrbitRingSettings, ring_radii};
pub use self::sync::BodySpin;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            CelestialBodyPlugin,
            BackgroundPlugin,
            OrbitRingPlugin,
            SyncPlugin,
        ));
    }
}

/// Per-frame transform updates, ordered after the model advances:
/// 1. sync_body_transforms - positions from the model snapshot
/// 2. spin_bodies - cosmetic axial rotation
///
/// Needs no render assets, so headless tests can add it on its own.
pub struct SyncPlugin;

impl Plugin for SyncPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BodySpin>().add_systems(
            Update,
            (sync_body_transforms, spin_bodies)
                .chain()
                .after(AdvanceOrbitsSet),
        );
    }
}
