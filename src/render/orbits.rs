//! Orbit ring rendering using Bevy Gizmos.
//!
//! Every orbiting body gets a circle of its orbit radius in the XZ plane.

use std::f32::consts::FRAC_PI_2;

use bevy::math::Isometry3d;
use bevy::prelude::*;

use crate::orbital::OrbitalModel;
use crate::render::sync::sync_body_transforms;
use crate::time::AdvanceOrbitsSet;

/// Plugin providing orbit ring visualization.
pub struct OrbitRingPlugin;

impl Plugin for OrbitRingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitRingSettings>().add_systems(
            Update,
            draw_orbit_rings
                .after(AdvanceOrbitsSet)
                .after(sync_body_transforms),
        );
    }
}

/// Settings for orbit ring rendering.
#[derive(Resource, Clone, Debug)]
pub struct OrbitRingSettings {
    /// Whether to show orbit rings.
    pub visible: bool,
    /// Number of segments per ring (higher = smoother).
    pub segments: u32,
    /// Alpha value for ring color.
    pub alpha: f32,
}

impl Default for OrbitRingSettings {
    fn default() -> Self {
        Self {
            visible: true,
            segments: 64,
            alpha: 0.15,
        }
    }
}

impl OrbitRingSettings {
    pub fn color(&self) -> Color {
        Color::srgba(0.27, 0.27, 0.27, self.alpha)
    }
}

/// Radii of the rings to draw, one per orbiting body.
pub fn ring_radii(model: &OrbitalModel) -> Vec<f32> {
    model
        .bodies()
        .map(|bodies| {
            bodies
                .iter()
                .filter(|b| !b.is_central())
                .map(|b| b.orbit_radius as f32)
                .collect()
        })
        .unwrap_or_default()
}

/// Draw a ring for each orbiting body.
pub fn draw_orbit_rings(
    mut gizmos: Gizmos,
    settings: Res<OrbitRingSettings>,
    model: Res<OrbitalModel>,
) {
    if !settings.visible {
        return;
    }

    // Gizmo circles lie in their local XY plane; tip them onto XZ
    let flat = Isometry3d::from_rotation(Quat::from_rotation_x(FRAC_PI_2));
    let color = settings.color();
    let segments = settings.segments.max(8);

    for radius in ring_radii(&model) {
        gizmos.circle(flat, radius, color).resolution(segments);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbital::BodyConfig;

    #[test]
    fn test_rings_skip_central_bodies() {
        let mut model = OrbitalModel::default();
        model
            .initialize(&[
                BodyConfig::new("Sun", 5.0, 0.0, 0.0),
                BodyConfig::new("Mercury", 0.8, 10.0, 0.04),
                BodyConfig::new("Venus", 1.2, 15.0, 0.015),
            ])
            .unwrap();
        assert_eq!(ring_radii(&model), [10.0, 15.0]);
    }

    #[test]
    fn test_no_rings_before_initialization() {
        assert!(ring_radii(&OrbitalModel::default()).is_empty());
    }
}
