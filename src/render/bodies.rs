//! Celestial body rendering and spawning.
//!
//! Loads the body table into the orbital model and spawns one sphere per body.

use bevy::prelude::*;

use crate::bodies::{solar_system, solar_system_config};
use crate::orbital::OrbitalModel;

/// Component marking an entity as a renderable celestial body.
#[derive(Component, Debug)]
pub struct CelestialBody {
    /// Name of the body in the orbital model.
    pub name: String,
    /// Rendered sphere radius.
    pub radius: f32,
}

/// Plugin providing celestial body spawning functionality.
pub struct CelestialBodyPlugin;

impl Plugin for CelestialBodyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitalModel>()
            .add_systems(Startup, (initialize_model, spawn_solar_system).chain());
    }
}

/// Load the body table with a random starting phase per planet.
pub fn initialize_model(mut model: ResMut<OrbitalModel>) {
    if model.is_initialized() {
        return;
    }

    let config = solar_system_config();
    match model.initialize_with_rng(&config, &mut rand::thread_rng()) {
        Ok(()) => info!("Initialized orbital model with {} bodies", model.len()),
        Err(err) => error!("Failed to initialize orbital model: {err}"),
    }
}

/// Spawn all celestial bodies at their initial positions.
fn spawn_solar_system(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    model: Res<OrbitalModel>,
) {
    let snapshot = match model.snapshot() {
        Ok(snapshot) => snapshot,
        Err(err) => {
            error!("Cannot spawn bodies: {err}");
            return;
        }
    };

    let table = solar_system();
    for entry in snapshot {
        let Some(data) = table.iter().find(|b| b.name == entry.name) else {
            warn!("No display data for body {}", entry.name);
            continue;
        };

        let radius = data.mean_radius as f32;
        let mesh = meshes.add(Sphere::new(radius).mesh().uv(64, 64));

        // The star is unlit and glows; planets take light from it
        let color = data.color();
        let material = materials.add(StandardMaterial {
            base_color: color,
            emissive: if data.emissive {
                color.to_linear() * 0.5
            } else {
                LinearRgba::BLACK
            },
            unlit: data.emissive,
            perceptual_roughness: 0.7,
            ..default()
        });

        commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(entry.position.as_vec3()),
            CelestialBody {
                name: entry.name,
                radius,
            },
        ));
    }

    info!("Spawned {} celestial bodies", model.len());
}
