//! Background rendering for the orrery.
//!
//! Provides starfield and lighting systems.

use bevy::prelude::*;
use rand::Rng;

/// Plugin providing background visual elements.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<StarfieldSettings>()
            .add_systems(Startup, (spawn_starfield, spawn_lighting));
    }
}

/// Settings for the starfield.
#[derive(Resource, Clone, Debug)]
pub struct StarfieldSettings {
    /// Number of stars.
    pub count: usize,
    /// Side length of the cube the stars fill, centered on the origin.
    pub extent: f32,
    /// Rendered star radius.
    pub star_radius: f32,
}

impl Default for StarfieldSettings {
    fn default() -> Self {
        Self {
            count: 10_000,
            extent: 2000.0,
            star_radius: 0.1,
        }
    }
}

/// Uniformly random star positions inside the settings' cube.
pub fn star_positions<R: Rng>(settings: &StarfieldSettings, rng: &mut R) -> Vec<Vec3> {
    let half = settings.extent * 0.5;
    (0..settings.count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            )
        })
        .collect()
}

/// Spawn a starfield background with randomly placed stars.
fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<StarfieldSettings>,
) {
    // Material for stars - emissive white
    let star_material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        emissive: LinearRgba::WHITE * 0.5,
        unlit: true,
        ..default()
    });

    // Low-poly sphere; stars are a few pixels at most
    let star_mesh = meshes.add(Sphere::new(settings.star_radius).mesh().uv(6, 4));

    let positions = star_positions(&settings, &mut rand::thread_rng());
    commands.spawn_batch(positions.into_iter().map(move |pos| {
        (
            Mesh3d(star_mesh.clone()),
            MeshMaterial3d(star_material.clone()),
            Transform::from_translation(pos),
        )
    }));

    info!("Spawned {} background stars", settings.count);
}

/// Spawn lighting for the scene.
fn spawn_lighting(mut commands: Commands) {
    // Dim ambient so the night sides stay visible
    commands.insert_resource(GlobalAmbientLight {
        color: Color::srgb(0.2, 0.2, 0.2),
        brightness: 200.0,
        ..default()
    });

    // Point light at the sun
    commands.spawn((
        PointLight {
            color: Color::WHITE,
            intensity: 10_000_000.0,
            range: 1000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
    ));

    info!("Scene lighting initialized");
}
