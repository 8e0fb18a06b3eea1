//! Camera setup for the orrery.
//!
//! A single fixed perspective camera above the orbital plane.

use bevy::prelude::*;

/// Camera position in render units.
pub const CAMERA_POSITION: Vec3 = Vec3::new(0.0, 30.0, 50.0);

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 75.0;

/// Near clip plane.
pub const NEAR: f32 = 0.1;

/// Far clip plane. Reaches the corners of the starfield cube.
pub const FAR: f32 = 2000.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}

/// Spawn the main camera with perspective projection.
fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR,
            far: FAR,
            ..default()
        }),
        Transform::from_translation(CAMERA_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));
}

