//! Orrery - Animated Solar System
//!
//! A desktop application showing planets circling the sun over a starfield.

use bevy::prelude::*;

use orrery::camera::CameraPlugin;
use orrery::render::RenderPlugin;
use orrery::time::TimePlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Orrery".into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Time first: it registers the clock the render systems read
        .add_plugins((TimePlugin, CameraPlugin, RenderPlugin))
        .run();
}
