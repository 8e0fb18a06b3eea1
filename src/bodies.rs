//! Body table for the sun and the eight planets.
//! Sizes and distances are scaled for visualization, not physical.

use bevy::color::Color;

use crate::orbital::BodyConfig;

/// Static data for one body of the visualized system.
#[derive(Clone, Debug)]
pub struct SolarBodyData {
    pub name: &'static str,
    pub mean_radius: f64,
    pub orbit_radius: f64,
    /// Radians per simulated time unit.
    pub angular_speed: f64,
    /// sRGB display color.
    pub color: [f32; 3],
    /// Whether the body glows (the star).
    pub emissive: bool,
}

impl SolarBodyData {
    pub fn color(&self) -> Color {
        let [r, g, b] = self.color;
        Color::srgb(r, g, b)
    }

    pub fn config(&self) -> BodyConfig {
        BodyConfig::new(
            self.name,
            self.mean_radius,
            self.orbit_radius,
            self.angular_speed,
        )
    }
}

/// The full body table, central star first.
pub fn solar_system() -> Vec<SolarBodyData> {
    vec![
        SolarBodyData {
            name: "Sun",
            mean_radius: 5.0,
            orbit_radius: 0.0,
            angular_speed: 0.0,
            color: [1.0, 1.0, 0.0],
            emissive: true,
        },
        SolarBodyData {
            name: "Mercury",
            mean_radius: 0.8,
            orbit_radius: 10.0,
            angular_speed: 0.04,
            color: [0.55, 0.55, 0.55],
            emissive: false,
        },
        SolarBodyData {
            name: "Venus",
            mean_radius: 1.2,
            orbit_radius: 15.0,
            angular_speed: 0.015,
            color: [0.9, 0.72, 0.0],
            emissive: false,
        },
        SolarBodyData {
            name: "Earth",
            mean_radius: 1.5,
            orbit_radius: 20.0,
            angular_speed: 0.01,
            color: [0.0, 0.25, 1.0],
            emissive: false,
        },
        SolarBodyData {
            name: "Mars",
            mean_radius: 1.0,
            orbit_radius: 25.0,
            angular_speed: 0.008,
            color: [1.0, 0.2, 0.0],
            emissive: false,
        },
        SolarBodyData {
            name: "Jupiter",
            mean_radius: 3.0,
            orbit_radius: 32.0,
            angular_speed: 0.002,
            color: [0.7, 0.35, 0.0],
            emissive: false,
        },
        SolarBodyData {
            name: "Saturn",
            mean_radius: 2.5,
            orbit_radius: 40.0,
            angular_speed: 0.0009,
            color: [1.0, 0.8, 0.6],
            emissive: false,
        },
        SolarBodyData {
            name: "Uranus",
            mean_radius: 1.8,
            orbit_radius: 45.0,
            angular_speed: 0.0004,
            color: [0.4, 0.8, 1.0],
            emissive: false,
        },
        SolarBodyData {
            name: "Neptune",
            mean_radius: 1.8,
            orbit_radius: 50.0,
            angular_speed: 0.0001,
            color: [0.0, 0.0, 0.8],
            emissive: false,
        },
    ]
}

/// Model configuration for [`solar_system`].
pub fn solar_system_config() -> Vec<BodyConfig> {
    solar_system().iter().map(SolarBodyData::config).collect()
}

/// Look up a body's table entry by name.
pub fn find_body(name: &str) -> Option<SolarBodyData> {
    solar_system().into_iter().find(|b| b.name == name)
}
