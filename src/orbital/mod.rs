//! Orbital animation model.
//!
//! Bodies move on circles in the XZ plane around the origin. Each body's phase
//! advances linearly with simulated time; there is no gravitation. The model is
//! a plain resource: callers feed it time steps and read positions back.

mod error;

#[cfg(test)]
mod proptest_orbital;

use std::collections::HashSet;
use std::f64::consts::TAU;

use bevy::math::DVec3;
use bevy::prelude::*;
use rand::Rng;

pub use self::error::{ConfigError, OrbitalError};

/// One entry of the body table used to initialize the model.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    /// Visual size, arbitrary units.
    pub mean_radius: f64,
    /// Distance from the origin; 0 for a central body.
    pub orbit_radius: f64,
    /// Radians per simulated time unit.
    pub angular_speed: f64,
    /// Starting phase in radians. When `None`, the initializer picks one.
    pub initial_angle: Option<f64>,
}

impl BodyConfig {
    pub fn new(
        name: impl Into<String>,
        mean_radius: f64,
        orbit_radius: f64,
        angular_speed: f64,
    ) -> Self {
        Self {
            name: name.into(),
            mean_radius,
            orbit_radius,
            angular_speed,
            initial_angle: None,
        }
    }

    /// Pin the starting phase of this body.
    pub fn with_initial_angle(mut self, angle: f64) -> Self {
        self.initial_angle = Some(angle);
        self
    }
}

/// A body tracked by the model.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    pub mean_radius: f64,
    pub orbit_radius: f64,
    pub angular_speed: f64,
    angle: f64,
}

impl CelestialBody {
    /// Current phase in radians. Not normalized.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Whether this body sits at the origin.
    pub fn is_central(&self) -> bool {
        self.orbit_radius == 0.0
    }

    /// Position on the orbit circle in the XZ plane.
    pub fn position(&self) -> DVec3 {
        if self.is_central() {
            return DVec3::ZERO;
        }
        let (sin, cos) = self.angle.sin_cos();
        DVec3::new(self.orbit_radius * cos, 0.0, self.orbit_radius * sin)
    }
}

/// Position of one body at a simulated instant.
#[derive(Clone, Debug, PartialEq)]
pub struct BodySnapshot {
    pub name: String,
    pub position: DVec3,
}

/// Owns the body table and advances orbital phases.
///
/// A default-constructed model is uninitialized; every operation except
/// [`initialize`](Self::initialize) fails with [`OrbitalError::NotInitialized`]
/// until a body table has been loaded.
#[derive(Resource, Clone, Debug, Default)]
pub struct OrbitalModel {
    bodies: Option<Vec<CelestialBody>>,
}

impl OrbitalModel {
    /// Load the body table. Bodies without an explicit initial angle start at 0.
    pub fn initialize(&mut self, config: &[BodyConfig]) -> Result<(), OrbitalError> {
        self.initialize_with(config, |_| 0.0)
    }

    /// Load the body table, giving bodies without an explicit initial angle a
    /// uniformly random phase in `[0, 2π)`.
    pub fn initialize_with_rng<R: Rng>(
        &mut self,
        config: &[BodyConfig],
        rng: &mut R,
    ) -> Result<(), OrbitalError> {
        self.initialize_with(config, |_| rng.gen_range(0.0..TAU))
    }

    fn initialize_with(
        &mut self,
        config: &[BodyConfig],
        mut phase: impl FnMut(&BodyConfig) -> f64,
    ) -> Result<(), OrbitalError> {
        if self.bodies.is_some() {
            return Err(ConfigError::AlreadyInitialized.into());
        }
        validate(config)?;

        let bodies = config
            .iter()
            .map(|entry| CelestialBody {
                name: entry.name.clone(),
                mean_radius: entry.mean_radius,
                orbit_radius: entry.orbit_radius,
                angular_speed: entry.angular_speed,
                angle: entry.initial_angle.unwrap_or_else(|| phase(entry)),
            })
            .collect();

        self.bodies = Some(bodies);
        Ok(())
    }

    /// Advance every orbiting body by `delta_time` simulated units.
    pub fn advance(&mut self, delta_time: f64) -> Result<(), OrbitalError> {
        let bodies = self.bodies.as_mut().ok_or(OrbitalError::NotInitialized)?;
        if !delta_time.is_finite() || delta_time < 0.0 {
            return Err(OrbitalError::InvalidDelta(delta_time));
        }

        for body in bodies.iter_mut().filter(|b| !b.is_central()) {
            body.angle += body.angular_speed * delta_time;
        }
        Ok(())
    }

    /// Current position of the named body.
    pub fn position_of(&self, name: &str) -> Result<DVec3, OrbitalError> {
        self.body(name).map(CelestialBody::position)
    }

    /// Positions of all bodies, in configuration order.
    pub fn snapshot(&self) -> Result<Vec<BodySnapshot>, OrbitalError> {
        Ok(self
            .bodies()?
            .iter()
            .map(|body| BodySnapshot {
                name: body.name.clone(),
                position: body.position(),
            })
            .collect())
    }

    pub fn is_initialized(&self) -> bool {
        self.bodies.is_some()
    }

    pub fn bodies(&self) -> Result<&[CelestialBody], OrbitalError> {
        self.bodies.as_deref().ok_or(OrbitalError::NotInitialized)
    }

    pub fn body(&self, name: &str) -> Result<&CelestialBody, OrbitalError> {
        self.bodies()?
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| OrbitalError::UnknownBody(name.to_string()))
    }

    /// Number of bodies, or 0 before initialization.
    pub fn len(&self) -> usize {
        self.bodies.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate(config: &[BodyConfig]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(config.len());

    for (index, entry) in config.iter().enumerate() {
        if entry.name.is_empty() {
            return Err(ConfigError::EmptyName { index });
        }

        let fields = [
            ("mean radius", entry.mean_radius),
            ("orbit radius", entry.orbit_radius),
            ("angular speed", entry.angular_speed),
            ("initial angle", entry.initial_angle.unwrap_or(0.0)),
        ];
        if let Some((field, _)) = fields.into_iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite {
                name: entry.name.clone(),
                field,
            });
        }

        if entry.orbit_radius < 0.0 {
            return Err(ConfigError::NegativeOrbitRadius {
                name: entry.name.clone(),
                orbit_radius: entry.orbit_radius,
            });
        }
        if entry.mean_radius <= 0.0 {
            return Err(ConfigError::InvalidMeanRadius {
                name: entry.name.clone(),
                mean_radius: entry.mean_radius,
            });
        }
        if !seen.insert(entry.name.as_str()) {
            return Err(ConfigError::DuplicateName(entry.name.clone()));
        }
    }

    Ok(())
}
