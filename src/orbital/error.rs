//! Error types for the orbital model.

/// A malformed body table passed to [`OrbitalModel::initialize`].
///
/// [`OrbitalModel::initialize`]: super::OrbitalModel::initialize
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("body {name:?} has negative orbit radius {orbit_radius}")]
    NegativeOrbitRadius { name: String, orbit_radius: f64 },

    #[error("duplicate body name {0:?}")]
    DuplicateName(String),

    #[error("body {name:?} has invalid mean radius {mean_radius} (must be positive)")]
    InvalidMeanRadius { name: String, mean_radius: f64 },

    #[error("body {name:?} has a non-finite {field}")]
    NonFinite { name: String, field: &'static str },

    #[error("body at index {index} has an empty name")]
    EmptyName { index: usize },

    #[error("orbital model is already initialized")]
    AlreadyInitialized,
}

/// Errors returned by [`OrbitalModel`](super::OrbitalModel) operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OrbitalError {
    #[error("invalid body table: {0}")]
    Config(#[from] ConfigError),

    #[error("orbital model used before initialization")]
    NotInitialized,

    #[error("no body named {0:?}")]
    UnknownBody(String),

    #[error("invalid time step: {0} (must be finite and non-negative)")]
    InvalidDelta(f64),
}
