//! Orrery - Animated Solar System
//!
//! A library crate providing the orbital animation model and the Bevy
//! plugins that render it.

pub mod bodies;
pub mod camera;
pub mod orbital;
pub mod render;
pub mod time;
