//! Simulation engine for CyberStrike.
//!
//! Owns the hecs ECS world together with the rapier physics world, the
//! renderer scene bridge and the deferred timer queue. Runs systems at a
//! fixed tick rate and produces GameStateSnapshots for the frontend.

pub mod engine;
pub mod error;
pub mod frame;
pub mod notifications;
pub mod persistence;
pub mod physics;
pub mod scene;
pub mod systems;
pub mod timers;
pub mod tutorial;
pub mod world_setup;

pub use cyberstrike_core as core;
pub use engine::{SimConfig, SimulationEngine};
pub use error::SimError;

#[cfg(test)]
mod tests;
