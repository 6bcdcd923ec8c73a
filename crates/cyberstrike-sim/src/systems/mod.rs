//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` plus whichever backends
//! they touch. They keep no state of their own; everything lives in
//! components, the backends or the engine.

pub mod cleanup;
pub mod effects;
pub mod enemy_ai;
pub mod leveling;
pub mod pickups;
pub mod player;
pub mod projectiles;
pub mod snapshot;
pub mod sync;
pub mod weapons;
