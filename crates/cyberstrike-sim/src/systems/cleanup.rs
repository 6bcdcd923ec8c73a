//! Cleanup system: the single release path for entities.
//!
//! Releasing an entity removes its rigid body, its visual and every timer
//! it owns before despawning it, so nothing it was paired with outlives it.

use hecs::{Entity, World};
use tracing::trace;

use cyberstrike_core::components::Visual;

use crate::frame::Backends;
use crate::physics::PhysicsBody;

/// Release one entity. Returns false if it was already gone.
pub fn release(world: &mut World, backends: &mut Backends, entity: Entity) -> bool {
    if !world.contains(entity) {
        return false;
    }

    let body = world.get::<&PhysicsBody>(entity).ok().map(|b| b.0);
    if let Some(handle) = body {
        backends.physics.remove_body(handle);
    }
    let visual = world.get::<&Visual>(entity).ok().map(|v| v.0);
    if let Some(id) = visual {
        backends.scene.despawn(id);
    }
    let cancelled = backends.timers.cancel_owned_by(entity);
    trace!(?entity, cancelled, "released entity");

    world.despawn(entity).is_ok()
}

/// Release everything collected in the despawn buffer this tick.
/// Duplicates in the buffer are harmless.
pub fn run(world: &mut World, backends: &mut Backends, despawn_buffer: &mut Vec<Entity>) {
    for entity in despawn_buffer.drain(..) {
        release(world, backends, entity);
    }
}

/// Release every entity and drop all remaining visuals and timers.
pub fn release_all(world: &mut World, backends: &mut Backends) {
    let entities: Vec<Entity> = world.iter().map(|e| e.entity()).collect();
    for entity in entities {
        release(world, backends, entity);
    }
    // Effect visuals have no entity of their own
    backends.scene.clear();
    backends.timers.clear();
}
