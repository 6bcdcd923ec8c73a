//! Mirror free-moving physics bodies (crates) into their positions and visuals.

use hecs::World;

use cyberstrike_core::components::{Destructible, Visual};
use cyberstrike_core::types::Position;

use crate::frame::Backends;
use crate::physics::PhysicsBody;

pub fn run(world: &mut World, backends: &mut Backends) {
    for (_entity, (crate_, position, body, visual)) in
        world.query_mut::<(&Destructible, &mut Position, &PhysicsBody, &Visual)>()
    {
        if crate_.destroyed {
            continue;
        }
        if let Some(p) = backends.physics.translation(body.0) {
            if p != *position {
                *position = p;
                backends.scene.move_to(visual.0, p);
            }
        }
    }
}
