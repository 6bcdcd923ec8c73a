//! Per-tick plumbing shared by the systems.

use cyberstrike_core::types::Position;

use crate::physics::PhysicsWorld;
use crate::scene::Scene;
use crate::timers::TimerQueue;

/// The external collaborators every entity is paired with: the physics
/// world, the renderer's scene and the deferred timer queue.
#[derive(Default)]
pub struct Backends {
    pub physics: PhysicsWorld,
    pub scene: Scene,
    pub timers: TimerQueue,
}

impl Backends {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Game events raised inside a tick and resolved once the systems are done.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    EnemyKilled { enemy_id: u32, position: Position },
    DestructibleDestroyed { position: Position },
    PlayerDamaged { damage: f32 },
    ExperienceGained { amount: u32 },
}
