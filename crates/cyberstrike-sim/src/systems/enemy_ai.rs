//! Enemy AI system: runs the FSM for every living enemy and applies its
//! velocity commands and shots.

use glam::Vec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

use cyberstrike_ai::fsm::{evaluate, patrol_waypoint, EnemyContext};
use cyberstrike_core::components::{Enemy, EnemyBrain, Player, Visual};
use cyberstrike_core::constants::*;
use cyberstrike_core::enums::{EnemyState, ProjectileKind};
use cyberstrike_core::events::AudioEvent;
use cyberstrike_core::types::{Position, Velocity};

use crate::frame::Backends;
use crate::physics::PhysicsBody;
use crate::world_setup;

struct Shot {
    enemy_id: u32,
    origin: Position,
    direction: Vec3,
    damage: f32,
}

pub fn run(
    world: &mut World,
    backends: &mut Backends,
    rng: &mut ChaCha8Rng,
    tick: u64,
    audio_events: &mut Vec<AudioEvent>,
) {
    let Some(player_position) = world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
    else {
        return;
    };

    let mut shots: Vec<Shot> = Vec::new();
    for (_entity, (enemy, brain, position, velocity, body, visual)) in world.query_mut::<(
        &Enemy,
        &mut EnemyBrain,
        &mut Position,
        &mut Velocity,
        &PhysicsBody,
        &Visual,
    )>() {
        if enemy.health <= 0.0 || brain.state == EnemyState::Dead {
            continue;
        }

        let current = backends.physics.velocity(body.0).unwrap_or(*velocity);
        let ctx = EnemyContext {
            archetype: enemy.archetype,
            state: brain.state,
            position: *position,
            velocity: current,
            player_position,
            patrol_target: brain.patrol_target,
            tick,
            last_attack_tick: brain.last_attack_tick,
        };
        let update = evaluate(&ctx);

        if update.state_changed {
            trace!(enemy = enemy.id, from = ?brain.state, to = ?update.new_state, "enemy state");
        }
        brain.state = update.new_state;
        if update.pick_patrol_target {
            brain.patrol_target = patrol_waypoint(position, rng);
        }
        if let Some(direction) = update.fire_direction {
            brain.last_attack_tick = Some(tick);
            shots.push(Shot {
                enemy_id: enemy.id,
                origin: *position,
                direction,
                damage: enemy.damage,
            });
        }

        backends.physics.set_velocity(body.0, update.new_velocity);
        *velocity = update.new_velocity;
        if let Some(p) = backends.physics.translation(body.0) {
            *position = p;
        }
        backends.scene.move_to(visual.0, *position);
    }

    for shot in shots {
        world_setup::spawn_projectile(
            world,
            backends,
            ProjectileKind::EnemyBullet,
            shot.origin,
            shot.direction,
            ENEMY_PROJECTILE_SPEED,
            shot.damage,
            ENEMY_PROJECTILE_LIFETIME,
        );
        audio_events.push(AudioEvent::EnemyShoot {
            enemy_id: shot.enemy_id,
        });
    }
}
