//! Projectile system: lifetime, transform read-back, hit detection,
//! grenade explosions and damage.
//!
//! Hits are applied immediately so a later projectile in the same tick
//! sees the damage dealt by an earlier one. Entities that die are marked
//! and queued for release; the cleanup system frees them at tick end.

use hecs::{Entity, World};
use tracing::debug;

use cyberstrike_core::components::*;
use cyberstrike_core::constants::*;
use cyberstrike_core::enums::{EnemyState, ProjectileKind};
use cyberstrike_core::events::AudioEvent;
use cyberstrike_core::types::Position;

use crate::frame::{Backends, FrameEvent};
use crate::physics::PhysicsBody;
use crate::systems::effects;

/// Output sinks for combat resolution.
pub struct HitFeedback<'a> {
    pub events: &'a mut Vec<FrameEvent>,
    pub audio_events: &'a mut Vec<AudioEvent>,
    pub despawn_buffer: &'a mut Vec<Entity>,
    pub frame: u64,
}

/// What a projectile struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Enemy(Entity),
    Player(Entity),
    Destructible(Entity),
}

impl HitTarget {
    /// Tie-break order when two targets are equally near.
    fn priority(self) -> u8 {
        match self {
            HitTarget::Enemy(_) => 0,
            HitTarget::Player(_) => 1,
            HitTarget::Destructible(_) => 2,
        }
    }
}

/// Damage falloff: full at the center, zero at the radius.
pub fn explosion_damage(max_damage: f32, distance: f32) -> f32 {
    if distance >= EXPLOSION_RADIUS {
        0.0
    } else {
        max_damage * (1.0 - distance / EXPLOSION_RADIUS)
    }
}

pub fn run(world: &mut World, backends: &mut Backends, feedback: &mut HitFeedback) {
    // 1. Age, read back, cull expired
    let mut live: Vec<(Entity, ProjectileKind, f32, Position)> = Vec::new();
    for (entity, (projectile, position, body, visual)) in
        world.query_mut::<(&mut Projectile, &mut Position, &PhysicsBody, &Visual)>()
    {
        projectile.life_secs -= DT;
        if projectile.life_secs <= 0.0 {
            feedback.despawn_buffer.push(entity);
            continue;
        }
        if let Some(p) = backends.physics.translation(body.0) {
            *position = p;
        }
        backends.scene.move_to(visual.0, *position);
        live.push((entity, projectile.kind, projectile.damage, *position));
    }

    // 2. Collide, at most one hit per projectile
    for (entity, kind, damage, position) in live {
        let Some(target) = nearest_target(world, kind, &position) else {
            continue;
        };
        feedback.despawn_buffer.push(entity);

        match target {
            HitTarget::Enemy(e) => damage_enemy(world, backends, e, damage, feedback),
            HitTarget::Player(e) => damage_player(world, e, damage, feedback),
            HitTarget::Destructible(e) => damage_destructible(world, e, damage, feedback),
        }

        if kind == ProjectileKind::Grenade {
            explode(world, backends, position, feedback);
        }
    }
}

/// The closest target within hit range of a projectile, if any.
pub fn nearest_target(world: &World, kind: ProjectileKind, position: &Position) -> Option<HitTarget> {
    let mut best: Option<(f32, HitTarget)> = None;
    let mut consider = |distance: f32, target: HitTarget| {
        let better = match best {
            None => true,
            Some((d, t)) => distance < d || (distance == d && target.priority() < t.priority()),
        };
        if better {
            best = Some((distance, target));
        }
    };

    if kind == ProjectileKind::EnemyBullet {
        for (e, (_, pos)) in world.query::<(&Player, &Position)>().iter() {
            let d = position.range_to(pos);
            if d < PLAYER_HIT_RADIUS {
                consider(d, HitTarget::Player(e));
            }
        }
    } else {
        for (e, (enemy, pos)) in world.query::<(&Enemy, &Position)>().iter() {
            let d = position.range_to(pos);
            if enemy.health > 0.0 && d < ENEMY_HIT_RADIUS {
                consider(d, HitTarget::Enemy(e));
            }
        }
    }

    for (e, (crate_, pos)) in world.query::<(&Destructible, &Position)>().iter() {
        let d = position.range_to(pos);
        if !crate_.destroyed && d < DESTRUCTIBLE_HIT_RADIUS {
            consider(d, HitTarget::Destructible(e));
        }
    }

    best.map(|(_, target)| target)
}

/// Damage an enemy, killing it at zero health. Dead enemies are ignored.
pub fn damage_enemy(
    world: &mut World,
    backends: &mut Backends,
    entity: Entity,
    damage: f32,
    feedback: &mut HitFeedback,
) {
    let Ok((enemy, brain, position)) =
        world.query_one_mut::<(&mut Enemy, &mut EnemyBrain, &Position)>(entity)
    else {
        return;
    };
    if enemy.health <= 0.0 {
        return;
    }

    enemy.health -= damage;
    feedback.audio_events.push(AudioEvent::EnemyHit { enemy_id: enemy.id });
    effects::hit_spark(backends, feedback.frame, *position);

    if enemy.health <= 0.0 {
        enemy.health = 0.0;
        brain.state = EnemyState::Dead;
        debug!(enemy = enemy.id, "enemy killed");
        feedback.events.push(FrameEvent::EnemyKilled {
            enemy_id: enemy.id,
            position: *position,
        });
        feedback.despawn_buffer.push(entity);
    }
}

/// Damage the player. Health never drops below zero.
pub fn damage_player(world: &mut World, entity: Entity, damage: f32, feedback: &mut HitFeedback) {
    let Ok(stats) = world.query_one_mut::<&mut PlayerStats>(entity) else {
        return;
    };
    stats.health = (stats.health - damage).max(0.0);
    feedback.audio_events.push(AudioEvent::PlayerHit { damage });
    feedback.events.push(FrameEvent::PlayerDamaged { damage });
}

pub fn damage_destructible(world: &mut World, entity: Entity, damage: f32, feedback: &mut HitFeedback) {
    let Ok((crate_, position)) = world.query_one_mut::<(&mut Destructible, &Position)>(entity) else {
        return;
    };
    if crate_.destroyed {
        return;
    }
    crate_.health -= damage;
    if crate_.health <= 0.0 {
        crate_.destroyed = true;
        feedback.events.push(FrameEvent::DestructibleDestroyed {
            position: *position,
        });
        feedback.despawn_buffer.push(entity);
    }
}

/// Grenade detonation: visual, sound and falloff damage to everything
/// within the blast radius.
pub fn explode(world: &mut World, backends: &mut Backends, center: Position, feedback: &mut HitFeedback) {
    effects::explosion(backends, feedback.frame, center);
    feedback.audio_events.push(AudioEvent::Explosion {
        position: center.to_array(),
    });

    let in_blast = |pos: &Position| {
        let d = center.range_to(pos);
        (d < EXPLOSION_RADIUS).then_some(d)
    };

    let enemies: Vec<(Entity, f32)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .filter(|(_, (enemy, _))| enemy.health > 0.0)
        .filter_map(|(e, (_, pos))| in_blast(pos).map(|d| (e, d)))
        .collect();
    let players: Vec<(Entity, f32)> = world
        .query::<(&Player, &Position)>()
        .iter()
        .filter_map(|(e, (_, pos))| in_blast(pos).map(|d| (e, d)))
        .collect();
    let crates: Vec<(Entity, f32)> = world
        .query::<(&Destructible, &Position)>()
        .iter()
        .filter(|(_, (crate_, _))| !crate_.destroyed)
        .filter_map(|(e, (_, pos))| in_blast(pos).map(|d| (e, d)))
        .collect();

    for (e, d) in enemies {
        damage_enemy(world, backends, e, explosion_damage(EXPLOSION_ENEMY_DAMAGE, d), feedback);
    }
    for (e, d) in players {
        damage_player(world, e, explosion_damage(EXPLOSION_PLAYER_DAMAGE, d), feedback);
    }
    for (e, d) in crates {
        damage_destructible(
            world,
            e,
            explosion_damage(EXPLOSION_DESTRUCTIBLE_DAMAGE, d),
            feedback,
        );
    }
}
