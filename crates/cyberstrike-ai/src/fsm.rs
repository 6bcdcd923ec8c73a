//! Enemy behaviour finite state machine.
//!
//! Pure functions that compute state transitions and velocity commands
//! for enemy entities from their archetype, current state and the player's
//! position. No ECS dependency; operates on plain data.
//!
//! The per-state action is taken for the state held at the start of the
//! tick; the transition check runs afterwards and at most one transition
//! happens per evaluation.

use glam::Vec3;
use rand::Rng;

use cyberstrike_core::constants::*;
use cyberstrike_core::enums::{EnemyArchetype, EnemyState};
use cyberstrike_core::types::{Position, Velocity};

use crate::profiles::{get_profile, EnemyProfile};

/// Input to the enemy FSM for a single entity.
pub struct EnemyContext {
    pub archetype: EnemyArchetype,
    pub state: EnemyState,
    pub position: Position,
    /// Current body velocity (the vertical component is preserved).
    pub velocity: Velocity,
    pub player_position: Position,
    pub patrol_target: Position,
    /// Current simulation tick.
    pub tick: u64,
    pub last_attack_tick: Option<u64>,
}

/// Output from the enemy FSM.
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyUpdate {
    pub new_state: EnemyState,
    pub state_changed: bool,
    /// Velocity command for the physics body.
    pub new_velocity: Velocity,
    /// Unit direction of a shot at the player, when one is fired this tick.
    pub fire_direction: Option<Vec3>,
    /// The caller should draw a fresh patrol waypoint.
    pub pick_patrol_target: bool,
}

/// Evaluate the FSM for one enemy.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    let profile = get_profile(ctx.archetype);
    let distance_to_player = ctx.position.range_to(&ctx.player_position);

    match ctx.state {
        EnemyState::Patrol => evaluate_patrol(ctx, &profile, distance_to_player),
        EnemyState::Chase => evaluate_chase(ctx, &profile, distance_to_player),
        EnemyState::Attack => evaluate_attack(ctx, &profile, distance_to_player),
        // Terminal state: no transitions, no commands
        EnemyState::Dead => EnemyUpdate {
            new_state: EnemyState::Dead,
            state_changed: false,
            new_velocity: ctx.velocity,
            fire_direction: None,
            pick_patrol_target: false,
        },
    }
}

fn evaluate_patrol(ctx: &EnemyContext, profile: &EnemyProfile, distance: f32) -> EnemyUpdate {
    let arrived = ctx.position.horizontal_range_to(&ctx.patrol_target) < PATROL_ARRIVAL_RADIUS;
    let new_velocity = if arrived {
        ctx.velocity
    } else {
        steer_towards(ctx, &ctx.patrol_target, profile.speed)
    };

    let spotted = distance < ENEMY_SIGHT_RANGE;
    EnemyUpdate {
        new_state: if spotted {
            EnemyState::Chase
        } else {
            EnemyState::Patrol
        },
        state_changed: spotted,
        new_velocity,
        fire_direction: None,
        pick_patrol_target: arrived,
    }
}

fn evaluate_chase(ctx: &EnemyContext, profile: &EnemyProfile, distance: f32) -> EnemyUpdate {
    let new_velocity = steer_towards(ctx, &ctx.player_position, profile.speed);

    if distance < profile.attack_range {
        return EnemyUpdate {
            new_state: EnemyState::Attack,
            state_changed: true,
            new_velocity,
            fire_direction: None,
            pick_patrol_target: false,
        };
    }

    if distance > ENEMY_LOSE_RANGE {
        return EnemyUpdate {
            new_state: EnemyState::Patrol,
            state_changed: true,
            new_velocity,
            fire_direction: None,
            pick_patrol_target: true,
        };
    }

    EnemyUpdate {
        new_state: EnemyState::Chase,
        state_changed: false,
        new_velocity,
        fire_direction: None,
        pick_patrol_target: false,
    }
}

fn evaluate_attack(ctx: &EnemyContext, profile: &EnemyProfile, distance: f32) -> EnemyUpdate {
    // Hold position horizontally while shooting; gravity still applies.
    let new_velocity = Velocity::new(0.0, ctx.velocity.y, 0.0);

    let fire_direction = if attack_ready(ctx.tick, ctx.last_attack_tick) {
        Some(ctx.position.direction_to(&ctx.player_position))
    } else {
        None
    };

    let escaped = distance > profile.attack_range;
    EnemyUpdate {
        new_state: if escaped {
            EnemyState::Chase
        } else {
            EnemyState::Attack
        },
        state_changed: escaped,
        new_velocity,
        fire_direction,
        pick_patrol_target: false,
    }
}

/// Whether the attack cooldown has elapsed.
pub fn attack_ready(tick: u64, last_attack_tick: Option<u64>) -> bool {
    match last_attack_tick {
        None => true,
        Some(last) => tick.saturating_sub(last) >= ENEMY_ATTACK_COOLDOWN_TICKS,
    }
}

/// Velocity command `normalize(target - position) * speed` with the body's
/// vertical velocity kept.
fn steer_towards(ctx: &EnemyContext, target: &Position, speed: f32) -> Velocity {
    let dir = ctx.position.direction_to(target) * speed;
    Velocity::new(dir.x, ctx.velocity.y, dir.z)
}

/// Draw a new patrol waypoint within ±10 of the enemy on x and z.
pub fn patrol_waypoint<R: Rng>(position: &Position, rng: &mut R) -> Position {
    let half = PATROL_WAYPOINT_SPREAD / 2.0;
    Position::new(
        position.x + rng.gen_range(-half..half),
        position.y,
        position.z + rng.gen_range(-half..half),
    )
}
