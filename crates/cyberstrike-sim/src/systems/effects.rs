//! Short-lived visual effects.
//!
//! Effects are visuals without an entity. Each one is paired with a
//! `RemoveVisual` timer at spawn time.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use cyberstrike_core::constants::*;
use cyberstrike_core::enums::EffectKind;
use cyberstrike_core::state::MeshKind;
use cyberstrike_core::types::{Position, VisualId};

use crate::frame::Backends;
use crate::timers::TimerAction;

/// Spawn an effect visual that removes itself after `secs`.
pub fn spawn_timed(
    backends: &mut Backends,
    frame: u64,
    effect: EffectKind,
    position: Position,
    secs: f32,
) -> VisualId {
    let id = backends.scene.spawn(MeshKind::Effect { effect }, position);
    backends
        .timers
        .schedule(frame, secs, None, TimerAction::RemoveVisual(id));
    id
}

pub fn muzzle_flash(backends: &mut Backends, frame: u64, position: Position) {
    spawn_timed(
        backends,
        frame,
        EffectKind::MuzzleFlash,
        position,
        MUZZLE_FLASH_SECS,
    );
}

pub fn hit_spark(backends: &mut Backends, frame: u64, position: Position) {
    spawn_timed(backends, frame, EffectKind::HitSpark, position, HIT_EFFECT_SECS);
}

pub fn explosion(backends: &mut Backends, frame: u64, position: Position) {
    spawn_timed(
        backends,
        frame,
        EffectKind::Explosion,
        position,
        EXPLOSION_EFFECT_SECS,
    );
}

/// Burst of particles where an enemy died.
pub fn death_burst(backends: &mut Backends, rng: &mut ChaCha8Rng, frame: u64, position: Position) {
    scatter(
        backends,
        rng,
        frame,
        EffectKind::DeathParticle,
        position,
        DEATH_PARTICLE_COUNT,
        1.0,
        DEATH_EFFECT_SECS,
    );
}

/// Debris left by a destroyed crate.
pub fn debris_burst(backends: &mut Backends, rng: &mut ChaCha8Rng, frame: u64, position: Position) {
    scatter(
        backends,
        rng,
        frame,
        EffectKind::DebrisParticle,
        position,
        DESTRUCTION_PARTICLE_COUNT,
        1.5,
        DESTRUCTION_EFFECT_SECS,
    );
}

#[allow(clippy::too_many_arguments)]
fn scatter(
    backends: &mut Backends,
    rng: &mut ChaCha8Rng,
    frame: u64,
    effect: EffectKind,
    center: Position,
    count: usize,
    spread: f32,
    secs: f32,
) {
    for _ in 0..count {
        let position = center.offset(
            rng.gen_range(-spread..spread),
            rng.gen_range(0.0..spread * 2.0),
            rng.gen_range(-spread..spread),
        );
        spawn_timed(backends, frame, effect, position, secs);
    }
}
