//! Pickup system: bobbing animation and collection by proximity.

use hecs::{Entity, World};
use tracing::debug;

use cyberstrike_core::components::*;
use cyberstrike_core::constants::*;
use cyberstrike_core::enums::{NotificationLevel, PickupKind};
use cyberstrike_core::events::AudioEvent;
use cyberstrike_core::types::Position;

use crate::frame::{Backends, FrameEvent};
use crate::notifications::NotificationBoard;

/// Vertical nudge applied each tick; drifts with a sine of elapsed time.
pub fn bob_offset(elapsed_secs: f64) -> f32 {
    ((elapsed_secs * 1000.0 * 0.003).sin() * 0.01) as f32
}

/// Apply a pickup's effect to the player.
pub fn apply_pickup(kind: PickupKind, stats: &mut PlayerStats, arsenal: &mut Arsenal, events: &mut Vec<FrameEvent>) {
    match kind {
        PickupKind::Ammo => {
            if let Some(weapon) = arsenal.weapons.get_mut(arsenal.current) {
                weapon.total_ammo += PICKUP_AMMO_AMOUNT;
            }
        }
        PickupKind::Health => {
            stats.health = (stats.health + PICKUP_HEALTH_AMOUNT).min(stats.max_health);
        }
        PickupKind::Xp => events.push(FrameEvent::ExperienceGained {
            amount: PICKUP_XP_AMOUNT,
        }),
    }
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    backends: &mut Backends,
    notifications: &mut NotificationBoard,
    events: &mut Vec<FrameEvent>,
    audio_events: &mut Vec<AudioEvent>,
    despawn_buffer: &mut Vec<Entity>,
    elapsed_secs: f64,
    frame: u64,
    tick: u64,
) {
    let Some((player, player_position)) = world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(e, (_, pos))| (e, *pos))
    else {
        return;
    };

    let dy = bob_offset(elapsed_secs);
    let mut collected: Vec<PickupKind> = Vec::new();
    for (entity, (pickup, position, visual)) in
        world.query_mut::<(&mut Pickup, &mut Position, &Visual)>()
    {
        if pickup.collected {
            continue;
        }
        position.y += dy;
        backends.scene.move_to(visual.0, *position);

        if position.range_to(&player_position) < PICKUP_COLLECT_RADIUS {
            pickup.collected = true;
            collected.push(pickup.kind);
            despawn_buffer.push(entity);
        }
    }

    if collected.is_empty() {
        return;
    }
    let Ok((stats, arsenal)) = world.query_one_mut::<(&mut PlayerStats, &mut Arsenal)>(player) else {
        return;
    };
    for kind in collected {
        apply_pickup(kind, stats, arsenal, events);
        audio_events.push(AudioEvent::Pickup { kind });
        notifications.push(
            &mut backends.timers,
            frame,
            tick,
            NotificationLevel::Success,
            format!("Collected {kind}!"),
        );
        debug!(%kind, "pickup collected");
    }
}
