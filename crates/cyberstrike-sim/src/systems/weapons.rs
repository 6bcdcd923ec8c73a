//! Weapon system: firing, magazine bookkeeping and reloads.

use glam::Vec3;
use hecs::{Entity, World};
use tracing::debug;

use cyberstrike_core::components::{Arsenal, Player, Weapon};
use cyberstrike_core::constants::*;
use cyberstrike_core::enums::{Control, NotificationLevel};
use cyberstrike_core::events::AudioEvent;
use cyberstrike_core::input::ControlState;
use cyberstrike_core::types::Position;

use crate::frame::Backends;
use crate::notifications::NotificationBoard;
use crate::systems::effects;
use crate::timers::TimerAction;
use crate::world_setup;

/// Ticks between shots for a fire rate in rounds per minute.
pub fn fire_interval_ticks(fire_rate_rpm: f32) -> u64 {
    if fire_rate_rpm <= 0.0 {
        return u64::MAX;
    }
    ((60.0 / fire_rate_rpm) * TICK_RATE as f32).round().max(1.0) as u64
}

/// Whether the weapon's fire interval has elapsed.
pub fn can_fire(weapon: &Weapon, tick: u64) -> bool {
    match weapon.last_fired_tick {
        None => true,
        Some(last) => tick.saturating_sub(last) >= fire_interval_ticks(weapon.fire_rate_rpm),
    }
}

/// Where a player shot leaves the barrel.
pub fn muzzle_position(player: Position, aim: Vec3) -> Position {
    let p = player.to_vec3() + aim * MUZZLE_FORWARD_OFFSET + Vec3::new(0.0, MUZZLE_HEIGHT, 0.0);
    Position::from(p)
}

/// Shared output sinks for weapon actions.
pub struct WeaponFeedback<'a> {
    pub notifications: &'a mut NotificationBoard,
    pub audio_events: &'a mut Vec<AudioEvent>,
    pub frame: u64,
    pub tick: u64,
}

/// Fire the current weapon while the trigger is held and reload it when
/// the magazine runs dry.
pub fn run(
    world: &mut World,
    backends: &mut Backends,
    controls: &ControlState,
    aim: Vec3,
    feedback: &mut WeaponFeedback,
) {
    let found = world
        .query::<(&Player, &Position, &Arsenal)>()
        .iter()
        .next()
        .map(|(e, (_, pos, _))| (e, *pos));
    let Some((player, position)) = found else {
        return;
    };

    let mut shot = None;
    {
        let Ok(mut arsenal) = world.get::<&mut Arsenal>(player) else {
            return;
        };
        let index = arsenal.current;
        let Some(weapon) = arsenal.weapons.get_mut(index) else {
            return;
        };
        if weapon.reloading {
            return;
        }

        if controls.is_pressed(Control::Shoot) && weapon.current_ammo > 0 && can_fire(weapon, feedback.tick) {
            weapon.current_ammo -= 1;
            weapon.last_fired_tick = Some(feedback.tick);
            shot = Some((weapon.kind, weapon.damage));
        }

        if weapon.current_ammo == 0 && weapon.total_ammo > 0 {
            start_reload(weapon, index, player, backends, feedback);
        }
    }

    if let Some((kind, damage)) = shot {
        let muzzle = muzzle_position(position, aim);
        world_setup::spawn_projectile(
            world,
            backends,
            kind.projectile(),
            muzzle,
            aim,
            PLAYER_PROJECTILE_SPEED,
            damage,
            PLAYER_PROJECTILE_LIFETIME,
        );
        effects::muzzle_flash(backends, feedback.frame, muzzle);
        feedback.audio_events.push(AudioEvent::Shoot { weapon: kind });
    }
}

/// Begin reloading. Ignored when the reserve is empty or a reload is
/// already running. The completion timer is owned by the player.
pub fn start_reload(
    weapon: &mut Weapon,
    weapon_index: usize,
    player: Entity,
    backends: &mut Backends,
    feedback: &mut WeaponFeedback,
) -> bool {
    if weapon.total_ammo == 0 || weapon.reloading {
        return false;
    }
    weapon.reloading = true;
    feedback.audio_events.push(AudioEvent::Reload);
    feedback.notifications.push(
        &mut backends.timers,
        feedback.frame,
        feedback.tick,
        NotificationLevel::Info,
        format!("Reloading {}...", weapon.name),
    );
    backends.timers.schedule(
        feedback.frame,
        weapon.reload_time_secs,
        Some(player),
        TimerAction::CompleteReload { weapon_index },
    );
    debug!(weapon = %weapon.name, "reload started");
    true
}

/// Move rounds from the reserve into the magazine.
pub fn complete_reload(weapon: &mut Weapon) {
    let needed = weapon.max_ammo.saturating_sub(weapon.current_ammo);
    let moved = needed.min(weapon.total_ammo);
    weapon.current_ammo += moved;
    weapon.total_ammo -= moved;
    weapon.reloading = false;
}
