//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! Read-only: it never modifies the world.

use hecs::World;

use cyberstrike_core::components::*;
use cyberstrike_core::constants::{MINIMAP_SIZE, MINIMAP_WORLD_SPAN};
use cyberstrike_core::enums::GamePhase;
use cyberstrike_core::events::{AudioEvent, Notification};
use cyberstrike_core::settings::Settings;
use cyberstrike_core::state::*;
use cyberstrike_core::types::{Position, SimTime};

/// Engine-side state that goes into the snapshot alongside the world.
pub struct SnapshotFrame {
    pub time: SimTime,
    pub phase: GamePhase,
    pub camera: CameraView,
    pub tutorial: Option<TutorialView>,
    pub scene_commands: Vec<SceneCommand>,
    pub audio_events: Vec<AudioEvent>,
    pub notifications: Vec<Notification>,
    pub damage_flash: bool,
    pub pointer_lock_requested: bool,
    pub pointer_release_requested: bool,
    pub pointer_locked: bool,
    pub live_visuals: u32,
    pub settings: Settings,
}

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(world: &World, frame: SnapshotFrame) -> GameStateSnapshot {
    let enemies_alive = {
        let mut query = world.query::<&Enemy>();
        query.iter().filter(|(_, e)| e.health > 0.0).count() as u32
    };

    GameStateSnapshot {
        time: frame.time,
        phase: frame.phase,
        hud: build_hud(world),
        camera: frame.camera,
        minimap: build_minimap(world),
        tutorial: frame.tutorial,
        scene_commands: frame.scene_commands,
        audio_events: frame.audio_events,
        notifications: frame.notifications,
        damage_flash: frame.damage_flash,
        pointer_lock_requested: frame.pointer_lock_requested,
        pointer_release_requested: frame.pointer_release_requested,
        pointer_locked: frame.pointer_locked,
        enemies_alive,
        live_visuals: frame.live_visuals,
        render: frame.settings.graphics.render_profile(),
        settings: frame.settings,
    }
}

/// Build the HUD from the player's stats and current weapon.
fn build_hud(world: &World) -> HudView {
    world
        .query::<(&Player, &PlayerStats, &Arsenal)>()
        .iter()
        .next()
        .map(|(_, (_, stats, arsenal))| {
            let weapon = arsenal.weapons.get(arsenal.current);
            HudView {
                health: stats.health.max(0.0).round() as u32,
                max_health: stats.max_health.round() as u32,
                weapon_name: weapon.map(|w| w.name.clone()).unwrap_or_default(),
                ammo_current: weapon.map_or(0, |w| w.current_ammo),
                ammo_total: weapon.map_or(0, |w| w.total_ammo),
                reloading: weapon.is_some_and(|w| w.reloading),
                level: stats.level,
                xp: stats.xp,
                xp_to_next: stats.xp_to_next,
                active_slot: arsenal.current,
            }
        })
        .unwrap_or_default()
}

/// Project a world position onto the minimap canvas, or `None` if it
/// falls outside.
pub fn minimap_point(position: &Position) -> Option<[f32; 2]> {
    let scale = MINIMAP_SIZE / MINIMAP_WORLD_SPAN;
    let x = position.x * scale + MINIMAP_SIZE / 2.0;
    let y = position.z * scale + MINIMAP_SIZE / 2.0;
    let inside = |v: f32| (0.0..=MINIMAP_SIZE).contains(&v);
    (inside(x) && inside(y)).then_some([x, y])
}

fn build_minimap(world: &World) -> MinimapView {
    let enemies = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .filter(|(_, (enemy, _))| enemy.health > 0.0)
        .filter_map(|(_, (_, pos))| minimap_point(pos))
        .collect();
    let pickups = world
        .query::<(&Pickup, &Position)>()
        .iter()
        .filter(|(_, (pickup, _))| !pickup.collected)
        .filter_map(|(_, (_, pos))| minimap_point(pos))
        .collect();

    // The player marker always sits at the centre
    MinimapView {
        size: MINIMAP_SIZE,
        player: [MINIMAP_SIZE / 2.0, MINIMAP_SIZE / 2.0],
        enemies,
        pickups,
    }
}
