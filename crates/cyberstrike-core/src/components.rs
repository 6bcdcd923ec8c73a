//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{Position, VisualId};

/// Player statistics and movement tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerStats {
    pub health: f32,
    pub max_health: f32,
    pub level: u32,
    pub xp: u32,
    /// Experience needed for the next level.
    pub xp_to_next: u32,
    pub walk_speed: f32,
    pub run_speed: f32,
    pub jump_power: f32,
    /// Recomputed every tick from the body's vertical speed and height.
    pub on_ground: bool,
}

/// A single weapon record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    pub kind: WeaponKind,
    pub damage: f32,
    /// Rounds per minute.
    pub fire_rate_rpm: f32,
    /// Magazine capacity.
    pub max_ammo: u32,
    /// Rounds in the magazine.
    pub current_ammo: u32,
    /// Reserve rounds.
    pub total_ammo: u32,
    pub reload_time_secs: f32,
    /// Tick of the last shot (`None` if never fired).
    #[serde(default)]
    pub last_fired_tick: Option<u64>,
    #[serde(default)]
    pub reloading: bool,
}

/// Ordered weapon list with the active slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arsenal {
    pub weapons: Vec<Weapon>,
    pub current: usize,
}

/// Marks the player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Enemy combat statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Stable identifier assigned at spawn.
    pub id: u32,
    pub archetype: EnemyArchetype,
    pub health: f32,
    pub max_health: f32,
    pub speed: f32,
    pub damage: f32,
    pub attack_range: f32,
    /// Edge length of the enemy's cube.
    pub size: f32,
}

/// Enemy behaviour state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyBrain {
    pub state: EnemyState,
    pub patrol_target: Position,
    /// Tick of the last shot at the player (`None` if never fired).
    pub last_attack_tick: Option<u64>,
}

/// A live projectile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    /// Unit launch direction.
    pub direction: Vec3,
    pub speed: f32,
    pub damage: f32,
    /// Remaining lifetime in seconds.
    pub life_secs: f32,
}

/// A crate that can be shot apart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destructible {
    pub health: f32,
    pub destroyed: bool,
}

/// A collectible item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
    pub collected: bool,
}

/// A static building block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Building {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
}

/// Marks the ground slab.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ground;

/// Marks visual-only level dressing (lights, skybox, dust).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Scenery;

/// The entity's paired visual in the external renderer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Visual(pub VisualId);
