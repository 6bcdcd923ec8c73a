//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Audio events for the frontend sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// Player weapon fired.
    Shoot { weapon: WeaponKind },
    /// Reload started.
    Reload,
    /// Grenade detonated.
    Explosion { position: [f32; 3] },
    /// Pickup collected.
    Pickup { kind: PickupKind },
    LevelUp { level: u32 },
    /// Player projectile struck an enemy.
    EnemyHit { enemy_id: u32 },
    /// Player took damage.
    PlayerHit { damage: f32 },
    /// Enemy fired at the player.
    EnemyShoot { enemy_id: u32 },
}

/// Transient on-screen message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique within a session; used to expire it.
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
    pub tick: u64,
}
