//! Enumeration types used throughout the simulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Enemy archetype. Determines stats and mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyArchetype {
    /// Light, fast-ish flyer with long reach.
    Drone,
    /// Slow, heavy hitter with short reach.
    Robot,
    /// Fast and durable, longest reach.
    Cyborg,
}

impl EnemyArchetype {
    pub const ALL: [EnemyArchetype; 3] = [
        EnemyArchetype::Drone,
        EnemyArchetype::Robot,
        EnemyArchetype::Cyborg,
    ];
}

/// Enemy behaviour state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    /// Wandering between random waypoints.
    #[default]
    Patrol,
    /// Closing in on the player.
    Chase,
    /// In range, firing at the player.
    Attack,
    /// Killed. Terminal.
    Dead,
}

/// Projectile type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// Player rifle round.
    Bullet,
    /// Player grenade; explodes on impact.
    Grenade,
    /// Fired by an enemy at the player.
    EnemyBullet,
}

/// Pickup type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickupKind {
    Ammo,
    Health,
    Xp,
}

impl PickupKind {
    pub const ALL: [PickupKind; 3] = [PickupKind::Ammo, PickupKind::Health, PickupKind::Xp];
}

impl fmt::Display for PickupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PickupKind::Ammo => "ammo",
            PickupKind::Health => "health",
            PickupKind::Xp => "xp",
        };
        f.write_str(label)
    }
}

/// Weapon family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeaponKind {
    #[default]
    PlasmaRifle,
    GrenadeLauncher,
}

impl WeaponKind {
    /// Projectile fired by this weapon.
    pub fn projectile(self) -> ProjectileKind {
        match self {
            WeaponKind::PlasmaRifle => ProjectileKind::Bullet,
            WeaponKind::GrenadeLauncher => ProjectileKind::Grenade,
        }
    }
}

/// Held input controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Control {
    Forward,
    Backward,
    Left,
    Right,
    Jump,
    Sprint,
    Crouch,
    Shoot,
    Reload,
}

/// Short-lived visual effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    MuzzleFlash,
    HitSpark,
    Explosion,
    DeathParticle,
    DebrisParticle,
}

/// Scene lights created at level load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightKind {
    Ambient,
    Sun,
    Hemisphere,
    CyanPoint,
    OrangePoint,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Tutorial,
    Playing,
    Paused,
    /// Player died; returns to the main menu after a short delay.
    GameOver,
}

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Renderer quality preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphicsQuality {
    Low,
    #[default]
    Medium,
    High,
}
