//! Archetype-specific stat profiles.

use cyberstrike_core::enums::EnemyArchetype;

/// Combat profile for an enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    pub max_health: f32,
    /// Movement speed (m/s).
    pub speed: f32,
    /// Damage per projectile.
    pub damage: f32,
    /// Distance within which the enemy stops to shoot.
    pub attack_range: f32,
    /// Cube edge length.
    pub size: f32,
}

/// Get the profile for a given archetype.
pub fn get_profile(archetype: EnemyArchetype) -> EnemyProfile {
    use cyberstrike_core::constants::*;

    match archetype {
        EnemyArchetype::Drone => EnemyProfile {
            max_health: DRONE_HEALTH,
            speed: DRONE_SPEED,
            damage: DRONE_DAMAGE,
            attack_range: DRONE_ATTACK_RANGE,
            size: DRONE_SIZE,
        },
        EnemyArchetype::Robot => EnemyProfile {
            max_health: ROBOT_HEALTH,
            speed: ROBOT_SPEED,
            damage: ROBOT_DAMAGE,
            attack_range: ROBOT_ATTACK_RANGE,
            size: ROBOT_SIZE,
        },
        EnemyArchetype::Cyborg => EnemyProfile {
            max_health: CYBORG_HEALTH,
            speed: CYBORG_SPEED,
            damage: CYBORG_DAMAGE,
            attack_range: CYBORG_ATTACK_RANGE,
            size: CYBORG_SIZE,
        },
    }
}
