//! Entity spawn factories for building the level.
//!
//! Every factory creates the entity's visual first and, where the entity
//! takes part in physics, its rigid body. Both handles are stored as
//! components so the cleanup system can release them together.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use cyberstrike_ai::fsm::patrol_waypoint;
use cyberstrike_ai::profiles::get_profile;
use cyberstrike_core::components::*;
use cyberstrike_core::constants::*;
use cyberstrike_core::enums::*;
use cyberstrike_core::state::MeshKind;
use cyberstrike_core::types::{Position, Velocity};
use glam::Vec3;

use crate::frame::Backends;
use crate::physics::{BodyDesc, BodyShape, PhysicsBody};

/// Build the whole level and return the player entity.
pub fn build_level(world: &mut World, backends: &mut Backends, rng: &mut ChaCha8Rng) -> Entity {
    spawn_scenery(world, backends);
    spawn_ground(world, backends);
    spawn_buildings(world, backends, rng);
    let player = spawn_player(world, backends);

    for id in 0..ENEMY_COUNT as u32 {
        let archetype = EnemyArchetype::ALL[rng.gen_range(0..EnemyArchetype::ALL.len())];
        let half = ENEMY_SPAWN_SPREAD / 2.0;
        let position = Position::new(
            rng.gen_range(-half..half),
            ENEMY_SPAWN_HEIGHT,
            rng.gen_range(-half..half),
        );
        spawn_enemy(world, backends, rng, id, archetype, position);
    }

    for _ in 0..CRATE_COUNT {
        let half = CRATE_SPREAD / 2.0;
        let position = Position::new(
            rng.gen_range(-half..half),
            CRATE_HALF_EXTENT,
            rng.gen_range(-half..half),
        );
        spawn_crate(world, backends, position);
    }

    for _ in 0..PICKUP_COUNT {
        let kind = PickupKind::ALL[rng.gen_range(0..PickupKind::ALL.len())];
        let half = PICKUP_SPREAD / 2.0;
        let position = Position::new(
            rng.gen_range(-half..half),
            PICKUP_HEIGHT,
            rng.gen_range(-half..half),
        );
        spawn_pickup(world, backends, kind, position);
    }

    debug!(
        entities = world.len(),
        bodies = backends.physics.body_count(),
        visuals = backends.scene.live_count(),
        "level built"
    );
    player
}

/// Lights, sky and the floating dust field.
fn spawn_scenery(world: &mut World, backends: &mut Backends) {
    let items = [
        (MeshKind::Light { light: LightKind::Ambient }, Position::default()),
        (
            MeshKind::Light { light: LightKind::Sun },
            Position::new(50.0, 100.0, 50.0),
        ),
        (
            MeshKind::Light { light: LightKind::Hemisphere },
            Position::default(),
        ),
        (
            MeshKind::Light { light: LightKind::CyanPoint },
            Position::new(20.0, 10.0, 20.0),
        ),
        (
            MeshKind::Light { light: LightKind::OrangePoint },
            Position::new(-20.0, 15.0, -20.0),
        ),
        (MeshKind::Skybox, Position::default()),
        (MeshKind::DustField { particles: 1000 }, Position::default()),
    ];
    for (mesh, position) in items {
        let visual = backends.scene.spawn(mesh, position);
        world.spawn((Scenery, position, Visual(visual)));
    }
}

fn spawn_ground(world: &mut World, backends: &mut Backends) -> Entity {
    let position = Position::default();
    let visual = backends.scene.spawn(
        MeshKind::Ground {
            size: WORLD_HALF_EXTENT * 2.0,
        },
        position,
    );
    let body = backends.physics.add_body(BodyDesc::fixed(
        BodyShape::Cuboid {
            hx: WORLD_HALF_EXTENT,
            hy: GROUND_HALF_THICKNESS,
            hz: WORLD_HALF_EXTENT,
        },
        Position::new(0.0, -GROUND_HALF_THICKNESS, 0.0),
    ));
    world.spawn((Ground, position, PhysicsBody(body), Visual(visual)))
}

fn spawn_buildings(world: &mut World, backends: &mut Backends, rng: &mut ChaCha8Rng) {
    for _ in 0..BUILDING_COUNT {
        let building = Building {
            width: rng.gen_range(BUILDING_MIN_WIDTH..BUILDING_MAX_WIDTH),
            height: rng.gen_range(BUILDING_MIN_HEIGHT..BUILDING_MAX_HEIGHT),
            depth: rng.gen_range(BUILDING_MIN_WIDTH..BUILDING_MAX_WIDTH),
        };
        let half = BUILDING_SPREAD / 2.0;
        let position = Position::new(
            rng.gen_range(-half..half),
            building.height / 2.0,
            rng.gen_range(-half..half),
        );
        let visual = backends.scene.spawn(
            MeshKind::Building {
                width: building.width,
                height: building.height,
                depth: building.depth,
            },
            position,
        );
        let body = backends.physics.add_body(BodyDesc::fixed(
            BodyShape::Cuboid {
                hx: building.width / 2.0,
                hy: building.height / 2.0,
                hz: building.depth / 2.0,
            },
            position,
        ));
        world.spawn((building, position, PhysicsBody(body), Visual(visual)));
    }
}

/// The two starting weapons, rifle selected.
pub fn default_loadout() -> Arsenal {
    Arsenal {
        weapons: vec![
            Weapon {
                name: PLASMA_RIFLE_NAME.to_string(),
                kind: WeaponKind::PlasmaRifle,
                damage: PLASMA_RIFLE_DAMAGE,
                fire_rate_rpm: PLASMA_RIFLE_RPM,
                max_ammo: PLASMA_RIFLE_MAGAZINE,
                current_ammo: PLASMA_RIFLE_MAGAZINE,
                total_ammo: PLASMA_RIFLE_RESERVE,
                reload_time_secs: PLASMA_RIFLE_RELOAD_SECS,
                last_fired_tick: None,
                reloading: false,
            },
            Weapon {
                name: GRENADE_LAUNCHER_NAME.to_string(),
                kind: WeaponKind::GrenadeLauncher,
                damage: GRENADE_LAUNCHER_DAMAGE,
                fire_rate_rpm: GRENADE_LAUNCHER_RPM,
                max_ammo: GRENADE_LAUNCHER_MAGAZINE,
                current_ammo: GRENADE_LAUNCHER_MAGAZINE,
                total_ammo: GRENADE_LAUNCHER_RESERVE,
                reload_time_secs: GRENADE_LAUNCHER_RELOAD_SECS,
                last_fired_tick: None,
                reloading: false,
            },
        ],
        current: 0,
    }
}

pub fn spawn_player(world: &mut World, backends: &mut Backends) -> Entity {
    let position = Position::from_array(PLAYER_SPAWN);
    let stats = PlayerStats {
        health: PLAYER_MAX_HEALTH,
        max_health: PLAYER_MAX_HEALTH,
        level: 1,
        xp: 0,
        xp_to_next: XP_TO_FIRST_LEVEL,
        walk_speed: PLAYER_WALK_SPEED,
        run_speed: PLAYER_RUN_SPEED,
        jump_power: PLAYER_JUMP_POWER,
        on_ground: false,
    };
    let visual = backends.scene.spawn(MeshKind::Player, position);
    let body = backends.physics.add_body(
        BodyDesc::dynamic(
            BodyShape::Capsule {
                half_height: PLAYER_CAPSULE_HALF_HEIGHT,
                radius: PLAYER_CAPSULE_RADIUS,
            },
            position,
            PLAYER_MASS,
        )
        .upright(),
    );
    world.spawn((
        Player,
        stats,
        default_loadout(),
        position,
        Velocity::default(),
        PhysicsBody(body),
        Visual(visual),
    ))
}

pub fn spawn_enemy(
    world: &mut World,
    backends: &mut Backends,
    rng: &mut ChaCha8Rng,
    id: u32,
    archetype: EnemyArchetype,
    position: Position,
) -> Entity {
    let profile = get_profile(archetype);
    let enemy = Enemy {
        id,
        archetype,
        health: profile.max_health,
        max_health: profile.max_health,
        speed: profile.speed,
        damage: profile.damage,
        attack_range: profile.attack_range,
        size: profile.size,
    };
    let brain = EnemyBrain {
        state: EnemyState::Patrol,
        patrol_target: patrol_waypoint(&position, rng),
        last_attack_tick: None,
    };
    let visual = backends.scene.spawn(
        MeshKind::Enemy {
            archetype,
            size: profile.size,
        },
        position,
    );
    let half = profile.size / 2.0;
    let body = backends.physics.add_body(
        BodyDesc::dynamic(
            BodyShape::Cuboid {
                hx: half,
                hy: half,
                hz: half,
            },
            position,
            ENEMY_MASS,
        )
        .upright(),
    );
    world.spawn((
        enemy,
        brain,
        position,
        Velocity::default(),
        PhysicsBody(body),
        Visual(visual),
    ))
}

pub fn spawn_crate(world: &mut World, backends: &mut Backends, position: Position) -> Entity {
    let visual = backends.scene.spawn(
        MeshKind::Crate {
            size: CRATE_HALF_EXTENT * 2.0,
        },
        position,
    );
    let body = backends.physics.add_body(BodyDesc::dynamic(
        BodyShape::Cuboid {
            hx: CRATE_HALF_EXTENT,
            hy: CRATE_HALF_EXTENT,
            hz: CRATE_HALF_EXTENT,
        },
        position,
        CRATE_MASS,
    ));
    world.spawn((
        Destructible {
            health: CRATE_HEALTH,
            destroyed: false,
        },
        position,
        PhysicsBody(body),
        Visual(visual),
    ))
}

/// Pickups have no body; they bob in place until collected.
pub fn spawn_pickup(
    world: &mut World,
    backends: &mut Backends,
    kind: PickupKind,
    position: Position,
) -> Entity {
    let visual = backends.scene.spawn(MeshKind::Pickup { pickup: kind }, position);
    world.spawn((
        Pickup {
            kind,
            collected: false,
        },
        position,
        Visual(visual),
    ))
}

/// Launch a projectile from `origin` along `direction` (normalized here).
#[allow(clippy::too_many_arguments)]
pub fn spawn_projectile(
    world: &mut World,
    backends: &mut Backends,
    kind: ProjectileKind,
    origin: Position,
    direction: Vec3,
    speed: f32,
    damage: f32,
    life_secs: f32,
) -> Entity {
    let direction = direction.normalize_or_zero();
    let (radius, mass) = match kind {
        ProjectileKind::Bullet => (BULLET_RADIUS, BULLET_MASS),
        ProjectileKind::Grenade => (GRENADE_RADIUS, GRENADE_MASS),
        ProjectileKind::EnemyBullet => (ENEMY_BULLET_RADIUS, BULLET_MASS),
    };
    let visual = backends
        .scene
        .spawn(MeshKind::Projectile { projectile: kind }, origin);
    let body = backends.physics.add_body(
        BodyDesc::dynamic(BodyShape::Ball { radius }, origin, mass)
            .with_velocity(Velocity::from(direction * speed))
            .sensor(),
    );
    world.spawn((
        Projectile {
            kind,
            direction,
            speed,
            damage,
            life_secs,
        },
        origin,
        PhysicsBody(body),
        Visual(visual),
    ))
}
