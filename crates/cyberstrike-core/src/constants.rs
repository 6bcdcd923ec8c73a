//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

/// Gravity along the y axis (m/s²).
pub const GRAVITY_Y: f32 = -9.82;

// --- World ---

/// Half the side length of the square ground slab (meters).
pub const WORLD_HALF_EXTENT: f32 = 100.0;

/// Half thickness of the ground slab. Its top face sits at y = 0.
pub const GROUND_HALF_THICKNESS: f32 = 0.5;

/// Number of static buildings.
pub const BUILDING_COUNT: usize = 20;

/// Side length of the square area buildings are scattered over.
pub const BUILDING_SPREAD: f32 = 180.0;

pub const BUILDING_MIN_WIDTH: f32 = 5.0;
pub const BUILDING_MAX_WIDTH: f32 = 15.0;
pub const BUILDING_MIN_HEIGHT: f32 = 10.0;
pub const BUILDING_MAX_HEIGHT: f32 = 40.0;

// --- Player ---

/// Player spawn point.
pub const PLAYER_SPAWN: [f32; 3] = [0.0, 5.0, 0.0];

pub const PLAYER_MAX_HEALTH: f32 = 100.0;
pub const PLAYER_WALK_SPEED: f32 = 5.0;
pub const PLAYER_RUN_SPEED: f32 = 8.0;
pub const PLAYER_JUMP_POWER: f32 = 6.0;
pub const PLAYER_MASS: f32 = 1.0;
pub const PLAYER_CAPSULE_RADIUS: f32 = 0.5;

/// Half of the capsule's cylindrical section.
pub const PLAYER_CAPSULE_HALF_HEIGHT: f32 = 0.9;

/// Vertical speed below which the player counts as standing.
pub const GROUND_CHECK_MAX_VERTICAL_SPEED: f32 = 0.1;

/// Height below which the player counts as standing.
pub const GROUND_CHECK_MAX_HEIGHT: f32 = 6.0;

// --- Camera / mouse look ---

/// Radians of look rotation per accumulated mouse unit.
pub const MOUSE_LOOK_SCALE: f32 = 0.002;

/// Pitch limit, just inside straight up/down (radians).
pub const MAX_LOOK_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

/// Third-person camera orbit distance.
pub const CAMERA_DISTANCE: f32 = 5.0;

/// Camera pivot height above the player origin.
pub const CAMERA_HEIGHT: f32 = 2.0;

/// Camera look target height above the player origin.
pub const CAMERA_LOOK_HEIGHT: f32 = 1.0;

// --- Leveling ---

pub const XP_TO_FIRST_LEVEL: u32 = 100;

/// Threshold multiplier applied on every level-up (result floored).
pub const XP_GROWTH_FACTOR: f32 = 1.5;

/// Max health granted per level-up.
pub const LEVEL_UP_HEALTH_BONUS: f32 = 10.0;

/// Experience awarded per enemy kill.
pub const ENEMY_KILL_XP: u32 = 25;

// --- Weapons ---

pub const PLASMA_RIFLE_NAME: &str = "PLASMA RIFLE";
pub const PLASMA_RIFLE_DAMAGE: f32 = 25.0;
pub const PLASMA_RIFLE_RPM: f32 = 600.0;
pub const PLASMA_RIFLE_MAGAZINE: u32 = 30;
pub const PLASMA_RIFLE_RESERVE: u32 = 120;
pub const PLASMA_RIFLE_RELOAD_SECS: f32 = 2.0;

pub const GRENADE_LAUNCHER_NAME: &str = "GRENADE LAUNCHER";
pub const GRENADE_LAUNCHER_DAMAGE: f32 = 80.0;
pub const GRENADE_LAUNCHER_RPM: f32 = 60.0;
pub const GRENADE_LAUNCHER_MAGAZINE: u32 = 6;
pub const GRENADE_LAUNCHER_RESERVE: u32 = 24;
pub const GRENADE_LAUNCHER_RELOAD_SECS: f32 = 3.0;

// --- Projectiles ---

pub const PLAYER_PROJECTILE_SPEED: f32 = 50.0;
pub const PLAYER_PROJECTILE_LIFETIME: f32 = 3.0;
pub const ENEMY_PROJECTILE_SPEED: f32 = 20.0;
pub const ENEMY_PROJECTILE_LIFETIME: f32 = 2.0;

/// Distance ahead of the player along the aim where shots spawn.
pub const MUZZLE_FORWARD_OFFSET: f32 = 2.0;

/// Height above the player origin where shots spawn.
pub const MUZZLE_HEIGHT: f32 = 1.5;

pub const BULLET_RADIUS: f32 = 0.05;
pub const GRENADE_RADIUS: f32 = 0.2;
pub const ENEMY_BULLET_RADIUS: f32 = 0.1;
pub const BULLET_MASS: f32 = 0.1;
pub const GRENADE_MASS: f32 = 1.0;

/// Hit radius around an enemy for player projectiles.
pub const ENEMY_HIT_RADIUS: f32 = 1.5;

/// Hit radius around the player for enemy projectiles.
pub const PLAYER_HIT_RADIUS: f32 = 2.0;

/// Hit radius around a destructible for any projectile.
pub const DESTRUCTIBLE_HIT_RADIUS: f32 = 2.0;

// --- Explosions ---

pub const EXPLOSION_RADIUS: f32 = 5.0;
pub const EXPLOSION_ENEMY_DAMAGE: f32 = 50.0;
pub const EXPLOSION_PLAYER_DAMAGE: f32 = 30.0;
pub const EXPLOSION_DESTRUCTIBLE_DAMAGE: f32 = 100.0;

// --- Enemies ---

pub const ENEMY_COUNT: usize = 10;

pub const DRONE_HEALTH: f32 = 50.0;
pub const DRONE_SPEED: f32 = 3.0;
pub const DRONE_DAMAGE: f32 = 15.0;
pub const DRONE_ATTACK_RANGE: f32 = 20.0;
pub const DRONE_SIZE: f32 = 1.0;

pub const ROBOT_HEALTH: f32 = 100.0;
pub const ROBOT_SPEED: f32 = 2.0;
pub const ROBOT_DAMAGE: f32 = 30.0;
pub const ROBOT_ATTACK_RANGE: f32 = 15.0;
pub const ROBOT_SIZE: f32 = 1.5;

pub const CYBORG_HEALTH: f32 = 150.0;
pub const CYBORG_SPEED: f32 = 4.0;
pub const CYBORG_DAMAGE: f32 = 20.0;
pub const CYBORG_ATTACK_RANGE: f32 = 25.0;
pub const CYBORG_SIZE: f32 = 1.2;

/// Side length of the square area enemies spawn in.
pub const ENEMY_SPAWN_SPREAD: f32 = 100.0;
pub const ENEMY_SPAWN_HEIGHT: f32 = 5.0;
pub const ENEMY_MASS: f32 = 1.0;

/// Distance at which a patrolling enemy notices the player.
pub const ENEMY_SIGHT_RANGE: f32 = 30.0;

/// Distance beyond which a chasing enemy gives up.
pub const ENEMY_LOSE_RANGE: f32 = 50.0;

/// Minimum ticks between enemy shots (1 s).
pub const ENEMY_ATTACK_COOLDOWN_TICKS: u64 = TICK_RATE as u64;

/// Patrol waypoints are drawn within ± half of this on x and z.
pub const PATROL_WAYPOINT_SPREAD: f32 = 20.0;

/// Distance at which a patrol waypoint counts as reached.
pub const PATROL_ARRIVAL_RADIUS: f32 = 2.0;

// --- Destructibles & pickups ---

pub const CRATE_COUNT: usize = 15;
pub const CRATE_SPREAD: f32 = 80.0;
pub const CRATE_HEALTH: f32 = 50.0;
pub const CRATE_HALF_EXTENT: f32 = 1.0;
pub const CRATE_MASS: f32 = 10.0;

/// Probability that a destroyed crate drops a pickup.
pub const CRATE_DROP_CHANCE: f64 = 0.3;

pub const PICKUP_COUNT: usize = 8;
pub const PICKUP_SPREAD: f32 = 90.0;
pub const PICKUP_HEIGHT: f32 = 2.0;
pub const PICKUP_COLLECT_RADIUS: f32 = 2.0;
pub const PICKUP_AMMO_AMOUNT: u32 = 30;
pub const PICKUP_HEALTH_AMOUNT: f32 = 25.0;
pub const PICKUP_XP_AMOUNT: u32 = 25;

// --- Effects & timers (seconds) ---

pub const MUZZLE_FLASH_SECS: f32 = 0.1;
pub const HIT_EFFECT_SECS: f32 = 0.2;
pub const DAMAGE_FLASH_SECS: f32 = 0.2;
pub const EXPLOSION_EFFECT_SECS: f32 = 0.5;
pub const DEATH_EFFECT_SECS: f32 = 1.0;
pub const DEATH_PARTICLE_COUNT: usize = 10;
pub const DESTRUCTION_EFFECT_SECS: f32 = 2.0;
pub const DESTRUCTION_PARTICLE_COUNT: usize = 15;
pub const NOTIFICATION_SECS: f32 = 3.0;
pub const GAME_OVER_DELAY_SECS: f32 = 2.0;

// --- HUD ---

/// Minimap canvas side length (pixels).
pub const MINIMAP_SIZE: f32 = 150.0;

/// World units covered by the minimap canvas.
pub const MINIMAP_WORLD_SPAN: f32 = 200.0;

// --- Persistence ---

/// Storage key of the single save slot.
pub const SAVE_KEY: &str = "cyberstrike_save";
