//! Tests for the simulation engine: level lifecycle, combat, weapons,
//! timers, phases and persistence.

use glam::Vec3;

use cyberstrike_core::commands::PlayerCommand;
use cyberstrike_core::components::*;
use cyberstrike_core::constants::*;
use cyberstrike_core::enums::*;
use cyberstrike_core::events::AudioEvent;
use cyberstrike_core::input::{InputEvent, MouseButton};
use cyberstrike_core::state::GameStateSnapshot;
use cyberstrike_core::types::Position;

use crate::engine::{SimConfig, SimulationEngine};
use crate::error::SimError;
use crate::physics::PhysicsBody;
use crate::timers::TimerAction;

fn engine() -> SimulationEngine {
    SimulationEngine::new(SimConfig::default()).unwrap()
}

fn started() -> (SimulationEngine, GameStateSnapshot) {
    let mut engine = engine();
    engine.queue_command(PlayerCommand::StartGame);
    let snap = engine.tick();
    (engine, snap)
}

fn key_down(code: &str) -> PlayerCommand {
    PlayerCommand::Input {
        event: InputEvent::KeyDown { code: code.into() },
    }
}

fn has_message(snap: &GameStateSnapshot, message: &str) -> bool {
    snap.notifications.iter().any(|n| n.message == message)
}

fn count<T: hecs::Component>(engine: &SimulationEngine) -> usize {
    let mut q = engine.world().query::<&T>();
    q.iter().count()
}

// ---- Configuration ----

#[test]
fn test_invalid_config_rejected() {
    let bad_scale = SimulationEngine::new(SimConfig {
        time_scale: -1.0,
        ..Default::default()
    });
    assert!(matches!(bad_scale, Err(SimError::InvalidConfig(_))));

    let mut config = SimConfig::default();
    config.settings.mouse_sensitivity = 0.0;
    assert!(matches!(
        SimulationEngine::new(config),
        Err(SimError::InvalidConfig(_))
    ));
}

#[test]
fn test_default_config() {
    let engine = engine();
    assert_eq!(engine.phase(), GamePhase::MainMenu);
    assert_eq!(engine.time_scale(), 1.0);
    assert_eq!(engine.settings().graphics, GraphicsQuality::Medium);
    assert!(engine.player().is_none());
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    })
    .unwrap();
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 12345,
        ..Default::default()
    })
    .unwrap();

    let script = [
        PlayerCommand::StartGame,
        PlayerCommand::SetPointerLock { locked: true },
        key_down("KeyW"),
        PlayerCommand::Input {
            event: InputEvent::MouseDown {
                button: MouseButton::Left,
            },
        },
    ];
    engine_a.queue_commands(script.clone());
    engine_b.queue_commands(script);

    for i in 0..300 {
        if i == 120 {
            let turn = PlayerCommand::Look { dx: 200.0, dy: -40.0 };
            engine_a.queue_command(turn.clone());
            engine_b.queue_command(turn);
        }
        let json_a = serde_json::to_string(&engine_a.tick()).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick()).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 111,
        ..Default::default()
    })
    .unwrap();
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 222,
        ..Default::default()
    })
    .unwrap();
    engine_a.queue_command(PlayerCommand::StartGame);
    engine_b.queue_command(PlayerCommand::StartGame);

    let a = serde_json::to_string(&engine_a.tick()).unwrap();
    let b = serde_json::to_string(&engine_b.tick()).unwrap();
    assert_ne!(a, b, "Different seeds should lay out different levels");
}

// ---- Level lifecycle ----

#[test]
fn test_start_game_builds_level() {
    let (engine, snap) = started();
    assert_eq!(snap.phase, GamePhase::Playing);
    assert!(snap.pointer_lock_requested);

    assert_eq!(count::<Player>(&engine), 1);
    assert_eq!(count::<Enemy>(&engine), ENEMY_COUNT);
    assert_eq!(count::<Destructible>(&engine), CRATE_COUNT);
    assert_eq!(count::<Pickup>(&engine), PICKUP_COUNT);
    assert_eq!(count::<Building>(&engine), BUILDING_COUNT);
    assert_eq!(count::<Scenery>(&engine), 7);

    // ground + buildings + player + enemies + crates
    let bodies = 1 + BUILDING_COUNT + 1 + ENEMY_COUNT + CRATE_COUNT;
    assert_eq!(engine.physics().body_count(), bodies);
    // every entity has exactly one visual
    assert_eq!(engine.scene().live_count(), engine.world().len() as usize);
    assert_eq!(snap.live_visuals as usize, engine.world().len() as usize);

    assert_eq!(snap.enemies_alive, ENEMY_COUNT as u32);
    assert_eq!(snap.hud.health, 100);
    assert_eq!(snap.hud.weapon_name, "PLASMA RIFLE");
    assert_eq!(snap.hud.ammo_current, 30);
    assert_eq!(snap.hud.ammo_total, 120);
    assert_eq!(snap.hud.level, 1);
    assert_eq!(snap.hud.xp_to_next, 100);
    assert_eq!(snap.minimap.player, [75.0, 75.0]);
}

#[test]
fn test_player_settles_on_ground() {
    let (mut engine, _) = started();
    engine.clear_targets();
    for _ in 0..180 {
        engine.tick();
    }
    let player = engine.player().unwrap();
    let y = engine.world().get::<&Position>(player).unwrap().y;
    assert!(y > 0.5 && y < 3.0, "player should stand on the ground, y={y}");
    assert!(engine.world().get::<&PlayerStats>(player).unwrap().on_ground);
}

#[test]
fn test_walking_forward_moves_player() {
    let (mut engine, _) = started();
    engine.clear_targets();
    for _ in 0..120 {
        engine.tick();
    }
    let player = engine.player().unwrap();
    let before = *engine.world().get::<&Position>(player).unwrap();

    engine.queue_command(key_down("KeyW"));
    for _ in 0..60 {
        engine.tick();
    }
    let after = *engine.world().get::<&Position>(player).unwrap();
    // Default view looks toward -z
    assert!(after.z < before.z - 2.0, "before={before:?} after={after:?}");
}

// ---- Weapons ----

#[test]
fn test_fire_then_auto_reload_scenario() {
    let (mut engine, _) = started();
    engine.clear_targets();
    let player = engine.player().unwrap();
    {
        let mut arsenal = engine.world_mut().get::<&mut Arsenal>(player).unwrap();
        arsenal.weapons[0].current_ammo = 1;
        arsenal.weapons[0].total_ammo = 10;
    }

    engine.queue_command(PlayerCommand::SetControl {
        control: Control::Shoot,
        pressed: true,
    });
    let snap = engine.tick();
    assert_eq!(snap.hud.ammo_current, 0);
    assert!(snap.hud.reloading);
    assert!(snap
        .audio_events
        .contains(&AudioEvent::Shoot { weapon: WeaponKind::PlasmaRifle }));
    assert!(snap.audio_events.contains(&AudioEvent::Reload));
    assert!(has_message(&snap, "Reloading PLASMA RIFLE..."));
    assert_eq!(count::<Projectile>(&engine), 1);

    engine.queue_command(PlayerCommand::SetControl {
        control: Control::Shoot,
        pressed: false,
    });
    for _ in 0..119 {
        let snap = engine.tick();
        assert!(snap.hud.reloading);
    }
    let snap = engine.tick();
    assert!(!snap.hud.reloading);
    assert_eq!(snap.hud.ammo_current, 10);
    assert_eq!(snap.hud.ammo_total, 0);
    assert!(has_message(&snap, "Reload complete!"));
}

#[test]
fn test_fire_rate_limits_shots() {
    let (mut engine, _) = started();
    engine.clear_targets();
    engine.queue_command(PlayerCommand::SetControl {
        control: Control::Shoot,
        pressed: true,
    });
    // 600 rpm = one shot every 6 ticks
    let mut last = None;
    for _ in 0..12 {
        last = Some(engine.tick());
    }
    assert_eq!(last.unwrap().hud.ammo_current, 28);
}

#[test]
fn test_manual_reload_ignored_when_reserve_empty_or_busy() {
    let (mut engine, _) = started();
    engine.clear_targets();
    let player = engine.player().unwrap();
    {
        let mut arsenal = engine.world_mut().get::<&mut Arsenal>(player).unwrap();
        arsenal.weapons[0].current_ammo = 20;
        arsenal.weapons[0].total_ammo = 0;
    }
    engine.queue_command(key_down("KeyR"));
    let snap = engine.tick();
    assert!(!snap.hud.reloading);

    {
        let mut arsenal = engine.world_mut().get::<&mut Arsenal>(player).unwrap();
        arsenal.weapons[0].total_ammo = 50;
    }
    engine.queue_command(PlayerCommand::Reload);
    let snap = engine.tick();
    assert!(snap.hud.reloading);
    engine.queue_command(PlayerCommand::Reload);
    let snap = engine.tick();
    assert_eq!(
        snap.audio_events
            .iter()
            .filter(|e| **e == AudioEvent::Reload)
            .count(),
        0
    );
    assert!(engine
        .timers()
        .has_pending(player, |a| matches!(a, TimerAction::CompleteReload { .. })));

    for _ in 0..120 {
        engine.tick();
    }
    let snap = engine.tick();
    assert_eq!(snap.hud.ammo_current, 30);
    assert_eq!(snap.hud.ammo_total, 40);
}

#[test]
fn test_weapon_selection_and_cycling() {
    let (mut engine, _) = started();
    engine.queue_command(key_down("Digit2"));
    assert_eq!(engine.tick().hud.weapon_name, "GRENADE LAUNCHER");

    engine.queue_command(key_down("Digit3"));
    assert_eq!(engine.tick().hud.active_slot, 1);

    engine.queue_command(PlayerCommand::CycleWeapon { delta: 1 });
    assert_eq!(engine.tick().hud.active_slot, 0);
    engine.queue_command(PlayerCommand::CycleWeapon { delta: -1 });
    assert_eq!(engine.tick().hud.active_slot, 1);
}

// ---- Projectiles ----

#[test]
fn test_projectile_lifetime_and_single_release() {
    let (mut engine, _) = started();
    engine.clear_targets();
    let bodies_before = engine.physics().body_count();

    let projectile = engine.spawn_test_projectile(
        ProjectileKind::Bullet,
        Position::new(0.0, 100.0, 0.0),
        Vec3::Y,
        0.1,
    );
    let body = engine.world().get::<&PhysicsBody>(projectile).unwrap().0;
    let visual = engine.world().get::<&Visual>(projectile).unwrap().0;
    assert_eq!(engine.physics().body_count(), bodies_before + 1);

    let mut lives = Vec::new();
    for _ in 0..5 {
        engine.tick();
        lives.push(engine.world().get::<&Projectile>(projectile).unwrap().life_secs);
    }
    assert!(lives.windows(2).all(|w| (w[0] - w[1] - DT).abs() < 1e-5));

    engine.tick();
    engine.tick();
    assert!(!engine.world().contains(projectile));
    assert!(!engine.physics().contains(body));
    assert!(!engine.scene().is_live(visual));
    assert_eq!(engine.physics().body_count(), bodies_before);
    assert!(!engine.release_entity(projectile), "already released");
}

#[test]
fn test_bullet_kills_enemy_and_awards_xp() {
    let (mut engine, _) = started();
    let (enemy, position) = {
        let mut q = engine.world().query::<(&Enemy, &Position)>();
        let (e, (_, pos)) = q.iter().next().unwrap();
        (e, *pos)
    };
    engine.world_mut().get::<&mut Enemy>(enemy).unwrap().health = 5.0;
    let body = engine.world().get::<&PhysicsBody>(enemy).unwrap().0;
    let visual = engine.world().get::<&Visual>(enemy).unwrap().0;

    engine.spawn_test_projectile(ProjectileKind::Bullet, position, Vec3::Y, 3.0);
    let snap = engine.tick();

    assert!(!engine.world().contains(enemy));
    assert!(!engine.physics().contains(body));
    assert!(!engine.scene().is_live(visual));
    assert_eq!(snap.enemies_alive, ENEMY_COUNT as u32 - 1);
    assert_eq!(snap.hud.xp, ENEMY_KILL_XP);
    assert!(has_message(&snap, "Enemy eliminated! +25 XP"));
    assert!(snap.audio_events.iter().any(|e| matches!(e, AudioEvent::EnemyHit { .. })));
}

#[test]
fn test_enemy_bullet_can_end_the_game() {
    let (mut engine, _) = started();
    engine.clear_targets();
    let player = engine.player().unwrap();
    engine.world_mut().get::<&mut PlayerStats>(player).unwrap().health = 1.0;
    let position = *engine.world().get::<&Position>(player).unwrap();

    engine.spawn_test_projectile(ProjectileKind::EnemyBullet, position, Vec3::Y, 2.0);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert_eq!(snap.hud.health, 0);
    assert!(snap.damage_flash);
    assert!(has_message(&snap, "GAME OVER"));
    assert!(snap.audio_events.iter().any(|e| matches!(e, AudioEvent::PlayerHit { .. })));

    // Back to the menu two seconds later
    let mut phase = snap.phase;
    for _ in 0..120 {
        phase = engine.tick().phase;
    }
    assert_eq!(phase, GamePhase::MainMenu);

    // A new game gets a fresh level
    engine.queue_command(PlayerCommand::StartGame);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(snap.hud.health, 100);
    assert_ne!(engine.player(), Some(player));
    assert_eq!(snap.enemies_alive, ENEMY_COUNT as u32);
}

#[test]
fn test_destroyed_crates_drop_pickups_above_them() {
    let mut drops = 0;
    for seed in 1..=5 {
        let mut engine = SimulationEngine::new(SimConfig {
            seed,
            ..Default::default()
        })
        .unwrap();
        engine.queue_command(PlayerCommand::StartGame);
        engine.tick();
        let doomed: Vec<hecs::Entity> = engine
            .world()
            .iter()
            .filter(|e| e.has::<Enemy>() || e.has::<Pickup>())
            .map(|e| e.entity())
            .collect();
        for entity in doomed {
            engine.release_entity(entity);
        }
        // Let the crates settle
        for _ in 0..60 {
            engine.tick();
        }

        let crates: Vec<(hecs::Entity, Position)> = {
            let mut q = engine.world().query::<(&Destructible, &Position)>();
            q.iter().map(|(e, (_, pos))| (e, *pos)).collect()
        };
        assert_eq!(crates.len(), CRATE_COUNT);

        for (entity, position) in &crates {
            engine.world_mut().get::<&mut Destructible>(*entity).unwrap().health = 1.0;
            engine.spawn_test_projectile(ProjectileKind::Bullet, *position, Vec3::Y, 3.0);
            let before = count::<Pickup>(&engine);
            engine.tick();
            assert!(!engine.world().contains(*entity));

            // A drop lands one unit above the crate it came from
            let mut q = engine.world().query::<(&Pickup, &Position)>();
            let pickups: Vec<(PickupKind, Position)> =
                q.iter().map(|(_, (p, pos))| (p.kind, *pos)).collect();
            assert!(pickups.len() <= before + 1);
            if pickups.len() == before + 1 {
                let above = position.offset(0.0, 1.0, 0.0);
                assert!(pickups.iter().any(|(kind, pos)| {
                    matches!(kind, PickupKind::Ammo | PickupKind::Health) && pos.range_to(&above) < 0.05
                }));
                drops += 1;
            }
        }
        assert_eq!(count::<Destructible>(&engine), 0);

        // Debris and hit sparks are live until their timers run out
        assert!(engine.scene().live_count() > engine.world().len() as usize);
        for _ in 0..120 {
            engine.tick();
        }
        assert_eq!(engine.scene().live_count(), engine.world().len() as usize);
    }
    assert!(drops > 0, "75 crates should drop at least one pickup");
}

// ---- Release invariants and timers ----

#[test]
fn test_release_frees_body_and_visual() {
    let (mut engine, _) = started();
    let crate_entity = {
        let mut q = engine.world().query::<&Destructible>();
        q.iter().next().unwrap().0
    };
    let body = engine.world().get::<&PhysicsBody>(crate_entity).unwrap().0;
    let visual = engine.world().get::<&Visual>(crate_entity).unwrap().0;

    assert!(engine.release_entity(crate_entity));
    assert!(!engine.world().contains(crate_entity));
    assert!(!engine.physics().contains(body));
    assert!(!engine.scene().is_live(visual));
    assert!(!engine.release_entity(crate_entity));

    let snap = engine.tick();
    assert!(snap.scene_commands.iter().any(|c| matches!(
        c,
        cyberstrike_core::state::SceneCommand::Despawn { id } if *id == visual
    )));
}

#[test]
fn test_owned_timers_never_fire_after_release() {
    let (mut engine, _) = started();
    let building_visual = {
        let mut q = engine.world().query::<(&Building, &Visual)>();
        q.iter().next().unwrap().1 .1 .0
    };
    let crate_entity = {
        let mut q = engine.world().query::<&Destructible>();
        q.iter().next().unwrap().0
    };

    engine.schedule_owned_timer(crate_entity, 0.5, TimerAction::RemoveVisual(building_visual));
    engine.release_entity(crate_entity);
    for _ in 0..60 {
        engine.tick();
    }
    assert!(engine.scene().is_live(building_visual));
}

#[test]
fn test_effects_expire() {
    let (mut engine, _) = started();
    engine.clear_targets();
    engine.queue_command(PlayerCommand::SetControl {
        control: Control::Shoot,
        pressed: true,
    });
    engine.tick();
    engine.queue_command(PlayerCommand::SetControl {
        control: Control::Shoot,
        pressed: false,
    });
    let with_flash = engine.scene().live_count();
    for _ in 0..6 {
        engine.tick();
    }
    // The muzzle flash is gone; the bullet is still flying
    assert_eq!(engine.scene().live_count(), with_flash - 1);
}

// ---- Phases and input ----

#[test]
fn test_pause_and_resume() {
    let (mut engine, _) = started();
    engine.queue_command(key_down("Escape"));
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Paused);
    assert!(snap.pointer_release_requested);
    let paused_at = snap.time;

    for _ in 0..30 {
        assert_eq!(engine.tick().time, paused_at);
    }

    engine.queue_command(PlayerCommand::ResumeGame);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Playing);
    assert!(snap.pointer_lock_requested);
    assert_eq!(snap.time.tick, paused_at.tick + 1);
}

#[test]
fn test_input_ignored_unless_playing() {
    let mut engine = engine();
    engine.queue_command(key_down("Escape"));
    assert_eq!(engine.tick().phase, GamePhase::MainMenu);

    engine.queue_command(PlayerCommand::StartGame);
    engine.tick();
    engine.queue_command(PlayerCommand::PauseGame);
    engine.tick();

    engine.queue_command(key_down("Digit2"));
    assert_eq!(engine.tick().hud.active_slot, 0);

    engine.queue_command(PlayerCommand::ResumeGame);
    engine.queue_command(key_down("Digit2"));
    assert_eq!(engine.tick().hud.active_slot, 1);
}

#[test]
fn test_mouse_look_needs_pointer_lock() {
    let (mut engine, first) = started();
    engine.queue_command(PlayerCommand::Input {
        event: InputEvent::MouseMove { dx: 300.0, dy: 0.0 },
    });
    assert_eq!(engine.tick().camera.direction, first.camera.direction);

    engine.queue_command(PlayerCommand::Input {
        event: InputEvent::PointerLockChange { locked: true },
    });
    engine.queue_command(PlayerCommand::Input {
        event: InputEvent::MouseMove { dx: 300.0, dy: 0.0 },
    });
    let snap = engine.tick();
    assert!(snap.pointer_locked);
    assert_ne!(snap.camera.direction, first.camera.direction);
}

#[test]
fn test_tutorial_flow() {
    let mut engine = engine();
    engine.queue_command(PlayerCommand::StartTutorial);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Tutorial);
    let view = snap.tutorial.unwrap();
    assert_eq!(view.step, 0);
    assert!(!view.can_go_back);

    for _ in 0..4 {
        engine.queue_command(PlayerCommand::NextTutorialStep);
    }
    engine.queue_command(PlayerCommand::PrevTutorialStep);
    engine.queue_command(PlayerCommand::NextTutorialStep);
    let view = engine.tick().tutorial.unwrap();
    assert_eq!(view.step, 4);
    assert_eq!(view.next_label, "Start Game");

    engine.queue_command(PlayerCommand::NextTutorialStep);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Playing);
    assert!(snap.tutorial.is_none());
}

#[test]
fn test_skip_tutorial_starts_game() {
    let mut engine = engine();
    engine.queue_commands([PlayerCommand::StartTutorial, PlayerCommand::SkipTutorial]);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Playing);
    assert!(snap.tutorial.is_none());
}

#[test]
fn test_main_menu_keeps_level_for_continue() {
    let (mut engine, _) = started();
    let player = engine.player();
    engine.queue_command(PlayerCommand::ShowMainMenu);
    assert_eq!(engine.tick().phase, GamePhase::MainMenu);
    engine.queue_command(PlayerCommand::StartGame);
    engine.tick();
    assert_eq!(engine.player(), player);
}

#[test]
fn test_settings_commands() {
    let mut engine = engine();
    engine.queue_commands([
        PlayerCommand::SetGraphicsQuality {
            quality: GraphicsQuality::Low,
        },
        PlayerCommand::SetMasterVolume { volume: 3.0 },
        PlayerCommand::SetMouseSensitivity { sensitivity: -2.0 },
        PlayerCommand::SetResolution {
            label: "1280x720".into(),
        },
        PlayerCommand::SetTimeScale { scale: 9.0 },
    ]);
    let snap = engine.tick();
    assert!(!snap.render.shadows);
    assert_eq!(snap.render.pixel_ratio_cap, 1.0);
    assert_eq!(snap.settings.master_volume, 1.0);
    assert_eq!(snap.settings.mouse_sensitivity, 1.0);
    assert_eq!(snap.settings.resolution, "1280x720");
    assert_eq!(engine.time_scale(), 4.0);
}

// ---- Persistence ----

#[test]
fn test_save_and_load_round_trip() {
    let (mut engine, _) = started();
    engine.clear_targets();
    let player = engine.player().unwrap();
    {
        let mut stats = engine.world_mut().get::<&mut PlayerStats>(player).unwrap();
        stats.health = 42.0;
        stats.xp = 60;
    }
    engine.queue_command(PlayerCommand::SaveGame);
    let snap = engine.tick();
    assert!(has_message(&snap, "Game saved!"));

    {
        let mut stats = engine.world_mut().get::<&mut PlayerStats>(player).unwrap();
        stats.health = 10.0;
        stats.xp = 0;
    }
    {
        let mut arsenal = engine.world_mut().get::<&mut Arsenal>(player).unwrap();
        arsenal.weapons[0].current_ammo = 3;
    }
    engine.queue_command(PlayerCommand::LoadGame);
    let snap = engine.tick();
    assert!(has_message(&snap, "Game loaded!"));
    assert_eq!(snap.hud.health, 42);
    assert_eq!(snap.hud.xp, 60);
    assert_eq!(snap.hud.ammo_current, 30);
}

#[test]
fn test_load_without_save_warns() {
    let mut engine = engine();
    engine.queue_command(PlayerCommand::LoadGame);
    let snap = engine.tick();
    let note = snap
        .notifications
        .iter()
        .find(|n| n.message == "No save game found!")
        .unwrap();
    assert_eq!(note.level, NotificationLevel::Warning);
    assert!(engine.player().is_none());
}

#[test]
fn test_load_corrupt_save_reports_error() {
    let mut engine = engine();
    engine.store_mut().set(SAVE_KEY, "{not json").unwrap();
    engine.queue_command(PlayerCommand::LoadGame);
    let snap = engine.tick();
    let note = snap
        .notifications
        .iter()
        .find(|n| n.message == "Failed to load game!")
        .unwrap();
    assert_eq!(note.level, NotificationLevel::Error);
}

#[test]
fn test_file_backed_save_survives_restart() {
    let dir = std::env::temp_dir().join("cyberstrike_test_engine_saves");
    let _ = std::fs::remove_dir_all(&dir);
    let config = SimConfig {
        save_dir: Some(dir.clone()),
        ..Default::default()
    };

    let mut first = SimulationEngine::new(config.clone()).unwrap();
    first.queue_commands([PlayerCommand::StartGame, PlayerCommand::SaveGame]);
    assert!(has_message(&first.tick(), "Game saved!"));

    let mut second = SimulationEngine::new(config).unwrap();
    second.queue_command(PlayerCommand::LoadGame);
    let snap = second.tick();
    assert!(has_message(&snap, "Game loaded!"));
    assert!(second.player().is_some());
    assert_eq!(snap.phase, GamePhase::MainMenu);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_notifications_expire() {
    let (mut engine, _) = started();
    engine.queue_command(PlayerCommand::SaveGame);
    assert!(has_message(&engine.tick(), "Game saved!"));
    let mut last = None;
    for _ in 0..180 {
        last = Some(engine.tick());
    }
    assert!(!has_message(&last.unwrap(), "Game saved!"));
}

#[test]
fn test_load_after_game_over_returns_to_menu() {
    let (mut engine, _) = started();
    engine.clear_targets();
    engine.queue_command(PlayerCommand::SaveGame);
    engine.tick();

    let player = engine.player().unwrap();
    engine.world_mut().get::<&mut PlayerStats>(player).unwrap().health = 1.0;
    let position = *engine.world().get::<&Position>(player).unwrap();
    engine.spawn_test_projectile(ProjectileKind::EnemyBullet, position, Vec3::Y, 2.0);
    assert_eq!(engine.tick().phase, GamePhase::GameOver);

    engine.queue_command(PlayerCommand::LoadGame);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::MainMenu);
    assert!(has_message(&snap, "Game loaded!"));
    assert_eq!(snap.hud.health, 100);

    // The loaded level is continued, not rebuilt
    let loaded = engine.player();
    engine.queue_command(PlayerCommand::StartGame);
    let snap = engine.tick();
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(engine.player(), loaded);
    assert_eq!(snap.hud.health, 100);
}
