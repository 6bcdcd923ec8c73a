//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world and the physics, scene and
//! timer backends, processes player commands, runs all systems and produces
//! `GameStateSnapshot`s. Completely headless, enabling deterministic testing.

use std::collections::VecDeque;
use std::path::PathBuf;

use glam::Vec3;
use hecs::{Entity, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use cyberstrike_core::commands::PlayerCommand;
use cyberstrike_core::components::*;
use cyberstrike_core::constants::*;
use cyberstrike_core::enums::{GamePhase, NotificationLevel, PickupKind};
use cyberstrike_core::events::AudioEvent;
use cyberstrike_core::input::{self, ControlState, MouseLook};
use cyberstrike_core::settings::Settings;
use cyberstrike_core::state::{CameraView, GameStateSnapshot};
use cyberstrike_core::types::{Position, SimTime};

use crate::error::SimError;
use crate::frame::{Backends, FrameEvent};
use crate::notifications::NotificationBoard;
use crate::persistence::{self, FileStore, MemoryStore, PersistError, SaveData, SaveStore, SavedPlayer};
use crate::physics::{PhysicsBody, PhysicsWorld};
use crate::scene::Scene;
use crate::systems;
use crate::systems::projectiles::HitFeedback;
use crate::systems::snapshot::SnapshotFrame;
use crate::systems::weapons::WeaponFeedback;
use crate::timers::{TimerAction, TimerQueue};
use crate::tutorial::{Tutorial, TutorialAdvance};
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Initial player settings.
    pub settings: Settings,
    /// Directory for the save file. `None` keeps saves in memory.
    pub save_dir: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            settings: Settings::default(),
            save_dir: None,
        }
    }
}

impl SimConfig {
    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.time_scale.is_finite() || !(0.0..=4.0).contains(&self.time_scale) {
            return Err(SimError::InvalidConfig(format!(
                "time scale {} outside 0..=4",
                self.time_scale
            )));
        }
        let s = &self.settings;
        for (name, volume) in [("master volume", s.master_volume), ("sfx volume", s.sfx_volume)] {
            if !(0.0..=1.0).contains(&volume) {
                return Err(SimError::InvalidConfig(format!(
                    "{name} {volume} outside 0..=1"
                )));
            }
        }
        if !s.mouse_sensitivity.is_finite() || s.mouse_sensitivity <= 0.0 {
            return Err(SimError::InvalidConfig(format!(
                "mouse sensitivity {} must be positive",
                s.mouse_sensitivity
            )));
        }
        Ok(())
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    backends: Backends,
    time: SimTime,
    /// Counts every `tick()` call, paused or not. Timers run on this clock.
    frame: u64,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    settings: Settings,
    controls: ControlState,
    look: MouseLook,
    camera: CameraView,
    tutorial: Tutorial,
    notifications: NotificationBoard,
    store: Box<dyn SaveStore>,
    player: Option<Entity>,
    /// The live level's session ended in a game over.
    session_over: bool,
    damage_flash: bool,
    pointer_lock_requested: bool,
    pointer_release_requested: bool,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<Entity>,
    frame_events: Vec<FrameEvent>,
    audio_events: Vec<AudioEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        let store: Box<dyn SaveStore> = match &config.save_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir).map_err(PersistError::from)?;
                Box::new(FileStore::new(dir))
            }
            None => Box::new(MemoryStore::new()),
        };
        Self::with_store(config, store)
    }

    /// Create an engine that saves into the given store.
    pub fn with_store(config: SimConfig, store: Box<dyn SaveStore>) -> Result<Self, SimError> {
        config.validate()?;
        let look = MouseLook::default();
        debug!(seed = config.seed, "simulation engine created");

        Ok(Self {
            world: World::new(),
            backends: Backends::new(),
            time: SimTime::default(),
            frame: 0,
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            settings: config.settings,
            controls: ControlState::default(),
            look,
            camera: systems::player::camera_view(Position::from_array(PLAYER_SPAWN), &look),
            tutorial: Tutorial::default(),
            notifications: NotificationBoard::new(),
            store,
            player: None,
            session_over: false,
            damage_flash: false,
            pointer_lock_requested: false,
            pointer_release_requested: false,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            frame_events: Vec::new(),
            audio_events: Vec::new(),
        })
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.frame += 1;
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems();
            self.time.advance();
        }

        self.fire_due_timers();
        self.build_snapshot()
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Number of `tick()` calls so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn physics(&self) -> &PhysicsWorld {
        &self.backends.physics
    }

    pub fn scene(&self) -> &Scene {
        &self.backends.scene
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.backends.timers
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The player entity of the live level.
    pub fn player(&self) -> Option<Entity> {
        self.player
    }

    /// Mutable world access for test setups.
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Release an entity through the normal cleanup path (for tests).
    #[cfg(test)]
    pub fn release_entity(&mut self, entity: Entity) -> bool {
        systems::cleanup::release(&mut self.world, &mut self.backends, entity)
    }

    /// Release every enemy, crate and pickup so a test runs undisturbed.
    #[cfg(test)]
    pub fn clear_targets(&mut self) {
        let doomed: Vec<Entity> = self
            .world
            .iter()
            .filter(|e| e.has::<Enemy>() || e.has::<Pickup>() || e.has::<Destructible>())
            .map(|e| e.entity())
            .collect();
        for entity in doomed {
            systems::cleanup::release(&mut self.world, &mut self.backends, entity);
        }
    }

    /// Spawn a projectile directly (for tests).
    #[cfg(test)]
    pub fn spawn_test_projectile(
        &mut self,
        kind: cyberstrike_core::enums::ProjectileKind,
        origin: Position,
        direction: Vec3,
        life_secs: f32,
    ) -> Entity {
        world_setup::spawn_projectile(
            &mut self.world,
            &mut self.backends,
            kind,
            origin,
            direction,
            PLAYER_PROJECTILE_SPEED,
            10.0,
            life_secs,
        )
    }

    /// Schedule a timer owned by `owner` (for tests).
    #[cfg(test)]
    pub fn schedule_owned_timer(&mut self, owner: Entity, delay_secs: f32, action: TimerAction) {
        self.backends
            .timers
            .schedule(self.frame, delay_secs, Some(owner), action);
    }

    /// Direct access to the save store (for tests).
    #[cfg(test)]
    pub fn store_mut(&mut self) -> &mut dyn SaveStore {
        self.store.as_mut()
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        let playing = self.phase == GamePhase::Playing;
        match command {
            PlayerCommand::SetControl { control, pressed } => {
                // Releases always land so keys never stick across pauses
                if playing || !pressed {
                    self.controls.set(control, pressed);
                }
            }
            PlayerCommand::Look { dx, dy } => {
                if playing && self.look.locked {
                    self.look.apply(dx, dy, self.settings.mouse_sensitivity);
                }
            }
            PlayerCommand::SetPointerLock { locked } => {
                self.look.locked = locked;
            }
            PlayerCommand::RequestPointerLock => {
                if playing && !self.look.locked {
                    self.pointer_lock_requested = true;
                }
            }
            PlayerCommand::Input { event } => {
                for translated in input::translate(&event, self.phase, self.look.locked) {
                    self.handle_command(translated);
                }
            }
            PlayerCommand::Reload => {
                if playing {
                    self.manual_reload();
                }
            }
            PlayerCommand::SelectWeapon { index } => {
                if playing {
                    self.with_arsenal(|arsenal| {
                        if index < arsenal.weapons.len() {
                            arsenal.current = index;
                        }
                    });
                }
            }
            PlayerCommand::CycleWeapon { delta } => {
                if playing {
                    self.with_arsenal(|arsenal| {
                        let len = arsenal.weapons.len() as i64;
                        if len > 0 {
                            arsenal.current =
                                (arsenal.current as i64 + delta as i64).rem_euclid(len) as usize;
                        }
                    });
                }
            }
            PlayerCommand::StartGame => self.start_game(),
            PlayerCommand::PauseGame => {
                if playing {
                    self.phase = GamePhase::Paused;
                    self.pointer_release_requested = true;
                    info!(tick = self.time.tick, "game paused");
                }
            }
            PlayerCommand::ResumeGame => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Playing;
                    self.pointer_lock_requested = true;
                    info!(tick = self.time.tick, "game resumed");
                }
            }
            PlayerCommand::ShowMainMenu => self.show_main_menu(),
            PlayerCommand::SaveGame => self.save(),
            PlayerCommand::LoadGame => self.load(),
            PlayerCommand::StartTutorial => {
                if self.phase == GamePhase::MainMenu {
                    self.tutorial.start();
                    self.phase = GamePhase::Tutorial;
                }
            }
            PlayerCommand::NextTutorialStep => {
                if self.phase == GamePhase::Tutorial
                    && self.tutorial.next() == TutorialAdvance::Finished
                {
                    self.start_game();
                }
            }
            PlayerCommand::PrevTutorialStep => {
                if self.phase == GamePhase::Tutorial {
                    self.tutorial.prev();
                }
            }
            PlayerCommand::SkipTutorial => {
                if self.phase == GamePhase::Tutorial {
                    self.tutorial.skip();
                    self.start_game();
                }
            }
            PlayerCommand::SetGraphicsQuality { quality } => {
                self.settings.graphics = quality;
            }
            PlayerCommand::SetResolution { label } => {
                self.settings.resolution = label;
            }
            PlayerCommand::SetMouseSensitivity { sensitivity } => {
                self.settings.mouse_sensitivity = sensitivity;
                self.settings = std::mem::take(&mut self.settings).sanitized();
            }
            PlayerCommand::SetMasterVolume { volume } => {
                self.settings.master_volume = volume;
                self.settings = std::mem::take(&mut self.settings).sanitized();
            }
            PlayerCommand::SetSfxVolume { volume } => {
                self.settings.sfx_volume = volume;
                self.settings = std::mem::take(&mut self.settings).sanitized();
            }
            PlayerCommand::SetTimeScale { scale } => {
                if scale.is_finite() {
                    self.time_scale = scale.clamp(0.0, 4.0);
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Physics step
        self.backends.physics.step();
        // 2. Crate transforms
        systems::sync::run(&mut self.world, &mut self.backends);
        // 3. Player movement, ground check, camera
        if let Some(camera) =
            systems::player::run(&mut self.world, &mut self.backends, &self.controls, &self.look)
        {
            self.camera = camera;
        }
        // 4. Weapon fire and auto-reload
        let aim = Vec3::from_array(self.camera.direction);
        let mut weapon_feedback = WeaponFeedback {
            notifications: &mut self.notifications,
            audio_events: &mut self.audio_events,
            frame: self.frame,
            tick: self.time.tick,
        };
        systems::weapons::run(
            &mut self.world,
            &mut self.backends,
            &self.controls,
            aim,
            &mut weapon_feedback,
        );
        // 5. Enemy AI
        systems::enemy_ai::run(
            &mut self.world,
            &mut self.backends,
            &mut self.rng,
            self.time.tick,
            &mut self.audio_events,
        );
        // 6. Projectiles (lifetime, hits, explosions)
        let mut hit_feedback = HitFeedback {
            events: &mut self.frame_events,
            audio_events: &mut self.audio_events,
            despawn_buffer: &mut self.despawn_buffer,
            frame: self.frame,
        };
        systems::projectiles::run(&mut self.world, &mut self.backends, &mut hit_feedback);
        // 7. Pickups
        systems::pickups::run(
            &mut self.world,
            &mut self.backends,
            &mut self.notifications,
            &mut self.frame_events,
            &mut self.audio_events,
            &mut self.despawn_buffer,
            self.time.elapsed_secs,
            self.frame,
            self.time.tick,
        );
        // 8. Rewards, drops, death effects, damage
        self.resolve_frame_events();
        // 9. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.backends, &mut self.despawn_buffer);
    }

    fn resolve_frame_events(&mut self) {
        let events = std::mem::take(&mut self.frame_events);
        for event in events {
            match event {
                FrameEvent::EnemyKilled { enemy_id, position } => {
                    systems::effects::death_burst(&mut self.backends, &mut self.rng, self.frame, position);
                    self.grant_xp(ENEMY_KILL_XP);
                    self.notify(
                        NotificationLevel::Success,
                        format!("Enemy eliminated! +{ENEMY_KILL_XP} XP"),
                    );
                    info!(enemy_id, "enemy eliminated");
                }
                FrameEvent::DestructibleDestroyed { position } => {
                    systems::effects::debris_burst(&mut self.backends, &mut self.rng, self.frame, position);
                    if self.rng.gen_bool(CRATE_DROP_CHANCE) {
                        let kind = if self.rng.gen_bool(0.5) {
                            PickupKind::Ammo
                        } else {
                            PickupKind::Health
                        };
                        world_setup::spawn_pickup(
                            &mut self.world,
                            &mut self.backends,
                            kind,
                            position.offset(0.0, 1.0, 0.0),
                        );
                        debug!(%kind, "crate dropped pickup");
                    }
                }
                FrameEvent::PlayerDamaged { damage } => {
                    debug!(damage, "player hit");
                    self.damage_flash = true;
                    self.backends.timers.schedule(
                        self.frame,
                        DAMAGE_FLASH_SECS,
                        None,
                        TimerAction::EndDamageFlash,
                    );
                    if self.player_health().is_some_and(|h| h <= 0.0) {
                        self.game_over();
                    }
                }
                FrameEvent::ExperienceGained { amount } => self.grant_xp(amount),
            }
        }
    }

    fn fire_due_timers(&mut self) {
        for (_owner, action) in self.backends.timers.drain_due(self.frame) {
            match action {
                TimerAction::RemoveVisual(id) => {
                    self.backends.scene.despawn(id);
                }
                TimerAction::ExpireNotification(id) => self.notifications.expire(id),
                TimerAction::EndDamageFlash => self.damage_flash = false,
                TimerAction::ReturnToMenu => self.show_main_menu(),
                TimerAction::CompleteReload { weapon_index } => self.finish_reload(weapon_index),
            }
        }
    }

    fn build_snapshot(&mut self) -> GameStateSnapshot {
        let frame = SnapshotFrame {
            time: self.time,
            phase: self.phase,
            camera: self.camera,
            tutorial: self.tutorial.view(),
            scene_commands: self.backends.scene.drain_commands(),
            audio_events: std::mem::take(&mut self.audio_events),
            notifications: self.notifications.active().to_vec(),
            damage_flash: self.damage_flash,
            pointer_lock_requested: std::mem::take(&mut self.pointer_lock_requested),
            pointer_release_requested: std::mem::take(&mut self.pointer_release_requested),
            pointer_locked: self.look.locked,
            live_visuals: self.backends.scene.live_count() as u32,
            settings: self.settings.clone(),
        };
        systems::snapshot::build_snapshot(&self.world, frame)
    }

    fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(
            &mut self.backends.timers,
            self.frame,
            self.time.tick,
            level,
            message,
        );
    }

    fn player_health(&self) -> Option<f32> {
        let player = self.player?;
        self.world.get::<&PlayerStats>(player).ok().map(|s| s.health)
    }

    fn with_arsenal(&mut self, f: impl FnOnce(&mut Arsenal)) {
        if let Some(player) = self.player {
            if let Ok(mut arsenal) = self.world.get::<&mut Arsenal>(player) {
                f(&mut arsenal);
            }
        }
    }

    fn grant_xp(&mut self, amount: u32) {
        let Some(player) = self.player else {
            return;
        };
        let reached = match self.world.get::<&mut PlayerStats>(player) {
            Ok(mut stats) => systems::leveling::award_xp(&mut stats, amount),
            Err(_) => return,
        };
        for level in reached {
            info!(level, "level up");
            self.audio_events.push(AudioEvent::LevelUp { level });
            self.notify(
                NotificationLevel::Success,
                format!("LEVEL UP! You are now level {level}!"),
            );
        }
    }

    fn manual_reload(&mut self) {
        let Some(player) = self.player else {
            return;
        };
        let Ok(mut arsenal) = self.world.get::<&mut Arsenal>(player) else {
            return;
        };
        let index = arsenal.current;
        if let Some(weapon) = arsenal.weapons.get_mut(index) {
            let mut feedback = WeaponFeedback {
                notifications: &mut self.notifications,
                audio_events: &mut self.audio_events,
                frame: self.frame,
                tick: self.time.tick,
            };
            systems::weapons::start_reload(weapon, index, player, &mut self.backends, &mut feedback);
        }
    }

    fn finish_reload(&mut self, weapon_index: usize) {
        let Some(player) = self.player else {
            return;
        };
        let completed = match self.world.get::<&mut Arsenal>(player) {
            Ok(mut arsenal) => match arsenal.weapons.get_mut(weapon_index) {
                Some(weapon) if weapon.reloading => {
                    systems::weapons::complete_reload(weapon);
                    debug!(weapon = %weapon.name, "reload complete");
                    true
                }
                _ => false,
            },
            Err(_) => false,
        };
        if completed {
            self.notify(NotificationLevel::Success, "Reload complete!");
        }
    }

    fn start_game(&mut self) {
        if !matches!(self.phase, GamePhase::MainMenu | GamePhase::Tutorial) {
            return;
        }
        if self.player.is_none() || self.session_over {
            self.reset_level();
        }
        self.tutorial.skip();
        self.phase = GamePhase::Playing;
        self.pointer_lock_requested = true;
        info!(frame = self.frame, "game started");
    }

    fn show_main_menu(&mut self) {
        self.phase = GamePhase::MainMenu;
        self.controls.clear();
        self.tutorial.skip();
        self.pointer_release_requested = true;
    }

    fn game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.session_over = true;
        self.controls.clear();
        self.pointer_release_requested = true;
        self.notify(NotificationLevel::Error, "GAME OVER");
        self.backends.timers.schedule(
            self.frame,
            GAME_OVER_DELAY_SECS,
            None,
            TimerAction::ReturnToMenu,
        );
        info!(tick = self.time.tick, "game over");
    }

    /// Tear down whatever level is live and build a fresh one.
    fn reset_level(&mut self) {
        systems::cleanup::release_all(&mut self.world, &mut self.backends);
        self.backends.physics = PhysicsWorld::new();
        self.notifications.clear();
        self.despawn_buffer.clear();
        self.frame_events.clear();
        self.controls.clear();
        self.damage_flash = false;
        self.look = MouseLook {
            locked: self.look.locked,
            ..MouseLook::default()
        };
        self.time = SimTime::default();

        let player = world_setup::build_level(&mut self.world, &mut self.backends, &mut self.rng);
        self.player = Some(player);
        self.session_over = false;
        self.camera = systems::player::camera_view(Position::from_array(PLAYER_SPAWN), &self.look);
    }

    fn save_data(&self) -> Option<SaveData> {
        let player = self.player?;
        let mut query = self
            .world
            .query_one::<(&PlayerStats, &Arsenal, &Position)>(player)
            .ok()?;
        let (stats, arsenal, position) = query.get()?;
        Some(SaveData {
            player: SavedPlayer {
                health: stats.health,
                max_health: stats.max_health,
                level: stats.level,
                xp: stats.xp,
                xp_to_next: stats.xp_to_next,
                position: position.to_array(),
                weapons: arsenal.weapons.clone(),
            },
            timestamp: persistence::now_millis(),
        })
    }

    fn save(&mut self) {
        let Some(data) = self.save_data() else {
            warn!("save requested with no live level");
            return;
        };
        match persistence::save_game(self.store.as_mut(), &data) {
            Ok(()) => {
                info!(level = data.player.level, "game saved");
                self.notify(NotificationLevel::Success, "Game saved!");
            }
            Err(e) => {
                warn!(error = %e, "save failed");
                self.notify(NotificationLevel::Error, "Failed to save game!");
            }
        }
    }

    fn load(&mut self) {
        match persistence::load_game(self.store.as_ref()) {
            Ok(data) if !data.player.weapons.is_empty() => {
                if self.player.is_none() || self.session_over {
                    // The rebuild drops any pending return-to-menu timer
                    self.reset_level();
                    self.show_main_menu();
                }
                self.apply_save(data.player);
                info!("game loaded");
                self.notify(NotificationLevel::Success, "Game loaded!");
            }
            Ok(_) => {
                warn!("save has no weapons");
                self.notify(NotificationLevel::Error, "Failed to load game!");
            }
            Err(PersistError::NoSave) => {
                warn!("no save game found");
                self.notify(NotificationLevel::Warning, "No save game found!");
            }
            Err(e) => {
                warn!(error = %e, "load failed");
                self.notify(NotificationLevel::Error, "Failed to load game!");
            }
        }
    }

    fn apply_save(&mut self, saved: SavedPlayer) {
        let Some(player) = self.player else {
            return;
        };
        let position = Position::from_array(saved.position);
        {
            let Ok((stats, arsenal, pos, body, visual)) = self.world.query_one_mut::<(
                &mut PlayerStats,
                &mut Arsenal,
                &mut Position,
                &PhysicsBody,
                &Visual,
            )>(player) else {
                return;
            };
            stats.health = saved.health;
            stats.max_health = saved.max_health;
            stats.level = saved.level;
            stats.xp = saved.xp;
            stats.xp_to_next = saved.xp_to_next;

            arsenal.weapons = saved
                .weapons
                .into_iter()
                .map(|w| Weapon {
                    reloading: false,
                    last_fired_tick: None,
                    ..w
                })
                .collect();
            arsenal.current = arsenal.current.min(arsenal.weapons.len().saturating_sub(1));

            *pos = position;
            self.backends.physics.set_translation(body.0, position);
            self.backends.scene.move_to(visual.0, position);
        }
        self.backends
            .timers
            .cancel_matching(player, |a| matches!(a, TimerAction::CompleteReload { .. }));
        self.camera = systems::player::camera_view(position, &self.look);
    }
}
