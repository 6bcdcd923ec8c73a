//! Game state snapshot: the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, Notification};
use crate::settings::{RenderProfile, Settings};
use crate::types::{SimTime, VisualId};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub hud: HudView,
    pub camera: CameraView,
    pub minimap: MinimapView,
    /// Present while the tutorial overlay is shown.
    pub tutorial: Option<TutorialView>,
    /// Renderer instructions accumulated since the previous snapshot.
    pub scene_commands: Vec<SceneCommand>,
    pub audio_events: Vec<AudioEvent>,
    /// Notifications currently on screen.
    pub notifications: Vec<Notification>,
    /// Red screen overlay after the player takes damage.
    pub damage_flash: bool,
    /// The frontend should capture the pointer.
    pub pointer_lock_requested: bool,
    /// The frontend should release the pointer.
    pub pointer_release_requested: bool,
    pub pointer_locked: bool,
    pub enemies_alive: u32,
    /// Number of visuals the renderer should currently hold.
    pub live_visuals: u32,
    pub settings: Settings,
    pub render: RenderProfile,
}

/// Heads-up display values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    /// Rounded current health.
    pub health: u32,
    pub max_health: u32,
    pub weapon_name: String,
    pub ammo_current: u32,
    pub ammo_total: u32,
    pub reloading: bool,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    /// Highlighted hotbar slot.
    pub active_slot: usize,
}

/// Camera placement for the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraView {
    pub position: [f32; 3],
    pub look_at: [f32; 3],
    /// Unit view direction (also the aim direction).
    pub direction: [f32; 3],
}

/// Minimap markers in canvas pixels (origin top-left).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MinimapView {
    pub size: f32,
    pub player: [f32; 2],
    pub enemies: Vec<[f32; 2]>,
    pub pickups: Vec<[f32; 2]>,
}

/// Tutorial overlay contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialView {
    pub step: usize,
    pub total_steps: usize,
    pub title: String,
    pub text: String,
    pub can_go_back: bool,
    /// "Next", or "Start Game" on the last step.
    pub next_label: String,
}

/// Instruction for the external renderer's scene graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SceneCommand {
    Spawn {
        id: VisualId,
        mesh: MeshKind,
        position: [f32; 3],
    },
    Move {
        id: VisualId,
        position: [f32; 3],
    },
    Despawn {
        id: VisualId,
    },
}

/// What a visual looks like.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum MeshKind {
    Ground { size: f32 },
    Building { width: f32, height: f32, depth: f32 },
    Player,
    Enemy { archetype: EnemyArchetype, size: f32 },
    Crate { size: f32 },
    Pickup { pickup: PickupKind },
    Projectile { projectile: ProjectileKind },
    Effect { effect: EffectKind },
    Light { light: LightKind },
    Skybox,
    DustField { particles: u32 },
}

impl Default for RenderProfile {
    fn default() -> Self {
        GraphicsQuality::default().render_profile()
    }
}
