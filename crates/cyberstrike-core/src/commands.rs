//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::input::InputEvent;

/// All possible player actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Controls ---
    /// Press or release a held control.
    SetControl { control: Control, pressed: bool },
    /// Relative mouse movement while the pointer is locked.
    Look { dx: f32, dy: f32 },
    /// Pointer lock was acquired or lost.
    SetPointerLock { locked: bool },
    /// Ask the frontend to capture the pointer.
    RequestPointerLock,
    /// A raw frontend event, translated by the keymap at the tick boundary.
    Input { event: InputEvent },
    /// Manual reload of the active weapon.
    Reload,
    /// Switch to the weapon in the given slot.
    SelectWeapon { index: usize },
    /// Step through the weapon list (wraps both ways).
    CycleWeapon { delta: i32 },

    // --- Game flow ---
    StartGame,
    PauseGame,
    ResumeGame,
    ShowMainMenu,
    SaveGame,
    LoadGame,

    // --- Tutorial ---
    StartTutorial,
    NextTutorialStep,
    PrevTutorialStep,
    SkipTutorial,

    // --- Settings ---
    SetGraphicsQuality { quality: GraphicsQuality },
    SetResolution { label: String },
    SetMouseSensitivity { sensitivity: f32 },
    SetMasterVolume { volume: f32 },
    SetSfxVolume { volume: f32 },

    // --- Simulation control ---
    /// Set time scale (1.0 = normal, 0.0 = frozen).
    SetTimeScale { scale: f64 },
}
