//! Raw frontend input and the keymap that turns it into player commands.
//!
//! Key-down, mouse-button-down, mouse-move and wheel events are ignored
//! unless the game is in the `Playing` phase. Releases are always honoured
//! so a control can never stay stuck after a pause.

use serde::{Deserialize, Serialize};

use crate::commands::PlayerCommand;
use crate::constants::{MAX_LOOK_PITCH, MOUSE_LOOK_SCALE};
use crate::enums::{Control, GamePhase};

/// Mouse button as reported by the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// A raw input event captured by the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    /// Key pressed; `code` is the DOM key code (e.g. "KeyW").
    KeyDown { code: String },
    KeyUp { code: String },
    MouseDown { button: MouseButton },
    MouseUp { button: MouseButton },
    /// Relative pointer movement.
    MouseMove { dx: f32, dy: f32 },
    Wheel { delta_y: f32 },
    PointerLockChange { locked: bool },
}

/// Held control flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub sprint: bool,
    pub crouch: bool,
    pub shoot: bool,
    pub reload: bool,
}

impl ControlState {
    pub fn set(&mut self, control: Control, pressed: bool) {
        match control {
            Control::Forward => self.forward = pressed,
            Control::Backward => self.backward = pressed,
            Control::Left => self.left = pressed,
            Control::Right => self.right = pressed,
            Control::Jump => self.jump = pressed,
            Control::Sprint => self.sprint = pressed,
            Control::Crouch => self.crouch = pressed,
            Control::Shoot => self.shoot = pressed,
            Control::Reload => self.reload = pressed,
        }
    }

    pub fn is_pressed(&self, control: Control) -> bool {
        match control {
            Control::Forward => self.forward,
            Control::Backward => self.backward,
            Control::Left => self.left,
            Control::Right => self.right,
            Control::Jump => self.jump,
            Control::Sprint => self.sprint,
            Control::Crouch => self.crouch,
            Control::Shoot => self.shoot,
            Control::Reload => self.reload,
        }
    }

    /// Release every control.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Accumulated mouse-look orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MouseLook {
    /// Horizontal orbit angle (radians).
    pub yaw: f32,
    /// Vertical orbit angle (radians), clamped just inside ±π/2.
    pub pitch: f32,
    pub locked: bool,
}

impl MouseLook {
    /// Apply a relative pointer movement scaled by the user's sensitivity.
    pub fn apply(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.yaw += dx * sensitivity * MOUSE_LOOK_SCALE;
        self.pitch = (self.pitch + dy * sensitivity * MOUSE_LOOK_SCALE)
            .clamp(-MAX_LOOK_PITCH, MAX_LOOK_PITCH);
    }
}

/// Map a DOM key code to a held control.
pub fn control_for_key(code: &str) -> Option<Control> {
    match code {
        "KeyW" => Some(Control::Forward),
        "KeyS" => Some(Control::Backward),
        "KeyA" => Some(Control::Left),
        "KeyD" => Some(Control::Right),
        "Space" => Some(Control::Jump),
        "ShiftLeft" => Some(Control::Sprint),
        "KeyC" => Some(Control::Crouch),
        "KeyR" => Some(Control::Reload),
        _ => None,
    }
}

/// Translate one raw input event into zero or more commands.
pub fn translate(event: &InputEvent, phase: GamePhase, pointer_locked: bool) -> Vec<PlayerCommand> {
    let playing = phase == GamePhase::Playing;
    let mut commands = Vec::new();

    match event {
        InputEvent::KeyDown { code } => {
            if !playing {
                return commands;
            }
            if let Some(control) = control_for_key(code) {
                commands.push(PlayerCommand::SetControl {
                    control,
                    pressed: true,
                });
                if control == Control::Reload {
                    commands.push(PlayerCommand::Reload);
                }
            }
            match code.as_str() {
                "Digit1" => commands.push(PlayerCommand::SelectWeapon { index: 0 }),
                "Digit2" => commands.push(PlayerCommand::SelectWeapon { index: 1 }),
                "Digit3" => commands.push(PlayerCommand::SelectWeapon { index: 2 }),
                "Escape" => commands.push(PlayerCommand::PauseGame),
                _ => {}
            }
        }
        InputEvent::KeyUp { code } => {
            if let Some(control) = control_for_key(code) {
                commands.push(PlayerCommand::SetControl {
                    control,
                    pressed: false,
                });
            }
        }
        InputEvent::MouseDown { button } => {
            if !playing {
                return commands;
            }
            if *button == MouseButton::Left {
                commands.push(PlayerCommand::SetControl {
                    control: Control::Shoot,
                    pressed: true,
                });
            }
            if !pointer_locked {
                commands.push(PlayerCommand::RequestPointerLock);
            }
        }
        InputEvent::MouseUp { button } => {
            if *button == MouseButton::Left {
                commands.push(PlayerCommand::SetControl {
                    control: Control::Shoot,
                    pressed: false,
                });
            }
        }
        InputEvent::MouseMove { dx, dy } => {
            if playing && pointer_locked {
                commands.push(PlayerCommand::Look { dx: *dx, dy: *dy });
            }
        }
        InputEvent::Wheel { delta_y } => {
            if playing {
                let delta = if *delta_y > 0.0 { 1 } else { -1 };
                commands.push(PlayerCommand::CycleWeapon { delta });
            }
        }
        InputEvent::PointerLockChange { locked } => {
            commands.push(PlayerCommand::SetPointerLock { locked: *locked });
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_down(code: &str) -> InputEvent {
        InputEvent::KeyDown {
            code: code.to_string(),
        }
    }

    #[test]
    fn test_movement_keys_map_to_controls() {
        let cmds = translate(&key_down("KeyW"), GamePhase::Playing, true);
        assert_eq!(
            cmds,
            vec![PlayerCommand::SetControl {
                control: Control::Forward,
                pressed: true
            }]
        );
    }

    #[test]
    fn test_key_down_ignored_outside_playing() {
        for phase in [GamePhase::MainMenu, GamePhase::Paused, GamePhase::GameOver] {
            assert!(translate(&key_down("KeyW"), phase, true).is_empty());
        }
    }

    #[test]
    fn test_key_up_honoured_when_paused() {
        let cmds = translate(
            &InputEvent::KeyUp {
                code: "KeyW".into(),
            },
            GamePhase::Paused,
            false,
        );
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn test_reload_key_also_issues_reload() {
        let cmds = translate(&key_down("KeyR"), GamePhase::Playing, true);
        assert!(cmds.contains(&PlayerCommand::Reload));
    }

    #[test]
    fn test_digits_select_weapons_and_escape_pauses() {
        assert_eq!(
            translate(&key_down("Digit2"), GamePhase::Playing, true),
            vec![PlayerCommand::SelectWeapon { index: 1 }]
        );
        assert_eq!(
            translate(&key_down("Escape"), GamePhase::Playing, true),
            vec![PlayerCommand::PauseGame]
        );
    }

    #[test]
    fn test_left_click_shoots_and_requests_lock() {
        let cmds = translate(
            &InputEvent::MouseDown {
                button: MouseButton::Left,
            },
            GamePhase::Playing,
            false,
        );
        assert_eq!(cmds.len(), 2);
        assert!(cmds.contains(&PlayerCommand::RequestPointerLock));
    }

    #[test]
    fn test_mouse_move_requires_lock() {
        let ev = InputEvent::MouseMove { dx: 5.0, dy: 1.0 };
        assert!(translate(&ev, GamePhase::Playing, false).is_empty());
        assert_eq!(translate(&ev, GamePhase::Playing, true).len(), 1);
    }

    #[test]
    fn test_wheel_direction() {
        let down = translate(&InputEvent::Wheel { delta_y: 120.0 }, GamePhase::Playing, true);
        let up = translate(&InputEvent::Wheel { delta_y: -120.0 }, GamePhase::Playing, true);
        assert_eq!(down, vec![PlayerCommand::CycleWeapon { delta: 1 }]);
        assert_eq!(up, vec![PlayerCommand::CycleWeapon { delta: -1 }]);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut look = MouseLook::default();
        look.apply(0.0, 100_000.0, 1.0);
        assert!(look.pitch <= MAX_LOOK_PITCH);
        look.apply(0.0, -300_000.0, 1.0);
        assert!(look.pitch >= -MAX_LOOK_PITCH);
    }

    #[test]
    fn test_control_state_set_and_clear() {
        let mut controls = ControlState::default();
        controls.set(Control::Sprint, true);
        assert!(controls.is_pressed(Control::Sprint));
        controls.clear();
        assert!(!controls.is_pressed(Control::Sprint));
    }
}
