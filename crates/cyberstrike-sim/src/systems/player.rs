//! Player system: movement, jumping, ground check and the orbit camera.

use glam::Vec3;
use hecs::World;

use cyberstrike_core::components::{Player, PlayerStats, Visual};
use cyberstrike_core::constants::*;
use cyberstrike_core::enums::Control;
use cyberstrike_core::input::{ControlState, MouseLook};
use cyberstrike_core::state::CameraView;
use cyberstrike_core::types::{Position, Velocity};

use crate::frame::Backends;
use crate::physics::PhysicsBody;

/// Offset of the camera from its pivot above the player, on a sphere of
/// radius `CAMERA_DISTANCE` given by yaw and pitch.
fn orbit_offset(look: &MouseLook) -> Vec3 {
    let phi = std::f32::consts::FRAC_PI_2 - look.pitch;
    let theta = look.yaw;
    Vec3::new(
        CAMERA_DISTANCE * phi.sin() * theta.sin(),
        CAMERA_DISTANCE * phi.cos(),
        CAMERA_DISTANCE * phi.sin() * theta.cos(),
    )
}

/// Unit view direction. Independent of the player's position.
pub fn view_direction(look: &MouseLook) -> Vec3 {
    let to_target = Vec3::new(0.0, CAMERA_LOOK_HEIGHT - CAMERA_HEIGHT, 0.0) - orbit_offset(look);
    to_target.normalize_or_zero()
}

/// Third-person camera placement for a player at `position`.
pub fn camera_view(position: Position, look: &MouseLook) -> CameraView {
    let player = position.to_vec3();
    let eye = player + Vec3::new(0.0, CAMERA_HEIGHT, 0.0) + orbit_offset(look);
    let target = player + Vec3::new(0.0, CAMERA_LOOK_HEIGHT, 0.0);
    CameraView {
        position: eye.to_array(),
        look_at: target.to_array(),
        direction: (target - eye).normalize_or_zero().to_array(),
    }
}

/// Horizontal move velocity for the held controls, relative to the view.
pub fn move_velocity(controls: &ControlState, look: &MouseLook, stats: &PlayerStats) -> Vec3 {
    let axis = |pos: Control, neg: Control| -> f32 {
        controls.is_pressed(pos) as i32 as f32 - controls.is_pressed(neg) as i32 as f32
    };
    let strafe = axis(Control::Right, Control::Left);
    let advance = axis(Control::Forward, Control::Backward);

    let dir = view_direction(look);
    let forward = Vec3::new(dir.x, 0.0, dir.z).normalize_or_zero();
    let right = forward.cross(Vec3::Y).normalize_or_zero();

    let wish = (right * strafe + forward * advance).normalize_or_zero();
    let speed = if controls.is_pressed(Control::Sprint) {
        stats.run_speed
    } else {
        stats.walk_speed
    };
    wish * speed
}

/// Drive the player's body from the held controls, read its transform
/// back and return the resulting camera.
pub fn run(
    world: &mut World,
    backends: &mut Backends,
    controls: &ControlState,
    look: &MouseLook,
) -> Option<CameraView> {
    let mut query = world.query::<(
        &Player,
        &mut PlayerStats,
        &mut Position,
        &mut Velocity,
        &PhysicsBody,
        &Visual,
    )>();
    let (_, (_, stats, position, velocity, body, visual)) = query.iter().next()?;

    let current = backends.physics.velocity(body.0).unwrap_or_default();
    let planar = move_velocity(controls, look, stats);
    let mut command = Velocity::new(planar.x, current.y, planar.z);
    if controls.is_pressed(Control::Jump) && stats.on_ground {
        command.y = stats.jump_power;
    }
    backends.physics.set_velocity(body.0, command);

    // Ground check uses the pre-command vertical speed and last known height
    stats.on_ground = current.y.abs() < GROUND_CHECK_MAX_VERTICAL_SPEED
        && position.y < GROUND_CHECK_MAX_HEIGHT;

    if let Some(p) = backends.physics.translation(body.0) {
        *position = p;
    }
    *velocity = command;
    backends.scene.move_to(visual.0, *position);

    Some(camera_view(*position, look))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> PlayerStats {
        PlayerStats {
            health: 100.0,
            max_health: 100.0,
            level: 1,
            xp: 0,
            xp_to_next: 100,
            walk_speed: PLAYER_WALK_SPEED,
            run_speed: PLAYER_RUN_SPEED,
            jump_power: PLAYER_JUMP_POWER,
            on_ground: true,
        }
    }

    #[test]
    fn test_default_camera_sits_behind_player() {
        let look = MouseLook::default();
        let cam = camera_view(Position::new(0.0, 1.0, 0.0), &look);
        assert!((cam.position[0]).abs() < 1e-5);
        assert!((cam.position[1] - 3.0).abs() < 1e-4);
        assert!((cam.position[2] - CAMERA_DISTANCE).abs() < 1e-4);
        assert_eq!(cam.look_at, [0.0, 2.0, 0.0]);
        assert!(cam.direction[2] < 0.0);
    }

    #[test]
    fn test_forward_moves_along_view() {
        let look = MouseLook::default();
        let mut controls = ControlState::default();
        controls.set(Control::Forward, true);
        let v = move_velocity(&controls, &look, &stats());
        assert!(v.z < -4.99 && v.x.abs() < 1e-4);

        controls.set(Control::Forward, false);
        controls.set(Control::Right, true);
        let v = move_velocity(&controls, &look, &stats());
        assert!(v.x > 4.99 && v.z.abs() < 1e-4);
    }

    #[test]
    fn test_diagonal_is_normalized_and_sprint_is_faster() {
        let look = MouseLook {
            yaw: 0.7,
            pitch: 0.2,
            locked: true,
        };
        let mut controls = ControlState::default();
        controls.set(Control::Forward, true);
        controls.set(Control::Left, true);
        let walk = move_velocity(&controls, &look, &stats());
        assert!((walk.length() - PLAYER_WALK_SPEED).abs() < 1e-3);
        assert_eq!(walk.y, 0.0);

        controls.set(Control::Sprint, true);
        let run = move_velocity(&controls, &look, &stats());
        assert!((run.length() - PLAYER_RUN_SPEED).abs() < 1e-3);
    }

    #[test]
    fn test_no_input_means_no_planar_motion() {
        let v = move_velocity(&ControlState::default(), &MouseLook::default(), &stats());
        assert_eq!(v, Vec3::ZERO);
    }
}
