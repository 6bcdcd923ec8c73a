//! Host API. Bridges a frontend (or the CLI) to the game loop thread via channels.

use std::sync::mpsc;

use tracing::info;

use cyberstrike_core::commands::PlayerCommand;
use cyberstrike_core::input::InputEvent;
use cyberstrike_core::state::GameStateSnapshot;
use cyberstrike_sim::{SimConfig, SimulationEngine};

use crate::error::HostError;
use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Builds the engine and spawns the game loop thread
/// if not already running.
pub fn start_simulation(
    state: &AppState,
    config: SimConfig,
    frames: Option<mpsc::Sender<GameStateSnapshot>>,
) -> Result<(), HostError> {
    let mut running = state.running.lock()?;
    if *running {
        return Err(HostError::AlreadyRunning);
    }

    let seed = config.seed;
    let engine = SimulationEngine::new(config)?;
    let cmd_tx = game_loop::spawn_game_loop(engine, state.latest_snapshot.clone(), frames)?;

    *state.command_tx.lock()? = Some(cmd_tx);
    *running = true;
    info!(seed, "simulation started");
    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), HostError> {
    let tx_lock = state.command_tx.lock()?;
    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| HostError::LoopStopped),
        None => Err(HostError::NotStarted),
    }
}

/// Forward a raw device event; the engine maps it to commands at the next tick.
pub fn send_input(state: &AppState, event: InputEvent) -> Result<(), HostError> {
    send_command(state, PlayerCommand::Input { event })
}

/// Get the latest snapshot synchronously (for polling / initial state).
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, HostError> {
    Ok(state.latest_snapshot.lock()?.clone())
}

/// Ask the game loop to stop. A no-op if it is not running.
pub fn stop_simulation(state: &AppState) -> Result<(), HostError> {
    let mut running = state.running.lock()?;
    if let Some(tx) = state.command_tx.lock()?.take() {
        // The loop may already be gone
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    *running = false;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyberstrike_core::enums::GamePhase;

    #[test]
    fn test_send_before_start_fails() {
        let state = AppState::new();
        assert!(matches!(
            send_command(&state, PlayerCommand::StartGame),
            Err(HostError::NotStarted)
        ));
        assert!(get_snapshot(&state).unwrap().is_none());
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let state = AppState::new();
        let config = SimConfig {
            time_scale: f64::NAN,
            ..Default::default()
        };
        assert!(matches!(
            start_simulation(&state, config, None),
            Err(HostError::Init(_))
        ));
        assert!(!*state.running.lock().unwrap());
    }

    #[test]
    fn test_start_twice_fails_and_commands_flow() {
        let state = AppState::new();
        let (frame_tx, frame_rx) = mpsc::channel();
        start_simulation(&state, SimConfig::default(), Some(frame_tx)).unwrap();
        assert!(matches!(
            start_simulation(&state, SimConfig::default(), None),
            Err(HostError::AlreadyRunning)
        ));

        send_command(&state, PlayerCommand::StartGame).unwrap();
        send_input(&state, InputEvent::KeyDown { code: "KeyW".into() }).unwrap();
        assert!(frame_rx
            .iter()
            .take(30)
            .any(|snap| snap.phase == GamePhase::Playing));
        assert!(get_snapshot(&state).unwrap().is_some());

        stop_simulation(&state).unwrap();
        assert!(matches!(
            send_command(&state, PlayerCommand::PauseGame),
            Err(HostError::NotStarted)
        ));
    }
}
