use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cyberstrike_app::ipc;
use cyberstrike_app::state::AppState;
use cyberstrike_core::commands::PlayerCommand;
use cyberstrike_core::constants::TICK_RATE;
use cyberstrike_core::input::{InputEvent, MouseButton};
use cyberstrike_core::settings::Settings;
use cyberstrike_sim::SimConfig;

#[derive(Parser)]
#[command(name = "cyberstrike", about = "Headless CyberStrike host running a scripted session")]
struct Cli {
    /// RNG seed for the level layout
    #[arg(short, long, default_value = "42")]
    seed: u64,
    /// How long to run, in simulated seconds
    #[arg(long, default_value = "10")]
    seconds: u32,
    /// Directory for the save file (in-memory if omitted)
    #[arg(long)]
    save_dir: Option<PathBuf>,
    /// JSON settings file
    #[arg(long)]
    settings: Option<PathBuf>,
    /// Simulation speed multiplier
    #[arg(long, default_value = "1.0")]
    time_scale: f64,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// What the scripted player does, keyed by frame.
fn script() -> Vec<(u64, PlayerCommand)> {
    let input = |event| PlayerCommand::Input { event };
    let key = |code: &str, down: bool| {
        let code = code.to_string();
        input(if down {
            InputEvent::KeyDown { code }
        } else {
            InputEvent::KeyUp { code }
        })
    };
    let mouse = |down: bool| {
        input(if down {
            InputEvent::MouseDown { button: MouseButton::Left }
        } else {
            InputEvent::MouseUp { button: MouseButton::Left }
        })
    };
    vec![
        (0, PlayerCommand::StartGame),
        (1, input(InputEvent::PointerLockChange { locked: true })),
        (30, key("KeyW", true)),
        (90, mouse(true)),
        (150, input(InputEvent::MouseMove { dx: 400.0, dy: -30.0 })),
        (210, mouse(false)),
        (240, key("KeyW", false)),
        (250, key("KeyR", true)),
        (251, key("KeyR", false)),
        (300, key("Digit2", true)),
        (330, mouse(true)),
        (331, mouse(false)),
        (360, PlayerCommand::SaveGame),
        (420, key("Escape", true)),
        (480, PlayerCommand::ResumeGame),
        (540, PlayerCommand::LoadGame),
    ]
}

fn load_settings(path: &PathBuf) -> anyhow::Result<Settings> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading settings file {}", path.display()))?;
    let settings: Settings = serde_json::from_str(&json).context("parsing settings JSON")?;
    Ok(settings.sanitized())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };
    let config = SimConfig {
        seed: cli.seed,
        time_scale: cli.time_scale,
        settings,
        save_dir: cli.save_dir.clone(),
    };

    let state = AppState::new();
    let (frame_tx, frame_rx) = mpsc::channel();
    if let Err(e) = ipc::start_simulation(&state, config, Some(frame_tx)) {
        error!(error = %e, "engine initialization failed");
        eprintln!("Failed to initialize game. Please refresh and try again.");
        return Err(e.into());
    }

    let total_frames = u64::from(cli.seconds) * u64::from(TICK_RATE);
    let mut pending = script().into_iter().peekable();
    let mut seen_notifications = HashSet::new();
    let mut frame: u64 = 0;
    let mut last = None;

    for snapshot in frame_rx.iter() {
        while let Some((_, command)) = pending.next_if(|(at, _)| *at <= frame) {
            ipc::send_command(&state, command)?;
        }
        for note in &snapshot.notifications {
            if seen_notifications.insert(note.id) {
                info!(level = ?note.level, "{}", note.message);
            }
        }
        frame += 1;
        last = Some(snapshot);
        if frame >= total_frames {
            break;
        }
    }
    ipc::stop_simulation(&state)?;

    let snapshot = last.context("game loop produced no snapshots")?;
    println!("cyberstrike v{}", env!("CARGO_PKG_VERSION"));
    println!(
        "phase={:?} tick={} elapsed={:.1}s",
        snapshot.phase, snapshot.time.tick, snapshot.time.elapsed_secs
    );
    println!(
        "health={}/{} level={} xp={}/{}",
        snapshot.hud.health,
        snapshot.hud.max_health,
        snapshot.hud.level,
        snapshot.hud.xp,
        snapshot.hud.xp_to_next
    );
    println!(
        "weapon={} ammo={}/{} enemies_alive={} visuals={}",
        snapshot.hud.weapon_name,
        snapshot.hud.ammo_current,
        snapshot.hud.ammo_total,
        snapshot.enemies_alive,
        snapshot.live_visuals
    );
    Ok(())
}
