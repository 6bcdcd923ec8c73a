//! CyberStrike host.
//!
//! Runs the simulation on its own thread and exposes a small command and
//! snapshot API to whatever drives it (a renderer, the CLI demo).

pub mod error;
pub mod game_loop;
pub mod ipc;
pub mod state;

pub use cyberstrike_core as core;
pub use error::HostError;
