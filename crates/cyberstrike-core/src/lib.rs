//! Core types and definitions for the CyberStrike simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, input mapping, state snapshots, events, settings
//! and constants. It has no dependency on the physics engine or any
//! runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod input;
pub mod settings;
pub mod state;
pub mod types;
