//! Enemy AI for CyberStrike.
//!
//! Implements the patrol/chase/attack state machine and the
//! archetype stat profiles it reads from.

pub mod fsm;
pub mod profiles;

pub use cyberstrike_core as core;
