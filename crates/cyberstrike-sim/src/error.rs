//! Simulation error types.

use crate::persistence::PersistError;

/// Errors surfaced by the simulation engine.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("persistence error: {0}")]
    Persist(#[from] PersistError),
}
