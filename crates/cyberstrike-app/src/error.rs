use cyberstrike_sim::SimError;

/// Errors returned by the host API.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("simulation already running")]
    AlreadyRunning,
    #[error("simulation not started")]
    NotStarted,
    #[error("game loop has stopped")]
    LoopStopped,
    #[error("shared state lock poisoned")]
    Poisoned,
    #[error("failed to initialize engine: {0}")]
    Init(#[from] SimError),
    #[error("failed to spawn game loop thread: {0}")]
    Thread(#[from] std::io::Error),
}

impl<T> From<std::sync::PoisonError<T>> for HostError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        HostError::Poisoned
    }
}
