use lifecycle_framework::LifecycleError;

/// Failures while starting or stopping the admin system.
#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
    #[error("Store task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
