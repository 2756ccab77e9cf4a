use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Invalid feed configuration: {0}")]
    InvalidConfig(String),

    #[error("Feed is already running")]
    AlreadyRunning,

    #[error("Feed has been stopped and cannot be restarted")]
    AlreadyStopped,

    #[error("No tokio runtime available: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
