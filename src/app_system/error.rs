use thiserror::Error;

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Buffer size must be at least 1")]
    ZeroBufferSize,
    #[error("Actor task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}
