//! Error types for command construction and dispatch.

use thiserror::Error;

/// Errors surfaced by the command-shaping layer.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed caller input (empty channel or target, unrecognized
    /// privilege or action token). Raised before any command is sent, so a
    /// failing call never emits a partial batch.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Failure reported by the underlying connection while sending. The
    /// original error is carried unchanged; nothing is retried or swallowed
    /// at this layer.
    #[error("transport: {0:#}")]
    Transport(anyhow::Error),
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Transport(err)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
