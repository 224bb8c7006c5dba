use std::sync::PoisonError;

use thiserror::Error;

use crate::Error;

/// Errors surfaced through the `UniFFI` bindings.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Collapse toggle referenced a hunk that does not exist.
    #[error("hunk index is out of range")]
    HunkOutOfRange,
    /// A document exceeded the configured size ceiling.
    #[error("document is too large")]
    InputTooLarge,
    /// Filesystem interaction failed.
    #[error("filesystem error")]
    Io,
    /// Configuration could not be parsed.
    #[error("invalid configuration")]
    Config,
    /// Renderer was not registered with the core.
    #[error("renderer is not registered")]
    RendererNotRegistered,
    /// Renderer failed to produce output.
    #[error("renderer error")]
    Render,
    /// Internal invariant failed.
    #[error("internal error")]
    Internal,
}

impl From<Error> for CoreError {
    fn from(error: Error) -> Self {
        match error {
            Error::HunkOutOfRange { .. } => Self::HunkOutOfRange,
            Error::InputTooLarge { .. } => Self::InputTooLarge,
            Error::Io { .. } => Self::Io,
            Error::Config { .. } => Self::Config,
            Error::RendererNotRegistered { .. } => Self::RendererNotRegistered,
            Error::Render { .. } => Self::Render,
        }
    }
}

impl<T> From<PoisonError<T>> for CoreError {
    fn from(_: PoisonError<T>) -> Self {
        Self::Internal
    }
}
