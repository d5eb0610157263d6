use std::io;

use thiserror::Error;

use crate::pane::PaneId;

/// Failures reported by the input or output backend.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("terminal backend error: {0}")]
    Io(#[from] io::Error),
    #[error("render failed: {0}")]
    Render(String),
}

#[derive(Debug, Error)]
pub enum PaneError {
    #[error("invalid pane configuration: {0}")]
    Configuration(String),
    #[error("no pane with id {0:?} in this tree")]
    UnknownPane(PaneId),
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<io::Error> for PaneError {
    fn from(err: io::Error) -> Self {
        PaneError::Backend(BackendError::Io(err))
    }
}
