use thiserror::Error;

/// Everything that can stop a navigation from being applied.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NavigationError {
    /// An href could not be resolved against the current document URL.
    #[error("failed to resolve url: {0}")]
    Parse(#[from] url::ParseError),

    /// The host platform refused an operation (reading the location, pushing history, dispatching events).
    #[error("platform error: {0}")]
    Platform(String),
}

impl NavigationError {
    /// Wrap any platform failure, keeping only its debug representation.
    pub fn platform(err: impl std::fmt::Debug) -> Self {
        Self::Platform(format!("{err:?}"))
    }
}
