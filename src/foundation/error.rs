/// Crate-wide result alias.
pub type TourResult<T> = Result<T, TourError>;

/// Errors surfaced to the host application.
///
/// None of these are ever shown to the end user. Navigation calls never
/// produce them; only session start, configuration loading and preview
/// rendering do.
#[derive(thiserror::Error, Debug)]
pub enum TourError {
    /// Configuration was structurally valid but semantically unusable.
    #[error("validation error: {0}")]
    Validation(String),

    /// `start` was called with no steps.
    #[error("tour rejected: no steps provided")]
    EmptyTour,

    /// `start` was called while another session was still active.
    #[error("tour rejected: a session is already active")]
    SessionActive,

    /// A tour document could not be parsed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// The preview rasterizer failed.
    #[error("render error: {0}")]
    Render(String),

    /// Any other failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TourError {
    /// Build a [`TourError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TourError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`TourError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// `true` for the two start-time rejections that leave no session behind.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::EmptyTour | Self::SessionActive)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
