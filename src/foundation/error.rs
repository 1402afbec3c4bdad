/// Convenience result type used across Overlook.
pub type OverlookResult<T> = Result<T, OverlookError>;

/// Top-level error taxonomy used by the scene APIs.
#[derive(thiserror::Error, Debug)]
pub enum OverlookError {
    /// Invalid configuration, column data or other caller-provided values.
    #[error("validation error: {0}")]
    Validation(String),

    /// An asset could not be read or decoded.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors while drawing into a frame buffer.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OverlookError {
    /// Build an [`OverlookError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`OverlookError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build an [`OverlookError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build an [`OverlookError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for OverlookError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
