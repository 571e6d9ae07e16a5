/// Convenience result type used across photoframe.
pub type FrameResult<T> = Result<T, FrameError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum FrameError {
    /// Invalid user-provided dimensions, colors or configuration values.
    #[error("validation error: {0}")]
    Validation(String),

    /// An operation needs an input (usually the composited texture) that does not exist yet.
    #[error("missing input: {0}")]
    MissingInput(String),

    /// Image bytes could not be decoded into a raster.
    #[error("decode error: {0}")]
    Decode(String),

    /// The scene could not be serialized by the exporter.
    #[error("export error: {0}")]
    Export(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FrameError {
    /// Build a [`FrameError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FrameError::MissingInput`] value.
    pub fn missing_input(msg: impl Into<String>) -> Self {
        Self::MissingInput(msg.into())
    }

    /// Build a [`FrameError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`FrameError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
