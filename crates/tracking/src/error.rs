//! Tracking error model.

use thiserror::Error;

/// Result type used by tracking collaborators and trackers.
pub type TrackingResult<T> = Result<T, TrackingError>;

/// Failures raised by the collaborators a tracker delegates to.
///
/// Trackers never create these for missing order data; they only pass along
/// what the item builder, renderer or sink report.
#[derive(Debug, Error)]
pub enum TrackingError {
    /// The item builder could not derive tracking records from the order.
    #[error("tracking item build failed: {0}")]
    Build(String),

    /// No template is registered under the given name.
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// The template exists but could not be rendered with the parameters.
    #[error("template render failed: {0}")]
    Render(String),

    /// The injection sink rejected the code block.
    #[error("code injection failed: {0}")]
    Sink(String),

    /// Template parameters could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TrackingError {
    pub fn build(msg: impl Into<String>) -> Self {
        Self::Build(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }
}
