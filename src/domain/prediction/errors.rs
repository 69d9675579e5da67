//! Prediction error types.

use thiserror::Error;

/// Why a prediction could not be produced.
///
/// No partial result ever accompanies one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredictionError {
    /// The backend answered without any text.
    #[error("model returned an empty response")]
    EmptyResponse,

    /// Text came back but does not match the declared result shape.
    #[error("model returned a malformed response: {0}")]
    MalformedResponse(String),

    /// The call itself failed (transport, status, auth).
    #[error("prediction service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl PredictionError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse(reason.into())
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::ServiceUnavailable(reason.into())
    }

    /// Stable short name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            PredictionError::EmptyResponse => "empty_response",
            PredictionError::MalformedResponse(_) => "malformed_response",
            PredictionError::ServiceUnavailable(_) => "service_unavailable",
        }
    }
}
