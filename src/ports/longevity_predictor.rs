//! Longevity Predictor Port - the one operation behind the ledger form.
//!
//! The flow controller only ever sees this trait. The real implementation sits
//! in `adapters::prediction` and talks to an [`AIProvider`](super::AIProvider);
//! tests substitute canned results or canned errors.

use async_trait::async_trait;

use crate::domain::habits::UserHabits;
use crate::domain::prediction::{PredictionError, PredictionResult};

/// Turns a set of habits into a forecast.
///
/// Implementations are stateless across calls, make at most one external
/// request per call, and never retry.
#[async_trait]
pub trait LongevityPredictor: Send + Sync {
    /// Produces a complete forecast or one of the three error kinds.
    ///
    /// `habits` is trusted: callers validate before calling.
    async fn predict(&self, habits: &UserHabits) -> Result<PredictionResult, PredictionError>;
}
