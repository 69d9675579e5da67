//! Mock LongevityPredictor for flow and HTTP tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::domain::habits::UserHabits;
use crate::domain::prediction::{PredictionError, PredictionResult};
use crate::ports::LongevityPredictor;

/// Predictor returning queued outcomes in order.
///
/// Once the queue is drained every call fails with `ServiceUnavailable`.
#[derive(Debug, Clone, Default)]
pub struct MockLongevityPredictor {
    outcomes: Arc<Mutex<VecDeque<Result<PredictionResult, PredictionError>>>>,
    delay: Duration,
    calls: Arc<Mutex<Vec<UserHabits>>>,
}

impl MockLongevityPredictor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_result(self, result: PredictionResult) -> Self {
        self.push(Ok(result));
        self
    }

    pub fn with_error(self, error: PredictionError) -> Self {
        self.push(Err(error));
        self
    }

    /// Simulated latency per call.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    /// Habits received, in call order.
    pub fn received(&self) -> Vec<UserHabits> {
        self.lock_calls().clone()
    }

    fn push(&self, outcome: Result<PredictionResult, PredictionError>) {
        self.outcomes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(outcome);
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<UserHabits>> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl LongevityPredictor for MockLongevityPredictor {
    async fn predict(&self, habits: &UserHabits) -> Result<PredictionResult, PredictionError> {
        self.lock_calls().push(habits.clone());

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        self.outcomes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front()
            .unwrap_or_else(|| Err(PredictionError::unavailable("no outcome queued")))
    }
}
