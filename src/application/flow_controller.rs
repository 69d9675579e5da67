//! FlowController - page selection and the ledger's submit/display cycle.
//!
//! One controller exists per process. All state sits behind a single mutex
//! that is never held across an `.await`; the prediction itself runs on a
//! spawned task so that it settles even if the caller goes away.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard};

use super::flow_errors::{FlowError, ABYSS_SEVERED_MESSAGE};
use crate::domain::flow::{CalculationPhase, Page};
use crate::domain::foundation::StateMachine;
use crate::domain::habits::UserHabits;
use crate::domain::prediction::{HealthChart, PredictionError, PredictionResult};
use crate::ports::LongevityPredictor;

/// Everything a view needs to render the current state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSnapshot {
    pub page: Page,
    pub phase: CalculationPhase,
    pub result: Option<PredictionResult>,
    pub chart: Option<HealthChart>,
    pub error: Option<String>,
    pub submit_enabled: bool,
    pub received_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Default)]
struct FlowState {
    page: Page,
    phase: CalculationPhase,
    result: Option<Arc<PredictionResult>>,
    error: Option<&'static str>,
    received_at: Option<DateTime<Utc>>,
    /// Bumped whenever the ledger is rebuilt; outcomes from older epochs are dropped.
    epoch: u64,
    in_flight: bool,
}

impl FlowState {
    fn clear_ledger(&mut self) {
        self.phase = CalculationPhase::AwaitingInput;
        self.result = None;
        self.error = None;
        self.received_at = None;
        self.epoch += 1;
    }

    fn submit_enabled(&self) -> bool {
        self.page.is_ledger() && !self.in_flight && self.phase.accepts_submission()
    }

    fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            page: self.page,
            phase: self.phase,
            result: self.result.as_deref().cloned(),
            chart: self.result.as_deref().map(HealthChart::for_result),
            error: self.error.map(str::to_string),
            submit_enabled: self.submit_enabled(),
            received_at: self.received_at,
        }
    }

    fn settle(&mut self, epoch: u64, outcome: Result<PredictionResult, PredictionError>) {
        self.in_flight = false;

        if epoch != self.epoch {
            tracing::debug!(epoch, current = self.epoch, "Discarding stale prediction outcome");
            return;
        }

        match outcome {
            Ok(result) => {
                tracing::info!(
                    lifespan = result.estimated_lifespan,
                    health_score = result.health_score,
                    "Forecast received"
                );
                self.phase = CalculationPhase::Displaying;
                self.result = Some(Arc::new(result));
                self.received_at = Some(Utc::now());
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "Prediction failed");
                self.phase = CalculationPhase::Failed;
                self.error = Some(ABYSS_SEVERED_MESSAGE);
            }
        }
    }
}

/// Drives navigation and the ledger's calculation cycle.
pub struct FlowController {
    state: Arc<Mutex<FlowState>>,
    predictor: Arc<dyn LongevityPredictor>,
}

impl FlowController {
    pub fn new(predictor: Arc<dyn LongevityPredictor>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FlowState::default())),
            predictor,
        }
    }

    /// Current page.
    pub fn page(&self) -> Page {
        self.lock().page
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        self.lock().snapshot()
    }

    /// Switches page and rebuilds the ledger from scratch.
    ///
    /// A prediction still in flight keeps the submit guard raised, but its
    /// outcome is discarded when it arrives.
    pub fn navigate(&self, page: Page) -> FlowSnapshot {
        let mut state = self.lock();
        tracing::debug!(from = %state.page, to = %page, "Navigating");
        state.page = page;
        state.clear_ledger();
        state.snapshot()
    }

    /// Submits habits and waits for the prediction to settle.
    ///
    /// Prediction failures are not errors here: they move the ledger to
    /// `Failed` and set the banner.
    pub async fn submit(&self, habits: UserHabits) -> Result<FlowSnapshot, FlowError> {
        let epoch = {
            let mut state = self.lock();
            if !state.page.is_ledger() {
                return Err(FlowError::NotOnLedger {
                    current: state.page,
                });
            }
            if state.in_flight {
                return Err(FlowError::AlreadySubmitting);
            }
            habits.validate()?;

            state.phase = state
                .phase
                .transition_to(CalculationPhase::Submitting)
                .map_err(FlowError::InvalidTransition)?;
            state.error = None;
            state.in_flight = true;
            state.epoch
        };

        tracing::info!(epoch, age = habits.age, "Submitting habits to the ledger");

        let state = Arc::clone(&self.state);
        let predictor = Arc::clone(&self.predictor);
        let task = tokio::spawn(async move {
            let outcome = predictor.predict(&habits).await;
            lock_state(&state).settle(epoch, outcome);
        });

        if let Err(err) = task.await {
            tracing::error!(error = %err, "Prediction task did not complete");
            self.lock()
                .settle(epoch, Err(PredictionError::unavailable(err.to_string())));
        }

        Ok(self.snapshot())
    }

    /// Leaves the dashboard and returns to an empty form.
    pub fn reset(&self) -> Result<FlowSnapshot, FlowError> {
        let mut state = self.lock();
        if state.phase != CalculationPhase::Displaying {
            return Err(FlowError::NothingToReset);
        }
        state.phase = state
            .phase
            .transition_to(CalculationPhase::AwaitingInput)
            .map_err(FlowError::InvalidTransition)?;
        state.result = None;
        state.received_at = None;
        Ok(state.snapshot())
    }

    fn lock(&self) -> MutexGuard<'_, FlowState> {
        lock_state(&self.state)
    }
}

fn lock_state(state: &Mutex<FlowState>) -> MutexGuard<'_, FlowState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError, SAMPLE_FORECAST};
    use crate::adapters::prediction::{AiLongevityPredictor, MockLongevityPredictor};
    use std::time::Duration;

    fn canned() -> PredictionResult {
        PredictionResult::from_model_text(SAMPLE_FORECAST).unwrap()
    }

    fn controller_with(mock: &MockLongevityPredictor) -> Arc<FlowController> {
        Arc::new(FlowController::new(Arc::new(mock.clone())))
    }

    fn on_ledger(mock: &MockLongevityPredictor) -> Arc<FlowController> {
        let controller = controller_with(mock);
        controller.navigate(Page::Calculation);
        controller
    }

    fn thirty_year_old() -> UserHabits {
        UserHabits {
            age: 30,
            ..Default::default()
        }
    }

    #[test]
    fn starts_on_home_with_empty_ledger() {
        let controller = controller_with(&MockLongevityPredictor::new());
        let snapshot = controller.snapshot();

        assert_eq!(snapshot.page, Page::Home);
        assert_eq!(snapshot.phase, CalculationPhase::AwaitingInput);
        assert!(snapshot.result.is_none());
        assert!(snapshot.error.is_none());
        assert!(!snapshot.submit_enabled);
    }

    #[tokio::test]
    async fn submit_outside_ledger_is_rejected() {
        let mock = MockLongevityPredictor::new().with_result(canned());
        let controller = controller_with(&mock);

        let err = controller.submit(thirty_year_old()).await.unwrap_err();

        assert_eq!(err, FlowError::NotOnLedger { current: Page::Home });
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn age_thirty_reaches_displaying_with_exact_result() {
        let mock = MockLongevityPredictor::new().with_result(canned());
        let controller = on_ledger(&mock);

        let snapshot = controller.submit(thirty_year_old()).await.unwrap();

        assert_eq!(snapshot.phase, CalculationPhase::Displaying);
        assert_eq!(snapshot.result, Some(canned()));
        assert_eq!(snapshot.chart, Some(HealthChart::from_score(68.0)));
        assert!(snapshot.error.is_none());
        assert!(snapshot.received_at.is_some());
        assert!(!snapshot.submit_enabled);
        assert_eq!(mock.received(), vec![thirty_year_old()]);
    }

    #[tokio::test]
    async fn transport_error_shows_banner_and_keeps_form_submittable() {
        let mock = MockLongevityPredictor::new()
            .with_error(PredictionError::unavailable("connection refused"))
            .with_result(canned());
        let controller = on_ledger(&mock);

        let failed = controller.submit(thirty_year_old()).await.unwrap();
        assert_eq!(failed.phase, CalculationPhase::Failed);
        assert_eq!(failed.error.as_deref(), Some(ABYSS_SEVERED_MESSAGE));
        assert!(failed.result.is_none());
        assert!(failed.submit_enabled);

        let recovered = controller.submit(thirty_year_old()).await.unwrap();
        assert_eq!(recovered.phase, CalculationPhase::Displaying);
        assert!(recovered.error.is_none());
    }

    #[tokio::test]
    async fn empty_model_text_ends_in_failed() {
        let provider = MockAIProvider::new().with_response("");
        let controller = FlowController::new(Arc::new(AiLongevityPredictor::new(Arc::new(provider))));
        controller.navigate(Page::Calculation);

        let snapshot = controller.submit(thirty_year_old()).await.unwrap();

        assert_eq!(snapshot.phase, CalculationPhase::Failed);
        assert_eq!(snapshot.error.as_deref(), Some(ABYSS_SEVERED_MESSAGE));
    }

    #[tokio::test]
    async fn provider_timeout_ends_in_failed() {
        let provider = MockAIProvider::new().with_error(MockError::Timeout);
        let controller = FlowController::new(Arc::new(AiLongevityPredictor::new(Arc::new(provider))));
        controller.navigate(Page::Calculation);

        let snapshot = controller.submit(thirty_year_old()).await.unwrap();

        assert_eq!(snapshot.phase, CalculationPhase::Failed);
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_submits_make_one_call() {
        let mock = MockLongevityPredictor::new()
            .with_result(canned())
            .with_delay(Duration::from_millis(500));
        let controller = on_ledger(&mock);

        let first = {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move { controller.submit(thirty_year_old()).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;

        let during = controller.snapshot();
        assert_eq!(during.phase, CalculationPhase::Submitting);
        assert!(!during.submit_enabled);

        for _ in 0..3 {
            assert_eq!(
                controller.submit(thirty_year_old()).await,
                Err(FlowError::AlreadySubmitting)
            );
        }

        let settled = first.await.unwrap().unwrap();
        assert_eq!(settled.phase, CalculationPhase::Displaying);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn navigating_away_mid_flight_discards_outcome() {
        let mock = MockLongevityPredictor::new()
            .with_result(canned())
            .with_delay(Duration::from_millis(500));
        let controller = on_ledger(&mock);

        let first = {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move { controller.submit(thirty_year_old()).await })
        };
        tokio::time::sleep(Duration::from_millis(10)).await;

        controller.navigate(Page::About);
        controller.navigate(Page::Calculation);
        assert_eq!(
            controller.submit(thirty_year_old()).await,
            Err(FlowError::AlreadySubmitting)
        );

        first.await.unwrap().unwrap();
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.phase, CalculationPhase::AwaitingInput);
        assert!(snapshot.result.is_none());
        assert!(snapshot.submit_enabled);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn reset_drops_the_result() {
        let mock = MockLongevityPredictor::new().with_result(canned());
        let controller = on_ledger(&mock);
        controller.submit(thirty_year_old()).await.unwrap();

        let snapshot = controller.reset().unwrap();

        assert_eq!(snapshot.phase, CalculationPhase::AwaitingInput);
        assert!(snapshot.result.is_none());
        assert!(snapshot.chart.is_none());
        assert!(snapshot.received_at.is_none());
        assert!(snapshot.submit_enabled);
        assert_eq!(controller.reset(), Err(FlowError::NothingToReset));
    }

    #[tokio::test]
    async fn navigating_away_and_back_clears_result() {
        let mock = MockLongevityPredictor::new().with_result(canned());
        let controller = on_ledger(&mock);
        controller.submit(thirty_year_old()).await.unwrap();

        controller.navigate(Page::Contact);
        let snapshot = controller.navigate(Page::Calculation);

        assert_eq!(snapshot.phase, CalculationPhase::AwaitingInput);
        assert!(snapshot.result.is_none());
        assert!(snapshot.error.is_none());
    }

    #[tokio::test]
    async fn navigation_clears_error_banner() {
        let mock = MockLongevityPredictor::new().with_error(PredictionError::EmptyResponse);
        let controller = on_ledger(&mock);
        controller.submit(thirty_year_old()).await.unwrap();

        let snapshot = controller.navigate(Page::Calculation);

        assert!(snapshot.error.is_none());
        assert_eq!(snapshot.phase, CalculationPhase::AwaitingInput);
    }

    #[tokio::test]
    async fn invalid_habits_never_reach_predictor() {
        let mock = MockLongevityPredictor::new().with_result(canned());
        let controller = on_ledger(&mock);
        let habits = UserHabits {
            sleep_hours: -3.0,
            ..Default::default()
        };

        let err = controller.submit(habits).await.unwrap_err();

        assert!(matches!(err, FlowError::InvalidHabits(_)));
        assert_eq!(controller.snapshot().phase, CalculationPhase::AwaitingInput);
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn submit_while_displaying_is_invalid_transition() {
        let mock = MockLongevityPredictor::new().with_result(canned());
        let controller = on_ledger(&mock);
        controller.submit(thirty_year_old()).await.unwrap();

        let err = controller.submit(thirty_year_old()).await.unwrap_err();

        assert!(matches!(err, FlowError::InvalidTransition(_)));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn out_of_range_health_score_is_kept_verbatim() {
        let mut result = canned();
        result.health_score = 140.0;
        let mock = MockLongevityPredictor::new().with_result(result);
        let controller = on_ledger(&mock);

        let snapshot = controller.submit(thirty_year_old()).await.unwrap();

        assert_eq!(snapshot.result.unwrap().health_score, 140.0);
        assert_eq!(snapshot.chart.unwrap().slices[0].value, 100.0);
    }
}
