//! Mock AI Provider for testing and offline development.
//!
//! Provides a configurable mock implementation of the AIProvider port,
//! allowing tests to run without calling real AI APIs.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - A canned forecast once the queue is empty
//! - Simulated latency
//! - Error injection
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let provider = MockAIProvider::new()
//!     .with_response(r#"{"estimatedLifespan": 80, ...}"#)
//!     .with_error(MockError::Timeout);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Forecast returned when no response has been queued.
pub const SAMPLE_FORECAST: &str = r#"{
  "estimatedLifespan": 81,
  "estimatedDeathDate": "The frost of November 2078",
  "healthScore": 68,
  "keyFactors": [
    {"factor": "Hydration", "impact": "Positive", "description": "Two liters a day keeps the vessel from cracking."},
    {"factor": "Sugar", "impact": "Negative", "description": "Moderate sweetness quietly gnaws at the ledger."},
    {"factor": "Screen Time", "impact": "Negative", "description": "Six hours in the digital trance dims the eyes and the nights."},
    {"factor": "Social Hours", "impact": "Neutral", "description": "Enough company to be missed, not enough to be mourned loudly."}
  ],
  "recommendations": [
    "Trade one hour of screen glow for a walk under actual light.",
    "Halve the sugar before it halves you.",
    "Guard seven hours of sleep like a debt you intend to collect."
  ],
  "scientificInsights": "Sedentary time and sleep regularity dominate all-cause mortality estimates at this age; hydration is a minor but consistent protective signal."
}"#;

/// Mock AI provider.
#[derive(Debug, Clone)]
pub struct MockAIProvider {
    /// Pre-configured responses (consumed in order).
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<CompletionRequest>>>,
}

/// A configured mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return this text as the completion.
    Success { content: String },
    /// Return an error.
    Error(MockError),
}

/// Mock error types for testing error handling.
#[derive(Debug, Clone)]
pub enum MockError {
    RateLimited { retry_after_secs: u32 },
    ContentFiltered { reason: String },
    Unavailable { message: String },
    AuthenticationFailed,
    Network { message: String },
    Timeout,
}

impl From<MockError> for AIError {
    fn from(err: MockError) -> Self {
        match err {
            MockError::RateLimited { retry_after_secs } => AIError::rate_limited(retry_after_secs),
            MockError::ContentFiltered { reason } => AIError::content_filtered(reason),
            MockError::Unavailable { message } => AIError::unavailable(message),
            MockError::AuthenticationFailed => AIError::AuthenticationFailed,
            MockError::Network { message } => AIError::network(message),
            MockError::Timeout => AIError::Timeout,
        }
    }
}

impl Default for MockAIProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockAIProvider {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queues a successful completion with the given text.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.push(MockResponse::Success {
            content: content.into(),
        });
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: MockError) -> Self {
        self.push(MockResponse::Error(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.lock_calls().len()
    }

    /// All recorded requests.
    pub fn get_calls(&self) -> Vec<CompletionRequest> {
        self.lock_calls().clone()
    }

    fn push(&self, response: MockResponse) {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push_back(response);
    }

    fn lock_calls(&self) -> std::sync::MutexGuard<'_, Vec<CompletionRequest>> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn next_response(&self) -> MockResponse {
        self.responses
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .pop_front()
            .unwrap_or_else(|| MockResponse::Success {
                content: SAMPLE_FORECAST.to_string(),
            })
    }
}

#[async_trait]
impl AIProvider for MockAIProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        self.lock_calls().push(request);

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_response() {
            MockResponse::Success { content } => Ok(CompletionResponse {
                content,
                usage: TokenUsage::new(10, 20),
                model: "mock-model-1".to_string(),
                finish_reason: FinishReason::Stop,
            }),
            MockResponse::Error(err) => Err(err.into()),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock-model-1")
    }
}
