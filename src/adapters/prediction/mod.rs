//! LongevityPredictor adapters.
//!
//! - `AiLongevityPredictor` - prompt + strict schema over any `AIProvider`
//! - `MockLongevityPredictor` - queued outcomes for tests

mod ai_predictor;
mod mock_predictor;

pub use ai_predictor::{AiLongevityPredictor, SYSTEM_INSTRUCTION};
pub use mock_predictor::MockLongevityPredictor;
