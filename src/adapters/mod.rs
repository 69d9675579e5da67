//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Generative model backends (Gemini, OpenAI, mock)
//! - `prediction` - `LongevityPredictor` built on an AI provider
//! - `http` - Axum routes exposing the ledger flow

pub mod ai;
pub mod http;
pub mod prediction;

pub use ai::provider_from_config;
pub use prediction::{AiLongevityPredictor, MockLongevityPredictor};
