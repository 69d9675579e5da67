//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `LongevityPredictor` - The single `predict` operation the ledger depends on
//! - `AIProvider` - Wire-level access to a generative model backend

mod ai_provider;
mod longevity_predictor;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, ProviderInfo, RequestMetadata, ResponseSchema, TokenUsage,
};
pub use longevity_predictor::LongevityPredictor;
