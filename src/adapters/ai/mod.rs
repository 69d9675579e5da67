//! AI Provider Adapters.
//!
//! Implementations of the AIProvider port for the supported backends.
//!
//! ## Available Adapters
//!
//! - `GeminiProvider` - Google Generative Language API (default)
//! - `OpenAIProvider` - OpenAI chat completions with strict JSON schema output
//! - `MockAIProvider` - Configurable mock for tests and offline development

mod gemini_provider;
mod mock_provider;
mod openai_provider;
mod transport;

pub use gemini_provider::{
    GeminiConfig, GeminiProvider, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL,
};
pub use mock_provider::{MockAIProvider, MockError, MockResponse, SAMPLE_FORECAST};
pub use openai_provider::{
    OpenAIConfig, OpenAIProvider, DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL,
};

use std::sync::Arc;

use crate::config::{AiConfig, AiProvider};
use crate::ports::{AIError, AIProvider};

/// Builds the provider selected by configuration.
///
/// Expects a validated config; a missing key for a remote provider is an
/// `AuthenticationFailed` error.
pub fn provider_from_config(config: &AiConfig) -> Result<Arc<dyn AIProvider>, AIError> {
    match config.provider {
        AiProvider::Gemini => {
            let key = config.api_key().ok_or(AIError::AuthenticationFailed)?;
            let mut gemini = GeminiConfig::new(key);
            if let Some(ref model) = config.model {
                gemini = gemini.with_model(model);
            }
            if let Some(ref url) = config.base_url {
                gemini = gemini.with_base_url(url);
            }
            Ok(Arc::new(GeminiProvider::new(gemini)?))
        }
        AiProvider::OpenAI => {
            let key = config.api_key().ok_or(AIError::AuthenticationFailed)?;
            let mut openai = OpenAIConfig::new(key);
            if let Some(ref model) = config.model {
                openai = openai.with_model(model);
            }
            if let Some(ref url) = config.base_url {
                openai = openai.with_base_url(url);
            }
            Ok(Arc::new(OpenAIProvider::new(openai)?))
        }
        AiProvider::Mock => Ok(Arc::new(MockAIProvider::new())),
    }
}
