//! AI provider configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// AI provider configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AiConfig {
    /// Backend that answers the ledger
    #[serde(default)]
    pub provider: AiProvider,

    /// API key for the selected backend
    pub api_key: Option<SecretString>,

    /// Model override; the provider's default when absent
    pub model: Option<String>,

    /// Base URL override, e.g. for a proxy
    pub base_url: Option<String>,
}

/// AI provider type
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AiProvider {
    #[default]
    Gemini,
    OpenAI,
    /// Canned forecasts, no network
    Mock,
}

impl AiConfig {
    /// The API key, if one is set and non-empty
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(|k| k.expose_secret().as_str())
            .filter(|k| !k.trim().is_empty())
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.provider {
            AiProvider::Gemini | AiProvider::OpenAI if !self.has_api_key() => {
                Err(ValidationError::MissingRequired("AI__API_KEY"))
            }
            _ => Ok(()),
        }
    }
}
