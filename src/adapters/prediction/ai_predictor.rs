//! AI-backed LongevityPredictor implementation

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use crate::domain::habits::UserHabits;
use crate::domain::prediction::{Impact, PredictionError, PredictionResult};
use crate::ports::{
    AIError, AIProvider, CompletionRequest, LongevityPredictor, MessageRole, RequestMetadata,
    ResponseSchema,
};

/// Persona and output rules sent as the system instruction.
pub const SYSTEM_INSTRUCTION: &str = "You are the Head Scribe of the FinalTap Bureau. \
You analyze mortal data with dark, cynical accuracy. Your JSON response must be precise \
and follow the provided schema. The 'keyFactors' should specifically reference the impact \
of water, sugar, and screen time alongside traditional metrics.";

const SCHEMA_NAME: &str = "longevity_forecast";

/// Predicts longevity with a single structured completion call.
pub struct AiLongevityPredictor {
    ai_provider: Arc<dyn AIProvider>,
}

impl AiLongevityPredictor {
    pub fn new(ai_provider: Arc<dyn AIProvider>) -> Self {
        Self { ai_provider }
    }

    /// Build the ledger prompt describing every habit with its unit
    pub fn build_prompt(habits: &UserHabits) -> String {
        format!(
            r#"Analyze this mortal's earthly habits and predict when their soul will be "tapped" for the final descent.

Mortal Ledger Entry:
- Age: {}
- Form: {}
- Smoking: {} cigs/day
- Alcohol: {} drinks/week
- Sleep: {} hours/night
- Stress: {}
- Diet: {}
- Vitality Rituals (Exercise): {} hours/week
- Mind Control (Yoga): {} minutes/week
- Sedentary Rot: {} hours/day
- Hydration (Water): {} Liters/day
- Sugar Sin: {}
- Digital Trance (Screen Time): {} hours/day
- Soul Connection (Social): {} hours/week"#,
            habits.age,
            habits.gender,
            habits.smoking_frequency,
            habits.alcohol_frequency,
            habits.sleep_hours,
            habits.stress_level.prompt_label(),
            habits.diet_type.prompt_label(),
            habits.exercise_hours,
            habits.yoga_minutes,
            habits.physical_inactivity_hours,
            habits.water_liters,
            habits.sugar_intake.prompt_label(),
            habits.screen_time_hours,
            habits.social_hours,
        )
    }

    /// Strict output schema for a forecast
    pub fn response_schema() -> ResponseSchema {
        let impacts: Vec<&str> = Impact::all().iter().map(Impact::as_str).collect();

        ResponseSchema::new(
            SCHEMA_NAME,
            json!({
                "type": "object",
                "properties": {
                    "estimatedLifespan": { "type": "number" },
                    "estimatedDeathDate": { "type": "string" },
                    "healthScore": { "type": "number" },
                    "keyFactors": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "factor": { "type": "string" },
                                "impact": { "type": "string", "enum": impacts },
                                "description": { "type": "string" }
                            },
                            "required": ["factor", "impact", "description"],
                            "additionalProperties": false
                        }
                    },
                    "recommendations": {
                        "type": "array",
                        "items": { "type": "string" }
                    },
                    "scientificInsights": { "type": "string" }
                },
                "required": [
                    "estimatedLifespan",
                    "estimatedDeathDate",
                    "healthScore",
                    "keyFactors",
                    "recommendations",
                    "scientificInsights"
                ],
                "additionalProperties": false
            }),
        )
    }

    fn create_request(habits: &UserHabits) -> CompletionRequest {
        let metadata = RequestMetadata::new(format!("forecast-{}", uuid::Uuid::new_v4()));

        CompletionRequest::new(metadata)
            .with_system_prompt(SYSTEM_INSTRUCTION)
            .with_message(MessageRole::User, Self::build_prompt(habits))
            .with_response_schema(Self::response_schema())
    }
}

/// Any provider failure, including an unreadable envelope, means the service is unavailable.
fn unavailable(err: AIError) -> PredictionError {
    PredictionError::unavailable(err.to_string())
}

#[async_trait]
impl LongevityPredictor for AiLongevityPredictor {
    async fn predict(&self, habits: &UserHabits) -> Result<PredictionResult, PredictionError> {
        let request = Self::create_request(habits);
        let trace_id = request.metadata.trace_id.clone();
        let info = self.ai_provider.provider_info();

        tracing::debug!(
            trace_id = %trace_id,
            provider = %info.name,
            model = %info.model,
            "Requesting longevity forecast"
        );

        let response = self.ai_provider.complete(request).await.map_err(|err| {
            tracing::warn!(trace_id = %trace_id, error = %err, "Provider call failed");
            unavailable(err)
        })?;

        tracing::debug!(
            trace_id = %trace_id,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            finish_reason = ?response.finish_reason,
            "Provider responded"
        );

        PredictionResult::from_model_text(&response.content)
    }
}
