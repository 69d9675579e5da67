//! PredictionResult - the structured forecast returned by the model.

use serde::{Deserialize, Serialize};

use super::PredictionError;

/// Polarity of a key factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Impact {
    Positive,
    Negative,
    Neutral,
}

impl Impact {
    pub fn all() -> [Impact; 3] {
        [Impact::Positive, Impact::Negative, Impact::Neutral]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Impact::Positive => "Positive",
            Impact::Negative => "Negative",
            Impact::Neutral => "Neutral",
        }
    }
}

/// One labeled cause-and-effect item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyFactor {
    pub factor: String,
    pub impact: Impact,
    pub description: String,
}

/// The forecast as rendered on the dashboard.
///
/// Only produced by a [`LongevityPredictor`](crate::ports::LongevityPredictor);
/// never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    /// Estimated total lifespan, in years.
    pub estimated_lifespan: f64,
    /// Free-form label, e.g. "March 2071".
    pub estimated_death_date: String,
    /// Expected in 0..=100 but passed through as returned.
    pub health_score: f64,
    pub key_factors: Vec<KeyFactor>,
    pub recommendations: Vec<String>,
    pub scientific_insights: String,
}

impl PredictionResult {
    /// Parses model output into a result.
    ///
    /// Whitespace-only text is an [`PredictionError::EmptyResponse`]. Text that
    /// does not match the declared shape, or that leaves `keyFactors` or
    /// `recommendations` empty, is a [`PredictionError::MalformedResponse`].
    pub fn from_model_text(text: &str) -> Result<Self, PredictionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PredictionError::EmptyResponse);
        }

        let result: PredictionResult = serde_json::from_str(text)
            .map_err(|e| PredictionError::malformed(format!("Failed to parse model output: {}", e)))?;

        if result.key_factors.is_empty() {
            return Err(PredictionError::malformed("keyFactors is empty"));
        }
        if result.recommendations.is_empty() {
            return Err(PredictionError::malformed("recommendations is empty"));
        }

        Ok(result)
    }

    /// Counts key factors per polarity as (positive, negative, neutral).
    pub fn impact_tally(&self) -> (usize, usize, usize) {
        self.key_factors
            .iter()
            .fold((0, 0, 0), |(pos, neg, neu), f| match f.impact {
                Impact::Positive => (pos + 1, neg, neu),
                Impact::Negative => (pos, neg + 1, neu),
                Impact::Neutral => (pos, neg, neu + 1),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = r#"{
        "estimatedLifespan": 84.5,
        "estimatedDeathDate": "October 2079",
        "healthScore": 72,
        "keyFactors": [
            {"factor": "Hydration", "impact": "Positive", "description": "Three liters keeps the vessel supple."},
            {"factor": "Screen Time", "impact": "Negative", "description": "Four hours of digital trance."},
            {"factor": "Sugar", "impact": "Neutral", "description": "Low intake, barely noticed."}
        ],
        "recommendations": ["Walk at dusk", "Keep drinking water"],
        "scientificInsights": "Sleep and movement dominate the ledger."
    }"#;

    #[test]
    fn parses_well_formed_output() {
        let result = PredictionResult::from_model_text(WELL_FORMED).unwrap();
        assert_eq!(result.estimated_lifespan, 84.5);
        assert_eq!(result.estimated_death_date, "October 2079");
        assert_eq!(result.health_score, 72.0);
        assert_eq!(result.key_factors.len(), 3);
        assert_eq!(result.key_factors[1].impact, Impact::Negative);
        assert_eq!(result.recommendations[0], "Walk at dusk");
    }

    #[test]
    fn empty_and_blank_text_are_empty_responses() {
        assert_eq!(
            PredictionResult::from_model_text(""),
            Err(PredictionError::EmptyResponse)
        );
        assert_eq!(
            PredictionResult::from_model_text(" \n\t "),
            Err(PredictionError::EmptyResponse)
        );
    }

    #[test]
    fn non_json_text_is_malformed() {
        let err = PredictionResult::from_model_text("The abyss stares back").unwrap_err();
        assert!(matches!(err, PredictionError::MalformedResponse(_)));
    }

    #[test]
    fn unknown_impact_is_malformed() {
        let text = WELL_FORMED.replace("\"Neutral\"", "\"Catastrophic\"");
        let err = PredictionResult::from_model_text(&text).unwrap_err();
        assert!(matches!(err, PredictionError::MalformedResponse(_)));
    }

    #[test]
    fn missing_required_field_is_malformed() {
        let text = WELL_FORMED.replace("\"scientificInsights\"", "\"insights\"");
        let err = PredictionResult::from_model_text(&text).unwrap_err();
        assert!(matches!(err, PredictionError::MalformedResponse(_)));
    }

    #[test]
    fn empty_recommendations_are_malformed() {
        let text = WELL_FORMED.replace(
            r#"["Walk at dusk", "Keep drinking water"]"#,
            "[]",
        );
        let err = PredictionResult::from_model_text(&text).unwrap_err();
        assert_eq!(err, PredictionError::malformed("recommendations is empty"));
    }

    #[test]
    fn serializes_back_to_camel_case() {
        let result = PredictionResult::from_model_text(WELL_FORMED).unwrap();
        let value = serde_json::to_value(&result).unwrap();
        assert!(value.get("estimatedDeathDate").is_some());
        assert!(value.get("keyFactors").is_some());
        assert!(value.get("key_factors").is_none());
    }

    #[test]
    fn impact_tally_counts_each_polarity() {
        let result = PredictionResult::from_model_text(WELL_FORMED).unwrap();
        assert_eq!(result.impact_tally(), (1, 1, 1));
    }
}
