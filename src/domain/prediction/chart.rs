//! Health chart derived from a prediction's health score.

use serde::Serialize;

use super::PredictionResult;

pub const INTEGRITY_LABEL: &str = "Soul Integrity";
pub const ABYSS_LABEL: &str = "Abyss";

/// One slice of the two-slice proportion chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: f64,
}

/// Display-side view of the health score.
///
/// The score on the result is left untouched; only the chart clamps it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthChart {
    pub slices: [ChartSlice; 2],
    pub verdict: &'static str,
}

impl HealthChart {
    pub fn from_score(score: f64) -> Self {
        let clamped = if score.is_finite() {
            score.clamp(0.0, 100.0)
        } else {
            0.0
        };

        let verdict = if clamped < 50.0 {
            "fraying at the edges."
        } else {
            "sturdier than most souls we claim."
        };

        Self {
            slices: [
                ChartSlice {
                    label: INTEGRITY_LABEL,
                    value: clamped,
                },
                ChartSlice {
                    label: ABYSS_LABEL,
                    value: 100.0 - clamped,
                },
            ],
            verdict,
        }
    }

    pub fn for_result(result: &PredictionResult) -> Self {
        Self::from_score(result.health_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_score_splits_into_complement() {
        let chart = HealthChart::from_score(72.0);
        assert_eq!(chart.slices[0].value, 72.0);
        assert_eq!(chart.slices[1].value, 28.0);
        assert_eq!(chart.slices[0].label, "Soul Integrity");
        assert_eq!(chart.slices[1].label, "Abyss");
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        let high = HealthChart::from_score(140.0);
        assert_eq!(high.slices[0].value, 100.0);
        assert_eq!(high.slices[1].value, 0.0);

        let low = HealthChart::from_score(-12.0);
        assert_eq!(low.slices[0].value, 0.0);
        assert_eq!(low.slices[1].value, 100.0);
    }

    #[test]
    fn non_finite_score_renders_as_zero() {
        let chart = HealthChart::from_score(f64::NAN);
        assert_eq!(chart.slices[0].value, 0.0);
        assert_eq!(chart.slices[1].value, 100.0);
    }

    #[test]
    fn verdict_flips_at_fifty() {
        assert_eq!(HealthChart::from_score(49.9).verdict, "fraying at the edges.");
        assert_eq!(
            HealthChart::from_score(50.0).verdict,
            "sturdier than most souls we claim."
        );
    }
}
