//! HTTP DTOs for the ledger endpoints.
//!
//! Snapshots, habits and quotes serialize as-is; only the envelopes that
//! exist purely for HTTP live here.

use serde::{Deserialize, Serialize};

use crate::domain::flow::Page;
use crate::domain::habits::{DietType, IntakeLevel, StressLevel, UserHabits, GENDER_OPTIONS};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to switch page.
#[derive(Debug, Clone, Deserialize)]
pub struct NavigateRequest {
    pub page: Page,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// One navigation bar entry.
#[derive(Debug, Clone, Serialize)]
pub struct PageEntry {
    pub page: Page,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct PagesResponse {
    pub pages: Vec<PageEntry>,
    pub current: Page,
}

impl PagesResponse {
    pub fn with_current(current: Page) -> Self {
        Self {
            pages: Page::all()
                .into_iter()
                .map(|page| PageEntry {
                    page,
                    label: page.label(),
                })
                .collect(),
            current,
        }
    }
}

/// A selectable value together with the label shown next to it.
#[derive(Debug, Clone, Serialize)]
pub struct FormOption<T> {
    pub value: T,
    pub label: &'static str,
}

/// Initial form values and the closed option lists.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub defaults: UserHabits,
    pub genders: Vec<&'static str>,
    pub stress_levels: Vec<FormOption<StressLevel>>,
    pub diet_types: Vec<FormOption<DietType>>,
    pub sugar_intakes: Vec<FormOption<IntakeLevel>>,
}

impl Default for FormResponse {
    fn default() -> Self {
        Self {
            defaults: UserHabits::default(),
            genders: GENDER_OPTIONS.to_vec(),
            stress_levels: StressLevel::all()
                .into_iter()
                .map(|value| FormOption {
                    value,
                    label: value.prompt_label(),
                })
                .collect(),
            diet_types: DietType::all()
                .into_iter()
                .map(|value| FormOption {
                    value,
                    label: value.prompt_label(),
                })
                .collect(),
            sugar_intakes: IntakeLevel::all()
                .into_iter()
                .map(|value| FormOption {
                    value,
                    label: value.prompt_label(),
                })
                .collect(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Response
// ════════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new("CONFLICT", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}
