//! Closed enumerations collected by the ledger form.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Self-reported stress level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
    Extreme,
}

impl StressLevel {
    /// Every stress level, in form order.
    pub fn all() -> [StressLevel; 4] {
        [
            StressLevel::Low,
            StressLevel::Moderate,
            StressLevel::High,
            StressLevel::Extreme,
        ]
    }

    /// Descriptive label used when talking to the model.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low (Zen)",
            StressLevel::Moderate => "Moderate (Manageable)",
            StressLevel::High => "High (Burnout Risk)",
            StressLevel::Extreme => "Extreme (Constant Tension)",
        }
    }
}

impl fmt::Display for StressLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StressLevel::Low => "Low",
            StressLevel::Moderate => "Moderate",
            StressLevel::High => "High",
            StressLevel::Extreme => "Extreme",
        };
        write!(f, "{}", s)
    }
}

/// Predominant diet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietType {
    Vegan,
    Vegetarian,
    #[serde(rename = "Keto/Low-Carb", alias = "Keto")]
    Keto,
    Mediterranean,
    #[serde(rename = "Western/High-Processed", alias = "Western")]
    Western,
    #[serde(rename = "Balanced/Whole-Foods", alias = "Balanced")]
    Balanced,
}

impl DietType {
    /// Every diet, in form order.
    pub fn all() -> [DietType; 6] {
        [
            DietType::Vegan,
            DietType::Vegetarian,
            DietType::Keto,
            DietType::Mediterranean,
            DietType::Western,
            DietType::Balanced,
        ]
    }

    /// Descriptive label used when talking to the model.
    pub fn prompt_label(&self) -> &'static str {
        match self {
            DietType::Vegan => "Vegan",
            DietType::Vegetarian => "Vegetarian",
            DietType::Keto => "Keto/Low Carb",
            DietType::Mediterranean => "Mediterranean",
            DietType::Western => "Western (High Processed)",
            DietType::Balanced => "Balanced/Whole Foods",
        }
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DietType::Vegan => "Vegan",
            DietType::Vegetarian => "Vegetarian",
            DietType::Keto => "Keto/Low-Carb",
            DietType::Mediterranean => "Mediterranean",
            DietType::Western => "Western/High-Processed",
            DietType::Balanced => "Balanced/Whole-Foods",
        };
        write!(f, "{}", s)
    }
}

/// Intake scale used for sugar consumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntakeLevel {
    None,
    Low,
    Moderate,
    High,
    Excessive,
}

impl IntakeLevel {
    /// Every intake level, lowest first.
    pub fn all() -> [IntakeLevel; 5] {
        [
            IntakeLevel::None,
            IntakeLevel::Low,
            IntakeLevel::Moderate,
            IntakeLevel::High,
            IntakeLevel::Excessive,
        ]
    }

    pub fn prompt_label(&self) -> &'static str {
        match self {
            IntakeLevel::None => "None",
            IntakeLevel::Low => "Low",
            IntakeLevel::Moderate => "Moderate",
            IntakeLevel::High => "High",
            IntakeLevel::Excessive => "Excessive",
        }
    }
}

impl fmt::Display for IntakeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prompt_label())
    }
}
