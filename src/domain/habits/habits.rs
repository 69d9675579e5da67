//! UserHabits - the complete set of lifestyle inputs from the ledger form.

use serde::{Deserialize, Serialize};

use super::{DietType, IntakeLevel, StressLevel};
use crate::domain::foundation::ValidationError;

/// Gender options offered by the form. The field itself stays free text.
pub const GENDER_OPTIONS: [&str; 3] = ["Male", "Female", "Other"];

/// Lifestyle inputs collected from the user.
///
/// Every field is required on the wire; there are no serde defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserHabits {
    /// Age in years.
    pub age: u32,
    pub gender: String,
    /// Cigarettes per day.
    pub smoking_frequency: f64,
    /// Drinks per week.
    pub alcohol_frequency: f64,
    /// Hours per night.
    pub sleep_hours: f64,
    pub stress_level: StressLevel,
    pub diet_type: DietType,
    /// Hours per week.
    pub exercise_hours: f64,
    /// Minutes per week.
    pub yoga_minutes: f64,
    /// Sedentary hours per day.
    pub physical_inactivity_hours: f64,
    /// Liters per day.
    pub water_liters: f64,
    pub sugar_intake: IntakeLevel,
    /// Hours per day.
    pub screen_time_hours: f64,
    /// Hours per week.
    pub social_hours: f64,
}

impl UserHabits {
    /// Checks the numeric ranges the enum types cannot express.
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.age == 0 {
            return Err(ValidationError::not_positive("age"));
        }
        if self.gender.trim().is_empty() {
            return Err(ValidationError::empty_field("gender"));
        }
        for (field, value) in self.quantities() {
            if !value.is_finite() {
                return Err(ValidationError::not_finite(field));
            }
            if value < 0.0 {
                return Err(ValidationError::negative(field, value));
            }
        }
        Ok(())
    }

    /// Every non-negative quantity keyed by its wire name.
    fn quantities(&self) -> [(&'static str, f64); 9] {
        [
            ("smokingFrequency", self.smoking_frequency),
            ("alcoholFrequency", self.alcohol_frequency),
            ("sleepHours", self.sleep_hours),
            ("exerciseHours", self.exercise_hours),
            ("yogaMinutes", self.yoga_minutes),
            ("physicalInactivityHours", self.physical_inactivity_hours),
            ("waterLiters", self.water_liters),
            ("screenTimeHours", self.screen_time_hours),
            ("socialHours", self.social_hours),
        ]
    }
}

/// The values the form starts out with.
impl Default for UserHabits {
    fn default() -> Self {
        Self {
            age: 25,
            gender: "Other".to_string(),
            smoking_frequency: 0.0,
            alcohol_frequency: 0.0,
            sleep_hours: 7.0,
            stress_level: StressLevel::Moderate,
            diet_type: DietType::Balanced,
            exercise_hours: 3.0,
            yoga_minutes: 0.0,
            physical_inactivity_hours: 8.0,
            water_liters: 2.0,
            sugar_intake: IntakeLevel::Moderate,
            screen_time_hours: 6.0,
            social_hours: 10.0,
        }
    }
}
