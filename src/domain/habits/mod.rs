//! Habits module - what the user tells the ledger about their life.

#[allow(clippy::module_inception)]
mod habits;
mod levels;

pub use habits::{UserHabits, GENDER_OPTIONS};
pub use levels::{DietType, IntakeLevel, StressLevel};
