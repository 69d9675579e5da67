//! Errors raised by the flow controller for caller mistakes.
//!
//! Prediction failures are not errors at this level; they move the ledger to
//! `Failed` and surface as the banner in the snapshot.

use thiserror::Error;

use crate::domain::flow::Page;
use crate::domain::foundation::ValidationError;

/// Banner shown for every failed prediction.
pub const ABYSS_SEVERED_MESSAGE: &str =
    "The connection to the Abyss was severed. Try your invocation again.";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FlowError {
    #[error("A prediction is already in flight")]
    AlreadySubmitting,

    #[error("Submissions are only accepted on the ledger, current page is {current}")]
    NotOnLedger { current: Page },

    #[error("No forecast is on display")]
    NothingToReset,

    #[error("Invalid habits: {0}")]
    InvalidHabits(#[from] ValidationError),

    #[error("Ledger cannot accept that action now: {0}")]
    InvalidTransition(ValidationError),
}

impl FlowError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            FlowError::AlreadySubmitting => "ALREADY_SUBMITTING",
            FlowError::NotOnLedger { .. } => "NOT_ON_LEDGER",
            FlowError::NothingToReset => "NOTHING_TO_RESET",
            FlowError::InvalidHabits(_) => "VALIDATION_FAILED",
            FlowError::InvalidTransition(_) => "INVALID_TRANSITION",
        }
    }
}
