//! State machine trait for phase enums.
//!
//! The ledger flow validates every phase change through this trait so that an
//! illegal move (for example resetting while a prediction is still in flight)
//! surfaces as an error instead of silently corrupting the view.

use super::ValidationError;

/// Trait for `Copy` enums that model a finite set of phases.
///
/// Implementors only describe the edges; the checked transition comes for free.
///
/// ```ignore
/// let next = CalculationPhase::AwaitingInput.transition_to(CalculationPhase::Submitting)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if moving from `self` to `target` is allowed.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// All phases reachable in one step from `self`.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs the transition, or returns an error naming both phases.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// True when there is no outgoing edge.
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
