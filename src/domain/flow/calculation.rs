//! CalculationPhase - the ledger page's own state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Phase of the ledger page.
///
/// ```text
/// AwaitingInput ──submit──▶ Submitting ──ok──▶ Displaying ──reset──▶ AwaitingInput
///                              │  ▲
///                            error│  │resubmit
///                              ▼  │
///                             Failed
/// ```
///
/// Navigation is not an edge here; leaving or re-entering the page rebuilds the
/// ledger from `AwaitingInput`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CalculationPhase {
    #[default]
    AwaitingInput,
    Submitting,
    Displaying,
    Failed,
}

impl CalculationPhase {
    /// True while the form accepts a submission.
    pub fn accepts_submission(&self) -> bool {
        self.can_transition_to(&CalculationPhase::Submitting)
    }
}

impl StateMachine for CalculationPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use CalculationPhase::*;
        matches!(
            (self, target),
            (AwaitingInput, Submitting)
                | (Failed, Submitting)
                | (Submitting, Displaying)
                | (Submitting, Failed)
                | (Displaying, AwaitingInput)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use CalculationPhase::*;
        match self {
            AwaitingInput => vec![Submitting],
            Submitting => vec![Displaying, Failed],
            Displaying => vec![AwaitingInput],
            Failed => vec![Submitting],
        }
    }
}

impl fmt::Display for CalculationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CalculationPhase::AwaitingInput => "AwaitingInput",
            CalculationPhase::Submitting => "Submitting",
            CalculationPhase::Displaying => "Displaying",
            CalculationPhase::Failed => "Failed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CalculationPhase::*;

    #[test]
    fn default_is_awaiting_input() {
        assert_eq!(CalculationPhase::default(), AwaitingInput);
    }

    #[test]
    fn submission_settles_into_displaying_or_failed() {
        assert!(Submitting.can_transition_to(&Displaying));
        assert!(Submitting.can_transition_to(&Failed));
        assert!(!Submitting.can_transition_to(&AwaitingInput));
    }

    #[test]
    fn cannot_submit_twice() {
        assert!(!Submitting.accepts_submission());
        assert!(Submitting.transition_to(Submitting).is_err());
    }

    #[test]
    fn failed_and_awaiting_accept_submission() {
        assert!(AwaitingInput.accepts_submission());
        assert!(Failed.accepts_submission());
        assert!(!Displaying.accepts_submission());
    }

    #[test]
    fn only_displaying_resets() {
        assert_eq!(Displaying.transition_to(AwaitingInput), Ok(AwaitingInput));
        assert!(Failed.transition_to(AwaitingInput).is_err());
    }

    #[test]
    fn no_phase_is_terminal() {
        for phase in [AwaitingInput, Submitting, Displaying, Failed] {
            assert!(!phase.is_terminal(), "{} should have an exit", phase);
        }
    }

    #[test]
    fn can_transition_to_agrees_with_valid_transitions() {
        for phase in [AwaitingInput, Submitting, Displaying, Failed] {
            for target in phase.valid_transitions() {
                assert!(phase.can_transition_to(&target));
            }
        }
    }

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&AwaitingInput).unwrap(),
            "\"awaiting_input\""
        );
    }
}
