//! Foundation module - Shared domain primitives.
//!
//! Contains the error types and the state machine trait used by the
//! habit, prediction, and flow modules.

mod errors;
mod state_machine;

pub use errors::ValidationError;
pub use state_machine::StateMachine;
