//! Domain layer containing the ledger's data contract and flow rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (validation errors, state machine trait)
//! - `habits` - `UserHabits` and the closed enumerations of the form
//! - `prediction` - `PredictionResult`, its error kinds, and the health chart
//! - `flow` - Pages, the calculation phase machine, and rotating quotes

pub mod flow;
pub mod foundation;
pub mod habits;
pub mod prediction;
