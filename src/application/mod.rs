//! Application layer - the flow controller and its background helpers.
//!
//! This layer orchestrates domain state and coordinates the prediction port.
//! HTTP handlers call into it; it knows nothing about HTTP.

mod flow_controller;
mod flow_errors;
mod quote_rotator;

pub use flow_controller::{FlowController, FlowSnapshot};
pub use flow_errors::{FlowError, ABYSS_SEVERED_MESSAGE};
pub use quote_rotator::{Quote, QuoteRotator};
