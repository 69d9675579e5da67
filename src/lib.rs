//! FinalTap - the lifestyle ledger.
//!
//! A user fills in their habits, the service forwards them to a generative
//! model with a strict output schema, and the forecast comes back as a
//! dashboard payload. Navigation, submission and reset are all driven over
//! HTTP through a single flow controller.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
