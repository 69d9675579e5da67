//! Prediction module - the forecast shape, its errors, and the chart derived from it.

mod chart;
mod errors;
mod result;

pub use chart::{ChartSlice, HealthChart, ABYSS_LABEL, INTEGRITY_LABEL};
pub use errors::PredictionError;
pub use result::{Impact, KeyFactor, PredictionResult};
