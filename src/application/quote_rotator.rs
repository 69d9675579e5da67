//! QuoteRotator - background ticker for the home page quote.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::domain::flow::{next_quote_index, quote_at, QUOTE_ROTATION_PERIOD};

/// The quote currently on display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub index: usize,
    pub text: &'static str,
}

/// Advances the quote index on a fixed period.
///
/// The ticker task is aborted when the rotator is stopped or dropped.
/// Must be created inside a Tokio runtime.
#[derive(Debug)]
pub struct QuoteRotator {
    index: Arc<AtomicUsize>,
    handle: JoinHandle<()>,
}

impl QuoteRotator {
    /// Starts rotating every six seconds.
    pub fn start() -> Self {
        Self::with_period(QUOTE_ROTATION_PERIOD)
    }

    pub fn with_period(period: Duration) -> Self {
        let index = Arc::new(AtomicUsize::new(0));
        let ticker_index = Arc::clone(&index);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            // First tick completes immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let next = next_quote_index(ticker_index.load(Ordering::Relaxed));
                ticker_index.store(next, Ordering::Relaxed);
            }
        });

        Self { index, handle }
    }

    pub fn current(&self) -> Quote {
        let index = self.index.load(Ordering::Relaxed);
        Quote {
            index,
            text: quote_at(index),
        }
    }

    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for QuoteRotator {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
