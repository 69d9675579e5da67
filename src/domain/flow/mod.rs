//! Flow module - page selection, the ledger phase machine, and home-page quotes.

mod calculation;
mod page;
mod quotes;

pub use calculation::CalculationPhase;
pub use page::Page;
pub use quotes::{next_quote_index, quote_at, QUOTES, QUOTE_ROTATION_PERIOD};
