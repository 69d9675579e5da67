//! HTTP adapter for the ledger flow.
//!
//! # Endpoints
//!
//! - `GET /health` - Liveness probe
//! - `GET /api/pages`, `POST /api/navigate` - Page selection
//! - `GET /api/state` - Current flow snapshot
//! - `GET /api/form` - Form defaults and options
//! - `POST /api/predictions`, `POST /api/predictions/reset` - Submit and reset
//! - `GET /api/quote` - Rotating home page quote

pub mod dto;
pub mod handlers;
pub mod routes;

pub use handlers::{LedgerApiError, LedgerAppState};
pub use routes::ledger_router;
