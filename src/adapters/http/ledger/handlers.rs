//! HTTP handlers for the ledger endpoints.
//!
//! Each handler is a thin shim over the `FlowController`; the controller owns
//! every rule about when a submission or reset is allowed.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use crate::application::{FlowController, FlowError, QuoteRotator};
use crate::domain::habits::UserHabits;

use super::dto::{ErrorResponse, FormResponse, HealthResponse, NavigateRequest, PagesResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state.
#[derive(Clone)]
pub struct LedgerAppState {
    pub controller: Arc<FlowController>,
    pub quotes: Arc<QuoteRotator>,
}

impl LedgerAppState {
    pub fn new(controller: Arc<FlowController>, quotes: Arc<QuoteRotator>) -> Self {
        Self { controller, quotes }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

/// GET /api/pages - Navigation bar entries and the current page
pub async fn list_pages(State(state): State<LedgerAppState>) -> impl IntoResponse {
    Json(PagesResponse::with_current(state.controller.page()))
}

/// GET /api/state - Current flow snapshot
pub async fn get_state(State(state): State<LedgerAppState>) -> impl IntoResponse {
    Json(state.controller.snapshot())
}

/// GET /api/form - Initial form values and option lists
pub async fn get_form() -> impl IntoResponse {
    Json(FormResponse::default())
}

/// GET /api/quote - Quote currently on display
pub async fn current_quote(State(state): State<LedgerAppState>) -> impl IntoResponse {
    Json(state.quotes.current())
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/navigate - Switch page
pub async fn navigate(
    State(state): State<LedgerAppState>,
    payload: Result<Json<NavigateRequest>, JsonRejection>,
) -> Result<impl IntoResponse, LedgerApiError> {
    let Json(request) = payload?;
    Ok(Json(state.controller.navigate(request.page)))
}

/// POST /api/predictions - Submit habits and wait for the forecast
///
/// Returns 200 whether the prediction succeeded or failed; the snapshot's
/// phase and banner tell the two apart.
pub async fn submit_prediction(
    State(state): State<LedgerAppState>,
    payload: Result<Json<UserHabits>, JsonRejection>,
) -> Result<impl IntoResponse, LedgerApiError> {
    let Json(habits) = payload?;
    let snapshot = state.controller.submit(habits).await?;
    Ok(Json(snapshot))
}

/// POST /api/predictions/reset - Leave the dashboard
pub async fn reset_prediction(
    State(state): State<LedgerAppState>,
) -> Result<impl IntoResponse, LedgerApiError> {
    Ok(Json(state.controller.reset()?))
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error type that converts flow errors to HTTP responses.
#[derive(Debug)]
pub enum LedgerApiError {
    BadRequest(ErrorResponse),
    Conflict(ErrorResponse),
}

impl From<FlowError> for LedgerApiError {
    fn from(err: FlowError) -> Self {
        let response = ErrorResponse::new(err.code(), err.to_string());
        match err {
            FlowError::InvalidHabits(ref validation) => LedgerApiError::BadRequest(
                response.with_details(json!({ "field": validation.field() })),
            ),
            FlowError::AlreadySubmitting
            | FlowError::NotOnLedger { .. }
            | FlowError::NothingToReset
            | FlowError::InvalidTransition(_) => LedgerApiError::Conflict(response),
        }
    }
}

impl From<JsonRejection> for LedgerApiError {
    fn from(rejection: JsonRejection) -> Self {
        LedgerApiError::BadRequest(ErrorResponse::bad_request(rejection.body_text()))
    }
}

impl IntoResponse for LedgerApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            LedgerApiError::BadRequest(error) => (StatusCode::BAD_REQUEST, error),
            LedgerApiError::Conflict(error) => (StatusCode::CONFLICT, error),
        };

        (status, Json(error)).into_response()
    }
}
