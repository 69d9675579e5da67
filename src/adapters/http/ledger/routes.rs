//! Route configuration for ledger endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    current_quote, get_form, get_state, health, list_pages, navigate, reset_prediction,
    submit_prediction, LedgerAppState,
};

/// Creates the ledger router with all endpoints.
///
/// Routes:
/// - `GET /health` - Liveness probe
/// - `GET /api/pages` - Navigation entries and current page
/// - `POST /api/navigate` - Switch page
/// - `GET /api/state` - Current snapshot
/// - `GET /api/form` - Form defaults and option lists
/// - `POST /api/predictions` - Submit habits
/// - `POST /api/predictions/reset` - Leave the dashboard
/// - `GET /api/quote` - Current home page quote
pub fn ledger_router() -> Router<LedgerAppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/pages", get(list_pages))
        .route("/api/navigate", post(navigate))
        .route("/api/state", get(get_state))
        .route("/api/form", get(get_form))
        .route("/api/predictions", post(submit_prediction))
        .route("/api/predictions/reset", post(reset_prediction))
        .route("/api/quote", get(current_quote))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::SAMPLE_FORECAST;
    use crate::adapters::prediction::MockLongevityPredictor;
    use crate::application::{FlowController, QuoteRotator, ABYSS_SEVERED_MESSAGE};
    use crate::domain::prediction::{PredictionError, PredictionResult};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    // ───────────────────────────────────────────────────────────────
    // Helpers
    // ───────────────────────────────────────────────────────────────

    fn app(mock: MockLongevityPredictor) -> Router {
        let state = LedgerAppState::new(
            Arc::new(FlowController::new(Arc::new(mock))),
            Arc::new(QuoteRotator::start()),
        );
        ledger_router().with_state(state)
    }

    fn canned() -> PredictionResult {
        PredictionResult::from_model_text(SAMPLE_FORECAST).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn habits_json() -> Value {
        json!({
            "age": 30,
            "gender": "Female",
            "smokingFrequency": 0,
            "alcoholFrequency": 2,
            "sleepHours": 7.5,
            "stressLevel": "High",
            "dietType": "Keto/Low-Carb",
            "exerciseHours": 4,
            "yogaMinutes": 30,
            "physicalInactivityHours": 9,
            "waterLiters": 2.5,
            "sugarIntake": "Low",
            "screenTimeHours": 5,
            "socialHours": 6
        })
    }

    // ───────────────────────────────────────────────────────────────
    // Tests
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn health_reports_ok() {
        let app = app(MockLongevityPredictor::new());

        let (status, body) = send(&app, get("/health")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn pages_start_on_home() {
        let app = app(MockLongevityPredictor::new());

        let (status, body) = send(&app, get("/api/pages")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["current"], "Home");
        assert_eq!(body["pages"].as_array().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn navigate_then_submit_displays_forecast() {
        let app = app(MockLongevityPredictor::new().with_result(canned()));

        let (status, body) =
            send(&app, post_json("/api/navigate", json!({ "page": "Calculation" }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["page"], "Calculation");
        assert_eq!(body["submitEnabled"], true);

        let (status, body) = send(&app, post_json("/api/predictions", habits_json())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["phase"], "displaying");
        assert_eq!(body["result"], serde_json::to_value(canned()).unwrap());
        assert_eq!(body["chart"]["slices"][0]["label"], "Soul Integrity");
        assert!(body["error"].is_null());
    }

    #[tokio::test]
    async fn failed_prediction_is_200_with_banner() {
        let app = app(MockLongevityPredictor::new().with_error(PredictionError::EmptyResponse));
        send(&app, post_json("/api/navigate", json!({ "page": "Calculation" }))).await;

        let (status, body) = send(&app, post_json("/api/predictions", habits_json())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["phase"], "failed");
        assert_eq!(body["error"], ABYSS_SEVERED_MESSAGE);
        assert_eq!(body["submitEnabled"], true);
    }

    #[tokio::test]
    async fn submit_off_ledger_is_conflict() {
        let app = app(MockLongevityPredictor::new().with_result(canned()));

        let (status, body) = send(&app, post_json("/api/predictions", habits_json())).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "NOT_ON_LEDGER");
    }

    #[tokio::test]
    async fn negative_quantity_is_bad_request() {
        let app = app(MockLongevityPredictor::new());
        send(&app, post_json("/api/navigate", json!({ "page": "Calculation" }))).await;
        let mut habits = habits_json();
        habits["waterLiters"] = json!(-1);

        let (status, body) = send(&app, post_json("/api/predictions", habits)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["details"]["field"], "waterLiters");
    }

    #[tokio::test]
    async fn unknown_enum_value_is_bad_request() {
        let app = app(MockLongevityPredictor::new());
        send(&app, post_json("/api/navigate", json!({ "page": "Calculation" }))).await;
        let mut habits = habits_json();
        habits["stressLevel"] = json!("Apocalyptic");

        let (status, body) = send(&app, post_json("/api/predictions", habits)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn unknown_page_is_bad_request() {
        let app = app(MockLongevityPredictor::new());

        let (status, _) = send(&app, post_json("/api/navigate", json!({ "page": "Purgatory" }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn reset_without_result_is_conflict() {
        let app = app(MockLongevityPredictor::new());

        let (status, body) = send(&app, post_json("/api/predictions/reset", json!({}))).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "NOTHING_TO_RESET");
    }

    #[tokio::test]
    async fn reset_after_display_returns_to_form() {
        let app = app(MockLongevityPredictor::new().with_result(canned()));
        send(&app, post_json("/api/navigate", json!({ "page": "Calculation" }))).await;
        send(&app, post_json("/api/predictions", habits_json())).await;

        let (status, body) = send(&app, post_json("/api/predictions/reset", json!({}))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["phase"], "awaiting_input");
        assert!(body["result"].is_null());
        assert!(body["chart"].is_null());
    }

    #[tokio::test]
    async fn form_and_quote_are_served() {
        let app = app(MockLongevityPredictor::new());

        let (status, form) = send(&app, get("/api/form")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(form["defaults"]["dietType"], "Balanced/Whole-Foods");

        let (status, quote) = send(&app, get("/api/quote")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(quote["index"], 0);
        assert!(quote["text"].as_str().unwrap().contains("Mark Twain"));
    }
}
