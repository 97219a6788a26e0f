use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, live, reservation, pricing, catalog, onboarding};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Agenda & live detail
        .route("/api/v1/lives", get(live::list_lives))
        .route("/api/v1/lives/{live_id}", get(live::get_live))
        .route("/api/v1/lives/{live_id}/slots", get(live::get_slots))
        .route("/api/v1/lives/{live_id}/slots/reload", post(live::reload_slots))

        // Booking hand-offs
        .route("/api/v1/lives/{live_id}/reserve", post(reservation::reserve))
        .route("/api/v1/lives/{live_id}/waiting-list", post(reservation::join_waiting_list))

        // Pricing & catalog
        .route("/api/v1/estimate", post(pricing::estimate_commission))
        .route("/api/v1/catalog", get(catalog::get_catalog))

        // Onboarding
        .route("/api/v1/onboarding/steps/{step}/validate", post(onboarding::validate_onboarding_step))
        .route("/api/v1/onboarding/submit", post(onboarding::submit_onboarding))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
