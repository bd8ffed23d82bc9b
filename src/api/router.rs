use axum::{
    body::Body,
    extract::Request,
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{booking, health, management, schedule, slot, template};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Management profiles
        .route("/api/v1/managements", post(management::create_management).get(management::list_managements))
        .route("/api/v1/managements/{management_id}", get(management::get_management).put(management::update_management).delete(management::delete_management))

        // Parsed office-hours schedule
        .route("/api/v1/managements/{management_id}/schedule", get(schedule::get_schedule))
        .route("/api/v1/managements/{management_id}/schedule/slots", post(schedule::create_slots_from_schedule))

        // Reception slots
        .route("/api/v1/managements/{management_id}/slots", post(slot::create_slots).get(slot::list_slots).delete(slot::delete_slots))
        .route("/api/v1/managements/{management_id}/slots/booked", get(slot::list_booked))
        .route("/api/v1/slots/booked", get(slot::list_all_booked))

        // Booking flow
        .route("/api/v1/slots/{slot_id}/book", post(booking::book_slot))
        .route("/api/v1/slots/{slot_id}/cancel", post(booking::cancel_booking))

        // Recurring schedules
        .route("/api/v1/managements/{management_id}/recurring", post(template::create_recurring_schedule).get(template::list_recurring_schedules))
        .route("/api/v1/recurring/{template_id}", put(template::update_recurring_schedule).delete(template::delete_recurring_schedule))

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
