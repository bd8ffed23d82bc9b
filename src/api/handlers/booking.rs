use axum::{extract::{Path, State}, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::{info, warn};

use crate::api::dtos::requests::BookSlotRequest;
use crate::domain::services::notifications::send_booking_notifications;
use crate::error::AppError;
use crate::state::AppState;

pub async fn book_slot(
    State(state): State<Arc<AppState>>,
    Path(slot_id): Path<String>,
    Json(payload): Json<BookSlotRequest>,
) -> Result<impl IntoResponse, AppError> {
    let email = payload.email.trim().to_string();
    let full_name = payload.full_name.trim().to_string();

    if email.is_empty() {
        return Err(AppError::Validation("Email is required".into()));
    }
    if full_name.is_empty() {
        return Err(AppError::Validation("Full name is required".into()));
    }

    let notes = payload.notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    // The repository performs the atomic claim. Zero matched rows means either
    // the slot does not exist or another caller got there first.
    let booked = state.slot_repo.book(&slot_id, &email, notes.as_deref()).await?;

    let Some(slot) = booked else {
        return match state.slot_repo.find_by_id(&slot_id).await? {
            Some(_) => Err(AppError::Conflict("Slot is already taken".into())),
            None => Err(AppError::NotFound("Slot not found".into())),
        };
    };

    info!("Slot booked: {} by {}", slot.id, email);

    match state.management_repo.find_by_id(&slot.management_id).await {
        Ok(Some(management)) => {
            send_booking_notifications(
                &state.email_service,
                &state.templates,
                &slot,
                &management,
                &full_name,
                &state.config.admin_email,
            )
            .await;
        }
        Ok(None) => warn!("Management {} missing, skipping booking emails", slot.management_id),
        Err(e) => warn!("Failed to load management for booking emails: {:?}", e),
    }

    Ok(Json(slot))
}

pub async fn cancel_booking(
    State(state): State<Arc<AppState>>,
    Path(slot_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let slot = state.slot_repo.cancel(&slot_id).await?
        .ok_or(AppError::NotFound("Slot not found".into()))?;

    info!("Booking cancelled for slot: {}", slot.id);
    Ok(Json(slot))
}
