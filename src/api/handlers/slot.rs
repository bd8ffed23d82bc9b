use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateSlotsRequest, DateRangeQuery, DeleteSlotsQuery};
use crate::api::dtos::responses::{DeletedResponse, SlotsCreatedResponse};
use crate::domain::services::recurrence::{expand_to_slots, SlotRule};
use crate::error::AppError;
use crate::state::AppState;

const DEFAULT_SLOT_DURATION_MIN: i64 = 10;

pub async fn create_slots(
    State(state): State<Arc<AppState>>,
    Path(management_id): Path<String>,
    Json(payload): Json<CreateSlotsRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.management_repo.find_by_id(&management_id).await?
        .ok_or(AppError::NotFound("Management not found".into()))?;

    let date = NaiveDate::parse_from_str(&payload.date, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))?;
    let start_time = NaiveTime::parse_from_str(&payload.start_time, "%H:%M")
        .map_err(|_| AppError::Validation("Invalid start time format (HH:MM)".into()))?;
    let end_time = NaiveTime::parse_from_str(&payload.end_time, "%H:%M")
        .map_err(|_| AppError::Validation("Invalid end time format (HH:MM)".into()))?;

    if end_time <= start_time {
        return Err(AppError::Validation("End time must be after start time".into()));
    }

    let slot_duration = payload.slot_duration.unwrap_or(DEFAULT_SLOT_DURATION_MIN);
    if slot_duration <= 0 {
        return Err(AppError::Validation("Slot duration must be positive".into()));
    }

    let rule = SlotRule {
        start_time,
        end_time,
        slot_duration_min: slot_duration,
    };

    let slots = expand_to_slots(&management_id, &rule, &[date], None);
    let requested = slots.len();
    let created = state.slot_repo.insert_batch(&slots).await?;

    info!("Created {} of {} slots for management {} on {}", created, requested, management_id, date);
    Ok(Json(SlotsCreatedResponse { created, requested }))
}

pub async fn list_slots(
    State(state): State<Arc<AppState>>,
    Path(management_id): Path<String>,
    Query(range): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    state.management_repo.find_by_id(&management_id).await?
        .ok_or(AppError::NotFound("Management not found".into()))?;

    let slots = state.slot_repo
        .list_by_management(&management_id, range.from, range.to)
        .await?;
    Ok(Json(slots))
}

pub async fn list_booked(
    State(state): State<Arc<AppState>>,
    Path(management_id): Path<String>,
    Query(range): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    state.management_repo.find_by_id(&management_id).await?
        .ok_or(AppError::NotFound("Management not found".into()))?;

    let slots = state.slot_repo
        .list_booked(&management_id, range.from, range.to)
        .await?;
    Ok(Json(slots))
}

/// Administrative view across all managers. The store is only indexed on
/// `is_booked`, so the optional date range is applied in memory.
pub async fn list_all_booked(
    State(state): State<Arc<AppState>>,
    Query(range): Query<DateRangeQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut slots = state.slot_repo.list_all_booked().await?;

    if range.from.is_some() || range.to.is_some() {
        slots.retain(|slot| {
            range.from.is_none_or(|from| slot.date >= from)
                && range.to.is_none_or(|to| slot.date <= to)
        });
    }

    Ok(Json(slots))
}

pub async fn delete_slots(
    State(state): State<Arc<AppState>>,
    Path(management_id): Path<String>,
    Query(filter): Query<DeleteSlotsQuery>,
) -> Result<impl IntoResponse, AppError> {
    state.management_repo.find_by_id(&management_id).await?
        .ok_or(AppError::NotFound("Management not found".into()))?;

    let deleted = state.slot_repo
        .delete_filtered(&management_id, filter.date, filter.start_time, filter.end_time)
        .await?;

    info!("Deleted {} slots for management {}", deleted, management_id);
    Ok(Json(DeletedResponse { deleted }))
}
