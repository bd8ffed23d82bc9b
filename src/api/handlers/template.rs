use axum::{extract::{Path, State}, response::IntoResponse, Json};
use chrono::{Datelike, NaiveDate, NaiveTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateRecurringRequest, UpdateTemplateRequest};
use crate::api::dtos::responses::RecurringScheduleResponse;
use crate::domain::models::template::{NewTemplateParams, RecurringScheduleTemplate};
use crate::domain::services::recurrence::{
    expand_to_slots, find_recurring_dates, week_number_in_month, SlotRule,
};
use crate::error::AppError;
use crate::state::AppState;

const DEFAULT_SLOT_DURATION_MIN: i32 = 10;
const DEFAULT_MONTHS_AHEAD: i32 = 3;

pub async fn create_recurring_schedule(
    State(state): State<Arc<AppState>>,
    Path(management_id): Path<String>,
    Json(payload): Json<CreateRecurringRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.management_repo.find_by_id(&management_id).await?
        .ok_or(AppError::NotFound("Management not found".into()))?;

    let selected_date = NaiveDate::parse_from_str(&payload.selected_date, "%Y-%m-%d")
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

    let months_ahead = payload.months_ahead.unwrap_or(DEFAULT_MONTHS_AHEAD);
    if months_ahead <= 0 {
        return Err(AppError::Validation("Months ahead must be positive".into()));
    }

    let weekday = selected_date.weekday().num_days_from_sunday() as i32;
    let week_number = if payload.is_weekly.unwrap_or(false) {
        None
    } else {
        Some(week_number_in_month(selected_date) as i32)
    };

    let template = RecurringScheduleTemplate::new(NewTemplateParams {
        management_id: management_id.clone(),
        weekday,
        week_number,
        start_time,
        end_time,
        slot_duration,
        months_ahead,
    });
    let template = state.template_repo.create(&template).await?;

    let dates = find_recurring_dates(
        weekday as u8,
        week_number.map(|n| n as u32),
        months_ahead as u32,
        selected_date,
    );

    let rule = SlotRule {
        start_time,
        end_time,
        slot_duration_min: slot_duration as i64,
    };
    let slots = expand_to_slots(&management_id, &rule, &dates, Some(&template.id));
    let slots_created = state.slot_repo.insert_batch(&slots).await?;

    info!(
        "Recurring schedule {} created for management {}: {} dates, {} slots",
        template.id, management_id, dates.len(), slots_created
    );

    Ok(Json(RecurringScheduleResponse {
        template,
        dates,
        slots_created,
    }))
}

pub async fn list_recurring_schedules(
    State(state): State<Arc<AppState>>,
    Path(management_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.management_repo.find_by_id(&management_id).await?
        .ok_or(AppError::NotFound("Management not found".into()))?;

    let templates = state.template_repo.list_by_management(&management_id).await?;
    Ok(Json(templates))
}

pub async fn update_recurring_schedule(
    State(state): State<Arc<AppState>>,
    Path(template_id): Path<String>,
    Json(payload): Json<UpdateTemplateRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut template = state.template_repo.find_by_id(&template_id).await?
        .ok_or(AppError::NotFound("Recurring template not found".into()))?;

    if let Some(months_ahead) = payload.months_ahead {
        if months_ahead <= 0 {
            return Err(AppError::Validation("Months ahead must be positive".into()));
        }
        template.months_ahead = months_ahead;
    }
    if let Some(is_active) = payload.is_active {
        template.is_active = is_active;
    }

    // Deactivating stops future generation; already-generated slots stay
    // unless their removal is explicitly requested.
    let mut removed_slots = 0;
    if !template.is_active && payload.remove_future_slots.unwrap_or(false) {
        removed_slots = state.slot_repo
            .delete_future_by_template(&template.id, Utc::now().date_naive())
            .await?;
    }

    let updated = state.template_repo.update(&template).await?;
    info!("Recurring template updated: {} (removed {} future slots)", updated.id, removed_slots);

    Ok(Json(serde_json::json!({
        "template": updated,
        "removed_slots": removed_slots,
    })))
}

pub async fn delete_recurring_schedule(
    State(state): State<Arc<AppState>>,
    Path(template_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.template_repo.find_by_id(&template_id).await?
        .ok_or(AppError::NotFound("Recurring template not found".into()))?;

    let deleted_slots = state.slot_repo.delete_by_template(&template_id).await?;
    state.template_repo.delete(&template_id).await?;

    info!("Recurring template {} deleted with {} slots", template_id, deleted_slots);
    Ok(Json(serde_json::json!({
        "status": "deleted",
        "deleted_slots": deleted_slots,
    })))
}
