use axum::{extract::{Path, State}, response::IntoResponse, Json};
use chrono::{Duration, Months, NaiveDate, NaiveTime, Utc};
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::ScheduleSlotsRequest;
use crate::api::dtos::responses::SlotsCreatedResponse;
use crate::domain::services::recurrence::{expand_to_slots, find_recurring_dates, SlotRule};
use crate::domain::services::schedule_parser::ScheduleRule;
use crate::error::AppError;
use crate::state::AppState;

const DEFAULT_SLOT_DURATION_MIN: i64 = 10;
const DEFAULT_MONTHS_AHEAD: u32 = 3;

/// Parsed view of a manager's free-text office hours.
pub async fn get_schedule(
    State(state): State<Arc<AppState>>,
    Path(management_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let management = state.management_repo.find_by_id(&management_id).await?
        .ok_or(AppError::NotFound("Management not found".into()))?;

    let parsed = state.schedule_parser.parse(management.office_hours.as_deref().unwrap_or(""));
    Ok(Json(parsed))
}

/// Generates bookable slots from the office-hours text in the manager
/// profile. Non-bookable descriptors (unparseable text) are rejected before
/// any expansion happens.
pub async fn create_slots_from_schedule(
    State(state): State<Arc<AppState>>,
    Path(management_id): Path<String>,
    Json(payload): Json<ScheduleSlotsRequest>,
) -> Result<impl IntoResponse, AppError> {
    let management = state.management_repo.find_by_id(&management_id).await?
        .ok_or(AppError::NotFound("Management not found".into()))?;

    let parsed = state.schedule_parser.parse(management.office_hours.as_deref().unwrap_or(""));
    if !parsed.is_bookable {
        return Err(AppError::Validation("Office hours are not bookable".into()));
    }

    let start_date = match payload.start_date {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid start date format (YYYY-MM-DD)".into()))?,
        None => Utc::now().date_naive(),
    };

    let months_ahead = payload.months_ahead.unwrap_or(DEFAULT_MONTHS_AHEAD);
    if months_ahead == 0 {
        return Err(AppError::Validation("Months ahead must be positive".into()));
    }

    let slot_duration = payload.slot_duration.unwrap_or(DEFAULT_SLOT_DURATION_MIN);
    if slot_duration <= 0 {
        return Err(AppError::Validation("Slot duration must be positive".into()));
    }

    let (start_time, end_time, dates) = match &parsed.rule {
        ScheduleRule::WeeklyRange { weekday, start_time, end_time, .. } => (
            *start_time,
            *end_time,
            find_recurring_dates(*weekday, None, months_ahead, start_date),
        ),
        ScheduleRule::WeeklyExact { weekday, start_time, duration_min } => (
            *start_time,
            window_end(*start_time, *duration_min)?,
            find_recurring_dates(*weekday, None, months_ahead, start_date),
        ),
        ScheduleRule::DailyRange { start_time, end_time, .. } => (
            *start_time,
            *end_time,
            daily_dates(start_date, months_ahead),
        ),
        ScheduleRule::DailyExact { start_time, duration_min } => (
            *start_time,
            window_end(*start_time, *duration_min)?,
            daily_dates(start_date, months_ahead),
        ),
        ScheduleRule::FirstWeekdayOfMonth { weekday, start_time, duration_min } => (
            *start_time,
            window_end(*start_time, *duration_min)?,
            find_recurring_dates(*weekday, Some(1), months_ahead, start_date),
        ),
        ScheduleRule::NthWeekdayOfMonth { weekday, week_number, start_time, duration_min } => (
            *start_time,
            window_end(*start_time, *duration_min)?,
            find_recurring_dates(*weekday, Some(*week_number), months_ahead, start_date),
        ),
        ScheduleRule::ByAppointment => {
            return Err(AppError::Validation(
                "Office hours require direct contact; no slots to generate".into(),
            ));
        }
        ScheduleRule::Custom => {
            return Err(AppError::Validation("Office hours are not bookable".into()));
        }
    };

    let rule = SlotRule {
        start_time,
        end_time,
        slot_duration_min: slot_duration,
    };
    let slots = expand_to_slots(&management_id, &rule, &dates, None);
    let requested = slots.len();
    let created = state.slot_repo.insert_batch(&slots).await?;

    info!(
        "Generated {} of {} slots from profile schedule for management {}",
        created, requested, management_id
    );
    Ok(Json(SlotsCreatedResponse { created, requested }))
}

fn window_end(start: NaiveTime, duration_min: i64) -> Result<NaiveTime, AppError> {
    let (end, wrapped) = start.overflowing_add_signed(Duration::minutes(duration_min));
    if wrapped != 0 {
        return Err(AppError::Validation(
            "Office hours window extends past midnight".into(),
        ));
    }
    Ok(end)
}

fn daily_dates(start_from: NaiveDate, months_ahead: u32) -> Vec<NaiveDate> {
    let end = start_from + Months::new(months_ahead);
    let mut dates = Vec::new();
    let mut current = start_from;
    while current < end {
        dates.push(current);
        current += Duration::days(1);
    }
    dates
}
