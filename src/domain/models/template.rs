use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Persisted recurrence rule. `week_number` is the 1-based occurrence of
/// `weekday` within a month ("second Tuesday" = 2); `None` means plain weekly.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct RecurringScheduleTemplate {
    pub id: String,
    pub management_id: String,
    pub weekday: i32,
    pub week_number: Option<i32>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub slot_duration: i32,
    pub months_ahead: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

pub struct NewTemplateParams {
    pub management_id: String,
    pub weekday: i32,
    pub week_number: Option<i32>,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub slot_duration: i32,
    pub months_ahead: i32,
}

impl RecurringScheduleTemplate {
    pub fn new(params: NewTemplateParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            management_id: params.management_id,
            weekday: params.weekday,
            week_number: params.week_number,
            start_time: params.start_time,
            end_time: params.end_time,
            slot_duration: params.slot_duration,
            months_ahead: params.months_ahead,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
