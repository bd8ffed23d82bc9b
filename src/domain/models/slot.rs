use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One bookable reception window belonging to a single manager.
///
/// The `(management_id, date, start_time)` triple is unique in the store and
/// acts as the duplicate-skip key for batch generation.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ReceptionSlot {
    pub id: String,
    pub management_id: String,
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub is_available: bool,
    pub is_booked: bool,
    pub booked_by: Option<String>,
    pub notes: Option<String>,
    pub is_recurring: bool,
    pub recurring_template_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewSlotParams {
    pub management_id: String,
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub recurring_template_id: Option<String>,
}

impl ReceptionSlot {
    pub fn new(params: NewSlotParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            management_id: params.management_id,
            date: params.date,
            start_time: params.start_time,
            end_time: params.end_time,
            is_available: true,
            is_booked: false,
            booked_by: None,
            notes: None,
            is_recurring: params.recurring_template_id.is_some(),
            recurring_template_id: params.recurring_template_id,
            created_at: Utc::now(),
        }
    }
}
