use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateManagementRequest {
    pub full_name: String,
    pub position: String,
    pub email: String,
    pub phone: Option<String>,
    pub office_hours: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateManagementRequest {
    pub full_name: Option<String>,
    pub position: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub office_hours: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateSlotsRequest {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub slot_duration: Option<i64>,
}

#[derive(Deserialize)]
pub struct BookSlotRequest {
    pub email: String,
    pub full_name: String,
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateRecurringRequest {
    pub selected_date: String,
    pub start_time: String,
    pub end_time: String,
    pub slot_duration: Option<i32>,
    pub months_ahead: Option<i32>,
    pub is_weekly: Option<bool>,
}

#[derive(Deserialize)]
pub struct UpdateTemplateRequest {
    pub is_active: Option<bool>,
    pub months_ahead: Option<i32>,
    pub remove_future_slots: Option<bool>,
}

#[derive(Deserialize)]
pub struct ScheduleSlotsRequest {
    pub start_date: Option<String>,
    pub months_ahead: Option<u32>,
    pub slot_duration: Option<i64>,
}

#[derive(Deserialize)]
pub struct DateRangeQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct DeleteSlotsQuery {
    pub date: Option<NaiveDate>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}
